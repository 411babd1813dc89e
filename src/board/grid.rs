//! Square grid with scoped place/clear mutation

use crate::error::EngineError;

use super::{Cell, Coord, EMPTY_SYMBOL};

/// An N x N game board.
///
/// The side length is fixed at construction (N >= 1). During search the
/// board is mutated in place and restored before control returns, so a
/// single allocation serves the whole move decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given side length.
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if size == 0 {
            return Err(EngineError::EmptyBoard);
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Build a board from a row-major grid of cells.
    ///
    /// Fails if the grid is empty or not square.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, EngineError> {
        let size = rows.len();
        if size == 0 {
            return Err(EngineError::EmptyBoard);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != size {
                return Err(EngineError::NonSquare {
                    row,
                    expected: size,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }
        Ok(Self { size, cells })
    }

    /// Decode a text board, one row per line.
    ///
    /// `own` and `opponent` are the two player symbols; `-` marks an empty
    /// cell. Ragged lines and unknown symbols are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use mnk::{Board, Cell, Coord};
    ///
    /// let board = Board::parse("X--\n-O-\n---", 'X', 'O').unwrap();
    /// assert_eq!(board.get(Coord::new(1, 1)), Cell::Opponent);
    /// ```
    pub fn parse(text: &str, own: char, opponent: char) -> Result<Self, EngineError> {
        let lines: Vec<&str> = text.lines().collect();
        let size = lines.len();
        if size == 0 {
            return Err(EngineError::EmptyBoard);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in lines.iter().enumerate() {
            let mut width = 0;
            for (col, symbol) in line.chars().enumerate() {
                let cell = if symbol == own {
                    Cell::Own
                } else if symbol == opponent {
                    Cell::Opponent
                } else if symbol == EMPTY_SYMBOL {
                    Cell::Empty
                } else {
                    return Err(EngineError::BadSymbol { row, col, symbol });
                };
                cells.push(cell);
                width += 1;
            }
            if width != size {
                return Err(EngineError::NonSquare {
                    row,
                    expected: size,
                    found: width,
                });
            }
        }
        Ok(Self { size, cells })
    }

    /// Render the board as text, the inverse of [`Board::parse`].
    pub fn render(&self, own: char, opponent: char) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in 0..self.size {
            for col in 0..self.size {
                out.push(match self.get(Coord::new(row, col)) {
                    Cell::Own => own,
                    Cell::Opponent => opponent,
                    Cell::Empty => EMPTY_SYMBOL,
                });
            }
            if row + 1 < self.size {
                out.push('\n');
            }
        }
        out
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, at: Coord) -> usize {
        debug_assert!(at.row < self.size && at.col < self.size);
        at.row * self.size + at.col
    }

    /// Whether a (possibly negative) coordinate pair lies on the board.
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.size && col >= 0 && (col as usize) < self.size
    }

    /// Cell contents at a position.
    #[inline]
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[self.index(at)]
    }

    /// Check if a cell is empty.
    #[inline]
    pub fn is_empty_at(&self, at: Coord) -> bool {
        self.get(at) == Cell::Empty
    }

    /// Place a mark. Paired with [`Board::clear`] on every search exit path.
    #[inline]
    pub fn place(&mut self, at: Coord, mark: Cell) {
        let idx = self.index(at);
        self.cells[idx] = mark;
    }

    /// Bounds-checked placement for coordinates arriving from outside.
    pub fn try_place(&mut self, at: Coord, mark: Cell) -> Result<(), EngineError> {
        if at.row >= self.size || at.col >= self.size {
            return Err(EngineError::OutOfBounds {
                row: at.row,
                col: at.col,
                size: self.size,
            });
        }
        self.place(at, mark);
        Ok(())
    }

    /// Reset a cell to empty.
    #[inline]
    pub fn clear(&mut self, at: Coord) {
        let idx = self.index(at);
        self.cells[idx] = Cell::Empty;
    }

    /// Every empty cell in row-major order.
    ///
    /// The order is part of the engine's contract: equally scored moves
    /// tie-break to the first one encountered in this scan.
    pub fn legal_moves(&self) -> Vec<Coord> {
        let mut moves = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let at = Coord::new(row, col);
                if self.is_empty_at(at) {
                    moves.push(at);
                }
            }
        }
        moves
    }

    /// True if no empty cell remains.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// The same position with Own and Opponent swapped.
    ///
    /// Lets one engine play both sides: search always maximizes for Own,
    /// so the other side searches the flipped board and plays the result.
    pub fn flipped(&self) -> Board {
        Board {
            size: self.size,
            cells: self.cells.iter().map(|c| c.flip()).collect(),
        }
    }
}
