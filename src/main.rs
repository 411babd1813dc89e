//! m,n,k engine CLI
//!
//! Plays a complete local game, the engine taking both sides: the second
//! player searches a perspective-flipped copy of the board, so one engine
//! serves both. Prints each position and the final result.

use clap::Parser;
use tracing::info;

use mnk::eval::{classify, Outcome};
use mnk::{Board, Cell, Engine, EngineError, MoveOutcome};

#[derive(Parser)]
#[command(name = "mnk", about = "Self-play a generalized k-in-a-row game")]
struct Args {
    /// Board side length N
    #[arg(long, default_value_t = 3)]
    size: usize,

    /// Run length K required to win
    #[arg(long, default_value_t = 3)]
    target: usize,

    /// Search depth in plies beyond each candidate move
    #[arg(long, default_value_t = mnk::DEFAULT_DEPTH)]
    depth: u32,
}

fn main() -> Result<(), EngineError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let mut board = Board::new(args.size)?;
    let mut engine = Engine::with_depth(args.depth);

    println!(
        "{}x{} board, {} in a row to win, depth {}\n",
        args.size, args.size, args.target, args.depth
    );

    let mut side = Cell::Own;
    loop {
        let result = if side == Cell::Own {
            engine.choose_with_stats(&mut board, args.target)?
        } else {
            let mut flipped = board.flipped();
            engine.choose_with_stats(&mut flipped, args.target)?
        };

        let at = match result.outcome {
            MoveOutcome::Move(at) => at,
            MoveOutcome::NoLegalMove | MoveOutcome::AlreadyDecided => break,
        };

        let symbol = if side == Cell::Own { 'X' } else { 'O' };
        info!(
            symbol = %symbol,
            row = at.row,
            col = at.col,
            kind = ?result.kind,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "move chosen"
        );
        board.try_place(at, side)?;
        println!("{} plays ({}, {}):", symbol, at.row, at.col);
        println!("{}\n", board.render('X', 'O'));

        match classify(&board, args.target) {
            Outcome::Win(mark) => {
                let winner = if mark == Cell::Own { 'X' } else { 'O' };
                println!("{winner} wins");
                return Ok(());
            }
            Outcome::Draw => break,
            Outcome::Ongoing => {}
        }
        side = side.flip();
    }

    println!("draw");
    Ok(())
}
