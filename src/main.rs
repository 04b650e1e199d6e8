//! Endgame tablebase generator: command-line entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::error;

use endgame::board::{Board, Color};
use endgame::report;
use endgame::tablebase::{EndgameConfig, Solver, SolverParams, Verdict};
use endgame::{ChessError, ChessResult};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a material configuration and write its report
    Generate {
        /// Extra White pieces, e.g. "q", "rr", "bn"
        pieces: EndgameConfig,

        /// Report path (default: <pieces>.egm)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Stop after mates of this length
        #[arg(short, long)]
        max_mate: Option<u32>,
    },
    /// Look up a White-to-move position in a generated report
    Probe {
        /// Extra White pieces of the report
        pieces: EndgameConfig,

        /// Position to look up
        fen: String,

        /// Report path (default: <pieces>.egm)
        #[arg(short, long)]
        table: Option<PathBuf>,
    },
}

fn generate(config: EndgameConfig, output: Option<PathBuf>, max_mate: Option<u32>) -> ChessResult<()> {
    let path = output.unwrap_or_else(|| PathBuf::from(config.file_name()));
    let mut params = SolverParams::new();
    if let Some(n) = max_mate {
        params = params.max_mate_in(n);
    }
    let mut solver = Solver::with_params(config, params);
    solver.generate()?;
    report::save(&path, solver.tablebase())?;
    Ok(())
}

fn probe(config: EndgameConfig, fen: &str, table: Option<PathBuf>) -> ChessResult<()> {
    let path = table.unwrap_or_else(|| PathBuf::from(config.file_name()));
    let mut board = Board::new();
    board.set_from_fen(fen)?;
    // The report only carries the White-to-move table.
    if board.side_to_move() != Color::White {
        return Err(ChessError::InvalidFen("only white-to-move positions can be probed"));
    }
    let tablebase = report::load(&path, config)?;
    print!("{board}");
    match tablebase.probe(&board)? {
        Verdict::WhiteMates { mate_in, best_move } => match best_move {
            Some(mv) => println!("White mates in {mate_in}: {mv}"),
            None => println!("White mates in {mate_in}"),
        },
        Verdict::Draw => println!("Draw"),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let result = match args.command {
        Command::Generate {
            pieces,
            output,
            max_mate,
        } => generate(pieces, output, max_mate),
        Command::Probe { pieces, fen, table } => probe(pieces, &fen, table),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
