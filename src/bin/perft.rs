use clap::Parser;
use endgame::board::Board;
use endgame::perft::perft;
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Position};

const KQK_FEN: &str = "4k3/8/8/8/8/8/8/3QK3 w - - 0 1";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pawnless position without castling rights
    #[arg(short, long, default_value_t = String::from(KQK_FEN))]
    fen: String,

    #[arg(short, long, default_value_t = 4)]
    depth: u8,
}

fn perft_shakmaty(pos: &Chess, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for m in pos.legal_moves() {
        let mut new_pos = pos.clone();
        new_pos.play_unchecked(&m);
        nodes += perft_shakmaty(&new_pos, depth - 1);
    }
    nodes
}

fn main() {
    let args = Args::parse();

    println!("Running perft on FEN: '{}' at depth {}", args.fen, args.depth);

    let mut board = Board::new();
    if let Err(e) = board.set_from_fen(&args.fen) {
        eprintln!("Invalid FEN: {e}");
        std::process::exit(1);
    }
    let pos: Chess = match args
        .fen
        .parse::<Fen>()
        .ok()
        .and_then(|fen| fen.into_position(CastlingMode::Standard).ok())
    {
        Some(pos) => pos,
        None => {
            eprintln!("shakmaty rejected the position");
            std::process::exit(1);
        }
    };

    let start = std::time::Instant::now();
    let nodes = match perft(&mut board, args.depth) {
        Ok(nodes) => nodes,
        Err(e) => {
            eprintln!("perft failed: {e}");
            std::process::exit(1);
        }
    };
    let duration = start.elapsed();
    println!(
        "Endgame perft({}) = {} nodes ({} ms)",
        args.depth,
        nodes,
        duration.as_millis()
    );

    let start = std::time::Instant::now();
    let expected = perft_shakmaty(&pos, args.depth);
    let duration = start.elapsed();
    println!(
        "Shakmaty perft({}) = {} nodes ({} ms)",
        args.depth,
        expected,
        duration.as_millis()
    );

    if nodes != expected {
        eprintln!("MISMATCH: {} vs {}", nodes, expected);
        std::process::exit(1);
    }
}
