use endgame::board::Board;
use endgame::perft::perft;
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Position};

fn perft_shakmaty(pos: &Chess, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0u64;
    for m in pos.legal_moves() {
        let mut new_pos = pos.clone();
        new_pos.play_unchecked(&m);
        nodes += perft_shakmaty(&new_pos, depth - 1);
    }
    nodes
}

fn check(fen_str: &str, max_depth: u8) {
    let fen: Fen = fen_str.parse().expect("fen");
    let pos: Chess = fen.into_position(CastlingMode::Standard).expect("position");

    let mut board = Board::new();
    board.set_from_fen(fen_str).expect("set_from_fen");

    for depth in 1..=max_depth {
        let expected = perft_shakmaty(&pos, depth);
        let got = perft(&mut board, depth).expect("perft");
        assert_eq!(
            got, expected,
            "perft mismatch for {} at depth {}: got {} expected {}",
            fen_str, depth, got, expected
        );
    }
}

#[test]
fn perft_king_and_queen() {
    check("4k3/8/8/8/8/8/8/3QK3 w - - 0 1", 4);
}

#[test]
fn perft_rooks_without_castling() {
    check("r3k3/8/8/8/8/8/8/4K2R w - - 0 1", 3);
}

#[test]
fn perft_minor_pieces_black_to_move() {
    check("8/8/3k4/8/8/2N5/1B6/4K2R b - - 0 1", 3);
}

#[test]
fn perft_back_ranks() {
    check("1nbqkbn1/8/8/8/8/8/8/1NBQKBN1 w - - 0 1", 3);
}

#[test]
fn perft_with_checks_and_pins() {
    check("4k3/4r3/8/8/1b6/8/4B3/4K1N1 w - - 0 1", 3);
}
