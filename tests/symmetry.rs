use endgame::board::{Board, Move};
use endgame::symmetry::{
    canonical_move, decode_index, rotate_move, table_index, Symmetry, WEDGE,
};
use endgame::tablebase::EndgameConfig;
use endgame::utils::{cell_to_square, parse_cell};

// Deterministic distinct-square placements: Black king, White king, extras.
fn placements(count: usize, n: usize) -> Vec<Vec<u8>> {
    let mut state = 0x2545_f491_u64;
    let mut out = Vec::new();
    while out.len() < n {
        let mut squares: Vec<u8> = Vec::new();
        while squares.len() < count {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let sq = (state >> 58) as u8;
            if !squares.contains(&sq) {
                squares.push(sq);
            }
        }
        out.push(squares);
    }
    out
}

fn board_with(config: &EndgameConfig, squares: &[u8]) -> Board {
    let mut grid = [None; 64];
    for (&piece, &sq) in config.pieces().iter().zip(squares) {
        grid[sq as usize] = piece.to_char();
    }
    let mut fen = String::new();
    for rank in (0..8).rev() {
        let mut empty = 0;
        for file in 0..8 {
            match grid[rank * 8 + file] {
                Some(ch) => {
                    if empty > 0 {
                        fen.push_str(&empty.to_string());
                        empty = 0;
                    }
                    fen.push(ch);
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            fen.push_str(&empty.to_string());
        }
        if rank > 0 {
            fen.push('/');
        }
    }
    fen.push_str(" w - - 0 1");

    let mut board = Board::new();
    board.set_from_fen(&fen).unwrap();
    board
}

#[test]
fn symmetries_are_permutations_with_inverses() {
    for sym in Symmetry::ALL {
        let mut seen = [false; 64];
        for sq in 0..64u8 {
            let image = sym.apply(sq);
            assert!(!seen[image as usize], "{sym:?} is not a bijection");
            seen[image as usize] = true;
            assert_eq!(sym.inverse().apply(image), sq, "{sym:?}");
        }
    }
}

#[test]
fn canonical_index_ignores_orientation() {
    for pieces in ["", "q", "rn", "rr"] {
        let config = EndgameConfig::new(pieces).unwrap();
        for squares in placements(config.piece_count(), 200) {
            let expected = config.table_index(&board_with(&config, &squares)).unwrap();
            for sym in Symmetry::ALL {
                let image: Vec<u8> = squares.iter().map(|&sq| sym.apply(sq)).collect();
                let got = config.table_index(&board_with(&config, &image)).unwrap();
                assert_eq!(got.index, expected.index, "{pieces}: {squares:?} under {sym:?}");
            }
        }
    }
}

#[test]
fn swapping_identical_pieces_keeps_the_index() {
    let config = EndgameConfig::new("rr").unwrap();
    for squares in placements(4, 100) {
        let swapped = [squares[0], squares[1], squares[3], squares[2]];
        assert_eq!(
            table_index(config.pieces(), &squares).unwrap().index,
            table_index(config.pieces(), &swapped).unwrap().index
        );
    }
}

#[test]
fn decoded_index_is_canonical() {
    let config = EndgameConfig::new("q").unwrap();
    for squares in placements(3, 300) {
        let tindex = table_index(config.pieces(), &squares).unwrap();
        assert!(tindex.index < config.table_len());
        let decoded = decode_index(tindex.index, 3).unwrap();
        assert!(WEDGE.contains(&decoded[0]));
        // The decoding is the placement seen through the chosen symmetry.
        let image: Vec<u8> = squares.iter().map(|&sq| tindex.symmetry.apply(sq)).collect();
        assert_eq!(decoded.as_slice(), image.as_slice());
        assert_eq!(table_index(config.pieces(), &decoded).unwrap().index, tindex.index);
    }
}

#[test]
fn moves_rotate_back_to_the_board_frame() {
    let mv = Move::new(parse_cell("b3").unwrap(), parse_cell("g8").unwrap());
    for sym in Symmetry::ALL {
        let canonical = canonical_move(sym, mv).unwrap();
        let source = cell_to_square(canonical.source()).unwrap();
        assert_eq!(source, sym.apply(cell_to_square(mv.source()).unwrap()));
        assert_eq!(rotate_move(sym, canonical).unwrap(), mv);
    }
}
