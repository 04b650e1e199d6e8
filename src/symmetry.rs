//! Board symmetries and canonical table indexing.
//!
//! A pawnless position looks the same after any of the eight symmetries of
//! the square board. The Black king is restricted to the ten squares of the
//! a1-d1-d4 triangle (the wedge), every other piece may stand anywhere, and
//! the piece squares are packed radix-64 behind the king's wedge slot. The
//! canonical index of a position is the smallest index any symmetry yields.

use std::sync::OnceLock;

use arrayvec::ArrayVec;

use crate::board::{Move, Square};
use crate::error::{ChessError, ChessResult};
use crate::tablebase::config::MAX_PIECES;
use crate::utils::{cell_to_square, square_to_cell};

/// Wedge squares (0..63 numbering): a1 b1 c1 d1 b2 c2 d2 c3 d3 d4.
pub const WEDGE: [u8; 10] = [0, 1, 2, 3, 9, 10, 11, 18, 19, 27];

const fn build_wedge_slots() -> [i8; 64] {
    let mut slots = [-1i8; 64];
    let mut i = 0;
    while i < WEDGE.len() {
        slots[WEDGE[i] as usize] = i as i8;
        i += 1;
    }
    slots
}

const WEDGE_SLOT: [i8; 64] = build_wedge_slots();

/// Position of `sq` inside the wedge, if it belongs to it.
#[inline]
pub fn wedge_slot(sq: u8) -> Option<usize> {
    match WEDGE_SLOT[sq as usize] {
        -1 => None,
        slot => Some(slot as usize),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    Identity = 0,
    FlipFiles = 1,
    FlipRanks = 2,
    Rotate180 = 3,
    Diagonal = 4,
    AntiDiagonal = 5,
    Rotate90 = 6,
    Rotate270 = 7,
}

static PERMUTATIONS: OnceLock<[[u8; 64]; 8]> = OnceLock::new();

fn init_permutations() -> [[u8; 64]; 8] {
    let mut table = [[0u8; 64]; 8];
    for sym in Symmetry::ALL {
        for sq in 0..64u8 {
            let (x, y) = (sq % 8, sq / 8);
            let (tx, ty) = match sym {
                Symmetry::Identity => (x, y),
                Symmetry::FlipFiles => (7 - x, y),
                Symmetry::FlipRanks => (x, 7 - y),
                Symmetry::Rotate180 => (7 - x, 7 - y),
                Symmetry::Diagonal => (y, x),
                Symmetry::AntiDiagonal => (7 - y, 7 - x),
                Symmetry::Rotate90 => (7 - y, x),
                Symmetry::Rotate270 => (y, 7 - x),
            };
            table[sym as usize][sq as usize] = ty * 8 + tx;
        }
    }
    table
}

impl Symmetry {
    pub const ALL: [Symmetry; 8] = [
        Symmetry::Identity,
        Symmetry::FlipFiles,
        Symmetry::FlipRanks,
        Symmetry::Rotate180,
        Symmetry::Diagonal,
        Symmetry::AntiDiagonal,
        Symmetry::Rotate90,
        Symmetry::Rotate270,
    ];

    /// The group element undoing `self`. Only the quarter turns are not
    /// their own inverse.
    pub fn inverse(self) -> Symmetry {
        match self {
            Symmetry::Rotate90 => Symmetry::Rotate270,
            Symmetry::Rotate270 => Symmetry::Rotate90,
            other => other,
        }
    }

    /// Image of square `sq` (0..63).
    #[inline]
    pub fn apply(self, sq: u8) -> u8 {
        PERMUTATIONS.get_or_init(init_permutations)[self as usize][sq as usize]
    }

    /// Image of a playable mailbox cell.
    pub fn apply_cell(self, cell: usize) -> ChessResult<usize> {
        Ok(square_to_cell(self.apply(cell_to_square(cell)?)))
    }
}

/// Canonical table slot of a position and the symmetry that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableIndex {
    pub index: usize,
    pub symmetry: Symmetry,
}

/// Number of slots for `piece_count` pieces, Black king first.
pub fn table_len(piece_count: usize) -> usize {
    debug_assert!((1..=MAX_PIECES).contains(&piece_count));
    10 * 64usize.pow(piece_count as u32 - 1)
}

/// Index of the placement under one symmetry, or `None` when the transformed
/// Black king (`squares[0]`) falls outside the wedge. Squares of identical
/// neighbouring pieces are sorted so that swapping them does not matter.
pub fn index_under(symmetry: Symmetry, pieces: &[Square], squares: &[u8]) -> Option<usize> {
    let mut image: ArrayVec<u8, MAX_PIECES> = squares.iter().map(|&sq| symmetry.apply(sq)).collect();
    let first = wedge_slot(image[0])?;

    let mut start = 1;
    while start < image.len() {
        let mut end = start + 1;
        while end < image.len() && pieces[end] == pieces[start] {
            end += 1;
        }
        image[start..end].sort_unstable();
        start = end;
    }

    Some(image[1..].iter().fold(first, |acc, &sq| acc * 64 + sq as usize))
}

/// Smallest index over every applicable symmetry.
pub fn table_index(pieces: &[Square], squares: &[u8]) -> ChessResult<TableIndex> {
    if squares.is_empty() || squares.len() > MAX_PIECES || squares.len() != pieces.len() {
        return Err(ChessError::MaterialMismatch);
    }
    Symmetry::ALL
        .iter()
        .filter_map(|&symmetry| {
            index_under(symmetry, pieces, squares).map(|index| TableIndex { index, symmetry })
        })
        .min_by_key(|t| t.index)
        .ok_or_else(|| ChessError::SolverInvariant("no symmetry maps the black king into the wedge".into()))
}

/// Piece squares (0..63, configuration order) encoded by `index`.
pub fn decode_index(index: usize, piece_count: usize) -> ChessResult<ArrayVec<u8, MAX_PIECES>> {
    if piece_count == 0 || piece_count > MAX_PIECES || index >= table_len(piece_count) {
        return Err(ChessError::SolverInvariant(format!(
            "index {index} out of range for {piece_count} pieces"
        )));
    }
    let mut squares = ArrayVec::new();
    let mut rest = index;
    for _ in 1..piece_count {
        squares.push((rest % 64) as u8);
        rest /= 64;
    }
    squares.push(WEDGE[rest]);
    squares.reverse();
    Ok(squares)
}

/// Map a move from the caller's frame into the frame selected by `symmetry`.
pub fn canonical_move(symmetry: Symmetry, mv: Move) -> ChessResult<Move> {
    Ok(Move {
        source: symmetry.apply_cell(mv.source())? as u8,
        dest: symmetry.apply_cell(mv.dest())? as u8,
        score: mv.score,
    })
}

/// Map a move recorded in the canonical frame back through the inverse of
/// the recording symmetry.
pub fn rotate_move(symmetry: Symmetry, mv: Move) -> ChessResult<Move> {
    canonical_move(symmetry.inverse(), mv)
}
