// Coordinate helpers and direction offsets for the 10x12 mailbox board.
//
// The 8x8 playing area sits inside a 10-wide, 12-tall buffer: one padding
// file on each side and two padding ranks above and below. a1 is cell 21,
// h8 is cell 98. Every offset below can be added to any playable cell
// without leaving the buffer.

use crate::error::{ChessError, ChessResult};

pub const BOARD_CELLS: usize = 120;

// Direction deltas for sliding and stepping moves
pub const NORTH: isize = 10;
pub const SOUTH: isize = -10;
pub const EAST: isize = 1;
pub const WEST: isize = -1;
pub const NORTH_EAST: isize = 11;
pub const NORTH_WEST: isize = 9;
pub const SOUTH_EAST: isize = -9;
pub const SOUTH_WEST: isize = -11;

pub const ORTHOGONALS: [isize; 4] = [NORTH, EAST, SOUTH, WEST];
pub const DIAGONALS: [isize; 4] = [NORTH_EAST, SOUTH_EAST, SOUTH_WEST, NORTH_WEST];
pub const ALL_DIRECTIONS: [isize; 8] = [
    NORTH, NORTH_EAST, EAST, SOUTH_EAST, SOUTH, SOUTH_WEST, WEST, NORTH_WEST,
];
pub const KNIGHT_JUMPS: [isize; 8] = [21, 19, 12, 8, -8, -12, -19, -21];

/// Cell index of `file` ('a'..='h') and `rank` ('1'..='8').
pub fn offset(file: char, rank: char) -> ChessResult<usize> {
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return Err(ChessError::InvalidCoordinate { file, rank });
    }
    let x = file as usize - 'a' as usize;
    let y = rank as usize - '1' as usize;
    Ok((x + 1) + 10 * (y + 2))
}

/// File letter of a playable cell.
pub fn file_of(cell: usize) -> ChessResult<char> {
    let x = cell % 10;
    if cell >= BOARD_CELLS || !(1..=8).contains(&x) {
        return Err(ChessError::InvalidOffset(cell));
    }
    Ok((b'a' + (x - 1) as u8) as char)
}

/// Rank digit of a playable cell.
pub fn rank_of(cell: usize) -> ChessResult<char> {
    let y = cell / 10;
    if !(2..=9).contains(&y) {
        return Err(ChessError::InvalidOffset(cell));
    }
    Ok((b'1' + (y - 2) as u8) as char)
}

/// True if `cell` lies inside the 8x8 playing area.
#[inline]
pub fn is_playable(cell: usize) -> bool {
    let (x, y) = (cell % 10, cell / 10);
    cell < BOARD_CELLS && (1..=8).contains(&x) && (2..=9).contains(&y)
}

/// Mailbox cell -> square number 0..63 (a1 = 0, h1 = 7, h8 = 63).
pub fn cell_to_square(cell: usize) -> ChessResult<u8> {
    if !is_playable(cell) {
        return Err(ChessError::InvalidOffset(cell));
    }
    let x = cell % 10 - 1;
    let y = cell / 10 - 2;
    Ok((y * 8 + x) as u8)
}

/// Square number 0..63 -> mailbox cell.
#[inline]
pub fn square_to_cell(sq: u8) -> usize {
    debug_assert!(sq < 64);
    let (x, y) = ((sq % 8) as usize, (sq / 8) as usize);
    (x + 1) + 10 * (y + 2)
}

/// Two-character coordinate text ("e4") of a playable cell.
pub fn cell_name(cell: usize) -> ChessResult<String> {
    Ok(format!("{}{}", file_of(cell)?, rank_of(cell)?))
}

/// Parse two-character coordinate text into a cell.
pub fn parse_cell(text: &str) -> ChessResult<usize> {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(file), Some(rank), None) => offset(file, rank),
        _ => Err(ChessError::InvalidCoordinate {
            file: text.chars().next().unwrap_or('?'),
            rank: text.chars().nth(1).unwrap_or('?'),
        }),
    }
}

/// Cell reached by stepping `dir` from `cell`. Only meaningful for playable
/// cells, where the padding guarantees the result stays in the buffer.
#[inline]
pub fn step(cell: usize, dir: isize) -> usize {
    (cell as isize + dir) as usize
}

/// The 64 playable cells in a1, a2, .., a8, b1, .. order.
pub fn playable_cells() -> impl Iterator<Item = usize> {
    (0..8usize).flat_map(|x| (0..8usize).map(move |y| (x + 1) + 10 * (y + 2)))
}
