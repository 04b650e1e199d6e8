//! Perft: count the leaf nodes of the legal move tree.
//!
//! Only useful as a move-generation regression check against another
//! engine; pawnless positions only.

use crate::board::Board;
use crate::error::ChessResult;

pub fn perft(board: &mut Board, depth: u8) -> ChessResult<u64> {
    if depth == 0 {
        return Ok(1);
    }
    let moves = board.generate_moves()?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }
    let mut nodes = 0u64;
    for &mv in &moves {
        board.push(mv)?;
        nodes += perft(board, depth - 1)?;
        board.pop()?;
    }
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_kings() {
        let mut board = Board::new();
        assert_eq!(perft(&mut board, 0).unwrap(), 1);
        assert_eq!(perft(&mut board, 1).unwrap(), 5);
        // Both kings have five moves from the back rank.
        assert_eq!(perft(&mut board, 2).unwrap(), 25);
        assert_eq!(board.undo_depth(), 0);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn pawns_are_reported() {
        let mut board = Board::new();
        board.set_from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        assert!(perft(&mut board, 1).is_err());
    }
}
