//! Endgame material configuration
//!
//! A configuration names the non-king White pieces, one letter each:
//! queen 'q', rook 'r', bishop 'b', knight 'n'. Both kings are implicit and
//! always come first: Black king, then White king.

use std::fmt;
use std::str::FromStr;

use arrayvec::ArrayVec;

use crate::board::{Board, Color, PieceKind, Square};
use crate::error::{ChessError, ChessResult};
use crate::symmetry::{self, TableIndex};
use crate::utils::cell_to_square;

/// Table size grows as 10 * 64^(pieces - 1); five pieces would not fit in
/// memory.
pub const MAX_PIECES: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndgameConfig {
    name: String,
    pieces: ArrayVec<Square, MAX_PIECES>,
}

impl EndgameConfig {
    pub fn new(piecelist: &str) -> ChessResult<Self> {
        let mut pieces = ArrayVec::new();
        pieces.push(Square::BLACK_KING);
        pieces.push(Square::WHITE_KING);

        for ch in piecelist.chars() {
            if pieces.len() == MAX_PIECES {
                return Err(ChessError::TooManyPieces);
            }
            let kind = match ch {
                'q' => PieceKind::Queen,
                'r' => PieceKind::Rook,
                'b' => PieceKind::Bishop,
                'n' => PieceKind::Knight,
                _ => return Err(ChessError::IllegalPiece(ch)),
            };
            pieces.push(Square::Piece(Color::White, kind));
        }

        Ok(Self {
            name: piecelist.to_string(),
            pieces,
        })
    }

    /// The piece letters this configuration was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All pieces in index order: Black king, White king, extras.
    pub fn pieces(&self) -> &[Square] {
        &self.pieces
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn table_len(&self) -> usize {
        symmetry::table_len(self.pieces.len())
    }

    /// Default report file name, e.g. "qr.egm".
    pub fn file_name(&self) -> String {
        format!("{}.egm", self.name)
    }

    /// Squares (0..63) of the configured pieces on `board`, in configuration
    /// order. Identical extras are taken in a1, a2, .., h8 scan order.
    pub fn locate(&self, board: &Board) -> ChessResult<ArrayVec<u8, MAX_PIECES>> {
        let mut others: ArrayVec<(usize, Square), MAX_PIECES> = ArrayVec::new();
        for (cell, color, kind) in board.pieces() {
            if kind == PieceKind::King {
                continue;
            }
            others
                .try_push((cell, Square::Piece(color, kind)))
                .map_err(|_| ChessError::MaterialMismatch)?;
        }
        if others.len() != self.pieces.len() - 2 {
            return Err(ChessError::MaterialMismatch);
        }

        let mut squares = ArrayVec::new();
        squares.push(cell_to_square(board.king_cell(Color::Black))?);
        squares.push(cell_to_square(board.king_cell(Color::White))?);
        for &piece in &self.pieces[2..] {
            let pos = others
                .iter()
                .position(|&(_, p)| p == piece)
                .ok_or(ChessError::MaterialMismatch)?;
            let (cell, _) = others.remove(pos);
            squares.push(cell_to_square(cell)?);
        }
        Ok(squares)
    }

    /// Canonical table slot of the position on `board`.
    pub fn table_index(&self, board: &Board) -> ChessResult<TableIndex> {
        let squares = self.locate(board)?;
        symmetry::table_index(&self.pieces, &squares)
    }
}

impl FromStr for EndgameConfig {
    type Err = ChessError;

    fn from_str(s: &str) -> ChessResult<Self> {
        EndgameConfig::new(s)
    }
}

impl fmt::Display for EndgameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in &self.pieces {
            if let Some(ch) = piece.to_char() {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_piece_letters() {
        let config: EndgameConfig = "qn".parse().unwrap();
        assert_eq!(config.piece_count(), 4);
        assert_eq!(
            config.pieces()[2..],
            [
                Square::Piece(Color::White, PieceKind::Queen),
                Square::Piece(Color::White, PieceKind::Knight)
            ]
        );
        assert_eq!(config.file_name(), "qn.egm");
        assert_eq!(config.to_string(), "kKQN");
    }

    #[test]
    fn b_means_bishop() {
        let config = EndgameConfig::new("b").unwrap();
        assert_eq!(
            config.pieces()[2],
            Square::Piece(Color::White, PieceKind::Bishop)
        );
    }

    #[test]
    fn rejects_bad_configurations() {
        assert!(matches!(
            EndgameConfig::new("qrb"),
            Err(ChessError::TooManyPieces)
        ));
        assert!(matches!(
            EndgameConfig::new("p"),
            Err(ChessError::IllegalPiece('p'))
        ));
        assert!(matches!(
            EndgameConfig::new("Q"),
            Err(ChessError::IllegalPiece('Q'))
        ));
    }

    #[test]
    fn table_sizes() {
        assert_eq!(EndgameConfig::new("").unwrap().table_len(), 640);
        assert_eq!(EndgameConfig::new("q").unwrap().table_len(), 40_960);
        assert_eq!(EndgameConfig::new("rr").unwrap().table_len(), 2_621_440);
    }

    #[test]
    fn locate_needs_matching_material() {
        let config = EndgameConfig::new("r").unwrap();
        let mut board = Board::new();
        assert!(matches!(
            config.locate(&board),
            Err(ChessError::MaterialMismatch)
        ));
        board.set_from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        // e8 = 60, e1 = 4, a1 = 0
        assert_eq!(config.locate(&board).unwrap().as_slice(), &[60, 4, 0]);
        board.set_from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1").unwrap();
        assert!(config.locate(&board).is_err());
    }
}
