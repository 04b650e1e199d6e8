//! Error type shared by the board engine, the indexer, the solver and the
//! report reader/writer. Every failure is fatal for the run that hit it.

use std::{error::Error, fmt, io};

use crate::board::{Color, PieceKind};

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug)]
pub enum ChessError {
    /// File/rank text outside a..h / 1..8.
    InvalidCoordinate { file: char, rank: char },
    /// Raw cell index outside the buffer or on the padding.
    InvalidOffset(usize),
    /// Attempt to store the off-board sentinel on a playable cell.
    InvalidSquareValue,
    /// A king is no longer on its cached cell after a placement.
    KingMissing(Color),
    /// The piece on the source cell does not belong to the side to move.
    IllegalMover { cell: usize, side: Color },
    /// `pop` with nothing to undo.
    EmptyUndoHistory,
    /// Move generation exceeded the fixed move-list capacity.
    MoveListOverflow,
    /// Movement rules for this piece kind are not implemented.
    Unimplemented(PieceKind),
    /// More than four pieces in an endgame configuration.
    TooManyPieces,
    /// Configuration character is not one of q, r, b, n.
    IllegalPiece(char),
    /// The solver reached a state its scoring rules forbid.
    SolverInvariant(String),
    /// Malformed FEN text.
    InvalidFen(&'static str),
    /// Board pieces do not match the tablebase configuration.
    MaterialMismatch,
    /// The side not to move is in check.
    IllegalPosition,
    /// Malformed report file line (1-based).
    Report { line: usize, reason: String },
    /// I/O error while reading or writing a report.
    Io(io::Error),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidCoordinate { file, rank } => {
                write!(f, "invalid file/rank coordinates: {file}{rank}")
            }
            ChessError::InvalidOffset(cell) => write!(f, "invalid board offset: {cell}"),
            ChessError::InvalidSquareValue => write!(f, "invalid square value"),
            ChessError::KingMissing(color) => write!(f, "{color:?} king is missing"),
            ChessError::IllegalMover { cell, side } => {
                write!(f, "attempt to move a non-{side:?} piece from offset {cell}")
            }
            ChessError::EmptyUndoHistory => write!(f, "unmove stack is empty"),
            ChessError::MoveListOverflow => write!(f, "move list overflow"),
            ChessError::Unimplemented(kind) => {
                write!(f, "{kind:?} movement not yet implemented")
            }
            ChessError::TooManyPieces => write!(
                f,
                "cannot have more than 4 pieces total in an endgame configuration"
            ),
            ChessError::IllegalPiece(c) => {
                write!(f, "illegal endgame piece '{c}': must be q, r, b, n")
            }
            ChessError::SolverInvariant(msg) => write!(f, "solver invariant violated: {msg}"),
            ChessError::InvalidFen(msg) => write!(f, "invalid fen: {msg}"),
            ChessError::MaterialMismatch => {
                write!(f, "board material does not match the endgame configuration")
            }
            ChessError::IllegalPosition => {
                write!(f, "illegal position: the side not to move is in check")
            }
            ChessError::Report { line, reason } => write!(f, "report line {line}: {reason}"),
            ChessError::Io(error) => write!(f, "i/o error: {error}"),
        }
    }
}

impl Error for ChessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChessError::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for ChessError {
    fn from(error: io::Error) -> ChessError {
        ChessError::Io(error)
    }
}
