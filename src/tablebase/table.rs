//! Dense mate-distance tables
//!
//! One slot per canonical index for each side to move. White slots hold the
//! best move together with its score, Black slots hold a bare score. A slot
//! is written at most once.

use crate::board::{Board, Color, Move, UNSCORED};
use crate::error::{ChessError, ChessResult};
use crate::symmetry::rotate_move;
use crate::tablebase::config::EndgameConfig;

/// Score of a drawn position.
pub const DRAW: i16 = 0;

/// Score of a position where Black, to move, is checkmated.
pub const WHITE_MATE: i16 = 2000;

/// Score a White-to-move position gets when White mates in `mate_in` moves.
pub fn white_mate_score(mate_in: u32) -> i16 {
    WHITE_MATE + 1 - 2 * mate_in as i16
}

/// Mate-in-N of a White-to-move score, if it is a win.
pub fn white_mate_in(score: i16) -> Option<u32> {
    if score > 0 && score < WHITE_MATE {
        Some(((WHITE_MATE + 1 - score) / 2) as u32)
    } else {
        None
    }
}

/// Number of White moves until mate from a Black-to-move score, if White
/// wins. Zero means Black is already checkmated.
pub fn black_mate_in(score: i16) -> Option<u32> {
    if score > 0 && score <= WHITE_MATE {
        Some(((WHITE_MATE - score) / 2) as u32)
    } else {
        None
    }
}

/// Outcome of looking a position up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// White forces mate; the best move is known for White-to-move
    /// positions and is expressed in the probed board's orientation.
    WhiteMates {
        mate_in: u32,
        best_move: Option<Move>,
    },
    /// White cannot force mate.
    Draw,
}

#[derive(Debug, Clone)]
pub struct Tablebase {
    config: EndgameConfig,
    white: Vec<Move>,
    black: Vec<i16>,
}

impl Tablebase {
    /// Both tables sized to the configuration and unscored.
    pub fn new(config: EndgameConfig) -> Self {
        let len = config.table_len();
        Self {
            config,
            white: vec![Move::default(); len],
            black: vec![UNSCORED; len],
        }
    }

    pub fn config(&self) -> &EndgameConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.white.len()
    }

    pub fn is_empty(&self) -> bool {
        self.white.is_empty()
    }

    #[inline]
    pub fn white_entry(&self, index: usize) -> Move {
        self.white[index]
    }

    #[inline]
    pub fn black_score(&self, index: usize) -> i16 {
        self.black[index]
    }

    /// Record the best White move (score included) for `index`.
    pub fn resolve_white(&mut self, index: usize, best: Move) -> ChessResult<()> {
        if !best.is_scored() {
            return Err(ChessError::SolverInvariant(format!(
                "unscored move stored at white index {index}"
            )));
        }
        let slot = self.white.get_mut(index).ok_or_else(|| {
            ChessError::SolverInvariant(format!("white index {index} out of range"))
        })?;
        if slot.is_scored() {
            return Err(ChessError::SolverInvariant(format!(
                "white index {index} resolved twice"
            )));
        }
        *slot = best;
        Ok(())
    }

    pub fn resolve_black(&mut self, index: usize, score: i16) -> ChessResult<()> {
        if score == UNSCORED {
            return Err(ChessError::SolverInvariant(format!(
                "unscored value stored at black index {index}"
            )));
        }
        let slot = self.black.get_mut(index).ok_or_else(|| {
            ChessError::SolverInvariant(format!("black index {index} out of range"))
        })?;
        if *slot != UNSCORED {
            return Err(ChessError::SolverInvariant(format!(
                "black index {index} resolved twice"
            )));
        }
        *slot = score;
        Ok(())
    }

    /// White slots that hold a real score, in index order.
    pub fn white_entries(&self) -> impl Iterator<Item = (usize, Move)> + '_ {
        self.white
            .iter()
            .enumerate()
            .filter(|(_, mv)| mv.is_scored())
            .map(|(index, &mv)| (index, mv))
    }

    /// Resolved slot counts: (white, black).
    pub fn resolved_counts(&self) -> (usize, usize) {
        (
            self.white.iter().filter(|mv| mv.is_scored()).count(),
            self.black.iter().filter(|&&s| s != UNSCORED).count(),
        )
    }

    /// Look up the position on `board`. Slots left unscored after the fixed
    /// point are draws.
    pub fn probe(&self, board: &Board) -> ChessResult<Verdict> {
        if !board.is_legal_position() {
            return Err(ChessError::IllegalPosition);
        }
        let tindex = self.config.table_index(board)?;
        let verdict = match board.side_to_move() {
            Color::White => {
                let entry = self.white[tindex.index];
                match white_mate_in(entry.score) {
                    Some(mate_in) => Verdict::WhiteMates {
                        mate_in,
                        best_move: Some(rotate_move(tindex.symmetry, entry)?),
                    },
                    None => Verdict::Draw,
                }
            }
            Color::Black => match black_mate_in(self.black[tindex.index]) {
                Some(mate_in) => Verdict::WhiteMates {
                    mate_in,
                    best_move: None,
                },
                None => Verdict::Draw,
            },
        };
        Ok(verdict)
    }
}
