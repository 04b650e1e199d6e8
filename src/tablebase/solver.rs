//! Retrograde fixed-point solver
//!
//! Every round enumerates all placements of the configured pieces, first with
//! Black to move and then with White to move. Round N finds the White mates in
//! N: a Black position is only scored once all of its replies are known, and
//! a White position is scored as soon as one move reaches a Black position
//! lost in N-1.

use log::{debug, info};

use crate::board::{Board, Color, Square, UNSCORED};
use crate::error::{ChessError, ChessResult};
use crate::symmetry::{canonical_move, TableIndex, WEDGE};
use crate::tablebase::config::EndgameConfig;
use crate::tablebase::params::SolverParams;
use crate::tablebase::stats::SolveStats;
use crate::tablebase::table::{white_mate_score, Tablebase, DRAW, WHITE_MATE};
use crate::utils::{playable_cells, square_to_cell, step, ALL_DIRECTIONS};

fn kings_adjacent(a: usize, b: usize) -> bool {
    ALL_DIRECTIONS.iter().any(|&dir| step(a, dir) == b)
}

pub struct Solver {
    board: Board,
    tablebase: Tablebase,
    params: SolverParams,
    stats: SolveStats,
}

impl Solver {
    pub fn new(config: EndgameConfig) -> Self {
        Self::with_params(config, SolverParams::default())
    }

    pub fn with_params(config: EndgameConfig, params: SolverParams) -> Self {
        Self {
            board: Board::new(),
            tablebase: Tablebase::new(config),
            params,
            stats: SolveStats::new(),
        }
    }

    pub fn tablebase(&self) -> &Tablebase {
        &self.tablebase
    }

    pub fn into_tablebase(self) -> Tablebase {
        self.tablebase
    }

    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Run rounds of increasing mate distance until one resolves nothing.
    pub fn generate(&mut self) -> ChessResult<()> {
        info!(
            "Generating '{}': table size = {}",
            self.tablebase.config().name(),
            self.tablebase.len()
        );
        self.stats.reset();
        self.stats.start_timing();
        let mut mate_in = 1;
        while self.params.allows(mate_in) {
            if self.run_round(mate_in)? == 0 {
                break;
            }
            mate_in += 1;
        }
        self.stats.update_timing();
        self.stats.log_summary();
        Ok(())
    }

    /// One Black sweep followed by one White sweep looking for mates in
    /// `mate_in`. Returns the number of newly resolved positions.
    pub fn run_round(&mut self, mate_in: u32) -> ChessResult<usize> {
        // Scores are i16; keep white_mate_score clear of the draw score.
        if mate_in == 0 || mate_in >= (WHITE_MATE / 2) as u32 {
            return Err(ChessError::SolverInvariant(format!(
                "mate distance {mate_in} out of range"
            )));
        }
        let black = self.sweep(Color::Black, mate_in)?;
        let white = self.sweep(Color::White, mate_in)?;
        self.stats.inc_round();
        info!("Mate in {mate_in}: resolved {black} black-to-move, {white} white-to-move");
        Ok(black + white)
    }

    fn sweep(&mut self, side: Color, mate_in: u32) -> ChessResult<usize> {
        self.board.clear(side);
        let solved = self.place(0, side, mate_in)?;
        debug!("{side:?} sweep for mate in {mate_in}: {solved} resolved");
        Ok(solved)
    }

    // Depth-first placement: Black king on the wedge, White king anywhere
    // not touching it, then each extra piece on every empty cell.
    fn place(&mut self, depth: usize, side: Color, mate_in: u32) -> ChessResult<usize> {
        let pieces = self.tablebase.config().piece_count();
        if depth == pieces {
            return match side {
                Color::White => self.score_white(mate_in),
                Color::Black => self.score_black(),
            };
        }
        let piece = self.tablebase.config().pieces()[depth];
        let mut solved = 0;
        match depth {
            0 => {
                for sq in WEDGE {
                    self.board.clear(side);
                    self.board.set(square_to_cell(sq), piece)?;
                    solved += self.place(1, side, mate_in)?;
                }
            }
            1 => {
                let black_king = self.board.king_cell(Color::Black);
                for cell in playable_cells() {
                    if cell == black_king || kings_adjacent(cell, black_king) {
                        continue;
                    }
                    self.board.set(cell, piece)?;
                    solved += self.place(2, side, mate_in)?;
                }
            }
            _ => {
                for cell in playable_cells() {
                    if self.board.get(cell)? != Square::Empty {
                        continue;
                    }
                    self.board.set(cell, piece)?;
                    solved += self.place(depth + 1, side, mate_in)?;
                    self.board.set(cell, Square::Empty)?;
                }
            }
        }
        Ok(solved)
    }

    fn current_index(&self) -> ChessResult<TableIndex> {
        self.tablebase.config().table_index(&self.board)
    }

    fn score_white(&mut self, mate_in: u32) -> ChessResult<usize> {
        if !self.board.is_legal_position() {
            return Ok(0);
        }
        let tindex = self.current_index()?;
        if self.tablebase.white_entry(tindex.index).is_scored() {
            return Ok(0);
        }
        self.stats.inc_white_visit();

        let moves = self.board.generate_moves()?;
        if moves.is_empty() {
            return Err(ChessError::SolverInvariant(format!(
                "white has no legal moves at index {}",
                tindex.index
            )));
        }

        let target = white_mate_score(mate_in);
        for &mv in &moves {
            self.board.push(mv)?;
            let reply = self.current_index()?;
            let reply_score = self.tablebase.black_score(reply.index);
            self.board.pop()?;

            if reply_score == UNSCORED {
                continue;
            }
            let score = reply_score - 1;
            if score == target {
                let best = canonical_move(tindex.symmetry, mv.with_score(score))?;
                self.tablebase.resolve_white(tindex.index, best)?;
                self.stats.inc_white_resolved();
                return Ok(1);
            }
        }
        Ok(0)
    }

    fn score_black(&mut self) -> ChessResult<usize> {
        if !self.board.is_legal_position() {
            return Ok(0);
        }
        let tindex = self.current_index()?;
        if self.tablebase.black_score(tindex.index) != UNSCORED {
            return Ok(0);
        }
        self.stats.inc_black_visit();

        let moves = self.board.generate_moves()?;
        if moves.is_empty() {
            if self.board.is_current_player_in_check() {
                self.record_black(tindex.index, WHITE_MATE)?;
            } else {
                self.record_black(tindex.index, DRAW)?;
            }
            return Ok(1);
        }

        let mut unresolved = false;
        let mut least_bad: Option<i16> = None;
        for &mv in &moves {
            // Losing any White piece is treated as a draw.
            if self.board.get(mv.dest())?.side() == Some(Color::White) {
                self.record_black(tindex.index, DRAW)?;
                return Ok(1);
            }

            self.board.push(mv)?;
            let reply = self.current_index()?;
            let reply_score = self.tablebase.white_entry(reply.index).score;
            self.board.pop()?;

            if reply_score == UNSCORED {
                unresolved = true;
            } else if reply_score == DRAW {
                self.record_black(tindex.index, DRAW)?;
                return Ok(1);
            } else if reply_score > 0 {
                let score = reply_score - 1;
                least_bad = Some(least_bad.map_or(score, |s| s.min(score)));
            } else {
                return Err(ChessError::SolverInvariant(format!(
                    "unexpected white score {reply_score} at index {}",
                    reply.index
                )));
            }
        }

        if unresolved {
            return Ok(0);
        }
        match least_bad {
            Some(score) => {
                self.record_black(tindex.index, score)?;
                Ok(1)
            }
            None => Err(ChessError::SolverInvariant(format!(
                "black position {} has moves but no outcome",
                tindex.index
            ))),
        }
    }

    fn record_black(&mut self, index: usize, score: i16) -> ChessResult<()> {
        self.tablebase.resolve_black(index, score)?;
        if score == DRAW {
            self.stats.inc_black_draw();
        } else {
            self.stats.inc_black_mate();
        }
        Ok(())
    }
}
