//! Generation statistics
//!
//! Tracks how many positions each sweep visited and resolved, plus timing.

use std::time::{Duration, Instant};

use log::info;

/// Solver statistics
#[derive(Debug, Default, Clone)]
pub struct SolveStats {
    /// Completed rounds (one Black sweep plus one White sweep each)
    pub rounds: u32,

    /// White-to-move positions evaluated (legal and still unresolved)
    pub white_visits: u64,

    /// Black-to-move positions evaluated
    pub black_visits: u64,

    /// White-to-move positions given a mate score
    pub white_resolved: u64,

    /// Black-to-move positions given a mate score
    pub black_mates: u64,

    /// Black-to-move positions scored as draws
    pub black_draws: u64,

    /// Run start time
    pub start_time: Option<Instant>,

    /// Time spent so far
    pub elapsed: Duration,
}

impl SolveStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_timing(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn update_timing(&mut self) {
        if let Some(start) = self.start_time {
            self.elapsed = start.elapsed();
        }
    }

    pub fn inc_round(&mut self) {
        self.rounds += 1;
    }

    pub fn inc_white_visit(&mut self) {
        self.white_visits += 1;
    }

    pub fn inc_black_visit(&mut self) {
        self.black_visits += 1;
    }

    pub fn inc_white_resolved(&mut self) {
        self.white_resolved += 1;
    }

    pub fn inc_black_mate(&mut self) {
        self.black_mates += 1;
    }

    pub fn inc_black_draw(&mut self) {
        self.black_draws += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Log a formatted summary
    pub fn log_summary(&self) {
        info!("=== Generation Statistics ===");
        info!("Rounds: {}", self.rounds);
        info!(
            "White to move: {} visited, {} resolved",
            self.white_visits, self.white_resolved
        );
        info!(
            "Black to move: {} visited, {} lost, {} drawn",
            self.black_visits, self.black_mates, self.black_draws
        );
        info!("Generation time: {} ms", self.elapsed.as_millis());
    }
}
