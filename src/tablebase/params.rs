//! Solver parameters
//!
//! Controls how far the fixed-point iteration is allowed to run.

/// Parameters for a tablebase generation run
#[derive(Debug, Clone, Default)]
pub struct SolverParams {
    /// Stop after resolving mates of this length (None = run to the fixed point)
    pub max_mate_in: Option<u32>,
}

impl SolverParams {
    /// Create parameters with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: cap the mate distance
    pub fn max_mate_in(mut self, moves: u32) -> Self {
        self.max_mate_in = Some(moves);
        self
    }

    /// True if a round for `mate_in` may still run
    pub fn allows(&self, mate_in: u32) -> bool {
        self.max_mate_in.map_or(true, |max| mate_in <= max)
    }
}
