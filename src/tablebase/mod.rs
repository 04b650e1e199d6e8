//! Endgame tablebase generation
//!
//! Configuration parsing, the dense mate-distance tables, the retrograde
//! solver that fills them and its run statistics.

pub mod config;
pub mod params;
pub mod solver;
pub mod stats;
pub mod table;

pub use self::config::{EndgameConfig, MAX_PIECES};
pub use self::params::SolverParams;
pub use self::solver::Solver;
pub use self::stats::SolveStats;
pub use self::table::{
    black_mate_in, white_mate_in, white_mate_score, Tablebase, Verdict, DRAW, WHITE_MATE,
};
