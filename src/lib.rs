pub mod board;
pub mod error;
pub mod perft;
pub mod report;
pub mod symmetry;
pub mod tablebase;
pub mod utils;

pub use error::{ChessError, ChessResult};
