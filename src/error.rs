//! Error types for grid_astar.
//!
//! Failing to find a path is not an error: searches return an empty path for that.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// The expansion budget ran out before the search finished.
    #[error("search stopped after {expanded} expansions without completing")]
    Incomplete { expanded: usize },

    #[error("obstacle probability must be between 0 and 1, got {0}")]
    InvalidProbability(f64),

    #[error("not enough free cells to place a distinct start and goal")]
    NoFreeCell,

    #[error("could not parse grid: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
