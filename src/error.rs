//! Board error types.

use derive_more::{Display, Error};

/// Failures surfaced by board construction and coordinate lookups.
///
/// Game-level rejections (clicking an opened tile, flagging with no flags
/// left) are not errors; they leave the board untouched and return its state.
#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum BoardError {
    /// Coordinate outside `[0, width) x [0, height)`.
    #[display("tile ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    /// Width or height of zero.
    #[display("board dimensions must be non-zero, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },
    /// Mine probability outside `[0, 1]` or NaN.
    #[display("mine probability must be within [0, 1], got {probability}")]
    InvalidProbability { probability: f64 },
    /// Board configuration could not be parsed.
    #[display("invalid board config: {source}")]
    ConfigParse { source: toml::de::Error },
    /// Board configuration could not be serialized.
    #[display("cannot write board config: {source}")]
    ConfigWrite { source: toml::ser::Error },
}

impl From<toml::de::Error> for BoardError {
    fn from(source: toml::de::Error) -> Self {
        BoardError::ConfigParse { source }
    }
}

impl From<toml::ser::Error> for BoardError {
    fn from(source: toml::ser::Error) -> Self {
        BoardError::ConfigWrite { source }
    }
}
