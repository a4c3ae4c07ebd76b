//! Board configuration.
//!
//! Loaded from TOML; any missing key falls back to the classic 20x15 grid
//! with a 10% mine chance per tile.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::board::{check_probability, Board};
use crate::error::BoardError;
use crate::rng::RandomSource;

/// Dimensions and mine density for newly generated boards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    /// Chance that any single tile holds a mine.
    pub mine_probability: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: 20,
            height: 15,
            mine_probability: 0.1,
        }
    }
}

impl BoardConfig {
    pub fn new(width: usize, height: usize, mine_probability: f64) -> Self {
        Self {
            width,
            height,
            mine_probability,
        }
    }

    /// Parse a config from TOML text and validate it.
    #[instrument(skip(s), level = "debug")]
    pub fn from_toml_str(s: &str) -> Result<Self, BoardError> {
        let cfg = toml::from_str::<BoardConfig>(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize as TOML.
    pub fn to_toml_string(&self) -> Result<String, BoardError> {
        Ok(toml::to_string(self)?)
    }

    /// Check the values `Board::new` would reject.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.width == 0 || self.height == 0 {
            return Err(BoardError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        check_probability(self.mine_probability)
    }

    /// Generate a fresh board with these settings.
    pub fn build<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Board, BoardError> {
        Board::new(self.width, self.height, self.mine_probability, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::BoardRng;

    #[test]
    fn test_defaults_match_classic_grid() {
        let cfg = BoardConfig::default();
        assert_eq!((cfg.width, cfg.height), (20, 15));
        assert_eq!(cfg.mine_probability, 0.1);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let cfg = BoardConfig::from_toml_str("width = 9\n").unwrap();
        assert_eq!(cfg, BoardConfig::new(9, 15, 0.1));
    }

    #[test]
    fn test_full_toml() {
        let cfg =
            BoardConfig::from_toml_str("width = 30\nheight = 16\nmine_probability = 0.2\n")
                .unwrap();
        assert_eq!(cfg, BoardConfig::new(30, 16, 0.2));
    }

    #[test]
    fn test_toml_round_trip() {
        let cfg = BoardConfig::new(8, 8, 0.25);
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(BoardConfig::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn test_malformed_toml() {
        let err = BoardConfig::from_toml_str("width = \"wide\"").unwrap_err();
        assert!(matches!(err, BoardError::ConfigParse { .. }));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("invalid board config: "));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            BoardConfig::from_toml_str("mine_probability = -0.5"),
            Err(BoardError::InvalidProbability { .. })
        ));
        assert!(matches!(
            BoardConfig::from_toml_str("height = 0"),
            Err(BoardError::EmptyBoard { .. })
        ));
    }

    #[test]
    fn test_build_uses_dimensions() {
        let board = BoardConfig::new(7, 5, 0.3)
            .build(&mut BoardRng::from_seed(11))
            .unwrap();
        assert_eq!((board.width(), board.height()), (7, 5));
    }
}
