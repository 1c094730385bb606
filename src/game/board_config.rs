use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const ROWS_RANGE: RangeInclusive<usize> = 4..=10;
pub const COLS_RANGE: RangeInclusive<usize> = 4..=10;
pub const WIN_LENGTH_RANGE: RangeInclusive<usize> = 3..=8;

/// Board dimensions and the line length needed to win.
///
/// The only way to obtain one is [`BoardConfig::new`] (deserialization routes
/// through it too), so every value in circulation is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig", into = "RawBoardConfig")]
pub struct BoardConfig {
    rows: usize,
    cols: usize,
    win_length: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
struct RawBoardConfig {
    rows: usize,
    cols: usize,
    win_length: usize,
}

impl Default for RawBoardConfig {
    fn default() -> Self {
        BoardConfig::default().into()
    }
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = ConfigError;

    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        BoardConfig::new(raw.rows, raw.cols, raw.win_length)
    }
}

impl From<BoardConfig> for RawBoardConfig {
    fn from(config: BoardConfig) -> Self {
        RawBoardConfig {
            rows: config.rows,
            cols: config.cols,
            win_length: config.win_length,
        }
    }
}

fn check_range(
    field: &str,
    value: usize,
    range: &RangeInclusive<usize>,
) -> Result<(), ConfigError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "board.{field} must be in [{}, {}], got {value}",
            range.start(),
            range.end()
        )))
    }
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, ConfigError> {
        check_range("rows", rows, &ROWS_RANGE)?;
        check_range("cols", cols, &COLS_RANGE)?;
        check_range("win_length", win_length, &WIN_LENGTH_RANGE)?;

        let max_dimension = rows.max(cols);
        if win_length > max_dimension {
            return Err(ConfigError::Validation(format!(
                "board.win_length ({win_length}) cannot exceed the larger board dimension ({max_dimension})"
            )));
        }

        Ok(BoardConfig {
            rows,
            cols,
            win_length,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Copy with some dimensions replaced, re-validated as a whole.
    pub fn with_overrides(
        &self,
        rows: Option<usize>,
        cols: Option<usize>,
        win_length: Option<usize>,
    ) -> Result<Self, ConfigError> {
        BoardConfig::new(
            rows.unwrap_or(self.rows),
            cols.unwrap_or(self.cols),
            win_length.unwrap_or(self.win_length),
        )
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: 6,
            cols: 7,
            win_length: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_board() {
        let config = BoardConfig::default();
        assert_eq!((config.rows(), config.cols(), config.win_length()), (6, 7, 4));
        assert_eq!(BoardConfig::new(6, 7, 4).unwrap(), config);
    }

    #[test]
    fn test_accepts_bounds() {
        assert!(BoardConfig::new(4, 4, 3).is_ok());
        assert!(BoardConfig::new(10, 10, 8).is_ok());
        assert!(BoardConfig::new(4, 8, 8).is_ok());
    }

    #[test]
    fn test_rejects_dimensions_out_of_range() {
        assert!(BoardConfig::new(3, 7, 3).is_err());
        assert!(BoardConfig::new(11, 7, 4).is_err());
        assert!(BoardConfig::new(6, 3, 3).is_err());
        assert!(BoardConfig::new(6, 11, 4).is_err());
        assert!(BoardConfig::new(6, 7, 2).is_err());
        assert!(BoardConfig::new(10, 10, 9).is_err());
    }

    #[test]
    fn test_rejects_win_length_longer_than_board() {
        for rows in 4..=7 {
            for cols in 4..=7 {
                for win_length in 3..=8 {
                    let result = BoardConfig::new(rows, cols, win_length);
                    if win_length > rows.max(cols) {
                        assert!(
                            result.is_err(),
                            "{rows}x{cols} with win length {win_length} should be rejected"
                        );
                    } else {
                        assert!(result.is_ok());
                    }
                }
            }
        }
    }

    #[test]
    fn test_error_message_names_field() {
        let err = BoardConfig::new(6, 7, 9).unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: board.win_length must be in [3, 8], got 9"
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let config: BoardConfig = toml::from_str("rows = 5\ncols = 5\nwin_length = 4").unwrap();
        assert_eq!(config.rows(), 5);

        let err = toml::from_str::<BoardConfig>("rows = 4\ncols = 4\nwin_length = 5");
        assert!(err.is_err());
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let config: BoardConfig = toml::from_str("win_length = 5").unwrap();
        assert_eq!((config.rows(), config.cols(), config.win_length()), (6, 7, 5));
    }

    #[test]
    fn test_with_overrides_revalidates() {
        let config = BoardConfig::default();
        let small = config.with_overrides(Some(4), Some(4), Some(3)).unwrap();
        assert_eq!((small.rows(), small.cols(), small.win_length()), (4, 4, 3));
        assert!(config.with_overrides(Some(4), Some(4), None).is_ok());
        assert!(config.with_overrides(Some(4), Some(4), Some(5)).is_err());
    }
}
