use std::path::Path;

use tracing::warn;

use crate::ai::HeuristicConfig;
use crate::error::ConfigError;
use crate::game::BoardConfig;

/// Config file read when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub opponent: HeuristicConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load the file the user named, or the default path if none was named.
    /// Only the default path may be missing.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::load_or_default(Path::new(DEFAULT_CONFIG_PATH)),
        }
    }

    /// Validate configuration values. Board dimensions are checked when the
    /// board section is parsed, so only the opponent needs checking here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let exploration = self.opponent.exploration;
        if !(0.0..=1.0).contains(&exploration) {
            return Err(ConfigError::Validation(format!(
                "opponent.exploration must be in [0, 1], got {exploration}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board, BoardConfig::default());
        assert!((config.opponent.exploration - 0.3).abs() < 1e-9);
        assert_eq!(config.opponent.seed, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
rows = 8
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.rows(), 8);
        assert_eq!(config.board.cols(), 7);
        assert_eq!(config.board.win_length(), 4);
        assert!((config.opponent.exploration - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board, BoardConfig::default());
        assert_eq!(config.opponent.seed, None);
    }

    #[test]
    fn test_invalid_board_fails_to_parse() {
        let toml_str = r#"
[board]
rows = 4
cols = 4
win_length = 6
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validation_rejects_exploration_out_of_range() {
        let mut config = AppConfig::default();
        config.opponent.exploration = 1.5;
        assert!(config.validate().is_err());
        config.opponent.exploration = -0.1;
        assert!(config.validate().is_err());
        config.opponent.exploration = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board, BoardConfig::default());
    }

    #[test]
    fn test_resolve_named_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("typo.toml");
        let err = AppConfig::resolve(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
        assert!(err.to_string().contains("typo.toml"));
    }

    #[test]
    fn test_resolve_named_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.toml");
        std::fs::write(&path, "[board]\nrows = 4\ncols = 4\nwin_length = 3\n").unwrap();
        let config = AppConfig::resolve(Some(&path)).unwrap();
        assert_eq!(config.board, BoardConfig::new(4, 4, 3).unwrap());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 4
cols = 5
win_length = 3

[opponent]
exploration = 0.0
seed = 42
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board, BoardConfig::new(4, 5, 3).unwrap());
        assert_eq!(config.opponent.exploration, 0.0);
        assert_eq!(config.opponent.seed, Some(42));
    }

    #[test]
    fn test_load_reports_bad_board() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\ncols = 12\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
        assert!(err.to_string().contains("board.cols must be in [4, 10], got 12"));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = AppConfig::load(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config.board, BoardConfig::default());
    }
}
