mod init;
mod schema;

pub use init::run_init_wizard;
pub use schema::{Config, CurveDefaults, OutputConfig};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/kennedy-curve/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("kennedy-curve")
}

/// Get the default config file path (~/.config/kennedy-curve/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file.
///
/// With an explicit `path` the file must exist. At the default path a
/// missing file is fine and yields built-in defaults; the tool is fully
/// usable without one.
///
/// # Errors
///
/// Returns an error if an explicitly given file does not exist, or if any
/// config file cannot be read or parsed.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let (config_path, explicit) = match path {
        Some(p) => (p, true),
        None => (get_config_path(), false),
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_overrides() {
        let config = Config::default();
        assert_eq!(config.target_mean(), None);
        assert_eq!(config.max_scaled_score(), None);
        assert_eq!(config.color(), None);
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let path = std::env::temp_dir().join("kennedy_curve_no_such_config.yaml");
        let _ = std::fs::remove_file(&path);
        assert!(load_config(Some(path)).is_err());
    }

    #[test]
    fn test_loads_yaml_config() {
        let path = std::env::temp_dir().join("kennedy_curve_test_config.yaml");
        std::fs::write(
            &path,
            "defaults:\n  target_mean: 70\n  max_scaled_score: 95\noutput:\n  color: false\n",
        )
        .unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.target_mean(), Some(70.0));
        assert_eq!(config.max_scaled_score(), Some(95.0));
        assert_eq!(config.color(), Some(false));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_partial_config() {
        let path = std::env::temp_dir().join("kennedy_curve_test_partial_config.yaml");
        std::fs::write(&path, "defaults:\n  max_scaled_score: 90\n").unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.target_mean(), None);
        assert_eq!(config.max_scaled_score(), Some(90.0));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let path = std::env::temp_dir().join("kennedy_curve_test_bad_config.yaml");
        std::fs::write(&path, "defaults: [not, a, mapping\n").unwrap();
        assert!(load_config(Some(path.clone())).is_err());
        let _ = std::fs::remove_file(&path);
    }
}
