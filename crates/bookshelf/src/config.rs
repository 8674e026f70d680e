use crate::prelude::*;
use bookshelf_core::config::Config;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default configuration location: `<config dir>/bookshelf/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|dir| dir.join("bookshelf").join("config.toml"))
}

/// Load the configuration.
///
/// An explicit path must exist. The default path is optional; when it is
/// missing, or no config directory can be determined, defaults are used.
pub async fn load(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_from(path, true).await;
    }

    match default_config_path() {
        Some(path) => load_from(&path, false).await,
        None => {
            log::debug!("No config directory available, using defaults");
            Ok(Config::default())
        }
    }
}

async fn load_from(path: &Path, required: bool) -> Result<Config> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => {
            log::debug!("Loaded config from {}", path.display());
            Config::from_toml_str(&contents)
                .wrap_err_with(|| format!("Failed to parse config file {}", path.display()))
        }
        Err(err) if err.kind() == ErrorKind::NotFound && !required => {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(err) => {
            Err(err).wrap_err_with(|| format!("Failed to read config file {}", path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "page_size = 4\nlogin_path = \"/sign-in\"\n").unwrap();

        let config = load(Some(path.as_path())).await.unwrap();
        assert_eq!(config.page_size, 4);
        assert_eq!(config.login_path, "/sign-in");
    }

    #[tokio::test]
    async fn test_missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        assert!(load(Some(path.as_path())).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_optional_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let config = load_from(&path, false).await.unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "page_size = 0\n").unwrap();

        let err = load(Some(path.as_path())).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
