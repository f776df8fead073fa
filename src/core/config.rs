use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::core::error::Result;

/// Config file picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "desksearch.toml";

/// Environment prefix; `DESKSEARCH_DATA_DIR` overrides `data_dir`.
pub const ENV_PREFIX: &str = "DESKSEARCH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub organizations_file: String,
    pub users_file: String,
    pub tickets_file: String,
    /// Colored terminal output.
    pub color: bool,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("data"),
            organizations_file: "organizations.json".to_string(),
            users_file: "users.json".to_string(),
            tickets_file: "tickets.json".to_string(),
            color: true,
            log_filter: "desksearch=warn".to_string(),
        }
    }
}

impl Config {
    /// Layer defaults, then the config file, then `DESKSEARCH_*` variables.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => ::config::File::from(path).required(true),
            None => ::config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = ::config::Config::builder()
            .add_source(file)
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Apply command-line flags, which win over every other layer.
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, no_color: bool) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if no_color {
            self.color = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Mutex, MutexGuard, PoisonError};
    use tempfile::TempDir;
    use crate::core::error::ErrorKind;

    // Loading reads the process environment, so tests that load or set
    // DESKSEARCH_* variables run one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.users_file, "users.json");
        assert!(config.color);
    }

    #[test]
    fn test_load_partial_file() {
        let _env = env_lock();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("desksearch.toml");
        fs::write(&path, "data_dir = \"/srv/desk\"\ncolor = false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/desk"));
        assert!(!config.color);
        assert_eq!(config.tickets_file, "tickets.json");
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let _env = env_lock();
        let dir = TempDir::new().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let _env = env_lock();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "color = \"maybe\"\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_environment_overrides_file() {
        let _env = env_lock();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("desksearch.toml");
        fs::write(&path, "data_dir = \"/srv/file\"\ncolor = false\nusers_file = \"people.json\"\n").unwrap();

        // SAFETY: ENV_LOCK serializes every test in this module that touches the environment.
        unsafe {
            std::env::set_var("DESKSEARCH_DATA_DIR", "/srv/env");
            std::env::set_var("DESKSEARCH_COLOR", "true");
        }
        let loaded = Config::load(Some(&path));
        unsafe {
            std::env::remove_var("DESKSEARCH_DATA_DIR");
            std::env::remove_var("DESKSEARCH_COLOR");
        }

        let config = loaded.unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/env"));
        assert!(config.color);
        assert_eq!(config.users_file, "people.json");
    }

    #[test]
    fn test_flags_override_loaded_config() {
        let _env = env_lock();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("desksearch.toml");
        fs::write(&path, "data_dir = \"/srv/file\"\ncolor = true\n").unwrap();

        let config = Config::load(Some(&path))
            .unwrap()
            .with_overrides(Some(PathBuf::from("/srv/flag")), true);
        assert_eq!(config.data_dir, PathBuf::from("/srv/flag"));
        assert!(!config.color);
    }

    #[test]
    fn test_absent_flags_keep_loaded_config() {
        let config = Config::default().with_overrides(None, false);
        assert_eq!(config, Config::default());
    }
}
