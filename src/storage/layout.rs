use std::path::{Path, PathBuf};
use crate::core::config::Config;
use crate::core::types::EntityKind;

/// Where the three data files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    pub base_dir: PathBuf,
    pub organizations: PathBuf,
    pub users: PathBuf,
    pub tickets: PathBuf,
}

impl DataLayout {
    /// Standard file names under `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::from_config(&Config {
            data_dir: base_dir.into(),
            ..Config::default()
        })
    }

    pub fn from_config(config: &Config) -> Self {
        let base_dir = config.data_dir.clone();
        DataLayout {
            organizations: base_dir.join(&config.organizations_file),
            users: base_dir.join(&config.users_file),
            tickets: base_dir.join(&config.tickets_file),
            base_dir,
        }
    }

    pub fn path_for(&self, kind: EntityKind) -> &Path {
        match kind {
            EntityKind::Organization => &self.organizations,
            EntityKind::User => &self.users,
            EntityKind::Ticket => &self.tickets,
        }
    }
}
