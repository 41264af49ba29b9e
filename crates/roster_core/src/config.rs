//! Record store configuration.
//!
//! # Responsibility
//! - Describe where the record store lives (file or memory).
//! - Select how strictly student/exam links are checked.
//!
//! # Invariants
//! - The default configuration matches the legacy desktop app: a
//!   `students.db` file in the working directory, permissive links.

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File name used when the caller does not provide a store path.
pub const DEFAULT_DB_FILE_NAME: &str = "students.db";

/// Backing location of the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// On-disk SQLite file, created when absent.
    File(PathBuf),
    /// Private in-memory database, discarded when the store is dropped.
    Memory,
}

impl StoreLocation {
    pub(crate) fn mode_label(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Memory => "memory",
        }
    }
}

/// How the store treats assignment rows that reference missing records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReferentialIntegrity {
    /// No existence check on assign, no cascade on delete.
    /// Orphaned assignment rows may remain and are hidden by joined reads.
    #[default]
    Permissive,
    /// Foreign keys are enforced on assign, and deleting a student or exam
    /// removes its assignment rows in the same transaction.
    Strict,
}

impl ReferentialIntegrity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Permissive => "permissive",
            Self::Strict => "strict",
        }
    }
}

impl Display for ReferentialIntegrity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReferentialIntegrity {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "unsupported integrity mode `{other}`; expected permissive|strict"
            )),
        }
    }
}

/// Options used by [`crate::db::RecordStore::open_with_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub location: StoreLocation,
    pub integrity: ReferentialIntegrity,
}

impl StoreConfig {
    /// File-backed store at `path` with permissive integrity.
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self {
            location: StoreLocation::File(path.as_ref().to_path_buf()),
            integrity: ReferentialIntegrity::default(),
        }
    }

    /// In-memory store with permissive integrity.
    pub fn in_memory() -> Self {
        Self {
            location: StoreLocation::Memory,
            integrity: ReferentialIntegrity::default(),
        }
    }

    pub fn with_integrity(mut self, integrity: ReferentialIntegrity) -> Self {
        self.integrity = integrity;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::file(DEFAULT_DB_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::{ReferentialIntegrity, StoreConfig, StoreLocation, DEFAULT_DB_FILE_NAME};
    use std::path::PathBuf;

    #[test]
    fn default_config_points_at_legacy_file_and_is_permissive() {
        let config = StoreConfig::default();
        assert_eq!(
            config.location,
            StoreLocation::File(PathBuf::from(DEFAULT_DB_FILE_NAME))
        );
        assert_eq!(config.integrity, ReferentialIntegrity::Permissive);
    }

    #[test]
    fn integrity_parses_case_insensitively() {
        assert_eq!(
            " Strict ".parse::<ReferentialIntegrity>().unwrap(),
            ReferentialIntegrity::Strict
        );
        let error = "cascade"
            .parse::<ReferentialIntegrity>()
            .expect_err("unknown modes must be rejected");
        assert!(error.contains("permissive|strict"));
    }
}
