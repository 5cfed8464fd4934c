//! Store builder for configuration

use crate::result::{StoreError, StoreResult};
use crate::store::OverrideStore;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Default override file name
const DEFAULT_FILE_NAME: &str = "overrides.json";

/// Default number of tracked entries
const DEFAULT_LEN: usize = 0;

/// Builder for configuring and loading an [`OverrideStore`].
///
/// # Defaults
///
/// - Path: `overrides.json` in the working directory
/// - Length: 0 (keep whatever the file holds)
///
/// # Examples
///
/// ```no_run
/// use ansicodes::OverrideStore;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = OverrideStore::builder()
///     .path("factions.json")
///     .len(31)
///     .load()?;
/// assert!(store.len() >= 31);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StoreBuilder {
    path: PathBuf,
    len: usize,
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreBuilder {
    /// Create a new store builder with default configuration.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FILE_NAME),
            len: DEFAULT_LEN,
        }
    }

    /// Set the file the list is read from and saved to.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the number of entries the list must hold.
    ///
    /// A shorter stored list is grown with `false` entries on load. A longer
    /// one is kept as is; the list never shrinks.
    pub fn len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Read the file and build the store.
    ///
    /// A missing file yields a list of `len` `false` entries. Nothing is
    /// written until [`OverrideStore::save`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read, and
    /// [`StoreError::Malformed`] if it is not a JSON array of booleans.
    pub fn load(self) -> StoreResult<OverrideStore> {
        let mut flags = match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str::<Vec<bool>>(&text).map_err(|source| {
                StoreError::Malformed {
                    path: self.path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no override file, starting empty");
                Vec::new()
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path,
                    source,
                })
            }
        };

        if flags.len() < self.len {
            tracing::debug!(from = flags.len(), to = self.len, "growing override list");
            flags.resize(self.len, false);
        }

        Ok(OverrideStore::from_parts(self.path, flags))
    }
}
