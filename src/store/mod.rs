//! Persisted list of manual "done" overrides
//!
//! The file is a JSON array of booleans, one per tracked item, in a fixed
//! order. The usual cycle is load, apply one command, save:
//!
//! ```no_run
//! use ansicodes::{OverrideStore, StoreCommand};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = OverrideStore::builder().path("overrides.json").len(31).load()?;
//! store.apply("4".parse::<StoreCommand>()?)?;
//! store.save()?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod command;

pub use builder::StoreBuilder;
pub use command::StoreCommand;

use crate::codes::{paint, TXT_GREEN};
use crate::result::{StoreError, StoreResult};
use std::fs;
use std::path::{Path, PathBuf};

/// An ordered list of boolean overrides bound to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideStore {
    path: PathBuf,
    flags: Vec<bool>,
}

impl OverrideStore {
    /// Create a new store builder.
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    pub(crate) fn from_parts(path: PathBuf, flags: Vec<bool>) -> Self {
        Self { path, flags }
    }

    /// File this store saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Entry at a 0-based index.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.flags.get(index).copied()
    }

    /// All entries in order.
    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }

    /// Flip the entry at a 1-based position and return its new value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::OutOfRange`] if `position` is 0 or past the end;
    /// the list is left untouched.
    pub fn toggle(&mut self, position: usize) -> StoreResult<bool> {
        let len = self.flags.len();
        let flag = position
            .checked_sub(1)
            .and_then(|index| self.flags.get_mut(index))
            .ok_or_else(|| {
                tracing::warn!(position, len, "toggle out of range");
                StoreError::OutOfRange { position, len }
            })?;
        *flag = !*flag;
        tracing::debug!(position, value = *flag, "toggled override");
        Ok(*flag)
    }

    /// Set every entry to `false`.
    pub fn clear(&mut self) {
        self.flags.fill(false);
        tracing::debug!(len = self.flags.len(), "cleared overrides");
    }

    /// Set every entry to `true`.
    pub fn set_all(&mut self) {
        self.flags.fill(true);
        tracing::debug!(len = self.flags.len(), "set all overrides");
    }

    /// Apply a parsed command.
    ///
    /// # Errors
    ///
    /// Fails only for a [`StoreCommand::Toggle`] out of range.
    pub fn apply(&mut self, command: StoreCommand) -> StoreResult<()> {
        match command {
            StoreCommand::Toggle(position) => self.toggle(position).map(|_| ()),
            StoreCommand::Clear => {
                self.clear();
                Ok(())
            }
            StoreCommand::SetAll => {
                self.set_all();
                Ok(())
            }
        }
    }

    /// One line per entry: the 1-based position right-aligned in three
    /// columns, then a green `Done` or `-`.
    pub fn status_lines(&self) -> String {
        let mut out = String::new();
        for (i, done) in self.flags.iter().enumerate() {
            let status = if *done {
                paint(TXT_GREEN, "Done")
            } else {
                "-".to_string()
            };
            out.push_str(&format!("{:>3}: {status}\n", i + 1));
        }
        out
    }

    /// Rewrite the file with the current list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be written.
    pub fn save(&self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.flags)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), len = self.flags.len(), "saved overrides");
        Ok(())
    }
}
