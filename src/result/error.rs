//! Error types for ansicodes

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, changing or saving an
/// [`OverrideStore`](crate::OverrideStore).
///
/// The escape builders and [`strip`](crate::strip) never fail, so this is the
/// only fallible surface of the crate.
///
/// # Examples
///
/// ```no_run
/// use ansicodes::{OverrideStore, StoreError};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut store = OverrideStore::builder().path("overrides.json").len(31).load()?;
///
/// match store.toggle(40) {
///     Ok(value) => println!("now {value}"),
///     Err(StoreError::OutOfRange { position, len }) => {
///         eprintln!("no entry {position}, only {len}");
///     }
///     Err(e) => return Err(e.into()),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the store file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The store file is not a JSON array of booleans.
    #[error("Malformed override file {path}: {source}")]
    Malformed {
        /// File being read
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A 1-based position outside the list.
    #[error("Position {position} is out of range (1..={len})")]
    OutOfRange {
        /// Requested 1-based position
        position: usize,
        /// Current length of the list
        len: usize,
    },

    /// Serializing the list failed.
    #[error("Failed to serialize overrides: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors from parsing a [`StoreCommand`](crate::StoreCommand).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Empty command text.
    #[error("Command cannot be empty")]
    Empty,

    /// Position 0; positions start at 1.
    #[error("Positions start at 1")]
    ZeroPosition,

    /// Neither a position nor a known keyword.
    #[error("Unknown command: {0}")]
    Unknown(String),
}
