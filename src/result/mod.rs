//! Result types for store operations

mod error;

pub use error::{CommandError, StoreError};

/// Result alias for [`OverrideStore`](crate::OverrideStore) operations.
pub type StoreResult<T> = Result<T, StoreError>;
