use thiserror::Error;

use crate::compare::Key;

/// Returned by `insert` when the key is not a number. Nothing in the tree changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{key}` is not a valid numeric key")]
pub struct InvalidKeyError {
    key: String,
}

impl InvalidKeyError {
    pub(crate) fn new<K: Key>(key: K) -> Self {
        Self {
            key: format!("{key:?}"),
        }
    }

    /// The rejected key, as it was formatted with `Debug`.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Rejects keys that can't be ordered before a tree is touched.
pub(crate) fn validate<K: Key>(key: K) -> Result<K, InvalidKeyError> {
    if key.is_valid() {
        Ok(key)
    } else {
        log::debug!("rejecting key {key:?}");
        Err(InvalidKeyError::new(key))
    }
}
