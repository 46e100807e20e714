//! Error types for encoding.
//!
//! Encoding is all-or-nothing: either the full output string is produced or a
//! single [`Error`] is returned. There is no partial output and no
//! warnings-with-success mode.
//!
//! ## Examples
//!
//! ```rust
//! use omitempty::{to_dense_string, Error};
//! use std::collections::BTreeMap;
//!
//! // Map keys must serialize as strings.
//! let bad: BTreeMap<u32, &str> = [(1, "one")].into_iter().collect();
//! let result = to_dense_string(&bad);
//! assert!(matches!(result, Err(Error::KeyMustBeString(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// All errors that can occur while encoding a value.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing encoded output
    #[error("IO error: {0}")]
    Io(String),

    /// A map key serialized to something other than a string
    #[error("map keys must be strings, found {0}")]
    KeyMustBeString(String),

    /// The value graph contains something neither output family can represent
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error raised through `serde::ser::Error`
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an error naming the kind of a non-string map key.
    pub fn key_must_be_string(found: &str) -> Self {
        Error::KeyMustBeString(found.to_string())
    }

    /// Creates an unsupported type error for values that cannot be encoded.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use omitempty::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
