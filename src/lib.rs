//! # omitempty
//!
//! Two small Serde-compatible text encoders that pin down how "empty" versus
//! "absent" collection-valued fields are rendered.
//!
//! ## The problem
//!
//! Most encoders blur the line between a field that holds *no* list and a
//! field that holds an *empty* list, and whether an "omit empty" modifier
//! drops one, both, or neither differs between libraries and versions. This
//! crate makes the distinction a contract:
//!
//! - A value-typed field (`Vec<T>`) has no absent state. Unset and empty are
//!   the same thing and both render the empty-sequence token, never null.
//! - A reference-typed field (`Option<Vec<T>>`) keeps all three states
//!   apart: `None` renders an explicit null token, `Some(vec![])` renders
//!   the empty-sequence token, and the two are never conflated.
//! - The omit-empty policy drops a field when it is absent *or* empty, and
//!   has no effect once data is present.
//!
//! Both rules hold identically in the two output families:
//!
//! - **Dense**: compact, single-line, JSON-shaped ([`to_dense_string`]).
//! - **Block**: indented, line-oriented, YAML-shaped ([`to_block_string`]).
//!
//! ## Quick start
//!
//! ```rust
//! use serde::Serialize;
//! use omitempty::{to_dense_string, to_block_string};
//!
//! #[derive(Serialize)]
//! struct Tags {
//!     data: Option<Vec<String>>,
//! }
//!
//! let absent = Tags { data: None };
//! let empty = Tags { data: Some(vec![]) };
//!
//! assert_eq!(to_dense_string(&absent).unwrap(), "{\"data\":null}");
//! assert_eq!(to_dense_string(&empty).unwrap(), "{\"data\":[]}");
//!
//! assert_eq!(to_block_string(&absent).unwrap(), "data: null\n");
//! assert_eq!(to_block_string(&empty).unwrap(), "data: []\n");
//! ```
//!
//! ## Omitting empty fields
//!
//! The omit policy is declared per field, either with the
//! [`empty`]/[`absent_or_empty`] predicates on derived structs or with
//! [`OmitPolicy`] on a dynamic [`Record`]:
//!
//! ```rust
//! use serde::Serialize;
//! use omitempty::to_dense_string;
//!
//! #[derive(Serialize)]
//! struct Tags {
//!     #[serde(skip_serializing_if = "omitempty::absent_or_empty")]
//!     data: Option<Vec<String>>,
//! }
//!
//! assert_eq!(to_dense_string(&Tags { data: None }).unwrap(), "{}");
//! assert_eq!(to_dense_string(&Tags { data: Some(vec![]) }).unwrap(), "{}");
//! let full = Tags { data: Some(vec!["a".to_string()]) };
//! assert_eq!(to_dense_string(&full).unwrap(), "{\"data\":[\"a\"]}");
//! ```
//!
//! ## Block indentation
//!
//! The only configurable constant is the dash column of a sequence nested
//! under a key; see [`BlockOptions`]. The default is four spaces,
//! [`BlockOptions::flat`] gives the zero-indent variant.
//!
//! Encoding is pure and stateless: equal inputs give byte-identical output,
//! and independent callers can encode concurrently without shared state.

pub mod block;
pub mod dense;
pub mod error;
pub mod field;
pub mod map;
pub mod options;
pub mod record;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use field::{absent_or_empty, classify_option, classify_slice, empty};
pub use field::{Classification, OmitPolicy};
pub use map::Map;
pub use options::BlockOptions;
pub use record::{Record, SeqField};
pub use ser::{to_value, ValueSerializer};
pub use value::{Number, Value};

use serde::Serialize;
use std::io;

/// Serializes any `T: Serialize` to dense-family text.
///
/// # Examples
///
/// ```rust
/// let items = vec!["a", "b"];
/// assert_eq!(omitempty::to_dense_string(&items).unwrap(), "[\"a\",\"b\"]");
/// ```
///
/// # Errors
///
/// Returns an error if the value graph cannot be represented, e.g. a map
/// with non-string keys.
pub fn to_dense_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    dense::render(&to_value(value)?)
}

/// Serializes any `T: Serialize` to block-family text with default options.
///
/// # Examples
///
/// ```rust
/// let items = vec!["a", "b"];
/// assert_eq!(omitempty::to_block_string(&items).unwrap(), "- a\n- b\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value graph cannot be represented.
pub fn to_block_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_block_string_with_options(value, BlockOptions::new())
}

/// Serializes any `T: Serialize` to block-family text with custom options.
///
/// # Errors
///
/// Returns an error if the value graph cannot be represented.
pub fn to_block_string_with_options<T>(value: &T, options: BlockOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    block::render(&to_value(value)?, &options)
}

/// Serializes any `T: Serialize` to a writer in dense-family text.
///
/// # Errors
///
/// Returns an error if serialization fails or the writer fails.
pub fn to_dense_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_dense_string(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}

/// Serializes any `T: Serialize` to a writer in block-family text.
///
/// # Errors
///
/// Returns an error if serialization fails or the writer fails.
pub fn to_block_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_block_string(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}
