//! Explicit record descriptions with per-field omit policies.
//!
//! Derived structs express the omit policy through `skip_serializing_if`
//! attributes, which is fixed at compile time. [`Record`] is the dynamic
//! counterpart: each field carries its name, its [`OmitPolicy`], and a
//! [`SeqField`] value, so the same declaration-variant grid can be built at
//! runtime.
//!
//! ```rust
//! use omitempty::{to_dense_string, OmitPolicy, Record, SeqField};
//!
//! let record = Record::new()
//!     .field("data", OmitPolicy::AlwaysEmit, SeqField::Nullable(None))
//!     .field("tags", OmitPolicy::OmitEmpty, SeqField::Plain(vec![]));
//!
//! // The absent reference renders null; the empty omit-policy field is gone.
//! assert_eq!(to_dense_string(&record).unwrap(), "{\"data\":null}");
//! ```

use crate::{Classification, Map, OmitPolicy, Value};
use serde::{Serialize, Serializer};

/// A sequence-of-strings field value in one of the two declaration kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum SeqField {
    /// Value-typed: the sequence itself. Cannot be absent; an unset field and
    /// an empty one are the same thing.
    Plain(Vec<String>),
    /// Reference-typed: a nullable reference to a sequence. `None` is an
    /// absent reference, `Some(vec![])` a present but empty sequence.
    Nullable(Option<Vec<String>>),
}

impl SeqField {
    /// Classifies this field value.
    #[must_use]
    pub fn classify(&self) -> Classification {
        match self {
            SeqField::Plain(seq) => crate::classify_slice(seq),
            SeqField::Nullable(seq) => crate::classify_option(seq),
        }
    }

    fn to_value(&self) -> Value {
        let items = match self {
            SeqField::Plain(seq) => seq,
            SeqField::Nullable(None) => return Value::Null,
            SeqField::Nullable(Some(seq)) => seq,
        };
        Value::Sequence(items.iter().map(|s| Value::String(s.clone())).collect())
    }
}

struct FieldEntry {
    name: String,
    policy: OmitPolicy,
    value: SeqField,
}

/// An ordered set of named sequence fields, each with its own omit policy.
///
/// A `Record` is a pure description: building one has no side effects and
/// encoding it never mutates it.
#[derive(Default)]
pub struct Record {
    fields: Vec<FieldEntry>,
}

impl Record {
    /// Creates a record with no fields. Encoding it yields the empty-object
    /// token in both families.
    #[must_use]
    pub fn new() -> Self {
        Record { fields: Vec::new() }
    }

    /// Appends a field. Field order is preserved in the output.
    #[must_use]
    pub fn field(mut self, name: &str, policy: OmitPolicy, value: SeqField) -> Self {
        self.fields.push(FieldEntry {
            name: name.to_string(),
            policy,
            value,
        });
        self
    }

    /// Applies each field's classification and omit policy, producing the
    /// value both renderers consume.
    ///
    /// Suppressed fields are dropped entirely. For rendered fields an absent
    /// reference becomes [`Value::Null`] and an empty sequence becomes an
    /// empty [`Value::Sequence`]; the two are never conflated.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::with_capacity(self.fields.len());
        for entry in &self.fields {
            if entry.policy.suppresses(entry.value.classify()) {
                continue;
            }
            map.insert(entry.name.clone(), entry.value.to_value());
        }
        Value::Object(map)
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}
