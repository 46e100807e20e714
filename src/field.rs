//! Field classification and the omit decision.
//!
//! The encoders distinguish three states for a sequence-valued field:
//!
//! - **Absent**: the field is a nullable reference with no target
//!   (`Option::None`).
//! - **Empty**: the sequence exists but has zero elements.
//! - **Non-empty**: the sequence has at least one element.
//!
//! Value-typed fields (`Vec<T>`) can only ever be `Empty` or `NonEmpty`; an
//! unassigned `Vec` and an explicitly empty one are indistinguishable.
//! Reference-typed fields (`Option<Vec<T>>`) report all three states, so
//! "no list" and "a list with nothing in it" stay distinct in the output.
//!
//! [`OmitPolicy`] turns a classification into a render/suppress decision.
//! For derived structs the same decision is expressed at the declaration site
//! through the [`empty`] and [`absent_or_empty`] predicates:
//!
//! ```rust
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Labels {
//!     #[serde(skip_serializing_if = "omitempty::empty")]
//!     names: Vec<String>,
//!     #[serde(skip_serializing_if = "omitempty::absent_or_empty")]
//!     aliases: Option<Vec<String>>,
//! }
//!
//! let labels = Labels { names: vec![], aliases: None };
//! assert_eq!(omitempty::to_dense_string(&labels).unwrap(), "{}");
//! ```

/// The observable state of a sequence-valued field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// A nullable reference with no target. Never reported for `Vec` fields.
    Absent,
    /// A present sequence with zero elements.
    Empty,
    /// A present sequence with at least one element.
    NonEmpty,
}

/// Per-field policy deciding whether a classified field is rendered at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OmitPolicy {
    /// Always render the field. Absent references render as an explicit null
    /// token, empty sequences as an explicit empty-sequence token.
    #[default]
    AlwaysEmit,
    /// Drop the field entirely when it is absent or empty.
    OmitEmpty,
}

impl OmitPolicy {
    /// Returns `true` if a field with the given classification is suppressed
    /// from the output under this policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use omitempty::{Classification, OmitPolicy};
    ///
    /// assert!(!OmitPolicy::AlwaysEmit.suppresses(Classification::Absent));
    /// assert!(OmitPolicy::OmitEmpty.suppresses(Classification::Absent));
    /// assert!(OmitPolicy::OmitEmpty.suppresses(Classification::Empty));
    /// assert!(!OmitPolicy::OmitEmpty.suppresses(Classification::NonEmpty));
    /// ```
    #[must_use]
    pub const fn suppresses(self, classification: Classification) -> bool {
        match self {
            OmitPolicy::AlwaysEmit => false,
            OmitPolicy::OmitEmpty => !matches!(classification, Classification::NonEmpty),
        }
    }
}

/// Classifies a value-typed sequence field.
///
/// `Vec` fields have no absent state: this returns [`Classification::Empty`]
/// or [`Classification::NonEmpty`], never [`Classification::Absent`].
#[must_use]
pub fn classify_slice<T>(seq: &[T]) -> Classification {
    if seq.is_empty() {
        Classification::Empty
    } else {
        Classification::NonEmpty
    }
}

/// Classifies a reference-typed (nullable) sequence field.
///
/// # Examples
///
/// ```rust
/// use omitempty::{classify_option, Classification};
///
/// assert_eq!(classify_option::<String>(&None), Classification::Absent);
/// assert_eq!(classify_option(&Some(Vec::<i32>::new())), Classification::Empty);
/// assert_eq!(classify_option(&Some(vec![1])), Classification::NonEmpty);
/// ```
#[must_use]
pub fn classify_option<T>(seq: &Option<Vec<T>>) -> Classification {
    match seq {
        None => Classification::Absent,
        Some(inner) => classify_slice(inner),
    }
}

/// `skip_serializing_if` predicate for `Vec<T>` fields under the omit-empty
/// policy.
#[must_use]
pub fn empty<T>(seq: &[T]) -> bool {
    OmitPolicy::OmitEmpty.suppresses(classify_slice(seq))
}

/// `skip_serializing_if` predicate for `Option<Vec<T>>` fields under the
/// omit-empty policy. Suppresses both the absent reference and the
/// present-but-empty sequence.
#[must_use]
pub fn absent_or_empty<T>(seq: &Option<Vec<T>>) -> bool {
    OmitPolicy::OmitEmpty.suppresses(classify_option(seq))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_fields_never_classify_absent() {
        let unset: Vec<String> = Vec::new();
        assert_eq!(classify_slice(&unset), Classification::Empty);
        assert_eq!(classify_slice(&["x"]), Classification::NonEmpty);
    }

    #[test]
    fn option_fields_distinguish_absent_from_empty() {
        assert_eq!(classify_option::<String>(&None), Classification::Absent);
        assert_eq!(
            classify_option(&Some(Vec::<String>::new())),
            Classification::Empty
        );
        assert_eq!(
            classify_option(&Some(vec!["x".to_string()])),
            Classification::NonEmpty
        );
    }

    #[test]
    fn always_emit_suppresses_nothing() {
        for class in [
            Classification::Absent,
            Classification::Empty,
            Classification::NonEmpty,
        ] {
            assert!(!OmitPolicy::AlwaysEmit.suppresses(class));
        }
    }

    #[test]
    fn omit_empty_keeps_only_non_empty() {
        assert!(OmitPolicy::OmitEmpty.suppresses(Classification::Absent));
        assert!(OmitPolicy::OmitEmpty.suppresses(Classification::Empty));
        assert!(!OmitPolicy::OmitEmpty.suppresses(Classification::NonEmpty));
    }

    #[test]
    fn skip_predicates_match_the_policy() {
        assert!(empty::<String>(&[]));
        assert!(!empty(&["x"]));
        assert!(absent_or_empty::<String>(&None));
        assert!(absent_or_empty(&Some(Vec::<String>::new())));
        assert!(!absent_or_empty(&Some(vec!["x".to_string()])));
    }
}
