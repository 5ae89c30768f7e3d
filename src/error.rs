//! Error taxonomy for model construction and descriptor loading.
//!
//! Introspection is a pure read of static metadata, so there is no
//! retry or partial-success mode: a type's model is either fully built
//! or not produced at all.

use thiserror::Error;

/// Errors surfaced while building API models or loading type
/// descriptions.
#[derive(Debug, Error)]
pub enum Error {
    /// A field's declared type cannot be mapped to any schema type.
    ///
    /// Raised for collection fields with no resolvable element type
    /// parameter. The resulting documentation would be silently wrong,
    /// so model construction aborts instead of guessing.
    #[error("unsupported type for field `{field}`: {reason}")]
    UnsupportedType {
        /// Declared identifier of the offending field.
        field: String,
        /// Human-readable cause.
        reason: String,
    },

    /// An `extends` target named by a descriptor is missing from the
    /// registry. Indicates a malformed type description; propagated
    /// as-is so the caller is told about it.
    #[error("ancestor type `{0}` is not registered")]
    UnknownAncestor(String),

    /// A descriptor's ancestor chain loops back on itself.
    #[error("cyclic ancestor chain at `{0}`")]
    CyclicAncestry(String),

    /// A type-description document could not be parsed.
    #[error("invalid type description document: {0}")]
    InvalidDescriptor(#[from] serde_json::Error),

    /// An assembled model could not be rendered to JSON. Nominal in
    /// practice: every output struct serializes to plain objects and
    /// arrays.
    #[error("failed to serialize API model: {0}")]
    Serialize(#[source] serde_json::Error),
}
