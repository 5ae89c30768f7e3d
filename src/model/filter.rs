//! Visibility rules deciding which declared fields join a model.

use crate::descriptor::FieldDescriptor;

/// Whether a declared field is excluded from the wire representation.
///
/// Rules in order, first match wins: static fields are class-level and
/// never serialize; transient fields are non-serializable at the
/// language level; an expose record with both directions false is an
/// explicit opt-out. A field usable for either direction is kept, and
/// access level never matters.
pub fn is_excluded(field: &FieldDescriptor) -> bool {
    if field.is_static || field.is_transient {
        return true;
    }
    if let Some(expose) = field.expose {
        if !expose.serialize && !expose.deserialize {
            return true;
        }
    }
    false
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use crate::descriptor::{Expose, Primitive, TypeExpr};

    use super::*;

    fn field(name: &str) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            ty: TypeExpr::Primitive(Primitive::String),
            is_static: false,
            is_transient: false,
            rename: None,
            required: false,
            expose: None,
            description: None,
        }
    }

    #[test]
    fn test_plain_field_is_included() {
        assert!(!is_excluded(&field("plain")));
    }

    #[test]
    fn test_static_field_is_excluded() {
        let mut f = field("counter");
        f.is_static = true;
        assert!(is_excluded(&f));
    }

    #[test]
    fn test_transient_field_is_excluded() {
        let mut f = field("cache");
        f.is_transient = true;
        assert!(is_excluded(&f));
    }

    #[test]
    fn test_expose_neither_direction_is_excluded() {
        let mut f = field("hidden");
        f.expose = Some(Expose {
            serialize: false,
            deserialize: false,
        });
        assert!(is_excluded(&f));
    }

    #[test]
    fn test_expose_either_direction_is_included() {
        for (serialize, deserialize) in [(true, true), (true, false), (false, true)] {
            let mut f = field("partial");
            f.expose = Some(Expose {
                serialize,
                deserialize,
            });
            assert!(
                !is_excluded(&f),
                "expose({serialize}, {deserialize}) should be kept"
            );
        }
    }
}
