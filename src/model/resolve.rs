//! Mapping from declared types to schema type names and formats.
//!
//! The single place where the descriptor type system meets the schema
//! type system: a fixed policy table for primitives, canonical names
//! for modeled types, and element references for collections. All
//! functions are pure and read no external state.

use crate::descriptor::{Primitive, TypeExpr};

/// Canonical schema type name for a declared type.
///
/// Primitives map to fixed schema keywords, arrays and collections to
/// `array`, and modeled types to their own canonical name (used as a
/// `$ref` target elsewhere, never inlined).
pub fn schema_type_name(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::Primitive(primitive) => primitive_type_name(*primitive).to_string(),
        TypeExpr::Named(name) => name.clone(),
        TypeExpr::Array(_) | TypeExpr::List(_) | TypeExpr::Set(_) => "array".to_string(),
    }
}

/// Schema format refinement, or `None` when the base type name is
/// already precise enough.
pub fn schema_type_format(ty: &TypeExpr) -> Option<&'static str> {
    match ty {
        TypeExpr::Primitive(primitive) => primitive_format(*primitive),
        TypeExpr::Named(_) | TypeExpr::Array(_) | TypeExpr::List(_) | TypeExpr::Set(_) => None,
    }
}

/// Canonical reference name for a collection's element type: the
/// component type of an array, or the declared element parameter of a
/// list/set.
///
/// `None` for non-collections and for raw collections whose element
/// parameter is absent; callers decide whether the latter is an error.
pub fn element_type_name(ty: &TypeExpr) -> Option<String> {
    match ty {
        TypeExpr::Array(component) => Some(schema_type_name(component)),
        TypeExpr::List(element) | TypeExpr::Set(element) => {
            element.as_deref().map(schema_type_name)
        }
        TypeExpr::Primitive(_) | TypeExpr::Named(_) => None,
    }
}

fn primitive_type_name(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Int32 | Primitive::Int64 => "integer",
        Primitive::Float | Primitive::Double => "number",
        Primitive::Boolean => "boolean",
        Primitive::String | Primitive::Date | Primitive::DateTime | Primitive::Bytes => "string",
    }
}

fn primitive_format(primitive: Primitive) -> Option<&'static str> {
    match primitive {
        Primitive::Int32 => Some("int32"),
        Primitive::Int64 => Some("int64"),
        Primitive::Float => Some("float"),
        Primitive::Double => Some("double"),
        Primitive::Date => Some("date"),
        Primitive::DateTime => Some("date-time"),
        Primitive::Bytes => Some("byte"),
        Primitive::Boolean | Primitive::String => None,
    }
}
