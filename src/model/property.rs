//! Property construction for one accepted field.

use crate::descriptor::{FieldDescriptor, TypeExpr, TypeRegistry};
use crate::error::Error;
use crate::model::resolve;
use crate::model::types::{ItemsRef, Property};

/// Build the schema descriptor for one field.
///
/// Pure: reads the field and registry, allocates a fresh `Property`.
pub fn create_property(
    field: &FieldDescriptor,
    registry: &TypeRegistry,
) -> Result<Property, Error> {
    Ok(Property {
        schema_type: resolve::schema_type_name(&field.ty),
        format: resolve::schema_type_format(&field.ty).map(str::to_string),
        description: field.description.clone(),
        enum_values: calculate_enum_values(&field.ty, registry),
        items: calculate_items(field)?,
    })
}

/// Serialized constant names when the declared type is an enumeration
/// registered under that name: declaration order, with per-constant
/// renames substituted in place.
fn calculate_enum_values(ty: &TypeExpr, registry: &TypeRegistry) -> Option<Vec<String>> {
    let TypeExpr::Named(name) = ty else {
        return None;
    };
    let constants = registry.get(name)?.enum_constants()?;
    Some(
        constants
            .iter()
            .map(|constant| {
                constant
                    .rename
                    .clone()
                    .unwrap_or_else(|| constant.name.clone())
            })
            .collect(),
    )
}

/// Element reference for array and collection fields.
///
/// A collection with no resolvable element type parameter cannot be
/// mapped; surfacing the failure keeps the emitted documentation from
/// being silently wrong.
fn calculate_items(field: &FieldDescriptor) -> Result<Option<ItemsRef>, Error> {
    match &field.ty {
        TypeExpr::Array(_) | TypeExpr::List(_) | TypeExpr::Set(_) => {
            let reference =
                resolve::element_type_name(&field.ty).ok_or_else(|| Error::UnsupportedType {
                    field: field.name.clone(),
                    reason: "collection field has no element type parameter".to_string(),
                })?;
            Ok(Some(ItemsRef { reference }))
        }
        TypeExpr::Primitive(_) | TypeExpr::Named(_) => Ok(None),
    }
}
