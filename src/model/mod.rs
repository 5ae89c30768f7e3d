//! Type introspection into Swagger API models.
//!
//! Pipeline, leaf first:
//! - `resolve`: declared type to schema type name/format/element ref
//! - `filter`: which declared fields join the model
//! - `property`: one accepted field to a `Property`
//! - `builder`: a type plus its ancestor chain to an `ApiModel`
//! - `types`: the serializable output values

mod builder;
mod filter;
mod property;
mod resolve;
mod types;

pub use builder::Introspector;
pub use filter::is_excluded;
pub use property::create_property;
pub use resolve::{element_type_name, schema_type_format, schema_type_name};
pub use types::{ApiModel, ItemsRef, Property, ResponseMessage};

use serde_json::{Map, Value};

use crate::error::Error;

/// Assemble models into a Swagger `definitions` object keyed by each
/// model's canonical name.
pub fn definitions(models: &[ApiModel]) -> Result<Value, Error> {
    let mut entries = Map::new();
    for model in models {
        let rendered = serde_json::to_value(model).map_err(Error::Serialize)?;
        entries.insert(model.name.clone(), rendered);
    }
    Ok(Value::Object(entries))
}
