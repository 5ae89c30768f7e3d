#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Swagger API model introspection engine.
//!
//! Converts structural type descriptions (with attached per-field
//! configuration) into normalized, serializable API models: property
//! names, types, required-ness, descriptions, enum values, and
//! collection element references. The output serializes as an
//! OpenAPI/Swagger `definitions` entry.
//!
//! The engine is a pure function of `(descriptor, registry)`: it never
//! mutates its inputs, holds no state across calls, and produces values
//! with no remaining dependency on the registry that built them.

pub mod descriptor;
pub mod error;
pub mod model;
pub mod naming;

pub use descriptor::{TypeDescriptor, TypeRegistry};
pub use error::Error;
pub use model::{ApiModel, Introspector, Property, ResponseMessage, definitions};
pub use naming::NamingStrategy;
