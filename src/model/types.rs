//! Serializable output values of the introspection engine.
//!
//! These are plain data with no remaining reference into the registry
//! that produced them: an `ApiModel` stays valid after its registry is
//! gone, and serializes directly as a Swagger `definitions` entry.

use indexmap::IndexMap;
use serde::Serialize;

use crate::descriptor::TypeExpr;

/// Reference to another modeled type, serialized as `{"$ref": name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemsRef {
    /// Canonical name of the referenced type.
    #[serde(rename = "$ref")]
    pub reference: String,
}

/// One field's schema descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    /// Canonical schema type name.
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Refinement of the base type, e.g. a numeric width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Serialized constant names, present only when the field's type
    /// is an enumeration. Declaration order.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Element reference, present only for array/collection fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemsRef>,
}

/// The engine's output for one type.
///
/// Invariant: every name in `required` is a key of `properties`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiModel {
    /// Canonical type identifier, matching the `$ref` name other
    /// models use for this type.
    pub name: String,
    /// Type-level description; empty strings are normalized to absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Wire names of required properties, in acceptance order.
    pub required: Vec<String>,
    /// Wire name to property. Insertion order is declaration order
    /// across the ancestor chain, root-most ancestor's fields first.
    pub properties: IndexMap<String, Property>,
}

/// HTTP response documentation value used by the surrounding document
/// assembler.
///
/// Unrelated to model building; it shares the module because it shares
/// the output document. Immutable once constructed. The backing type
/// handle is internal-use only and stays out of the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseMessage {
    code: i32,
    message: String,
    #[serde(rename = "responseModel", skip_serializing_if = "Option::is_none")]
    response_model: Option<String>,
    #[serde(skip)]
    type_ref: Option<TypeExpr>,
}

impl ResponseMessage {
    /// A message with no response model.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            response_model: None,
            type_ref: None,
        }
    }

    /// A message whose body is described by a modeled type.
    pub fn with_model(
        code: i32,
        message: impl Into<String>,
        response_model: impl Into<String>,
        type_ref: TypeExpr,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            response_model: Some(response_model.into()),
            type_ref: Some(type_ref),
        }
    }

    /// HTTP status code.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Canonical name of the response model, if any.
    pub fn response_model(&self) -> Option<&str> {
        self.response_model.as_deref()
    }

    /// Backing type handle, for the caller to resolve a reference
    /// later.
    pub fn type_ref(&self) -> Option<&TypeExpr> {
        self.type_ref.as_ref()
    }
}
