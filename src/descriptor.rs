//! Structural type descriptions consumed by the introspection engine.
//!
//! This is the explicit replacement for reflective metadata walking: a
//! registry maps each modeled type to a descriptor value (an ordered
//! field list with its configuration attached), built once by a loader
//! and treated as read-only afterwards. Annotation reading becomes
//! descriptor construction, so the engine consumes plain values and
//! never touches a live reflection facility.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::Error;

/// Primitive kinds with a fixed schema keyword mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Primitive {
    /// 32-bit integer.
    Int32,
    /// 64-bit integer.
    Int64,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Boolean.
    Boolean,
    /// Text.
    String,
    /// Calendar date.
    Date,
    /// Date with time of day.
    DateTime,
    /// Byte sequence.
    Bytes,
}

/// A field's declared type.
///
/// In a type-description document each variant is externally tagged,
/// e.g. `{"primitive": "int64"}`, `{"named": "Pet"}`,
/// `{"list": {"named": "Tag"}}`. A `list` or `set` tag with a `null`
/// payload describes a raw collection whose element type parameter is
/// unresolvable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeExpr {
    /// A primitive with a direct schema mapping.
    Primitive(Primitive),
    /// A modeled (non-primitive) type, by canonical name.
    Named(String),
    /// An array; the component type is always known.
    Array(Box<TypeExpr>),
    /// A generic ordered collection; the element type parameter may be
    /// absent.
    List(Option<Box<TypeExpr>>),
    /// A generic unordered collection; the element type parameter may
    /// be absent.
    Set(Option<Box<TypeExpr>>),
}

/// Per-direction usability of a field, mirroring an explicit expose
/// control annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Expose {
    /// Usable when writing the wire representation.
    pub serialize: bool,
    /// Usable when reading the wire representation.
    pub deserialize: bool,
}

/// One declared field of a modeled type, with its configuration
/// record attached.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldDescriptor {
    /// Declared identifier.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    /// Class-level field; never part of an instance's wire form.
    #[serde(default, rename = "static")]
    pub is_static: bool,
    /// Marked non-serializable at the language level.
    #[serde(default, rename = "transient")]
    pub is_transient: bool,
    /// Explicit wire name, taking precedence over any naming strategy.
    #[serde(default)]
    pub rename: Option<String>,
    /// Whether the property joins the model's required list.
    #[serde(default)]
    pub required: bool,
    /// Expose control; both directions false excludes the field.
    #[serde(default)]
    pub expose: Option<Expose>,
    /// Free-text property description.
    #[serde(default)]
    pub description: Option<String>,
}

/// One enumeration constant and its optional serialized-name override.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnumConstant {
    /// Declared identifier.
    pub name: String,
    /// Serialized-name override.
    #[serde(default)]
    pub rename: Option<String>,
}

/// Structural shape of a modeled type: class-like with fields, or an
/// enumeration with constants. Both lists are in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeShape {
    /// A class-like type.
    Class {
        /// Declared fields, in declaration order.
        fields: Vec<FieldDescriptor>,
    },
    /// An enumeration.
    Enum {
        /// Declared constants, in declaration order.
        constants: Vec<EnumConstant>,
    },
}

/// Structural description of one modeled type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeDescriptor {
    /// Canonical type identifier; also the `$ref` target other models
    /// use to reference this type.
    pub name: String,
    /// Type-level description.
    #[serde(default)]
    pub description: Option<String>,
    /// Canonical name of the direct ancestor. `None` means the type
    /// extends only the universal root, which contributes nothing.
    #[serde(default)]
    pub extends: Option<String>,
    /// Fields or enum constants.
    #[serde(flatten)]
    pub shape: TypeShape,
}

impl TypeDescriptor {
    /// The type's own declared fields; empty for enumerations.
    pub fn fields(&self) -> &[FieldDescriptor] {
        match &self.shape {
            TypeShape::Class { fields } => fields,
            TypeShape::Enum { .. } => &[],
        }
    }

    /// Enumeration constants, or `None` for class-like types.
    pub fn enum_constants(&self) -> Option<&[EnumConstant]> {
        match &self.shape {
            TypeShape::Class { .. } => None,
            TypeShape::Enum { constants } => Some(constants),
        }
    }
}

/// Registry of modeled types, keyed by canonical name.
///
/// Built once (programmatically or from a JSON document) and read-only
/// thereafter; the engine only looks types up in it. Registration
/// order is preserved.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: IndexMap<String, TypeDescriptor>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under its canonical name. Re-registering
    /// a name replaces the earlier descriptor.
    pub fn register(&mut self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.name.clone(), descriptor);
    }

    /// Look up a descriptor by canonical name.
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// Registered descriptors, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry holds no types.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Load a registry from a JSON type-description document: an array
    /// of type descriptors.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let descriptors: Vec<TypeDescriptor> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for descriptor in descriptors {
            registry.register(descriptor);
        }
        Ok(registry)
    }
}
