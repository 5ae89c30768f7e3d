//! Model assembly across a type and its ancestor chain.

use indexmap::IndexMap;
use tracing::debug;

use crate::descriptor::{FieldDescriptor, TypeDescriptor, TypeRegistry};
use crate::error::Error;
use crate::model::filter::is_excluded;
use crate::model::property::create_property;
use crate::model::types::ApiModel;
use crate::naming::NamingStrategy;

/// Builds `ApiModel` values from type descriptors.
///
/// Stateless apart from the configured naming strategy; one instance
/// may serve any number of concurrent introspection calls over a
/// shared registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct Introspector {
    naming: NamingStrategy,
}

impl Introspector {
    /// Introspector with the default identity naming strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Introspector with an explicit naming strategy.
    pub fn with_naming(naming: NamingStrategy) -> Self {
        Self { naming }
    }

    /// Assemble the API model for one type.
    ///
    /// Fields are contributed per ancestor-chain link in declaration
    /// order, root-most ancestor first and the most-derived type's own
    /// fields last. A redeclared wire name overwrites the ancestor's
    /// entry (last write wins); shadowing is not rejected.
    pub fn create_api_model(
        &self,
        descriptor: &TypeDescriptor,
        registry: &TypeRegistry,
    ) -> Result<ApiModel, Error> {
        let mut properties = IndexMap::new();
        let mut required = Vec::new();

        for link in ancestor_chain(descriptor, registry)?.into_iter().rev() {
            for field in link.fields() {
                if is_excluded(field) {
                    continue;
                }
                let wire_name = self.property_name(field);
                properties.insert(wire_name.clone(), create_property(field, registry)?);
                if field.required {
                    required.push(wire_name);
                }
            }
        }

        debug!(
            model = %descriptor.name,
            properties = properties.len(),
            required = required.len(),
            "Assembled API model."
        );

        Ok(ApiModel {
            name: descriptor.name.clone(),
            description: calculate_description(descriptor),
            required,
            properties,
        })
    }

    /// Wire name for a field: an explicit rename takes absolute
    /// precedence, otherwise the configured strategy translates the
    /// declared identifier.
    fn property_name(&self, field: &FieldDescriptor) -> String {
        match &field.rename {
            Some(rename) => rename.clone(),
            None => self.naming.translate(&field.name),
        }
    }
}

/// Chain from the given type up to (but excluding) the universal root,
/// most-derived type first.
fn ancestor_chain<'a>(
    descriptor: &'a TypeDescriptor,
    registry: &'a TypeRegistry,
) -> Result<Vec<&'a TypeDescriptor>, Error> {
    let mut chain = vec![descriptor];
    let mut current = descriptor;
    while let Some(parent_name) = &current.extends {
        if chain.iter().any(|link| link.name == *parent_name) {
            return Err(Error::CyclicAncestry(parent_name.clone()));
        }
        let parent = registry
            .get(parent_name)
            .ok_or_else(|| Error::UnknownAncestor(parent_name.clone()))?;
        chain.push(parent);
        current = parent;
    }
    Ok(chain)
}

/// Type-level description, with absent and empty both normalized to
/// `None`.
fn calculate_description(descriptor: &TypeDescriptor) -> Option<String> {
    descriptor
        .description
        .as_deref()
        .filter(|description| !description.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn registry(json: &str) -> TypeRegistry {
        TypeRegistry::from_json(json).unwrap()
    }

    fn model(registry: &TypeRegistry, name: &str) -> ApiModel {
        Introspector::new()
            .create_api_model(registry.get(name).unwrap(), registry)
            .unwrap()
    }

    #[test]
    fn test_flat_type_keeps_declaration_order() {
        let registry = registry(
            r#"[{
                "name": "Point",
                "fields": [
                    {"name": "z", "type": {"primitive": "double"}},
                    {"name": "a", "type": {"primitive": "double"}},
                    {"name": "m", "type": {"primitive": "double"}}
                ]
            }]"#,
        );
        let model = model(&registry, "Point");
        let keys: Vec<_> = model.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_ancestor_fields_come_first() {
        let registry = registry(
            r#"[
                {"name": "Base", "fields": [
                    {"name": "id", "type": {"primitive": "int64"}}
                ]},
                {"name": "Middle", "extends": "Base", "fields": [
                    {"name": "label", "type": {"primitive": "string"}}
                ]},
                {"name": "Leaf", "extends": "Middle", "fields": [
                    {"name": "extra", "type": {"primitive": "string"}}
                ]}
            ]"#,
        );
        let model = model(&registry, "Leaf");
        let keys: Vec<_> = model.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "label", "extra"]);
    }

    #[test]
    fn test_rename_beats_naming_strategy() {
        let registry = registry(
            r#"[{
                "name": "Item",
                "fields": [
                    {"name": "itemId", "type": {"primitive": "int64"}, "rename": "ident"},
                    {"name": "itemLabel", "type": {"primitive": "string"}}
                ]
            }]"#,
        );
        let model = Introspector::with_naming(NamingStrategy::SnakeCase)
            .create_api_model(registry.get("Item").unwrap(), &registry)
            .unwrap();

        let keys: Vec<_> = model.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, ["ident", "item_label"]);
    }

    #[test]
    fn test_default_strategy_keeps_identifier_verbatim() {
        let registry = registry(
            r#"[{
                "name": "Item",
                "fields": [{"name": "itemId", "type": {"primitive": "int64"}}]
            }]"#,
        );
        let model = model(&registry, "Item");
        assert!(model.properties.contains_key("itemId"));
    }

    #[test]
    fn test_required_uses_wire_names_in_acceptance_order() {
        let registry = registry(
            r#"[
                {"name": "Base", "fields": [
                    {"name": "name", "type": {"primitive": "string"}, "required": true}
                ]},
                {"name": "Derived", "extends": "Base", "fields": [
                    {"name": "id", "type": {"primitive": "int64"}, "required": true, "rename": "ident"},
                    {"name": "note", "type": {"primitive": "string"}}
                ]}
            ]"#,
        );
        let model = model(&registry, "Derived");
        assert_eq!(model.required, ["name", "ident"]);
        for name in &model.required {
            assert!(model.properties.contains_key(name));
        }
    }

    #[test]
    fn test_excluded_fields_never_appear() {
        let registry = registry(
            r#"[{
                "name": "Guarded",
                "fields": [
                    {"name": "kept", "type": {"primitive": "string"}},
                    {"name": "instances", "type": {"primitive": "int32"}, "static": true},
                    {"name": "scratch", "type": {"primitive": "string"}, "transient": true},
                    {"name": "secret", "type": {"primitive": "string"},
                     "expose": {"serialize": false, "deserialize": false}}
                ]
            }]"#,
        );
        let model = model(&registry, "Guarded");
        let keys: Vec<_> = model.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, ["kept"]);
    }

    #[test]
    fn test_shadowed_field_last_write_wins() {
        let registry = registry(
            r#"[
                {"name": "Base", "fields": [
                    {"name": "id", "type": {"primitive": "int32"}}
                ]},
                {"name": "Derived", "extends": "Base", "fields": [
                    {"name": "id", "type": {"primitive": "int64"}}
                ]}
            ]"#,
        );
        let model = model(&registry, "Derived");
        assert_eq!(model.properties.len(), 1);
        let property = model.properties.get("id").unwrap();
        assert_eq!(property.format.as_deref(), Some("int64"));
    }

    #[test]
    fn test_empty_description_normalizes_to_absent() {
        let registry = registry(
            r#"[
                {"name": "Blank", "description": "", "fields": []},
                {"name": "Documented", "description": "a thing", "fields": []}
            ]"#,
        );
        assert_eq!(model(&registry, "Blank").description, None);
        assert_eq!(
            model(&registry, "Documented").description.as_deref(),
            Some("a thing")
        );
    }

    #[test]
    fn test_unknown_ancestor_propagates() {
        let registry = registry(
            r#"[{"name": "Orphan", "extends": "Ghost", "fields": []}]"#,
        );
        let err = Introspector::new()
            .create_api_model(registry.get("Orphan").unwrap(), &registry)
            .unwrap_err();
        match err {
            Error::UnknownAncestor(name) => assert_eq!(name, "Ghost"),
            other => panic!("expected UnknownAncestor, got {other:?}"),
        }
    }

    #[test]
    fn test_cyclic_ancestry_is_rejected() {
        let registry = registry(
            r#"[
                {"name": "A", "extends": "B", "fields": []},
                {"name": "B", "extends": "A", "fields": []}
            ]"#,
        );
        let err = Introspector::new()
            .create_api_model(registry.get("A").unwrap(), &registry)
            .unwrap_err();
        assert!(matches!(err, Error::CyclicAncestry(_)));
    }

    #[test]
    fn test_unsupported_field_type_aborts_model() {
        let registry = registry(
            r#"[{
                "name": "Broken",
                "fields": [
                    {"name": "ok", "type": {"primitive": "string"}},
                    {"name": "bag", "type": {"set": null}}
                ]
            }]"#,
        );
        let err = Introspector::new()
            .create_api_model(registry.get("Broken").unwrap(), &registry)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedType { .. }));
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let registry = registry(
            r#"[{"name": "Pet", "fields": [{"name": "id", "type": {"primitive": "int64"}}]}]"#,
        );
        let before = registry.get("Pet").unwrap().clone();
        let _ = model(&registry, "Pet");
        assert_eq!(registry.get("Pet").unwrap(), &before);
    }
}
