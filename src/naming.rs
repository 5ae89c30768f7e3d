//! Naming strategies for wire property names.
//!
//! A strategy transforms a field's declared identifier into its wire
//! name when no explicit rename is configured. The default is
//! `Identity`: no transformation at all, unlike strategies that
//! lower-camel-case or snake-case identifiers.

/// Transformation applied to a declared identifier to produce its wire
/// name, absent an explicit rename.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamingStrategy {
    /// Keep the declared identifier verbatim.
    #[default]
    Identity,
    /// `item_id` becomes `itemId`.
    LowerCamelCase,
    /// `itemId` becomes `item_id`.
    SnakeCase,
}

impl NamingStrategy {
    /// Translate a declared identifier into a wire name.
    pub fn translate(self, name: &str) -> String {
        match self {
            Self::Identity => name.to_string(),
            Self::LowerCamelCase => to_lower_camel_case(name),
            Self::SnakeCase => to_snake_case(name),
        }
    }
}

/// Convert an identifier to snake_case.
fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert an identifier to lowerCamelCase, treating `_` as a word
/// separator.
fn to_lower_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;
    for (i, c) in s.chars().enumerate() {
        if c == '_' {
            capitalize_next = !result.is_empty();
            continue;
        }
        if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else if i == 0 {
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
