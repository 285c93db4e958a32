//! CSS Style Attributes — `style="..."` attribute processing.
//! Reference: <https://www.w3.org/TR/css-style-attr/>

#![forbid(unsafe_code)]

use std::collections::HashMap;

/// A single CSS declaration parsed from a style attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name normalized to ASCII lowercase as per CSS case-insensitivity.
    pub property: String,
    /// Raw value slice trimmed of surrounding ASCII whitespace. May contain spaces.
    pub value: String,
}

/// Parse the value of a `style` attribute into a list of declarations.
///
/// Splits on `;`, then on the first `:` of each item. Items with no colon, an empty
/// property or an empty value are skipped. `!important` is kept as part of the value.
pub fn parse_style_attribute(input: &str) -> Vec<Declaration> {
    let mut out = Vec::new();
    for raw_item in input.split(';') {
        let item = raw_item.trim_matches(is_ascii_whitespace);
        let Some((raw_prop, raw_value)) = item.split_once(':') else {
            continue;
        };
        let property_text = raw_prop.trim_matches(is_ascii_whitespace);
        let value_text = raw_value.trim_matches(is_ascii_whitespace);
        if property_text.is_empty() || value_text.is_empty() {
            continue;
        }
        out.push(Declaration {
            property: property_text.to_ascii_lowercase(),
            value: value_text.to_owned(),
        });
    }
    out
}

/// Parse into a map keyed by property name; the last duplicate wins.
pub fn parse_style_attribute_into_map(input: &str) -> HashMap<String, String> {
    parse_style_attribute(input)
        .into_iter()
        .map(|decl| (decl.property, decl.value))
        .collect()
}

/// Keep only the last occurrence of each property, in the position of that occurrence.
pub fn normalize_style_attribute(input: &str) -> Vec<Declaration> {
    let declarations = parse_style_attribute(input);
    let mut last_index_for_property: HashMap<&str, usize> = HashMap::new();
    for (index, decl) in declarations.iter().enumerate() {
        last_index_for_property.insert(decl.property.as_str(), index);
    }
    let keep: Vec<bool> = declarations
        .iter()
        .enumerate()
        .map(|(index, decl)| last_index_for_property.get(decl.property.as_str()) == Some(&index))
        .collect();
    declarations
        .into_iter()
        .zip(keep)
        .filter_map(|(decl, kept)| kept.then_some(decl))
        .collect()
}

/// ASCII whitespace per CSS Syntax (TAB, LF, FF, CR, SPACE).
const fn is_ascii_whitespace(character: char) -> bool {
    matches!(
        character,
        '\u{0009}' | '\u{000A}' | '\u{000C}' | '\u{000D}' | '\u{0020}'
    )
}

/// Ordered declaration block backing an element's inline style.
///
/// Setting an existing property replaces its value in place; new properties are appended,
/// so serialization follows first-write order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleDeclarations {
    declarations: Vec<Declaration>,
}

impl StyleDeclarations {
    /// Parse a `style` attribute value, dropping duplicate properties.
    pub fn parse(input: &str) -> Self {
        Self {
            declarations: normalize_style_attribute(input),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        let property = property.to_ascii_lowercase();
        self.declarations
            .iter()
            .find(|decl| decl.property == property)
            .map(|decl| decl.value.as_str())
    }

    pub fn set(&mut self, property: &str, value: &str) {
        let property = property.to_ascii_lowercase();
        let value = value.trim_matches(is_ascii_whitespace).to_owned();
        match self
            .declarations
            .iter_mut()
            .find(|decl| decl.property == property)
        {
            Some(existing) => existing.value = value,
            None => self.declarations.push(Declaration { property, value }),
        }
    }

    /// Remove a property, returning its previous value.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        let property = property.to_ascii_lowercase();
        let index = self
            .declarations
            .iter()
            .position(|decl| decl.property == property)?;
        Some(self.declarations.remove(index).value)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    /// Serialize as `prop: value;` items separated by a single space.
    pub fn serialize(&self) -> String {
        self.declarations
            .iter()
            .map(|decl| format!("{}: {};", decl.property, decl.value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
