//! A small CSSOM `style` declaration: values are checked against the property grammar
//! before they reach the element, and rejected values leave the style untouched.

use css_box::{BoxSizing, Edge, is_valid_margin, is_valid_padding, split_shorthand};
use css_position::{Position, is_valid_inset};
use css_style_attr::StyleDeclarations;
use css_values_units::{parse_color, parse_entire};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CssStyleDeclaration {
    block: StyleDeclarations,
}

/// Which grammar a longhand belongs to.
#[derive(Clone, Copy)]
enum Longhand {
    Padding,
    Margin,
    Inset,
}

fn classify_longhand(property: &str) -> Option<Longhand> {
    Edge::ALL.into_iter().find_map(|edge| {
        if property == edge.longhand("padding") {
            Some(Longhand::Padding)
        } else if property == edge.longhand("margin") {
            Some(Longhand::Margin)
        } else if property == edge.as_str() {
            Some(Longhand::Inset)
        } else {
            None
        }
    })
}

impl CssStyleDeclaration {
    /// Load from a `style` attribute value (absent attribute is an empty style).
    pub fn parse(style_attr: Option<&str>) -> Self {
        Self {
            block: style_attr.map(StyleDeclarations::parse).unwrap_or_default(),
        }
    }

    pub fn get_property_value(&self, property: &str) -> Option<&str> {
        self.block.get(property)
    }

    /// Declared `position`, if present and valid.
    pub fn position(&self) -> Option<Position> {
        self.block.get("position").and_then(Position::parse)
    }

    /// Set a property the way `element.style.setProperty` does.
    ///
    /// Returns `false` and changes nothing when the property is unsupported or the value
    /// does not match its grammar (`NaNpx`, negative padding, ...). `padding` and
    /// `margin` expand to their four longhands; `background` only accepts a color and
    /// is stored as `background-color`.
    pub fn set_property(&mut self, property: &str, value: &str) -> bool {
        let property = property.trim().to_ascii_lowercase();
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        match property.as_str() {
            "padding" | "margin" => self.set_box_shorthand(&property, value),
            "background" | "background-color" => {
                if parse_entire(value, parse_color).is_err() {
                    return false;
                }
                self.block.set("background-color", value);
                true
            }
            "position" => self.set_keyword(&property, Position::parse(value).map(Position::as_str)),
            "box-sizing" => {
                self.set_keyword(&property, BoxSizing::parse(value).map(BoxSizing::as_str))
            }
            _ => {
                let valid = match classify_longhand(&property) {
                    Some(Longhand::Padding) => is_valid_padding(value),
                    Some(Longhand::Margin) => is_valid_margin(value),
                    Some(Longhand::Inset) => is_valid_inset(value),
                    None => false,
                };
                if valid {
                    self.block.set(&property, value);
                }
                valid
            }
        }
    }

    fn set_keyword(&mut self, property: &str, keyword: Option<&str>) -> bool {
        match keyword {
            Some(keyword) => {
                self.block.set(property, keyword);
                true
            }
            None => false,
        }
    }

    fn set_box_shorthand(&mut self, prefix: &str, value: &str) -> bool {
        let Ok(sides) = split_shorthand(value) else {
            return false;
        };
        let validate = if prefix == "padding" {
            is_valid_padding
        } else {
            is_valid_margin
        };
        if !sides.iter().all(|(_, component)| validate(component)) {
            return false;
        }
        for (edge, component) in sides.iter() {
            self.block.set(&edge.longhand(prefix), component);
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.block.is_empty()
    }

    /// Serialized form written back to the `style` attribute.
    pub fn css_text(&self) -> String {
        self.block.serialize()
    }
}
