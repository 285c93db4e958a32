use css_values_units::coerce_number;
use html::DOM;

/// Multiplier from unitless directive values to CSS pixels.
///
/// Documents publish a base font size on the root element (`data-font-size="100"` is a
/// factor of `1`), which lets the same directive argument grow or shrink with the page's
/// rem scaling. A missing or non-numeric attribute yields `NaN`, and every length derived
/// from it is later dropped as invalid CSS.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootScale(f64);

impl RootScale {
    pub const IDENTITY: Self = Self(1.0);

    pub const fn new(factor: f64) -> Self {
        Self(factor)
    }

    pub const fn factor(self) -> f64 {
        self.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Build from a raw attribute value; `None` means the attribute is absent.
    pub fn from_attribute(value: Option<&str>, divisor: f64) -> Self {
        Self(value.map_or(f64::NAN, coerce_number) / divisor)
    }

    /// Read `attribute` from the document element of `dom`.
    pub fn from_document(dom: &DOM, attribute: &str, divisor: f64) -> Self {
        let value = dom
            .document_element()
            .and_then(|element| dom.get_attribute(element, attribute));
        Self::from_attribute(value, divisor)
    }

    /// Convert a unitless directive value to pixels.
    pub fn px(self, value: f64) -> f64 {
        value * self.0
    }
}
