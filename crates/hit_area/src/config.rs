use anyhow::{Context as _, Error};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Runtime configuration for the `trigger-area` directive.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HitAreaConfig {
    /// Directive name; the attribute form is `v-<directive>:<arg>`.
    pub directive: String,
    /// Separator between the numeric tokens of the argument.
    pub delimiter: char,
    /// Attribute on the document element holding the scale numerator.
    pub root_scale_attribute: String,
    /// The root attribute is divided by this to get the scale factor.
    pub scale_divisor: f64,
    /// Tag name of the injected overlay element.
    pub overlay_tag: String,
    /// Reject malformed arguments instead of letting them degrade into ignored styles.
    pub strict: bool,
}

impl Default for HitAreaConfig {
    fn default() -> Self {
        Self {
            directive: "trigger-area".to_owned(),
            delimiter: '*',
            root_scale_attribute: "data-font-size".to_owned(),
            scale_divisor: 100.0,
            overlay_tag: "span".to_owned(),
            strict: false,
        }
    }
}

impl HitAreaConfig {
    /// Parse a JSON configuration document.
    ///
    /// # Errors
    /// Fails on malformed JSON, wrong value types or unknown keys.
    pub fn from_json_str(text: &str) -> Result<Self, Error> {
        serde_json::from_str(text).context("Invalid hit area configuration")
    }

    /// Read and parse a JSON configuration file.
    ///
    /// # Errors
    /// Fails when the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Attribute-name prefix that marks a host, e.g. `v-trigger-area:`.
    ///
    /// Lowercased, since the DOM stores attribute names lowercase.
    pub fn attribute_prefix(&self) -> String {
        format!("v-{}:", self.directive.to_ascii_lowercase())
    }
}
