use serde::{Deserialize, Serialize};

/// Knobs of the tagged-text codec.
///
/// Serializable so hosts can keep codec settings next to the rest of their
/// application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Accept a leading `-` in numeric tokens. When disabled, a sign is not
    /// part of the number and `-0.5` reads back as `0.5`.
    #[serde(default = "default_signed_numbers")]
    pub signed_numbers: bool,
    /// Text placed between consecutive instances of a repeatable element.
    #[serde(default = "default_element_separator")]
    pub element_separator: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            signed_numbers: default_signed_numbers(),
            element_separator: default_element_separator(),
        }
    }
}

impl CodecConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_signed_numbers(mut self, signed_numbers: bool) -> Self {
        self.signed_numbers = signed_numbers;
        self
    }

    #[must_use]
    pub fn with_element_separator(mut self, separator: impl Into<String>) -> Self {
        self.element_separator = separator.into();
        self
    }
}

fn default_signed_numbers() -> bool {
    true
}

fn default_element_separator() -> String {
    "\n".to_owned()
}
