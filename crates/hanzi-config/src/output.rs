use std::env;

use serde::{Deserialize, Serialize};

fn default_indent() -> usize {
    2
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Spaces per JSON indentation level
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Read settings through `var`; missing or invalid values use defaults
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let indent = var("HANZI_JSON_INDENT")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|indent| *indent > 0)
            .unwrap_or_else(default_indent);

        Self { indent }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
        }
    }
}
