//! Configurable build settings from `meson introspect --buildoptions`.

use serde::{Deserialize, Serialize};

/// One configurable build setting.
///
/// `value` stays an arbitrary JSON value: Meson reports strings, booleans,
/// integers, and string arrays depending on the option type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildOption {
    pub name: String,
    #[serde(rename = "type")]
    pub option_type: String,
    pub value: serde_json::Value,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub machine: Option<String>,
    #[serde(default)]
    pub choices: Option<Vec<String>>,
}

pub type BuildOptions = Vec<BuildOption>;
