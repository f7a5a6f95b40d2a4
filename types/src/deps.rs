//! Resolved external dependencies from `meson introspect --dependencies`.

use serde::{Deserialize, Serialize};

/// One resolved external dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub compile_args: Vec<String>,
    #[serde(default)]
    pub link_args: Vec<String>,
}

pub type Dependencies = Vec<Dependency>;
