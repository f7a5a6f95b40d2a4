//! Project metadata from `meson introspect --project-info`.

use serde::{Deserialize, Serialize};

/// One resolved subproject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubprojectInfo {
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub descriptive_name: String,
}

/// Project metadata: name, version, subprojects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub descriptive_name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub subproject_dir: Option<String>,
    #[serde(default)]
    pub subprojects: Vec<SubprojectInfo>,
}
