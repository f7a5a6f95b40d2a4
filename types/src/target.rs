//! Build target records from `meson introspect --targets`.

use serde::{Deserialize, Serialize};

use crate::version::MesonVersion;

/// First Meson release whose `--targets` output always reports `filename` as
/// a list. Older releases emit a bare string when a target has exactly one
/// output file.
pub const FILENAME_LIST_SINCE: MesonVersion = MesonVersion::new(0, 50, 0);

/// Output filenames of a target, in both wire shapes Meson has used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Filenames {
    /// Pre-0.50 shape: a single filename string.
    One(String),
    /// Modern shape: a list of filenames.
    Many(Vec<String>),
}

impl Filenames {
    /// Filenames as a slice regardless of wire shape.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        }
    }

    /// Whether this still carries the pre-0.50 single-string shape.
    #[must_use]
    pub fn is_single(&self) -> bool {
        matches!(self, Self::One(_))
    }

    /// Rewrites the single-string shape into a one-element list; the list
    /// shape is returned unchanged.
    #[must_use]
    pub fn into_listed(self) -> Self {
        match self {
            Self::One(name) => Self::Many(vec![name]),
            many @ Self::Many(_) => many,
        }
    }
}

/// One build artifact from `--targets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub id: String,
    #[serde(rename = "type")]
    pub target_type: String,
    #[serde(default)]
    pub defined_in: Option<String>,
    pub filename: Filenames,
    #[serde(default)]
    pub build_by_default: bool,
    #[serde(default)]
    pub installed: bool,
    #[serde(default)]
    pub subproject: Option<String>,
}

impl Target {
    /// Applies the pre-0.50 schema shim to this target's `filename`.
    #[must_use]
    pub fn into_listed(mut self) -> Self {
        self.filename = self.filename.into_listed();
        self
    }
}

pub type Targets = Vec<Target>;
