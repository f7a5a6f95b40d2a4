//! Meson tool version parsing and ordering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version of the Meson tool, as reported by `meson --version`.
///
/// Ordering is lexicographic over `(major, minor, patch)`, which is what
/// schema-compatibility gates compare against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MesonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// `meson --version` produced something other than a leading
/// `MAJOR.MINOR.PATCH` pattern. This signals an incompatible or broken tool
/// installation; there is no recovery.
#[derive(Debug, Clone, Error)]
#[error("meson version doesn't match expected MAJOR.MINOR.PATCH output: {raw}")]
pub struct VersionParseError {
    raw: String,
}

impl VersionParseError {
    /// The raw trimmed output that failed to parse.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl MesonVersion {
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for MesonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for MesonVersion {
    type Err = VersionParseError;

    /// Parses the leading `MAJOR.MINOR.PATCH` numeric pattern from trimmed
    /// input. Text after the patch digits is ignored, so `"1.3.0rc1"` parses
    /// as `1.3.0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        parse_leading_triple(trimmed).ok_or_else(|| VersionParseError {
            raw: trimmed.to_string(),
        })
    }
}

fn parse_decimal(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_leading_triple(s: &str) -> Option<MesonVersion> {
    let mut parts = s.splitn(3, '.');
    let major = parse_decimal(parts.next()?)?;
    let minor = parse_decimal(parts.next()?)?;
    let rest = parts.next()?;
    let digit_end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(rest.len(), |(i, _)| i);
    let patch = parse_decimal(&rest[..digit_end])?;
    Some(MesonVersion::new(major, minor, patch))
}
