//! Introspection data types for the Meson build system.
//!
//! Plain records mirroring the schemas Meson emits from `meson introspect`
//! and its `meson-info/` cache files, plus version parsing. This crate has
//! no IO and no async; everything here can be used from any layer.

pub mod config;
pub mod deps;
pub mod logs;
pub mod options;
pub mod project;
pub mod target;
pub mod version;

pub use config::{ConfigError, MesonConfig};
pub use deps::{Dependencies, Dependency};
pub use logs::{TestLog, TestLogs};
pub use options::{BuildOption, BuildOptions};
pub use project::{ProjectInfo, SubprojectInfo};
pub use target::{FILENAME_LIST_SINCE, Filenames, Target, Targets};
pub use tests::{Benchmarks, TestCase, Tests};
pub use version::{MesonVersion, VersionParseError};
