//! Async introspection client for the Meson build system.
//!
//! Obtains structured build metadata (targets, build options, dependencies,
//! tests, benchmarks, project info, tool version, and test-run logs) either
//! from the JSON caches Meson writes under `<build-dir>/meson-info/` or,
//! failing that, by invoking `meson introspect` in the build directory.
//!
//! Two error policies coexist, visible in the signatures: introspection calls
//! and version queries return [`IntrospectError`] and propagate every
//! failure; [`IntrospectClient::test_logs`] degrades to an empty list plus a
//! single user notification, because an absent test log is routine.

pub mod error;
pub mod exec;
pub mod notify;

mod cache;
mod client;
mod logs;

pub use client::{IntrospectClient, TEST_LOG_READ_ERROR};
pub use error::IntrospectError;
pub use exec::{SystemRunner, ToolRunner};
pub use notify::{LogNotifier, Notifier};
