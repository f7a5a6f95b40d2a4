//! Executed-test records from `meson-logs/testlog.json`.

use serde::{Deserialize, Serialize};

/// One JSON object per executed test, as written by `meson test`.
///
/// Every field defaults: the log format has drifted across Meson releases and
/// a partially-recognized entry is still worth surfacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TestLog {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub returncode: Option<i32>,
    #[serde(default)]
    pub starttime: Option<f64>,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub command: Vec<String>,
}

pub type TestLogs = Vec<TestLog>;
