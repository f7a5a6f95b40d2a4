//! Introspection client facade.

use std::path::Path;

use mesonic_types::{
    Benchmarks, BuildOptions, Dependencies, FILENAME_LIST_SINCE, MesonConfig, MesonVersion,
    ProjectInfo, Target, Targets, TestLogs, Tests,
};
use serde::de::DeserializeOwned;

use crate::cache::read_json_if_exists;
use crate::error::IntrospectError;
use crate::exec::{SystemRunner, ToolRunner};
use crate::logs::parse_test_log_lines;
use crate::notify::{LogNotifier, Notifier};

/// Notification shown when the test log cannot be read or parsed.
pub const TEST_LOG_READ_ERROR: &str = "Failed to read test log. Results will not be updated.";

/// Directory under the build directory where Meson writes introspection
/// caches after a configure step.
const INFO_DIR: &str = "meson-info";

/// Directory under the build directory where Meson writes test logs.
const LOGS_DIR: &str = "meson-logs";

const TEST_LOG_FILE: &str = "testlog.json";

/// Async client for `meson introspect` and friends.
///
/// Every call produces a fresh snapshot: the cache file is preferred, the
/// live tool is the fallback, and nothing is memoized between calls. Calls
/// are independent; repeated calls over an unchanged build directory return
/// equal results.
pub struct IntrospectClient<R = SystemRunner, N = LogNotifier> {
    config: MesonConfig,
    runner: R,
    notifier: N,
}

impl IntrospectClient {
    /// Client with the default runner and notifier, invoking the configured
    /// program (normally `meson`) from PATH.
    #[must_use]
    pub fn new(config: MesonConfig) -> Self {
        Self::with_parts(config, SystemRunner, LogNotifier)
    }
}

impl Default for IntrospectClient {
    fn default() -> Self {
        Self::new(MesonConfig::default())
    }
}

impl<R: ToolRunner, N: Notifier> IntrospectClient<R, N> {
    /// Client over explicit runner and notifier seams.
    pub fn with_parts(config: MesonConfig, runner: R, notifier: N) -> Self {
        Self {
            config,
            runner,
            notifier,
        }
    }

    /// Generic introspection call: cache file first, live tool second.
    ///
    /// An invalid cache file counts as absent and falls through to the tool;
    /// a subprocess failure or malformed subprocess output propagates.
    async fn introspect<T: DeserializeOwned>(
        &self,
        build_dir: &Path,
        cache_file: &str,
        switch: &str,
    ) -> Result<T, IntrospectError> {
        let cache_path = build_dir.join(INFO_DIR).join(cache_file);
        if let Some(parsed) = read_json_if_exists(&cache_path).await {
            tracing::debug!("introspection cache hit: {}", cache_path.display());
            return Ok(parsed);
        }

        tracing::debug!(
            "no cache for {switch}, invoking {} in {}",
            self.config.program(),
            build_dir.display()
        );
        let stdout = self
            .runner
            .run(
                self.config.program(),
                &["introspect", switch],
                Some(build_dir),
            )
            .await?;
        serde_json::from_str(&stdout).map_err(|source| IntrospectError::Json {
            origin: format!("{} introspect {switch}", self.config.program()),
            source,
        })
    }

    /// Build targets, with the pre-0.50 single-string `filename` shape
    /// normalized to a one-element list.
    pub async fn targets(&self, build_dir: &Path) -> Result<Targets, IntrospectError> {
        let targets = self
            .introspect(build_dir, "intro-targets.json", "--targets")
            .await?;
        let version = self.version().await?;
        Ok(normalize_targets(targets, version))
    }

    pub async fn build_options(&self, build_dir: &Path) -> Result<BuildOptions, IntrospectError> {
        self.introspect(build_dir, "intro-buildoptions.json", "--buildoptions")
            .await
    }

    pub async fn project_info(&self, build_dir: &Path) -> Result<ProjectInfo, IntrospectError> {
        self.introspect(build_dir, "intro-projectinfo.json", "--project-info")
            .await
    }

    pub async fn dependencies(&self, build_dir: &Path) -> Result<Dependencies, IntrospectError> {
        self.introspect(build_dir, "intro-dependencies.json", "--dependencies")
            .await
    }

    pub async fn tests(&self, build_dir: &Path) -> Result<Tests, IntrospectError> {
        self.introspect(build_dir, "intro-tests.json", "--tests")
            .await
    }

    pub async fn benchmarks(&self, build_dir: &Path) -> Result<Benchmarks, IntrospectError> {
        self.introspect(build_dir, "intro-benchmarks.json", "--benchmarks")
            .await
    }

    /// Tool version from `meson --version`. Always invokes the tool; Meson
    /// writes no cache for it.
    pub async fn version(&self) -> Result<MesonVersion, IntrospectError> {
        let stdout = self
            .runner
            .run(self.config.program(), &["--version"], None)
            .await?;
        Ok(stdout.trim().parse::<MesonVersion>()?)
    }

    /// Executed-test records from `meson-logs/testlog.json`.
    ///
    /// Best-effort: Meson does not expose this via introspection, and a
    /// missing log is routine (tests never run yet). Any read or parse
    /// failure is logged, surfaced as exactly one notification, and mapped
    /// to an empty list.
    pub async fn test_logs(&self, build_dir: &Path) -> TestLogs {
        let path = build_dir.join(LOGS_DIR).join(TEST_LOG_FILE);
        let parsed = match tokio::fs::read_to_string(&path).await {
            Ok(text) => parse_test_log_lines(&text).map_err(|err| err.to_string()),
            Err(err) => Err(err.to_string()),
        };
        match parsed {
            Ok(logs) => logs,
            Err(err) => {
                tracing::warn!("failed to read test log {}: {err}", path.display());
                self.notifier.show_error(TEST_LOG_READ_ERROR);
                Vec::new()
            }
        }
    }
}

/// Version-gated schema shim: identity at or above [`FILENAME_LIST_SINCE`],
/// the single-filename rewrite below it. Further version quirks belong here
/// rather than as conditionals scattered through the calls.
fn normalize_targets(targets: Targets, version: MesonVersion) -> Targets {
    if version >= FILENAME_LIST_SINCE {
        targets
    } else {
        targets.into_iter().map(Target::into_listed).collect()
    }
}
