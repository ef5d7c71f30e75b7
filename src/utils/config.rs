//! Application configuration constants.
//! Tuning and thresholds in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    config_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                config_filename: format!(".{pkg}.toml"),
            }
        })
    }

    /// Config file looked up in the current directory when `--config` is not given.
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }
}

// ---- Pipeline ----

/// Pipeline shape defaults. Overridden by [`TallyOpts`](crate::TallyOpts), the config file or CLI.
pub struct PipelineDefaults;

impl PipelineDefaults {
    /// Worker threads validating rows.
    pub const WORKERS: usize = 8;
    /// Capacity of the row channel and of the domain channel (each).
    pub const QUEUE_CAPACITY: usize = 1000;
    /// Column holding the email address (zero-based).
    pub const EMAIL_FIELD_INDEX: usize = 2;
}

// ---- Progress ----

/// Progress counter tuning.
pub struct ProgressConsts;

impl ProgressConsts {
    /// Aggregator updates the progress counter once per this many domains (reduce lock contention).
    pub const PROGRESS_UPDATE_BATCH_SIZE: usize = 500;
}
