//! Load `.domaincount.toml` (CLI only). Lib does not use this; callers pass [`TallyOpts`](crate::TallyOpts).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::{Opts, OutputFormat};

#[derive(Debug, Default, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsSection {
    workers: Option<usize>,
    queue_capacity: Option<usize>,
    format: Option<OutputFormat>,
    verbose: Option<bool>,
}

/// Parse a settings file from its text.
pub fn parse_settings(s: &str) -> Result<SettingsFile> {
    toml::from_str(s).context("parse settings file")
}

/// Load an explicitly requested settings file. Missing or invalid file is an error.
pub fn load_settings(path: &Path) -> Result<SettingsFile> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read settings file {}", path.display()))?;
    parse_settings(&s).with_context(|| path.display().to_string())
}

/// Load the default settings file if present. Ok(None) if missing.
/// Caller decides what an unreadable default file means (the CLI warns and carries on).
pub fn load_default_settings(path: &Path) -> Result<Option<SettingsFile>> {
    if !path.is_file() {
        return Ok(None);
    }
    load_settings(path).map(Some)
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($section:expr, $opts:expr, $field:ident => $opts_field:ident) => {
        if let Some(v) = $section.$field {
            $opts.$opts_field = v;
        }
    };
}

/// Apply file settings to opts (only fields present in the file). Call before applying CLI.
pub fn apply_file_to_opts(file: &SettingsFile, opts: &mut Opts) {
    let section = &file.settings;
    if let Some(n) = section.workers {
        opts.num_workers = Some(n);
    }
    if let Some(n) = section.queue_capacity {
        opts.queue_capacity = Some(n);
    }
    apply_file_opt!(section, opts, format => format);
    apply_file_opt!(section, opts, verbose => verbose);
}
