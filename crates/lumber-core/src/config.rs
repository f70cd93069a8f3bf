//! Logger configuration record.
//!
//! [`LoggerConfig::load`] layers, lowest priority first: the embedded
//! defaults, an optional TOML file, then `LUMBER_*` environment variables.
//! The logfile default is supplied by the host because it depends on the
//! host's base directory and program name. [`LoggerConfig::defaults`]
//! returns the same defaults without reading any source.
//!
//! ```toml
//! console  = false
//! logfile  = "/var/log/app.log"
//! loglevel = "db:debug,warning"
//! max_size = 1073741824
//! ```

use std::path::{Path, PathBuf};

use config::{Environment, File, FileFormat};
use serde::Deserialize;

use crate::directive::Thresholds;
use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
console  = false
loglevel = "warning"
max_size = 1073741824
"#;

/// Advisory ceiling for the log file: 1 GiB.
pub const DEFAULT_MAX_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable prefix, e.g. `LUMBER_LOGLEVEL`.
pub const ENV_PREFIX: &str = "LUMBER";

// ---------------------------------------------------------------------------
// Public config type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggerConfig {
    /// Mirror the logfile on stdout, colorized.
    #[serde(default)]
    pub console: bool,
    /// Path of the mandatory log file.
    pub logfile: PathBuf,
    /// Level directives, `[CATEGORY:]LEVEL,...`.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
    /// Advisory size ceiling in bytes for the log file.
    #[serde(default = "default_max_size")]
    pub max_size: u64,
}

fn default_loglevel() -> String { "warning".to_string() }
fn default_max_size() -> u64 { DEFAULT_MAX_SIZE }

impl LoggerConfig {
    /// Built-in defaults with the host-derived logfile path.
    pub fn defaults(logfile: impl Into<PathBuf>) -> Self {
        Self {
            console: false,
            logfile: logfile.into(),
            loglevel: default_loglevel(),
            max_size: default_max_size(),
        }
    }

    /// Load defaults, then `file` (if given, it must exist), then the
    /// environment.
    pub fn load(default_logfile: &Path, file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .set_default("logfile", default_logfile.to_string_lossy().into_owned())?;
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Parse the level directives. Configuration is invalid if this fails.
    pub fn validate(&self) -> Result<Thresholds, ConfigError> {
        Thresholds::parse(&self.loglevel)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
