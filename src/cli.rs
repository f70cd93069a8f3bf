//! Command-line options for the `lumber` binary.
//!
//! The three logger options (`--console`, `--logfile/-l`, `--loglevel/-L`)
//! override whatever the config file and `LUMBER_*` environment supplied.

use std::path::PathBuf;

use clap::Parser;
use lumber_core::{ConfigError, LoggerConfig};

#[derive(Debug, Parser)]
#[command(
    name = "lumber",
    about = "Relay `CATEGORY LEVEL MESSAGE` lines from stdin into a category-filtered log"
)]
pub struct Cli {
    /// Display logfile also on console.
    #[arg(long)]
    pub console: bool,

    /// Path to logfile [default: ./<program>.log].
    #[arg(short = 'l', long, value_name = "PATH")]
    pub logfile: Option<PathBuf>,

    /// Logging (category and) level.
    #[arg(short = 'L', long, value_name = "[CATEGORY:]LEVEL,...")]
    pub loglevel: Option<String>,

    /// TOML file with logger settings.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Replace WORD with `***` in every logged message. Repeatable.
    #[arg(long, value_name = "WORD")]
    pub redact: Vec<String>,
}

impl Cli {
    /// Layer the flags on top of the file/environment configuration.
    pub fn resolve(&self, program: &str) -> Result<LoggerConfig, ConfigError> {
        let mut config = LoggerConfig::load(&default_logfile(program), self.config.as_deref())?;
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut LoggerConfig) {
        if self.console {
            config.console = true;
        }
        if let Some(logfile) = &self.logfile {
            config.logfile = logfile.clone();
        }
        if let Some(loglevel) = &self.loglevel {
            config.loglevel = loglevel.clone();
        }
    }
}

/// `<cwd>/<program>.log`.
pub fn default_logfile(program: &str) -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(format!("{program}.log"))
}
