//! Error types for lumber-core.
//!
//! Configuration errors ([`LevelError`] inside a directive, [`ConfigError`],
//! [`SinkError::Open`]) are fatal at startup. Runtime sink failures never
//! leave the [`SinkSet`](crate::SinkSet) boundary; they are counted and
//! reported through `tracing` instead.

use std::io;
use std::path::PathBuf;

/// A level name that is not one of the seven fixed levels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("invalid logging level \"{name}\"")]
    InvalidLevel { name: String },
}

/// A hook mode string that names no known dispatch strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HookError {
    #[error("unknown hook mode \"{mode}\"")]
    UnknownMode { mode: String },
}

/// Logger configuration could not be loaded or validated.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// One `[category:]level` token of the level directives is invalid.
    #[error("invalid logging directive \"{token}\": {source}")]
    InvalidDirective {
        token: String,
        #[source]
        source: LevelError,
    },

    /// Layered configuration sources could not be read or deserialized.
    #[error("failed to load logger configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Failures at the sink boundary.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The log file (or its parent directory) could not be created.
    #[error("cannot open log file '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The background writer thread for a sink could not be started.
    #[error("cannot start writer for {sink} sink: {source}")]
    Spawn {
        sink: &'static str,
        #[source]
        source: io::Error,
    },

    /// Writing or flushing the underlying stream failed.
    #[error("{sink} sink write failed: {source}")]
    Write {
        sink: &'static str,
        #[source]
        source: io::Error,
    },

    /// The sink's writer has already shut down.
    #[error("{sink} sink is closed")]
    Closed { sink: &'static str },
}
