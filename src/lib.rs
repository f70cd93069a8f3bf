//! lumber — category-scoped log relay.
//!
//! Host side of the dispatcher: command-line options, layered configuration,
//! the [`Logger`] init/teardown pair, and the stdin relay used by the
//! `lumber` binary. The dispatch logic itself lives in `lumber-core`; the
//! sinks live in `lumber-sinks`.
//!
//! # Architecture
//!
//! ```text
//! Cli ──► LoggerConfig ──► Logger::init ──► Dispatcher ──► SinkSet (file [+ console])
//!                                              ▲
//!                         stdin ──► relay ─────┘
//! ```

pub mod cli;
pub mod logger;
pub mod relay;

pub use cli::Cli;
pub use logger::{InitError, Logger};
pub use lumber_core::{HookMode, Level, LoggerConfig, Param, MSG_HOOK};
