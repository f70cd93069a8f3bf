//! lumber-core — category-scoped, leveled log dispatch.
//!
//! This crate holds everything between a `log()` call and the sinks: the
//! fixed level table, the directive parser that builds per-category
//! thresholds, the ordered hook chain, the sink abstraction and the
//! dispatcher that ties them together. Concrete file and console sinks live
//! in `lumber-sinks`.
//!
//! # Pipeline
//!
//! ```text
//! log(category, level, msg) ──► admit? ──► "category: msg" ──► HookChain ──► SinkSet
//!                                  │
//!                                  └── rejected: return, no further work
//! ```

pub mod config;
pub mod directive;
pub mod dispatcher;
pub mod error;
pub mod format;
pub mod hook;
pub mod level;
pub mod sink;

pub use config::LoggerConfig;
pub use directive::{Directive, Thresholds};
pub use dispatcher::Dispatcher;
pub use error::{ConfigError, HookError, LevelError, SinkError};
pub use hook::{HookChain, HookMode, MSG_HOOK};
pub use level::{Color, Level};
pub use sink::{Param, Record, Sink, SinkFailures, SinkSet};
