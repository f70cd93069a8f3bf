//! Dispatcher — the `log()` entry point.
//!
//! Every call runs the same linear pipeline:
//!
//! 1. resolve the level's rank (a bad level name is the caller's bug and
//!    fails before anything else happens);
//! 2. look up the category's threshold, falling back to `any`;
//! 3. reject if the rank exceeds the threshold; return without touching
//!    hooks, formatting or sinks;
//! 4. prefix the message with `"<category>: "`;
//! 5. run it through the [`MSG_HOOK`] transforms;
//! 6. fan it out to the sinks.
//!
//! A `Dispatcher` is `Send + Sync`; share it behind an `Arc` and call
//! `log()` from any thread without extra locking.

use crate::directive::Thresholds;
use crate::error::LevelError;
use crate::hook::{HookChain, HookMode, MSG_HOOK};
use crate::level::{self, Level};
use crate::sink::{Param, Record, SinkSet};

#[derive(Debug)]
pub struct Dispatcher {
    thresholds: Thresholds,
    hooks: HookChain,
    sinks: SinkSet,
}

impl Dispatcher {
    pub fn new(thresholds: Thresholds, sinks: SinkSet) -> Self {
        Self {
            thresholds,
            hooks: HookChain::new(),
            sinks,
        }
    }

    /// Whether a message at `level` for `category` would be admitted. Useful
    /// to skip building an expensive message.
    pub fn enabled(&self, category: &str, level: Level) -> bool {
        self.thresholds.admits(category, level)
    }

    pub fn log(&self, category: &str, level: Level, message: &str, params: &[Param]) {
        if !self.enabled(category, level) {
            return;
        }
        let message = self.hooks.apply(MSG_HOOK, format!("{category}: {message}"));
        self.sinks.write(&Record::new(level, &message, params));
    }

    /// [`log`](Self::log) with the level given by name.
    pub fn log_named(
        &self,
        category: &str,
        level: &str,
        message: &str,
        params: &[Param],
    ) -> Result<(), LevelError> {
        let level = level::lookup(level)?;
        self.log(category, level, message, params);
        Ok(())
    }

    pub fn register_hook<F>(&self, point: &str, mode: HookMode, transform: F)
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.hooks.register(point, mode, transform);
    }

    /// Wait until every sink has written out what it was given.
    pub fn flush(&self) {
        self.sinks.flush();
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn hooks(&self) -> &HookChain {
        &self.hooks
    }

    pub fn sinks(&self) -> &SinkSet {
        &self.sinks
    }

    /// Sink failures reported since construction.
    pub fn sink_failures(&self) -> u64 {
        self.sinks.failures().count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
