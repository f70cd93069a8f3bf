//! Logger — the explicit init/teardown pair around a [`Dispatcher`].
//!
//! [`Logger::init`] validates the configuration, opens the sinks and builds
//! the dispatcher; any failure aborts startup. Pass the logger (or a
//! [`Logger::handle`]) to whatever needs to log. [`Logger::shutdown`], or
//! dropping the logger, flushes every queued line.

use std::ops::Deref;
use std::sync::Arc;

use lumber_core::{ConfigError, Dispatcher, LoggerConfig, SinkError, SinkFailures, SinkSet, Thresholds};

/// Startup failed; nothing was logged.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

#[derive(Debug)]
pub struct Logger {
    dispatcher: Arc<Dispatcher>,
}

impl Logger {
    /// Directives are parsed before any sink is opened, so a bad level
    /// leaves no log file behind.
    pub fn init(config: &LoggerConfig) -> Result<Self, InitError> {
        let thresholds = config.validate()?;
        let sinks = lumber_sinks::build(config, Arc::new(SinkFailures::new()))?;
        tracing::debug!(
            logfile = %config.logfile.display(),
            console = config.console,
            loglevel = %config.loglevel,
            "logger initialised"
        );
        Ok(Self::from_parts(thresholds, sinks))
    }

    /// Logger over caller-supplied sinks.
    pub fn from_parts(thresholds: Thresholds, sinks: SinkSet) -> Self {
        Self {
            dispatcher: Arc::new(Dispatcher::new(thresholds, sinks)),
        }
    }

    /// Shared handle for other threads or components.
    pub fn handle(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.dispatcher)
    }

    /// Flush all sinks and release the logger. Writer threads are joined
    /// once the last handle is gone.
    pub fn shutdown(self) {
        drop(self);
    }
}

impl Deref for Logger {
    type Target = Dispatcher;

    fn deref(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.dispatcher.flush();
        let failures = self.dispatcher.sink_failures();
        if failures > 0 {
            tracing::warn!(failures, "log sinks reported write failures");
        }
    }
}
