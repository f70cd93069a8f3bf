//! lumber-sinks — output adapters for lumber.
//!
//! Each sink renders admitted records into lines and hands them to its own
//! background writer thread, so `log()` never waits on I/O. [`build`]
//! assembles the [`SinkSet`] a [`LoggerConfig`] asks for: the file sink
//! always, the console sink only when `console` is set.

pub mod console;
pub mod file;
pub mod writer;

use std::sync::Arc;

use lumber_core::{LoggerConfig, SinkError, SinkFailures, SinkSet};

pub use console::ConsoleSink;
pub use file::FileSink;

/// Build the sinks for `config`. Failing to open the log file is fatal.
pub fn build(config: &LoggerConfig, failures: Arc<SinkFailures>) -> Result<SinkSet, SinkError> {
    let mut sinks = SinkSet::new(Arc::clone(&failures));
    sinks.push(Box::new(FileSink::open(
        &config.logfile,
        config.max_size,
        Arc::clone(&failures),
    )?));
    if config.console {
        sinks.push(Box::new(ConsoleSink::stdout(failures)?));
    }
    Ok(sinks)
}
