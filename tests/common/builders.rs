//! Test builders — dispatchers wired to spy sinks.
//!
//! These are for readability in tests; they panic on invalid input rather
//! than returning `Result`.

use std::sync::Arc;

use lumber_core::{Dispatcher, SinkFailures, SinkSet, Thresholds};

use super::spies::{Captive, FailingSink, SpyLog, SpySink};

/// Spy handles for the sinks a [`DispatcherBuilder`] created.
pub struct Spies {
    pub file: Arc<SpyLog>,
    pub console: Option<Arc<SpyLog>>,
    pub failures: Arc<SinkFailures>,
    /// What the failure channel rescued in place of stderr.
    pub rescued: Captive,
}

/// Fluent builder mirroring the real sink layout: a mandatory "file" spy
/// and an optional "console" spy.
///
/// ```rust
/// let (dispatcher, spies) = DispatcherBuilder::new("db:debug,warning")
///     .console(true)
///     .build();
/// ```
pub struct DispatcherBuilder {
    directives: String,
    console: bool,
    failing: bool,
}

impl DispatcherBuilder {
    pub fn new(directives: impl Into<String>) -> Self {
        Self {
            directives: directives.into(),
            console: false,
            failing: false,
        }
    }

    pub fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Put a sink that always fails in front of the file spy.
    pub fn failing_sink(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn build(self) -> (Dispatcher, Spies) {
        let thresholds = Thresholds::parse(&self.directives).expect("test directives must parse");
        let rescued = Captive::default();
        let failures = Arc::new(SinkFailures::with_fallback(Box::new(rescued.clone())));
        let mut sinks = SinkSet::new(Arc::clone(&failures));
        if self.failing {
            sinks.push(Box::new(FailingSink));
        }
        let (file, file_log) = SpySink::new("file");
        sinks.push(Box::new(file));
        let console = self.console.then(|| {
            let (console, console_log) = SpySink::new("console");
            sinks.push(Box::new(console));
            console_log
        });
        (
            Dispatcher::new(thresholds, sinks),
            Spies {
                file: file_log,
                console,
                failures,
                rescued,
            },
        )
    }
}

/// Dispatcher with only the file spy.
pub fn dispatcher(directives: &str) -> (Dispatcher, Arc<SpyLog>) {
    let (dispatcher, spies) = DispatcherBuilder::new(directives).build();
    (dispatcher, spies.file)
}
