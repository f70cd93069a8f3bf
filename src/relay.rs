//! Stdin relay — turns `CATEGORY LEVEL MESSAGE...` lines into `log()` calls.

use std::io::{self, BufRead};

use lumber_core::{Dispatcher, Param};

/// Outcome of a relay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelayStats {
    /// Lines handed to the dispatcher (admitted or not).
    pub relayed: usize,
    /// Malformed lines: fewer than three fields or an unknown level.
    pub skipped: usize,
}

/// Split a line into category, level and message. Runs of whitespace
/// between the first two fields are allowed; the message keeps its own.
pub fn parse_line(line: &str) -> Option<(&str, &str, &str)> {
    let (category, rest) = line.trim().split_once(char::is_whitespace)?;
    let (level, message) = rest.trim_start().split_once(char::is_whitespace)?;
    let message = message.trim_start();
    if message.is_empty() {
        return None;
    }
    Some((category, level, message))
}

/// Relay every line of `input`. Blank lines are ignored; malformed lines
/// are reported through `tracing` and counted.
pub fn relay<R: BufRead>(dispatcher: &Dispatcher, input: R) -> io::Result<RelayStats> {
    let mut stats = RelayStats::default();
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let lineno = index + 1;
        let Some((category, level, message)) = parse_line(&line) else {
            tracing::warn!(lineno, "expected `CATEGORY LEVEL MESSAGE`, skipping");
            stats.skipped += 1;
            continue;
        };
        let params = [Param::new("line", lineno)];
        match dispatcher.log_named(category, level, message, &params) {
            Ok(()) => stats.relayed += 1,
            Err(error) => {
                tracing::warn!(lineno, %error, "skipping line");
                stats.skipped += 1;
            }
        }
    }
    Ok(stats)
}

/// `logger:msg` transform replacing every occurrence of `word` with `***`.
pub fn redact(word: String) -> impl Fn(String) -> String + Send + Sync + 'static {
    move |message| {
        if word.is_empty() {
            message
        } else {
            message.replace(&word, "***")
        }
    }
}
