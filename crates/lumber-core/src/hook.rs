//! Hook chain — ordered message transforms keyed by hook point.
//!
//! The dispatcher runs every admitted message through the [`MSG_HOOK`] point
//! before handing it to the sinks. Transforms for a point run in
//! registration order, each receiving the previous one's output.
//!
//! Registration may happen at any time. Each point's list is an
//! `Arc<Vec<_>>` replaced copy-on-write under a `RwLock`, so `apply` only
//! holds the lock long enough to clone the `Arc` and never while user
//! transforms run.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::HookError;

/// Hook point the dispatcher applies to every admitted message.
pub const MSG_HOOK: &str = "logger:msg";

/// How a registered transform participates in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum HookMode {
    /// Feed the message through and pass the result on.
    #[default]
    Pass,
}

impl FromStr for HookMode {
    type Err = HookError;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "pass" => Ok(HookMode::Pass),
            other => Err(HookError::UnknownMode {
                mode: other.to_string(),
            }),
        }
    }
}

type Transform = Arc<dyn Fn(String) -> String + Send + Sync>;

#[derive(Clone)]
struct HookEntry {
    mode: HookMode,
    transform: Transform,
}

/// Registry of transforms per hook point.
#[derive(Default)]
pub struct HookChain {
    points: RwLock<HashMap<String, Arc<Vec<HookEntry>>>>,
}

impl HookChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `transform` to the list for `point`. Registering the same
    /// transform twice makes it run twice.
    pub fn register<F>(&self, point: &str, mode: HookMode, transform: F)
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        let entry = HookEntry {
            mode,
            transform: Arc::new(transform),
        };
        let mut points = self.points.write().unwrap_or_else(PoisonError::into_inner);
        Arc::make_mut(points.entry(point.to_string()).or_default()).push(entry);
    }

    /// Thread `message` through every transform registered for `point`.
    /// Returns it unchanged when nothing is registered.
    pub fn apply(&self, point: &str, message: String) -> String {
        let Some(entries) = self.snapshot(point) else {
            return message;
        };
        entries.iter().fold(message, |message, entry| match entry.mode {
            HookMode::Pass => (entry.transform)(message),
        })
    }

    /// Number of registrations for `point`.
    pub fn len(&self, point: &str) -> usize {
        self.snapshot(point).map_or(0, |entries| entries.len())
    }

    pub fn is_empty(&self, point: &str) -> bool {
        self.len(point) == 0
    }

    fn snapshot(&self, point: &str) -> Option<Arc<Vec<HookEntry>>> {
        self.points
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(point)
            .cloned()
    }
}

impl std::fmt::Debug for HookChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let points = self.points.read().unwrap_or_else(PoisonError::into_inner);
        let mut map = f.debug_map();
        for (point, entries) in points.iter() {
            map.entry(point, &entries.len());
        }
        map.finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
