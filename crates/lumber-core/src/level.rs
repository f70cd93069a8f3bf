//! Level registry — the fixed table of severity levels.
//!
//! Seven levels, ranked 0 (most severe) to 6 (least severe). The table is a
//! compile-time [`phf`] map from the lowercase level name to its [`Level`];
//! nothing here can be mutated at runtime.
//!
//! | Rank | Name      | Color  |
//! |------|-----------|--------|
//! | 0    | `fatal`   | red    |
//! | 1    | `error`   | red    |
//! | 2    | `warning` | yellow |
//! | 3    | `notice`  | green  |
//! | 4    | `info`    | green  |
//! | 5    | `trace`   | blue   |
//! | 6    | `debug`   | blue   |

use std::str::FromStr;

use phf::phf_map;

use crate::error::LevelError;

/// Log severity level. The discriminant is the rank; `Ord` follows it, so
/// `Level::Fatal < Level::Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Fatal = 0,
    Error = 1,
    Warning = 2,
    Notice = 3,
    Info = 4,
    Trace = 5,
    Debug = 6,
}

/// Display color associated with a level. Only colorizing sinks use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

static REGISTRY: phf::Map<&'static str, Level> = phf_map! {
    "fatal"   => Level::Fatal,
    "error"   => Level::Error,
    "warning" => Level::Warning,
    "notice"  => Level::Notice,
    "info"    => Level::Info,
    "trace"   => Level::Trace,
    "debug"   => Level::Debug,
};

impl Level {
    /// Every level in rank order, most severe first.
    pub const ALL: [Level; 7] = [
        Level::Fatal,
        Level::Error,
        Level::Warning,
        Level::Notice,
        Level::Info,
        Level::Trace,
        Level::Debug,
    ];

    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Notice => "notice",
            Level::Info => "info",
            Level::Trace => "trace",
            Level::Debug => "debug",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Level::Fatal | Level::Error => Color::Red,
            Level::Warning => Color::Yellow,
            Level::Notice | Level::Info => Color::Green,
            Level::Trace | Level::Debug => Color::Blue,
        }
    }

    /// Inverse of [`Level::rank`]; `None` for ranks above 6.
    pub fn from_rank(rank: u8) -> Option<Level> {
        Level::ALL.get(usize::from(rank)).copied()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        lookup(name)
    }
}

/// Resolve a level name. Names are case-sensitive.
pub fn lookup(name: &str) -> Result<Level, LevelError> {
    REGISTRY
        .get(name)
        .copied()
        .ok_or_else(|| LevelError::InvalidLevel {
            name: name.to_string(),
        })
}

/// Rank of the named level.
pub fn rank(name: &str) -> Result<u8, LevelError> {
    lookup(name).map(Level::rank)
}

/// Display color of the named level.
pub fn color(name: &str) -> Result<Color, LevelError> {
    lookup(name).map(Level::color)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
