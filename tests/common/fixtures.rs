//! Directive strings and fixed instants shared across harnesses.

use chrono::{DateTime, TimeZone, Utc};

/// (directive string, expected `(category, rank)` pairs).
pub const VALID_DIRECTIVES: &[(&str, &[(&str, u8)])] = &[
    ("warning", &[("any", 2)]),
    ("db:debug,warning", &[("any", 2), ("db", 6)]),
    ("any:info,any:debug", &[("any", 6)]),
    ("fatal", &[("any", 0)]),
    ("net:trace", &[("any", 2), ("net", 5)]),
    ("db:error,db:notice,info", &[("any", 4), ("db", 3)]),
    (" db:debug , info ", &[("any", 4), ("db", 6)]),
    ("a.b/c:info", &[("any", 2), ("a.b/c", 4)]),
];

/// Directive strings that must abort configuration.
pub const INVALID_DIRECTIVES: &[&str] = &[
    "xyz:bogus",
    "db:debug,verbose",
    "",
    "WARNING",
    "db:",
    ":debug",
    "db:debug,,info",
];

/// A fixed instant for line-format snapshots.
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 9, 14, 3).unwrap()
}
