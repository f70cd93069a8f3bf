//! Domain-specific assertion macros for lumber harnesses.
//!
//! These wrap `pretty_assertions` and say which part of the pipeline was
//! wrong when they fail.

/// Assert that a `Thresholds` holds exactly the given category → rank map.
///
/// ```rust
/// assert_thresholds!(t, { "any" => 2, "db" => 6 });
/// ```
#[macro_export]
macro_rules! assert_thresholds {
    ($thresholds:expr, { $($category:expr => $rank:expr),* $(,)? }) => {{
        let thresholds: &lumber_core::Thresholds = &$thresholds;
        let expected: std::collections::HashMap<String, u8> =
            [$(($category.to_string(), $rank)),*].into_iter().collect();
        pretty_assertions::assert_eq!(
            thresholds.as_map(),
            &expected,
            "threshold map differs from expected"
        );
    }};
}

/// Assert that a spy sink saw exactly `n` writes.
#[macro_export]
macro_rules! assert_writes {
    ($spy:expr, $n:expr) => {{
        let spy: &$crate::common::SpyLog = &$spy;
        let expected: usize = $n;
        if spy.writes() != expected {
            panic!(
                "assert_writes! failed:\n  expected: {} writes\n  actual:   {}\n  messages: {:?}",
                expected,
                spy.writes(),
                spy.messages()
            );
        }
    }};
}

/// Assert that a spy sink received nothing at all.
#[macro_export]
macro_rules! assert_no_writes {
    ($spy:expr) => {
        $crate::assert_writes!($spy, 0)
    };
}
