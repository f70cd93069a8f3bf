//! Directive parser — turns `"db:debug,warning"` into per-category thresholds.
//!
//! # Grammar
//!
//! ```text
//! input     := directive (',' directive)*
//! directive := [category ':'] levelName
//! ```
//!
//! Whitespace around each token is ignored. A token without a category
//! prefix applies to the reserved `any` category, which every lookup falls
//! back to. Directives are applied left to right, so a later directive for
//! the same category (including `any`) overrides an earlier one.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::level::{self, Level};

/// Reserved fallback category.
pub const ANY: &str = "any";

/// Threshold of `any` before any directive is applied.
pub const DEFAULT_THRESHOLD: Level = Level::Warning;

/// One parsed `[category:]level` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub category: String,
    pub level: Level,
}

impl Directive {
    /// Parse a single token. The split is on the first colon, and only counts
    /// when both sides are non-empty; otherwise the whole token is taken as a
    /// level name.
    pub fn parse(token: &str) -> Result<Self, ConfigError> {
        let token = token.trim();
        let (category, name) = match token.split_once(':') {
            Some((category, name)) if !category.is_empty() && !name.is_empty() => {
                (category, name)
            }
            _ => (ANY, token),
        };
        let level = level::lookup(name).map_err(|source| ConfigError::InvalidDirective {
            token: token.to_string(),
            source,
        })?;
        Ok(Self {
            category: category.to_string(),
            level,
        })
    }
}

/// Category → maximum accepted rank.
///
/// Always holds an `any` entry. Built once at configuration time and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thresholds {
    categories: HashMap<String, u8>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            categories: HashMap::from([(ANY.to_string(), DEFAULT_THRESHOLD.rank())]),
        }
    }
}

impl Thresholds {
    /// Parse a full directive string. Fails on the first invalid token and
    /// returns nothing in that case; there is no partially applied map.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let mut thresholds = Self::default();
        for token in input.split(',') {
            let directive = Directive::parse(token)?;
            thresholds.apply(directive);
        }
        Ok(thresholds)
    }

    fn apply(&mut self, directive: Directive) {
        self.categories
            .insert(directive.category, directive.level.rank());
    }

    /// Explicitly configured threshold for `category`, without fallback.
    pub fn get(&self, category: &str) -> Option<u8> {
        self.categories.get(category).copied()
    }

    /// Threshold that applies to `category`: its own entry, else `any`.
    pub fn effective(&self, category: &str) -> u8 {
        self.categories
            .get(category)
            .or_else(|| self.categories.get(ANY))
            .copied()
            .unwrap_or(DEFAULT_THRESHOLD.rank())
    }

    /// Admission rule: lower rank is more severe, so a message passes when
    /// its rank does not exceed the category's threshold.
    pub fn admits(&self, category: &str, level: Level) -> bool {
        level.rank() <= self.effective(category)
    }

    pub fn as_map(&self) -> &HashMap<String, u8> {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl FromStr for Thresholds {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LevelError;
    use pretty_assertions::assert_eq;

    fn map(pairs: &[(&str, u8)]) -> HashMap<String, u8> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn default_is_any_warning() {
        assert_eq!(Thresholds::default().as_map(), &map(&[("any", 2)]));
    }

    #[test]
    fn bare_level_sets_any() {
        let t = Thresholds::parse("warning").unwrap();
        assert_eq!(t.as_map(), &map(&[("any", 2)]));
    }

    #[test]
    fn category_and_fallback() {
        let t = Thresholds::parse("db:debug,warning").unwrap();
        assert_eq!(t.as_map(), &map(&[("any", 2), ("db", 6)]));
    }

    #[test]
    fn last_directive_wins() {
        let t = Thresholds::parse("any:info,any:debug").unwrap();
        assert_eq!(t.as_map(), &map(&[("any", 6)]));
    }

    #[test]
    fn whitespace_around_tokens_is_ignored() {
        let t = Thresholds::parse(" db:debug , info ").unwrap();
        assert_eq!(t.as_map(), &map(&[("any", 4), ("db", 6)]));
    }

    #[test]
    fn split_is_on_first_colon() {
        let err = Directive::parse("a:b:debug").unwrap_err();
        match err {
            ConfigError::InvalidDirective { token, source } => {
                assert_eq!(token, "a:b:debug");
                assert_eq!(
                    source,
                    LevelError::InvalidLevel {
                        name: "b:debug".to_string()
                    }
                );
            }
            other => panic!("expected InvalidDirective, got {other:?}"),
        }
    }

    #[test]
    fn empty_category_is_not_a_prefix() {
        assert!(matches!(
            Directive::parse(":debug"),
            Err(ConfigError::InvalidDirective { .. })
        ));
    }

    #[test]
    fn invalid_level_names_the_token() {
        let err = Thresholds::parse("db:debug,xyz:bogus").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid logging directive \"xyz:bogus\": invalid logging level \"bogus\""
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(Thresholds::parse("").is_err());
        assert!(Thresholds::parse("  ").is_err());
    }

    #[test]
    fn effective_falls_back_to_any() {
        let t = Thresholds::parse("db:debug,error").unwrap();
        assert_eq!(t.effective("db"), 6);
        assert_eq!(t.effective("net"), 1);
        assert_eq!(t.get("net"), None);
        assert!(t.admits("db", Level::Debug));
        assert!(!t.admits("net", Level::Warning));
        assert!(t.admits("net", Level::Fatal));
    }
}
