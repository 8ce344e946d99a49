//! Character Counter
//!
//! Remaining-character hint shown under a length-limited form field.

use crate::config::CounterConfig;

pub const MUTED_CLASS: &str = "text-muted";
pub const DANGER_CLASS: &str = "text-danger";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharCounter {
    field: String,
    limit: u32,
}

/// Result of evaluating a field's current value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    pub remaining: i64,
}

impl CharCounter {
    pub fn new(field: impl Into<String>, limit: u32) -> Self {
        Self {
            field: field.into(),
            limit,
        }
    }

    pub fn field_id(&self) -> &str {
        &self.field
    }

    pub fn counter_id(&self) -> String {
        format!("{}-count", self.field)
    }

    /// Length is counted in UTF-16 units, like the input's `maxlength`
    pub fn evaluate(&self, value: &str) -> CounterState {
        let used = value.encode_utf16().count() as i64;
        CounterState {
            remaining: i64::from(self.limit) - used,
        }
    }
}

impl From<&CounterConfig> for CharCounter {
    fn from(config: &CounterConfig) -> Self {
        Self::new(config.field.clone(), config.limit)
    }
}

impl CounterState {
    pub fn over_limit(&self) -> bool {
        self.remaining < 0
    }

    pub fn label(&self) -> String {
        format!("{} characters left", self.remaining)
    }

    /// (class to add, class to remove)
    pub fn classes(&self) -> (&'static str, &'static str) {
        if self.over_limit() {
            (DANGER_CLASS, MUTED_CLASS)
        } else {
            (MUTED_CLASS, DANGER_CLASS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_limit() {
        let counter = CharCounter::new("name", 50);
        let state = counter.evaluate(&"x".repeat(53));
        assert_eq!(state.label(), "-3 characters left");
        assert!(state.over_limit());
        assert_eq!(state.classes(), (DANGER_CLASS, MUTED_CLASS));
    }

    #[test]
    fn test_exactly_at_limit() {
        let counter = CharCounter::new("name", 50);
        let state = counter.evaluate(&"x".repeat(50));
        assert_eq!(state.remaining, 0);
        assert_eq!(state.label(), "0 characters left");
        assert_eq!(state.classes(), (MUTED_CLASS, DANGER_CLASS));
    }

    #[test]
    fn test_empty_field() {
        let counter = CharCounter::from(&CounterConfig::new("description", 80));
        assert_eq!(counter.evaluate("").label(), "80 characters left");
        assert_eq!(counter.counter_id(), "description-count");
    }

    #[test]
    fn test_counts_utf16_units() {
        let counter = CharCounter::new("name", 5);
        // one astral-plane emoji is two UTF-16 units
        assert_eq!(counter.evaluate("ab\u{1F600}").remaining, 1);
    }
}
