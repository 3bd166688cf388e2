use crate::style::Style;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anchored patterns, one per style. The separator in snake/kebab must
    // sit between nonempty lowercase/digit segments.
    static ref SNAKE: Regex = Regex::new(r"^[a-z0-9]+(?:_[a-z0-9]+)+$").unwrap();
    static ref KEBAB: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)+$").unwrap();
    static ref UPPER_SNAKE: Regex = Regex::new(r"^[A-Z0-9_]*_[A-Z0-9_]*$").unwrap();
    static ref CAMEL: Regex = Regex::new(r"^[a-z][a-z0-9]*[A-Z][A-Za-z0-9]*$").unwrap();
    static ref PASCAL: Regex = Regex::new(r"^[A-Z][A-Z0-9]*[a-z][A-Za-z0-9]*$").unwrap();
}

/// Classify an identifier's current naming style.
///
/// Patterns are tested in priority order; the first match wins. Strings
/// that fit none of the five styles (a plain lowercase word, mixed
/// punctuation, a dangling separator) return `None`. Detection only has
/// to be good enough to drive the toggle cycle, not exhaustive.
pub fn detect(input: &str) -> Option<Style> {
    if SNAKE.is_match(input) {
        Some(Style::Snake)
    } else if KEBAB.is_match(input) {
        Some(Style::Kebab)
    } else if UPPER_SNAKE.is_match(input) {
        Some(Style::UpperSnake)
    } else if CAMEL.is_match(input) {
        Some(Style::Camel)
    } else if PASCAL.is_match(input) {
        Some(Style::Pascal)
    } else {
        None
    }
}
