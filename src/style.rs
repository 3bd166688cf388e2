use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A supported naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Snake,
    Camel,
    Pascal,
    Kebab,
    UpperSnake,
}

impl Style {
    /// The five styles in toggle order.
    pub const CYCLE: [Style; 5] = [
        Style::Snake,
        Style::Camel,
        Style::Pascal,
        Style::Kebab,
        Style::UpperSnake,
    ];

    /// Next style in the cycle, wrapping from upper-snake back to snake.
    pub fn next(self) -> Style {
        match self {
            Style::Snake => Style::Camel,
            Style::Camel => Style::Pascal,
            Style::Pascal => Style::Kebab,
            Style::Kebab => Style::UpperSnake,
            Style::UpperSnake => Style::Snake,
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown style '{0}' (expected snake, camel, pascal, kebab, or upper-snake)")]
pub struct ParseStyleError(String);

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "snake" | "snake_case" => Ok(Style::Snake),
            "camel" | "camelcase" => Ok(Style::Camel),
            "pascal" | "pascalcase" => Ok(Style::Pascal),
            "kebab" | "kebab-case" => Ok(Style::Kebab),
            "upper-snake" | "upper_snake" | "screaming-snake" | "screaming_snake_case" => {
                Ok(Style::UpperSnake)
            }
            _ => Err(ParseStyleError(s.to_string())),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Style::Snake => "snake",
            Style::Camel => "camel",
            Style::Pascal => "pascal",
            Style::Kebab => "kebab",
            Style::UpperSnake => "upper-snake",
        };
        write!(f, "{}", name)
    }
}
