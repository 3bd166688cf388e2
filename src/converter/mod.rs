pub mod detector;
pub mod joiner;
pub mod tokenizer;

use crate::{Config, Conversion, ConvertResult, Style};
use anyhow::Result;
use rayon::prelude::*;
use regex::Regex;

/// How the target style for a conversion is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Re-join the tokens at this style.
    Style(Style),
    /// Advance the detected style to the next one in the cycle order;
    /// undetectable inputs restart the cycle at snake.
    Cycle,
}

pub struct CaseConverter {
    ignore_patterns: Vec<Regex>,
}

impl CaseConverter {
    pub fn new(config: &Config) -> Result<Self> {
        // Compile ignore patterns
        let mut ignore_patterns = Vec::new();
        for pattern in &config.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => ignore_patterns.push(re),
                Err(e) => eprintln!("Warning: Invalid regex pattern '{}': {}", pattern, e),
            }
        }

        Ok(Self { ignore_patterns })
    }

    /// Convert a single text span.
    ///
    /// Spans that match an ignore pattern or contain no letters/digits
    /// come back with `replacement: None`, meaning the span must be left
    /// unchanged. The call is pure: same span and target, same outcome.
    pub fn convert(&self, input: &str, target: Target) -> Conversion {
        let detected = detector::detect(input);

        if self.should_ignore(input) {
            return Conversion {
                input: input.to_string(),
                detected,
                target: None,
                replacement: None,
            };
        }

        let tokens = tokenizer::tokenize(input);
        if tokens.is_empty() {
            return Conversion {
                input: input.to_string(),
                detected,
                target: None,
                replacement: None,
            };
        }

        let style = match target {
            Target::Style(style) => style,
            Target::Cycle => match detected {
                Some(current) => current.next(),
                None => Style::Snake,
            },
        };

        Conversion {
            input: input.to_string(),
            detected,
            target: Some(style),
            replacement: Some(joiner::join(&tokens, style)),
        }
    }

    /// Convert a batch of spans.
    ///
    /// Spans are independent, so they are converted in parallel; results
    /// are collected in input order before the caller applies them as one
    /// edit. Overlapping spans are the caller's problem, not resolved here.
    pub fn convert_batch(&self, inputs: &[String], target: Target) -> ConvertResult {
        let conversions: Vec<Conversion> = inputs
            .par_iter()
            .map(|input| self.convert(input, target))
            .collect();

        let converted_count = conversions.iter().filter(|c| c.replacement.is_some()).count();

        ConvertResult {
            converted_count,
            skipped_count: conversions.len() - converted_count,
            conversions,
        }
    }

    fn should_ignore(&self, input: &str) -> bool {
        self.ignore_patterns.iter().any(|pattern| pattern.is_match(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter() -> CaseConverter {
        CaseConverter::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_explicit_target() {
        let conversion = converter().convert("myVarName", Target::Style(Style::Snake));
        assert_eq!(conversion.replacement.as_deref(), Some("my_var_name"));
        assert_eq!(conversion.detected, Some(Style::Camel));
        assert_eq!(conversion.target, Some(Style::Snake));
    }

    #[test]
    fn test_cycle_chain() {
        let converter = converter();
        let mut current = "my_var_name".to_string();
        let mut seen = Vec::new();

        for _ in 0..5 {
            let conversion = converter.convert(&current, Target::Cycle);
            current = conversion.replacement.expect("cycle should convert");
            seen.push(current.clone());
        }

        assert_eq!(
            seen,
            vec!["myVarName", "MyVarName", "my-var-name", "MY_VAR_NAME", "my_var_name"]
        );
    }

    #[test]
    fn test_cycle_from_unknown_starts_at_snake() {
        let conversion = converter().convert("FooBar.baz", Target::Cycle);
        assert_eq!(conversion.detected, None);
        assert_eq!(conversion.target, Some(Style::Snake));
        assert_eq!(conversion.replacement.as_deref(), Some("foo_bar_baz"));
    }

    #[test]
    fn test_no_word_characters_is_a_noop() {
        let conversion = converter().convert("___", Target::Cycle);
        assert_eq!(conversion.replacement, None);
        assert_eq!(conversion.target, None);
    }

    #[test]
    fn test_ignore_pattern_skips_span() {
        let config = Config {
            ignore_patterns: vec![r"^__.*__$".to_string()],
            ..Default::default()
        };
        let converter = CaseConverter::new(&config).unwrap();

        let skipped = converter.convert("__init__", Target::Style(Style::Camel));
        assert_eq!(skipped.replacement, None);

        let converted = converter.convert("my_var", Target::Style(Style::Camel));
        assert_eq!(converted.replacement.as_deref(), Some("myVar"));
    }

    #[test]
    fn test_invalid_ignore_pattern_is_dropped() {
        let config = Config {
            ignore_patterns: vec!["[unclosed".to_string()],
            ..Default::default()
        };
        let converter = CaseConverter::new(&config).unwrap();
        let conversion = converter.convert("fooBar", Target::Style(Style::Kebab));
        assert_eq!(conversion.replacement.as_deref(), Some("foo-bar"));
    }

    #[test]
    fn test_batch_preserves_order_and_counts() {
        let inputs = vec![
            "fooBar".to_string(),
            "---".to_string(),
            "baz_qux".to_string(),
        ];
        let result = converter().convert_batch(&inputs, Target::Style(Style::Pascal));

        assert_eq!(result.converted_count, 2);
        assert_eq!(result.skipped_count, 1);
        assert_eq!(result.conversions[0].replacement.as_deref(), Some("FooBar"));
        assert_eq!(result.conversions[1].replacement, None);
        assert_eq!(result.conversions[2].replacement.as_deref(), Some("BazQux"));
    }

    #[test]
    fn test_round_trip_for_delimiter_styles() {
        let converter = converter();
        for style in [Style::Snake, Style::Kebab, Style::UpperSnake] {
            for input in ["myVarName", "HTTPServerError", "a1_b2_c3"] {
                let tokens = tokenizer::tokenize(input);
                let conversion = converter.convert(input, Target::Style(style));
                let rendered = conversion.replacement.expect("should convert");
                assert_eq!(tokenizer::tokenize(&rendered), tokens);
            }
        }
    }

    #[test]
    fn test_detection_stable_after_round_trip() {
        let converter = converter();
        for input in ["my_var_name", "my-var-name", "MY_VAR_NAME"] {
            let detected = detector::detect(input).expect("style should be known");
            let conversion = converter.convert(input, Target::Style(detected));
            let rendered = conversion.replacement.expect("should convert");
            assert_eq!(detector::detect(&rendered), Some(detected));
        }
    }

    #[test]
    fn test_toggle_period_is_five() {
        let converter = converter();
        for start in ["my_var_name", "fooBar", "FooBar", "my-var", "MY_VAR"] {
            let initial = detector::detect(start).expect("style should be known");
            let mut current = start.to_string();
            for _ in 0..5 {
                current = converter
                    .convert(&current, Target::Cycle)
                    .replacement
                    .expect("cycle should convert");
            }
            assert_eq!(detector::detect(&current), Some(initial));
        }
    }
}
