use crate::{ConvertResult, Style};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Plain,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "plain" => Ok(OutputFormat::Plain),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Plain => write!(f, "plain"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConversion {
    input: String,
    detected: Option<Style>,
    target: Option<Style>,
    replacement: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    converted: usize,
    skipped: usize,
    conversions: Vec<JsonConversion>,
}

pub fn print_conversions(result: &ConvertResult, colored_output: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => print_text_conversions(result, colored_output),
        OutputFormat::Json => print_json_conversions(result),
        OutputFormat::Plain => print_plain_conversions(result),
    }
}

fn print_text_conversions(result: &ConvertResult, colored_output: bool) {
    for conversion in &result.conversions {
        let detected = match conversion.detected {
            Some(style) => style.to_string(),
            None => "unknown".to_string(),
        };

        match &conversion.replacement {
            Some(replacement) => {
                if colored_output {
                    println!(
                        "  {} {} {}  {}",
                        conversion.input.cyan(),
                        "→".dimmed(),
                        replacement.green().bold(),
                        format!("({})", detected).dimmed()
                    );
                } else {
                    println!(
                        "  {} → {}  ({})",
                        conversion.input, replacement, detected
                    );
                }
            }
            None => {
                if colored_output {
                    println!(
                        "  {} {}",
                        conversion.input.dimmed(),
                        "(unchanged)".dimmed()
                    );
                } else {
                    println!("  {} (unchanged)", conversion.input);
                }
            }
        }
    }
}

fn print_json_conversions(result: &ConvertResult) {
    let conversions: Vec<JsonConversion> = result
        .conversions
        .iter()
        .map(|c| JsonConversion {
            input: c.input.clone(),
            detected: c.detected,
            target: c.target,
            replacement: c.replacement.clone(),
        })
        .collect();

    let output = JsonOutput {
        converted: result.converted_count,
        skipped: result.skipped_count,
        conversions,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

// One line per span, in span order. Unconverted spans echo their input so
// a host can zip lines back onto spans.
fn print_plain_conversions(result: &ConvertResult) {
    for conversion in &result.conversions {
        match &conversion.replacement {
            Some(replacement) => println!("{}", replacement),
            None => println!("{}", conversion.input),
        }
    }
}

pub fn print_summary(result: &ConvertResult, colored: bool) {
    println!();

    let converted_word = if result.converted_count == 1 {
        "identifier"
    } else {
        "identifiers"
    };
    let skipped = if result.skipped_count > 0 {
        format!(" ({} unchanged)", result.skipped_count)
    } else {
        String::new()
    };

    if colored {
        println!(
            "{} {} {} converted{}",
            "✓".green().bold(),
            result.converted_count.to_string().green().bold(),
            converted_word,
            skipped.dimmed()
        );
    } else {
        println!(
            "✓ {} {} converted{}",
            result.converted_count, converted_word, skipped
        );
    }
}
