use crate::style::Style;

/// Render lowercase word tokens in the given style.
///
/// Tokens are expected to come from the tokenizer (lowercase ASCII,
/// nonempty). An empty slice renders as an empty string; callers skip
/// the conversion before getting here.
pub fn join(tokens: &[String], style: Style) -> String {
    match style {
        Style::Snake => tokens.join("_"),
        Style::Kebab => tokens.join("-"),
        Style::UpperSnake => tokens.join("_").to_ascii_uppercase(),
        Style::Camel => {
            let mut iter = tokens.iter();
            let mut out = iter.next().cloned().unwrap_or_default();
            for token in iter {
                out.push_str(&capitalize(token));
            }
            out
        }
        Style::Pascal => tokens.iter().map(|token| capitalize(token)).collect(),
    }
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
