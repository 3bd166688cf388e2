use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Runs of anything that is not a letter or digit act as word breaks
    static ref DELIMITERS: Regex = Regex::new(r"[^a-zA-Z0-9]+").unwrap();
    static ref LOWER_UPPER: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    // An acronym run keeps its last capital for the word that follows:
    // HTTPServer -> HTTP Server. A single capital before lowercase is
    // already a word start and must not be split again.
    static ref ACRONYM_WORD: Regex = Regex::new(r"([A-Z]{2,})([A-Z][a-z0-9])").unwrap();
}

/// Split an identifier into its lowercase word tokens.
///
/// Handles delimiter-based styles (snake_case, kebab-case, UPPER_SNAKE)
/// and compound-case styles (camelCase, PascalCase) in one pass order:
/// delimiters become spaces, then case-transition boundaries are split,
/// then everything is lowercased. Inputs without any letters or digits
/// produce an empty sequence.
pub fn tokenize(input: &str) -> Vec<String> {
    let spaced = DELIMITERS.replace_all(input, " ");
    let spaced = LOWER_UPPER.replace_all(&spaced, "$1 $2");
    let spaced = ACRONYM_WORD.replace_all(&spaced, "$1 $2");

    spaced
        .split_whitespace()
        .map(|word| word.to_ascii_lowercase())
        .collect()
}
