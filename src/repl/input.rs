//! Input normalization for the REPL.

/// Lowercases the line and splits it into whitespace-separated words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}
