//! Prompt construction and phrase-block helpers.

use crate::constants::PHRASE_COUNT;
use motivate_types::NonEmptyText;

/// Builds the fixed generation prompt for `word`.
pub fn build_prompt(word: &NonEmptyText) -> String {
    format!(
        "Generate {PHRASE_COUNT} inspiring and motivational phrases related to the word \"{}\". \
         Make them uplifting, positive, and actionable. \
         Return only the phrases, one per line, without numbering or bullet points.",
        word.as_str()
    )
}

/// Splits a newline-delimited phrase block into display lines.
///
/// Lines are trimmed and blank lines dropped; order is preserved.
pub fn split_phrases(block: &str) -> Vec<&str> {
    block
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
