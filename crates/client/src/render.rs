//! Plain-text rendering of the form for terminals.

use crate::form::FormState;
use motivate_core::{split_phrases, HistoryItem};
use std::fmt::Write;

/// Date shown next to a history row (`M/D/YYYY`).
pub fn history_date(item: &HistoryItem) -> String {
    item.created_at.format("%-m/%-d/%Y").to_string()
}

/// One `| phrase` line per non-blank phrase.
pub fn render_phrases(block: &str, indent: &str) -> String {
    let mut out = String::new();
    for phrase in split_phrases(block) {
        let _ = writeln!(out, "{indent}| {phrase}");
    }
    out
}

pub fn render_history(items: &[HistoryItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut out = String::from("Recent History\n");
    for item in items {
        let _ = writeln!(out, "\n  {}  ({})", item.word, history_date(item));
        out.push_str(&render_phrases(&item.phrases, "    "));
    }
    out
}

/// Renders the whole form below the input fields: error, progress, phrases and history.
pub fn render_state(state: &FormState) -> String {
    let mut out = String::new();

    if let Some(error) = &state.error {
        let _ = writeln!(out, "Error: {error}");
    }
    if state.loading {
        out.push_str("Generating...\n");
    }
    if !state.phrases.is_empty() {
        out.push_str("Your Motivational Phrases\n");
        out.push_str(&render_phrases(&state.phrases, "  "));
    }

    let history = render_history(&state.history);
    if !history.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&history);
    }
    out
}
