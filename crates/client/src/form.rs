//! Client form state.
//!
//! All state the form shows lives in [`FormState`]. Transitions are plain methods with no I/O,
//! so the controller in [`crate::controller`] decides *when* they happen and tests can drive
//! them directly.

use motivate_core::{split_phrases, HistoryItem, HISTORY_LIMIT};

/// Why a submit did not start a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("a request is already in progress")]
    Busy,
    #[error("an API key is required")]
    MissingApiKey,
    #[error("a word is required")]
    MissingWord,
}

/// Values captured from the form when a request starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub word: String,
    pub api_key: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub api_key: String,
    pub word: String,
    /// Phrase block from the last successful generation; empty when none.
    pub phrases: String,
    pub loading: bool,
    pub error: Option<String>,
    /// Newest first, at most [`HISTORY_LIMIT`] rows.
    pub history: Vec<HistoryItem>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request if the form is idle and both fields are filled in.
    ///
    /// Clears the previous error and phrases and raises the loading flag.
    pub fn submit(&mut self) -> Result<Submission, SubmitBlocked> {
        if self.loading {
            return Err(SubmitBlocked::Busy);
        }
        let api_key = self.api_key.trim();
        if api_key.is_empty() {
            return Err(SubmitBlocked::MissingApiKey);
        }
        let word = self.word.trim();
        if word.is_empty() {
            return Err(SubmitBlocked::MissingWord);
        }

        let submission = Submission {
            word: word.to_string(),
            api_key: api_key.to_string(),
        };
        self.error = None;
        self.phrases.clear();
        self.loading = true;
        Ok(submission)
    }

    /// A generation finished: keep the phrases, clear the word, stop loading.
    pub fn succeed(&mut self, phrases: String) {
        self.phrases = phrases;
        self.word.clear();
        self.loading = false;
    }

    /// Adds a freshly persisted row to the front of the history.
    pub fn record(&mut self, item: HistoryItem) {
        self.history.insert(0, item);
        self.history.truncate(HISTORY_LIMIT);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Replaces the history with `items`, newest first.
    pub fn load_history(&mut self, mut items: Vec<HistoryItem>) {
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items.truncate(HISTORY_LIMIT);
        self.history = items;
    }

    /// Display lines for the current phrases.
    pub fn phrase_lines(&self) -> Vec<&str> {
        split_phrases(&self.phrases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn item(id: usize) -> HistoryItem {
        HistoryItem {
            id: id.to_string(),
            word: format!("word-{id}"),
            phrases: "a\nb\nc".into(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                + Duration::minutes(id as i64),
        }
    }

    fn filled() -> FormState {
        FormState {
            api_key: "key".into(),
            word: " courage ".into(),
            ..FormState::default()
        }
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let mut state = FormState::new();
        assert_eq!(state.submit(), Err(SubmitBlocked::MissingApiKey));

        state.api_key = "key".into();
        state.word = "   ".into();
        assert_eq!(state.submit(), Err(SubmitBlocked::MissingWord));
        assert!(!state.loading);
    }

    #[test]
    fn test_submit_starts_loading_and_clears_previous_output() {
        let mut state = filled();
        state.phrases = "old".into();
        state.error = Some("old error".into());

        let submission = state.submit().expect("submit should start");

        assert_eq!(
            submission,
            Submission {
                word: "courage".into(),
                api_key: "key".into()
            }
        );
        assert!(state.loading);
        assert!(state.phrases.is_empty());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_submit_is_blocked_while_loading() {
        let mut state = filled();
        state.submit().expect("first submit should start");
        assert_eq!(state.submit(), Err(SubmitBlocked::Busy));
    }

    #[test]
    fn test_succeed_keeps_phrases_and_clears_word() {
        let mut state = filled();
        state.submit().unwrap();
        state.succeed("Be bold.\nStep forward.\nTrust yourself.".into());

        assert!(!state.loading);
        assert!(state.word.is_empty());
        assert_eq!(state.api_key, "key");
        assert_eq!(
            state.phrase_lines(),
            vec!["Be bold.", "Step forward.", "Trust yourself."]
        );
    }

    #[test]
    fn test_fail_keeps_word_and_shows_message() {
        let mut state = filled();
        state.submit().unwrap();
        state.fail("Failed to generate phrases");

        assert!(!state.loading);
        assert_eq!(state.word, " courage ");
        assert_eq!(state.error.as_deref(), Some("Failed to generate phrases"));

        state.dismiss_error();
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_record_prepends_and_bounds_history() {
        let mut state = FormState::new();
        for id in 0..7 {
            state.record(item(id));
        }
        let ids: Vec<&str> = state.history.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["6", "5", "4", "3", "2"]);
    }

    #[test]
    fn test_load_history_sorts_newest_first() {
        let mut state = FormState::new();
        state.load_history(vec![item(1), item(6), item(3), item(2), item(5), item(4)]);
        let ids: Vec<&str> = state.history.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["6", "5", "4", "3", "2"]);
    }
}
