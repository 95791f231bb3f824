//! Drives [`FormState`] through one submission at a time.

use crate::error::ClientResult;
use crate::form::{FormState, SubmitBlocked};
use crate::proxy::ProxyClient;
use motivate_core::{HistoryStore, NewHistoryItem, HISTORY_LIMIT};
use std::sync::Arc;

pub struct MotivationForm {
    state: FormState,
    proxy: ProxyClient,
    store: Arc<dyn HistoryStore>,
}

impl MotivationForm {
    pub fn new(proxy: ProxyClient, store: Arc<dyn HistoryStore>) -> Self {
        Self {
            state: FormState::new(),
            proxy,
            store,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    /// Reads the most recent rows from the store into the form.
    pub async fn load_history(&mut self) -> ClientResult<()> {
        let rows = self.store.recent(HISTORY_LIMIT).await?;
        self.state.load_history(rows);
        Ok(())
    }

    /// Runs one submission: proxy call, then (on success only) one history insert.
    ///
    /// Failures end up in `state().error`; only a blocked submit is returned as an error.
    pub async fn submit(&mut self) -> Result<(), SubmitBlocked> {
        let submission = self.state.submit()?;

        match self
            .proxy
            .generate(&submission.word, &submission.api_key)
            .await
        {
            Ok(res) => {
                self.persist(&submission.word, &res.phrases).await;
                self.state.succeed(res.phrases);
            }
            Err(e) => {
                tracing::warn!(word = %submission.word, "generation failed: {}", e);
                self.state.fail(e.to_string());
            }
        }
        Ok(())
    }

    /// A failed insert keeps the generated phrases on screen and leaves history unchanged.
    async fn persist(&mut self, word: &str, phrases: &str) {
        let item = match NewHistoryItem::new(word, phrases) {
            Ok(item) => item,
            Err(e) => {
                tracing::warn!("history row not saved: {}", e);
                return;
            }
        };

        match self.store.insert(item).await {
            Ok(row) => self.state.record(row),
            Err(e) => tracing::warn!("history row not saved: {}", e),
        }
    }
}
