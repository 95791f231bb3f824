//! History store backed by the managed datastore's REST interface.
//!
//! The table is reached through a generic PostgREST-style API:
//! - insert-one: `POST {url}/rest/v1/motivational_phrases` with `Prefer: return=representation`
//! - recent: `GET {url}/rest/v1/motivational_phrases?select=*&order=created_at.desc&limit=N`
//!
//! Every call carries the public access token both as `apikey` and as a bearer token.

use crate::config::DatastoreConfig;
use crate::constants::{DATASTORE_REST_PATH, HISTORY_TABLE};
use crate::history::{HistoryItem, HistoryStore, NewHistoryItem};
use crate::{MotivateError, MotivateResult};
use async_trait::async_trait;

#[derive(Clone, Debug)]
pub struct RestHistoryStore {
    http: reqwest::Client,
    config: DatastoreConfig,
}

impl RestHistoryStore {
    pub fn new(config: DatastoreConfig) -> MotivateResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(MotivateError::HttpClient)?;
        Ok(Self { http, config })
    }

    fn table_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.config.url(),
            DATASTORE_REST_PATH,
            HISTORY_TABLE
        )
    }

    fn authorised(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", self.config.public_key())
            .bearer_auth(self.config.public_key())
    }

    async fn read_rows(response: reqwest::Response) -> MotivateResult<Vec<HistoryItem>> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(MotivateError::DatastoreRequest)?;

        if !status.is_success() {
            return Err(MotivateError::DatastoreStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(MotivateError::DatastoreDecode)
    }
}

#[async_trait]
impl HistoryStore for RestHistoryStore {
    async fn insert(&self, item: NewHistoryItem) -> MotivateResult<HistoryItem> {
        let response = self
            .authorised(self.http.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&[&item])
            .send()
            .await
            .map_err(MotivateError::DatastoreRequest)?;

        let row = Self::read_rows(response)
            .await?
            .into_iter()
            .next()
            .ok_or(MotivateError::DatastoreEmptyInsert)?;

        tracing::info!(id = %row.id, word = %row.word, "history row inserted");
        Ok(row)
    }

    async fn recent(&self, limit: usize) -> MotivateResult<Vec<HistoryItem>> {
        let limit = limit.to_string();
        let response = self
            .authorised(self.http.get(self.table_url()))
            .query(&[
                ("select", "*"),
                ("order", "created_at.desc"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(MotivateError::DatastoreRequest)?;

        Self::read_rows(response).await
    }
}
