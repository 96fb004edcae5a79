//! REST adapter for a Supabase-style hosted table.
//!
//! The table lives under `/rest/v1/{table}`; reads select every row, writes
//! patch the single row keyed by name. The service key travels in both the
//! `apikey` header and a bearer token, which is the dialect the hosted API
//! expects.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::repository::{ScoreRow, ScoreStore, StorageError};

/// Connection settings for the hosted table.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
    pub table: String,
}

impl StoreConfig {
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            table: table.into(),
        }
    }
}

/// [`ScoreStore`] backed by the hosted REST table.
#[derive(Clone)]
pub struct RestScoreStore {
    client: Client,
    config: StoreConfig,
}

impl RestScoreStore {
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.table
        )
    }

    fn select_url(&self) -> String {
        format!("{}?select=*", self.table_url())
    }

    fn update_url(&self, name: &str) -> String {
        format!("{}?name=eq.{name}", self.table_url())
    }
}

#[async_trait]
impl ScoreStore for RestScoreStore {
    async fn fetch_scores(&self) -> Result<Vec<ScoreRow>, StorageError> {
        let response = self
            .client
            .get(self.select_url())
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::Status(status));
        }

        let rows: Vec<ScoreRow> = response
            .json()
            .await
            .map_err(|err| StorageError::Decode(err.to_string()))?;
        debug!(rows = rows.len(), "fetched score rows");
        Ok(rows)
    }

    async fn update_score(&self, name: &str, points: i64) -> Result<(), StorageError> {
        let response = self
            .client
            .patch(self.update_url(name))
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Prefer", "return=minimal")
            .json(&json!({ "points": points }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::Status(status));
        }
        debug!(name, points, "updated score row");
        Ok(())
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
