// SPDX-License-Identifier: MPL-2.0
//! Thin client for the remote row store.
//!
//! Reads are keyed exact-match filters built up through [`SelectBuilder`];
//! writes are plain inserts. There is no retry, caching, or conflict
//! handling here: a request either yields rows or the error payload's
//! message (spec'd to surface verbatim in the UI).

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Error payload shape returned by the row store.
#[derive(Debug, Deserialize)]
struct StoreErrorPayload {
    message: Option<String>,
}

#[derive(Clone)]
pub struct RowStore {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl RowStore {
    pub fn new(client: reqwest::Client, base_url: &str, anon_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    /// Starts a keyed read against `table`.
    pub fn select(&self, table: &str) -> SelectBuilder {
        SelectBuilder {
            store: self.clone(),
            table: table.to_string(),
            params: vec![("select".to_string(), "*".to_string())],
            access_token: None,
        }
    }

    /// Inserts one row into `table`. The row is serialized as the request
    /// body; the server fills generated columns.
    pub async fn insert<T: Serialize>(
        self,
        table: &str,
        row: T,
        access_token: Option<String>,
    ) -> Result<()> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let token = access_token.unwrap_or_else(|| self.anon_key.clone());
        let response = self
            .client
            .post(url)
            .header("apikey", &self.anon_key)
            .header("Prefer", "return=minimal")
            .bearer_auth(token)
            .json(&row)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }
}

/// Builder for exact-match reads, mirroring the query surface the screens
/// need: equality filters, ordering, and an at-most-one-row mode.
pub struct SelectBuilder {
    store: RowStore,
    table: String,
    params: Vec<(String, String)>,
    access_token: Option<String>,
}

impl SelectBuilder {
    /// Adds an exact-match filter on `column`.
    #[must_use]
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push((column.to_string(), format!("eq.{value}")));
        self
    }

    /// Orders results by `column`, newest first.
    #[must_use]
    pub fn order_desc(mut self, column: &str) -> Self {
        self.params
            .push(("order".to_string(), format!("{column}.desc")));
        self
    }

    /// Authenticates the read with the session's access token.
    #[must_use]
    pub fn with_token(mut self, access_token: &str) -> Self {
        self.access_token = Some(access_token.to_string());
        self
    }

    /// Fetches all matching rows.
    pub async fn rows<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        self.fetch(None).await
    }

    /// Fetches at most one row: zero rows is `None`, two or more is an
    /// error (the filter was expected to be a key).
    pub async fn maybe_single<T: DeserializeOwned>(self) -> Result<Option<T>> {
        // Two rows are enough to detect a violated expectation.
        let rows = self.fetch(Some(2)).await?;
        single_from_rows(rows)
    }

    async fn fetch<T: DeserializeOwned>(mut self, limit: Option<u32>) -> Result<Vec<T>> {
        if let Some(limit) = limit {
            self.params.push(("limit".to_string(), limit.to_string()));
        }
        let url = format!("{}/rest/v1/{}", self.store.base_url, self.table);
        let token = self
            .access_token
            .unwrap_or_else(|| self.store.anon_key.clone());
        let response = self
            .store
            .client
            .get(url)
            .header("apikey", &self.store.anon_key)
            .bearer_auth(token)
            .query(&self.params)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(response.json().await?)
    }
}

/// Collapses a row set into the maybe-single contract.
fn single_from_rows<T>(mut rows: Vec<T>) -> Result<Option<T>> {
    match rows.len() {
        0 => Ok(None),
        1 => Ok(rows.pop()),
        _ => Err(Error::Store(
            "Query returned more than one row where at most one was expected".to_string(),
        )),
    }
}

async fn error_from_response(response: reqwest::Response) -> Error {
    let fallback = format!("Request failed ({})", response.status());
    match response.json::<StoreErrorPayload>().await {
        Ok(payload) => Error::Store(payload.message.unwrap_or(fallback)),
        Err(_) => Error::Store(fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_from_rows_maps_zero_to_none() {
        let rows: Vec<u32> = vec![];
        assert_eq!(single_from_rows(rows).unwrap(), None);
    }

    #[test]
    fn single_from_rows_maps_one_to_some() {
        assert_eq!(single_from_rows(vec![7u32]).unwrap(), Some(7));
    }

    #[test]
    fn single_from_rows_rejects_multiple_rows() {
        let result = single_from_rows(vec![1u32, 2]);
        assert!(matches!(result, Err(Error::Store(_))));
    }

    #[test]
    fn store_error_payload_keeps_the_raw_message() {
        let payload: StoreErrorPayload =
            serde_json::from_str(r#"{"message": "permission denied for table notes"}"#).unwrap();
        assert_eq!(
            payload.message.as_deref(),
            Some("permission denied for table notes")
        );
    }
}
