//! Firestore REST client.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::auth::{AccessToken, TokenSource};
use crate::credentials::ServiceAccountKey;
use crate::document::Document;
use crate::error::{Result, StoreError};
use crate::wire::ListDocumentsResponse;
use crate::DocumentStore;

const API_BASE: &str = "https://firestore.googleapis.com/v1";
const PAGE_SIZE: u32 = 300;

/// Client for the hosted document store.
///
/// Built with [`FirestoreClient::connect`], which fetches the first access
/// token; a failure there is the fatal startup condition and the caller
/// checks it before running any export. Nothing here retries.
pub struct FirestoreClient {
    http: reqwest::Client,
    token_source: TokenSource,
    token: Mutex<Option<AccessToken>>,
    documents_base: String,
}

impl FirestoreClient {
    pub async fn connect(key: ServiceAccountKey) -> Result<Self> {
        let http = reqwest::Client::new();
        let documents_base = format!(
            "{API_BASE}/projects/{}/databases/(default)/documents",
            key.project_id
        );
        let token_source = TokenSource::new(key, http.clone())?;
        let initial = token_source.fetch().await?;
        Ok(Self {
            http,
            token_source,
            token: Mutex::new(Some(initial)),
            documents_base,
        })
    }

    async fn bearer(&self) -> Result<String> {
        let mut slot = self.token.lock().await;
        match slot.as_ref() {
            Some(token) if !token.is_expired() => Ok(token.token.clone()),
            _ => {
                let fresh = self.token_source.fetch().await?;
                let value = fresh.token.clone();
                *slot = Some(fresh);
                Ok(value)
            }
        }
    }

    async fn list_page(
        &self,
        path: &str,
        page_token: Option<&str>,
    ) -> Result<ListDocumentsResponse> {
        let token = self.bearer().await?;
        let url = format!("{}/{path}", self.documents_base);
        let mut request = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(&[("pageSize", PAGE_SIZE.to_string())]);
        if let Some(page_token) = page_token {
            request = request.query(&[("pageToken", page_token)]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Unavailable { status, message });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn list_documents(&self, path: &str) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let page = self.list_page(path, page_token.as_deref()).await?;
            documents.extend(page.documents.into_iter().map(|d| d.into_document()));
            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }
        debug!(path, count = documents.len(), "listed documents");
        Ok(documents)
    }
}
