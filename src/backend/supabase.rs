//! Supabase provider: PostgREST for the table, Storage for images.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use url::Url;

use super::{BackendError, Result, SchoolStore};
use crate::config::BackendConfig;
use crate::school::model::{NewSchool, School};

/// HTTP client for a Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    base_url: Url,
    bucket: String,
    table: String,
    http: reqwest::Client,
}

/// Error body shapes returned by PostgREST (`message`) and Storage
/// (`error` + `message`).
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl SupabaseStore {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        if config.url.trim().is_empty() {
            return Err(BackendError::Config(
                "backend.url (or SUPABASE_URL) must be set".to_string(),
            ));
        }
        if config.api_key.trim().is_empty() {
            return Err(BackendError::Config(
                "backend.api_key (or SUPABASE_ANON_KEY) must be set".to_string(),
            ));
        }

        // `Url::join` drops the last segment unless the base ends with '/'.
        let mut base = config.url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| BackendError::Config(format!("invalid api key: {e}")))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| BackendError::Config(format!("invalid api key: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            bucket: config.bucket.clone(),
            table: config.table.clone(),
            http,
        })
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// URL of `object` in the images bucket under `prefix`.
    ///
    /// The object name is pushed as a single percent-encoded segment, so `/`
    /// and dot segments in it cannot leave the bucket.
    fn object_url(&self, prefix: &str, object: &str) -> Result<Url> {
        let mut url = self.url(prefix)?;
        url.path_segments_mut()
            .map_err(|()| BackendError::Config("backend.url cannot be a base URL".to_string()))?
            .pop_if_empty()
            .push(&self.bucket)
            .push(object);
        Ok(url)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let parsed: ErrorBody = serde_json::from_str(&body).unwrap_or_default();
        let message = parsed
            .message
            .or(parsed.error)
            .filter(|m| !m.is_empty())
            .unwrap_or(body);

        Err(BackendError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl SchoolStore for SupabaseStore {
    async fn upload_image(&self, path: &str, content_type: &str, bytes: &[u8]) -> Result<()> {
        let url = self.object_url("storage/v1/object/", path)?;

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(bytes.to_vec())
            .send()
            .await?;
        Self::check(response).await?;

        tracing::debug!(
            name: "backend.storage.uploaded",
            bucket = %self.bucket,
            path = %path,
            size = bytes.len(),
            "Image uploaded"
        );
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        match self.object_url("storage/v1/object/public/", path) {
            Ok(url) => url.into(),
            Err(_) => format!(
                "{}storage/v1/object/public/{}/{path}",
                self.base_url, self.bucket
            ),
        }
    }

    async fn insert_school(&self, school: &NewSchool) -> Result<()> {
        let url = self.url(&format!("rest/v1/{}", self.table))?;

        let response = self
            .http
            .post(url)
            .header("prefer", "return=minimal")
            .json(&[school])
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn list_schools(&self) -> Result<Vec<School>> {
        let mut url = self.url(&format!("rest/v1/{}", self.table))?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", "created_at.desc");

        let response = self.http.get(url).send().await?;
        let response = Self::check(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
