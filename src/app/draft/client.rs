//! Text-generation client
//!
//! [`TextGenerator`] is the seam between the draft state machine and the
//! network. [`GeminiClient`] talks to a `generateContent` endpoint; tests swap in
//! their own implementations.

#![warn(clippy::all, rust_2018_idioms)]

use super::error::DraftError;
use super::schema::{decode_generated_text, GenerateContentRequest};
use crate::app::config::GeneratorConfig;
use crate::{log_debug, log_error, log_info};
use anyhow::Context as _;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, DraftError>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: Url,
    model: String,
    timeout: Duration,
    api_key: Option<String>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the key
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl GeminiClient {
    pub fn new(
        endpoint: Url,
        model: impl Into<String>,
        timeout: Duration,
        api_key: Option<String>,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for the text-generation service")?;

        Ok(Self {
            http,
            endpoint,
            model: model.into(),
            timeout,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    pub fn from_config(config: &GeneratorConfig, api_key: Option<String>) -> anyhow::Result<Self> {
        Self::new(config.endpoint_url()?, &config.model, config.timeout(), api_key)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// `{endpoint}/models/{model}:generateContent?key={api_key}`
    fn request_url(&self, api_key: &str) -> Result<Url, DraftError> {
        let base = self.endpoint.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{}/models/{}:generateContent", base, self.model))
            .map_err(|e| DraftError::Transport(format!("invalid request URL: {}", e)))?;
        url.query_pairs_mut().append_pair("key", api_key);
        Ok(url)
    }

    fn describe(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            format!("no response within {} seconds", self.timeout.as_secs())
        } else if err.is_connect() {
            format!("connection failed: {}", err)
        } else {
            err.to_string()
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, DraftError> {
        let api_key = self.api_key.as_deref().ok_or(DraftError::MissingApiKey)?;
        let url = self.request_url(api_key)?;

        log_info!(
            "Requesting draft from model {} ({} prompt characters)",
            self.model,
            prompt.chars().count()
        );

        let response = self
            .http
            .post(url)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| {
                // without_url keeps the key out of the log
                let e = e.without_url();
                log_error!("Text-generation request failed: {:?}", e);
                DraftError::Transport(self.describe(&e))
            })?;

        let status = response.status();
        let raw = response.text().await.map_err(|e| {
            let e = e.without_url();
            log_error!("Failed to read text-generation response body: {:?}", e);
            DraftError::Transport(self.describe(&e))
        })?;

        if !status.is_success() {
            log_error!("Text-generation service returned {}: {}", status, raw);
            return Err(DraftError::Status {
                status: status.as_u16(),
                body: raw,
            });
        }

        match decode_generated_text(&raw) {
            Ok(text) => {
                log_debug!("Received draft of {} characters", text.chars().count());
                Ok(text)
            }
            Err(e) => {
                log_error!("Unexpected text-generation response ({}). Raw body: {}", e, raw);
                Err(e)
            }
        }
    }
}
