//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! Wraps `reqwest` with the request shape, API key header, and response
//! validation needed for shop price lookups. Every call issues exactly one
//! request; failures surface as [`LookupError`] for the caller to handle.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::LookupError;
use crate::prompt::build_prompt;
use crate::response::parse_generate_content;
use crate::types::{GenerateContentRequest, Shop};
use crate::PriceLookup;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Error bodies are echoed into [`LookupError::UnexpectedStatus`]; keep them short.
const MAX_ERROR_BODY_CHARS: usize = 300;

/// Client for Gemini shop price lookups.
///
/// Use [`GeminiClient::new`] for production or [`GeminiClient::with_base_url`]
/// to point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl GeminiClient {
    /// Creates a client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, LookupError> {
        Self::with_base_url(api_key, model, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`LookupError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let endpoint = Self::endpoint_url(base_url, model)?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
        })
    }

    /// The fully-qualified `generateContent` URL this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Asks the model for shops selling `item_name` near `location`.
    ///
    /// # Errors
    ///
    /// - [`LookupError::InvalidInput`] if either argument is blank.
    /// - [`LookupError::Transport`] on network failure.
    /// - [`LookupError::UnexpectedStatus`] on a non-2xx response.
    /// - [`LookupError::Schema`] / [`LookupError::EmptyResponse`] if the
    ///   response does not carry a well-formed shop array.
    pub async fn lookup_shops(
        &self,
        item_name: &str,
        location: &str,
    ) -> Result<Vec<Shop>, LookupError> {
        let item_name = item_name.trim();
        let location = location.trim();
        if item_name.is_empty() {
            return Err(LookupError::InvalidInput(
                "item name must be non-empty".to_string(),
            ));
        }
        if location.is_empty() {
            return Err(LookupError::InvalidInput(
                "location must be non-empty".to_string(),
            ));
        }

        let prompt = build_prompt(item_name, location);
        tracing::debug!(item = item_name, location, "requesting shop prices");

        let body = self.post_generate_content(&prompt).await?;
        let shops = parse_generate_content(&body)?;

        tracing::debug!(
            item = item_name,
            location,
            shops = shops.len(),
            "shop prices received"
        );
        Ok(shops)
    }

    /// Sends the request and returns the raw body of a 2xx response.
    async fn post_generate_content(&self, prompt: &str) -> Result<String, LookupError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::for_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::UnexpectedStatus {
                status: status.as_u16(),
                body: truncate_chars(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        Ok(response.text().await?)
    }

    /// Builds `{base}/v1beta/models/{model}:generateContent`.
    ///
    /// The base URL is normalised to end with exactly one slash so a base
    /// with or without a trailing slash yields the same endpoint.
    fn endpoint_url(base_url: &str, model: &str) -> Result<Url, LookupError> {
        let invalid = |reason: String| LookupError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason,
        };

        let model = model.trim();
        if model.is_empty() || model.contains('/') {
            return Err(invalid(format!("invalid model name '{model}'")));
        }

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_string()));
        }

        base.join(&format!("v1beta/models/{model}:generateContent"))
            .map_err(|e| invalid(e.to_string()))
    }
}

impl PriceLookup for GeminiClient {
    async fn lookup_shops(&self, item_name: &str, location: &str) -> Result<Vec<Shop>, LookupError> {
        GeminiClient::lookup_shops(self, item_name, location).await
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_owned()
    } else {
        let mut out: String = s.chars().take(max).collect();
        out.push_str("...");
        out
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
