//! HTTP client for the Gemini `generateContent` REST API.
//!
//! Wraps `reqwest` with quote-specific prompt construction, API key
//! management, and a single validation boundary that turns the model's text
//! output into a [`Quote`].

use std::time::Duration;

use reqwest::{Client, Url};

use quotecard_core::Quote;

use crate::error::GeminiError;
use crate::parse::parse_quote;
use crate::prompt::build_prompt;
use crate::types::{Content, GenerateContentRequest, GenerateContentResponse, Part};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";

/// Client for the Gemini generative-text API.
///
/// Manages the HTTP client, API key, and model endpoint. Use
/// [`GeminiClient::new`] for production or [`GeminiClient::with_base_url`] to
/// point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl GeminiClient {
    /// Creates a new client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, GeminiError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeminiError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("quotecard/0.1 (quote-pipeline)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join appends the model path rather than replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |reason: String| GeminiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let endpoint = Url::parse(&normalised)
            .map_err(|e| invalid(e.to_string()))?
            .join(&format!("v1beta/models/{model}:generateContent"))
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
        })
    }

    /// Generates a philosophical quote, optionally for a named philosopher.
    ///
    /// Sends one `generateContent` request, strips incidental markdown code
    /// fences from the model's text output, parses the embedded JSON object,
    /// and validates the required fields. Whether the named author actually
    /// said the quote is not checked.
    ///
    /// # Errors
    ///
    /// - [`GeminiError::Http`] on network failure.
    /// - [`GeminiError::Api`] on a non-2xx HTTP status.
    /// - [`GeminiError::Deserialize`] if the response envelope does not match
    ///   the expected shape.
    /// - [`GeminiError::EmptyResponse`] if no candidate text was returned.
    /// - [`GeminiError::Parse`] / [`GeminiError::MissingField`] if the model
    ///   output is not the requested JSON object.
    pub async fn generate_quote(&self, topic: Option<&str>) -> Result<Quote, GeminiError> {
        let prompt = build_prompt(topic);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
        };

        let url = self.request_url();
        tracing::debug!(endpoint = %self.endpoint, "requesting quote generation");

        let response = self.client.post(url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::Deserialize {
                context: "generateContent".to_string(),
                source: e,
            })?;

        let text = envelope.candidate_text().ok_or(GeminiError::EmptyResponse)?;
        parse_quote(&text)
    }

    /// Builds the request URL with the API key as a query parameter.
    fn request_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("key", &self.api_key);
        url
    }
}
