//! HTTP client for the Blotato posting API.
//!
//! Wraps `reqwest` with bearer-token auth, payload construction, and a typed
//! error taxonomy that keeps the credential value out of every message.

use std::path::Path;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::BlotatoError;
use crate::types::{target_type, Post, PostContent, PostRequest, PostTarget};

const DEFAULT_BASE_URL: &str = "https://backend.blotato.com/v2";

/// The tightest media ceiling among the supported platforms (Twitter, 5 MiB).
const MAX_MEDIA_BYTES: u64 = 5 * 1024 * 1024;

/// Client for the Blotato API.
///
/// Manages the HTTP client, API key, account id, and base URL. Use
/// [`BlotatoClient::new`] for production or [`BlotatoClient::with_base_url`]
/// to point at a mock server in tests.
pub struct BlotatoClient {
    client: Client,
    api_key: String,
    account_id: String,
    posts_url: Url,
}

impl BlotatoClient {
    /// Creates a new client pointed at the production Blotato API.
    ///
    /// # Errors
    ///
    /// Returns [`BlotatoError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, account_id: &str, timeout_secs: u64) -> Result<Self, BlotatoError> {
        Self::with_base_url(api_key, account_id, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`BlotatoError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`BlotatoError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        account_id: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, BlotatoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("quotecard/0.1 (quote-pipeline)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join appends "posts" rather than replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |reason: String| BlotatoError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let posts_url = Url::parse(&normalised)
            .map_err(|e| invalid(e.to_string()))?
            .join("posts")
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            account_id: account_id.to_owned(),
            posts_url,
        })
    }

    /// Tries to produce a publicly reachable URL for a local image file.
    ///
    /// The `/media` endpoint accepts JSON carrying an already-hosted URL, not
    /// raw file bytes, so a local path cannot be attached directly; this step
    /// always yields `None` for local files and logs the limitation. Posting
    /// then degrades gracefully to text-only.
    #[must_use]
    pub fn attach_media(&self, image_path: &Path) -> Option<String> {
        if let Ok(metadata) = std::fs::metadata(image_path) {
            if metadata.len() > MAX_MEDIA_BYTES {
                tracing::warn!(
                    path = %image_path.display(),
                    byte_size = metadata.len(),
                    limit = MAX_MEDIA_BYTES,
                    "image exceeds the platform media ceiling"
                );
            }
        }
        tracing::info!(
            path = %image_path.display(),
            "media endpoint accepts only already-hosted URLs; skipping attachment for local file"
        );
        None
    }

    /// Publishes a post, optionally with already-hosted media URLs attached.
    ///
    /// # Errors
    ///
    /// - [`BlotatoError::Auth`] on HTTP 401. The error message includes the
    ///   account id used, the key's length, and the response body, but never
    ///   the key value itself.
    /// - [`BlotatoError::Api`] on any other non-2xx status.
    /// - [`BlotatoError::Http`] on network-level failure.
    /// - [`BlotatoError::Deserialize`] if the success body is not JSON.
    pub async fn publish_post(
        &self,
        text: &str,
        media_urls: Vec<String>,
        platform: &str,
    ) -> Result<serde_json::Value, BlotatoError> {
        let payload = PostRequest {
            post: Post {
                account_id: self.account_id.clone(),
                content: PostContent {
                    text: text.to_owned(),
                    platform: platform.to_owned(),
                    media_urls,
                },
                target: PostTarget {
                    target_type: target_type(platform),
                },
            },
        };

        tracing::debug!(url = %self.posts_url, platform, "publishing post");
        let response = self
            .client
            .post(self.posts_url.clone())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(BlotatoError::Auth {
                account_id: self.account_id.clone(),
                api_key_len: self.api_key.len(),
                body,
            });
        }
        if !status.is_success() {
            return Err(BlotatoError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| BlotatoError::Deserialize {
            context: "posts".to_string(),
            source: e,
        })
    }

    /// Publishes a post with a rendered image when a hosted URL can be
    /// obtained for it.
    ///
    /// Composed two-step operation: [`Self::attach_media`] first, then
    /// [`Self::publish_post`] with the URL if one was produced, otherwise
    /// text-only with a logged warning. The degradation is deliberate and
    /// visible, not hidden inside the publish call.
    ///
    /// # Errors
    ///
    /// Same as [`Self::publish_post`]; the media step itself never fails.
    pub async fn publish_with_image(
        &self,
        text: &str,
        image_path: Option<&Path>,
        platform: &str,
    ) -> Result<serde_json::Value, BlotatoError> {
        let media_url = image_path.and_then(|path| self.attach_media(path));
        match media_url {
            Some(url) => self.publish_post(text, vec![url], platform).await,
            None => {
                if image_path.is_some() {
                    tracing::warn!("media attachment skipped; publishing text-only post");
                }
                self.publish_post(text, Vec::new(), platform).await
            }
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
