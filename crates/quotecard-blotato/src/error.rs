use thiserror::Error;

/// Errors returned by the Blotato posting client.
#[derive(Debug, Error)]
pub enum BlotatoError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API rejected the credentials. The message carries the account id,
    /// the key's length, and the response body — never the key itself.
    #[error(
        "authentication failed (401): verify BLOTATO_API_KEY and BLOTATO_ACCOUNT_ID \
         (account id {account_id}, API key length {api_key_len}); response: {body}"
    )]
    Auth {
        account_id: String,
        api_key_len: usize,
        body: String,
    },

    /// The API returned a non-2xx status other than 401.
    #[error("Blotato API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL could not be parsed.
    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
