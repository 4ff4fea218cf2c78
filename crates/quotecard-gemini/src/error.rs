use thiserror::Error;

/// Errors returned by the Gemini quote client.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-2xx status.
    #[error("Gemini API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// The response envelope could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response contained no candidate text at all.
    #[error("empty response: no candidate text returned")]
    EmptyResponse,

    /// The model's output was not valid JSON after stripping code fences.
    #[error("model output is not valid JSON: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// The model's JSON output lacked a required field.
    #[error("model output is missing required field: {0}")]
    MissingField(&'static str),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
