use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod config;

pub use config::{load_config, load_config_from_env, Config};

/// A generated philosophical quote, parsed and validated from the model
/// response. Immutable for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    /// Brief context about the quote or philosopher. May be empty.
    pub context: String,
}

impl Quote {
    /// Composes the post body: quote, em-dash attribution, and the context
    /// paragraph when one was generated.
    #[must_use]
    pub fn post_text(&self) -> String {
        let mut text = format!("{}\n\n\u{2014} {}", self.text, self.author);
        if !self.context.is_empty() {
            text.push_str("\n\n");
            text.push_str(&self.context);
        }
        text
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
