//! Turns raw model output into a validated [`Quote`].

use quotecard_core::Quote;

use crate::error::GeminiError;
use crate::types::QuotePayload;

/// Removes markdown code-fence markers the model sometimes wraps its JSON in,
/// despite the prompt asking for raw output.
pub(crate) fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parses the model's text output into a [`Quote`], validating that the
/// required fields are present and non-empty. This is the single schema
/// boundary: everything downstream trusts the `Quote`.
///
/// # Errors
///
/// - [`GeminiError::Parse`] if the text is not valid JSON after fence removal.
/// - [`GeminiError::MissingField`] if `quote` or `author` is absent or empty.
pub(crate) fn parse_quote(raw: &str) -> Result<Quote, GeminiError> {
    let cleaned = strip_code_fences(raw);
    let payload: QuotePayload =
        serde_json::from_str(&cleaned).map_err(|source| GeminiError::Parse { source })?;

    let text = payload
        .quote
        .filter(|q| !q.trim().is_empty())
        .ok_or(GeminiError::MissingField("quote"))?;
    let author = payload
        .author
        .filter(|a| !a.trim().is_empty())
        .ok_or(GeminiError::MissingField("author"))?;

    Ok(Quote {
        text,
        author,
        context: payload.context.unwrap_or_default(),
    })
}
