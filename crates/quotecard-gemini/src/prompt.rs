//! Prompt construction for quote generation.

const SAMPLE_PHILOSOPHERS: &str = "Marcus Aurelius, Nietzsche, Seneca, Kant, Plato, Aristotle, Epictetus, Schopenhauer, Camus, Sartre";

const JSON_SHAPE: &str = r#"{
  "quote": "the actual quote text",
  "author": "philosopher name",
  "context": "brief context about the quote or philosopher (1-2 sentences)"
}"#;

/// Builds the generation prompt.
///
/// A missing topic, or the literal `"random"` (any casing), asks for a quote
/// from an unnamed famous Western philosopher with a sample list as guidance.
/// Anything else asks for a quote attributed to that name.
pub(crate) fn build_prompt(topic: Option<&str>) -> String {
    match topic {
        Some(name) if !name.eq_ignore_ascii_case("random") => format!(
            "Generate a profound quote from {name}, a famous Western philosopher.\n\
             Return ONLY raw JSON (no markdown, no code blocks) with the following structure:\n\
             {JSON_SHAPE}"
        ),
        _ => format!(
            "Generate a profound quote from a famous Western philosopher (e.g., {SAMPLE_PHILOSOPHERS}).\n\
             Return ONLY raw JSON (no markdown, no code blocks) with the following structure:\n\
             {JSON_SHAPE}"
        ),
    }
}
