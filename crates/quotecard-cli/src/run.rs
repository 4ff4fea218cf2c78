//! The single-run pipeline: generate a quote, render the card, publish.

use std::path::PathBuf;

use anyhow::Context;

use quotecard_blotato::BlotatoClient;
use quotecard_core::Config;
use quotecard_gemini::GeminiClient;
use quotecard_render::CardRenderer;

/// Command-line overrides applied on top of the environment configuration.
#[derive(Debug, Default)]
pub(crate) struct Overrides {
    pub topic: Option<String>,
    pub platform: Option<String>,
    pub output: Option<PathBuf>,
    pub templates_dir: Option<PathBuf>,
}

/// Runs the three pipeline stages strictly in sequence. Any failure aborts
/// the run; a card rendered before a publish failure stays on disk with its
/// path in the error context.
pub(crate) async fn run(config: &Config, overrides: Overrides) -> anyhow::Result<()> {
    let platform = overrides
        .platform
        .unwrap_or_else(|| config.platform.clone());
    let output = overrides
        .output
        .unwrap_or_else(|| config.output_path.clone());
    let templates_dir = overrides
        .templates_dir
        .unwrap_or_else(|| config.templates_dir.clone());

    let gemini = GeminiClient::new(
        &config.gemini_api_key,
        &config.gemini_model,
        config.http_timeout_secs,
    )
    .context("constructing Gemini client")?;
    let blotato = BlotatoClient::new(
        &config.blotato_api_key,
        &config.blotato_account_id,
        config.http_timeout_secs,
    )
    .context("constructing Blotato client")?;
    let renderer = CardRenderer::new(Some(templates_dir));

    tracing::info!(
        topic = overrides.topic.as_deref().unwrap_or("random"),
        "generating philosophical quote"
    );
    let quote = gemini
        .generate_quote(overrides.topic.as_deref())
        .await
        .context("generating quote")?;
    println!("Quote by {}:", quote.author);
    println!("\"{}\"", quote.text);
    if !quote.context.is_empty() {
        println!("\nContext: {}", quote.context);
    }

    tracing::info!("rendering quote card");
    let card = renderer
        .render(&quote.text, &quote.author, &output)
        .context("rendering quote card")?;
    println!("\nImage saved to: {}", card.path.display());

    let post_text = quote.post_text();
    tracing::info!(platform = %platform, "publishing post");
    let response = blotato
        .publish_with_image(&post_text, Some(&card.path), &platform)
        .await
        .with_context(|| {
            format!(
                "publishing post (rendered card left at {})",
                card.path.display()
            )
        })?;

    println!("\nSuccessfully published post!");
    println!("Response: {response}");
    Ok(())
}
