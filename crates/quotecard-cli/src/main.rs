mod run;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "quotecard")]
#[command(about = "Generates a philosophical quote card and publishes it to social media")]
struct Cli {
    /// Philosopher to quote, or "random" to let the model pick one.
    #[arg(long)]
    topic: Option<String>,

    /// Target platform for the post. Overrides QUOTECARD_PLATFORM.
    #[arg(long)]
    platform: Option<String>,

    /// Where to write the rendered card. Overrides QUOTECARD_OUTPUT_PATH.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Directory of background templates. Overrides QUOTECARD_TEMPLATES_DIR.
    #[arg(long)]
    templates_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = quotecard_core::load_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    run::run(
        &config,
        run::Overrides {
            topic: cli.topic,
            platform: cli.platform,
            output: cli.output,
            templates_dir: cli.templates_dir,
        },
    )
    .await
}
