mod persist;
mod pipeline;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use racecal_core::AppConfig;

use crate::pipeline::RunSummary;

#[derive(Debug, Parser)]
#[command(name = "racecal")]
#[command(about = "Scrape the race schedule, geocode each venue, and write the calendar as JSON")]
struct Cli {
    /// Output file; overrides `RACECAL_OUTPUT_PATH`.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the calendar to stdout instead of writing the output file.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = racecal_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    execute(&cli, &config)?;
    Ok(())
}

/// Runs the pipeline and writes (or prints) the result.
///
/// Nothing is written unless the whole pipeline succeeded.
fn execute(cli: &Cli, config: &AppConfig) -> anyhow::Result<RunSummary> {
    let output = pipeline::run(config)?;
    output.summary.log();

    if cli.dry_run {
        println!("{}", serde_json::to_string_pretty(&output.events)?);
    } else {
        let path = cli.output.as_deref().unwrap_or(&config.output_path);
        persist::write_events(path, &output.events)?;
        tracing::info!(
            path = %path.display(),
            events = output.events.len(),
            "calendar written"
        );
    }

    Ok(output.summary)
}
