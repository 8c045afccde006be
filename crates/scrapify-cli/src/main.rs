mod export;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "scrapify")]
#[command(about = "Export a storefront's product catalog to CSV")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape every product in the store's public feed and write a CSV file
    Run {
        /// Store root URL (e.g. <https://shop.example.com>)
        #[arg(short, long)]
        target: Option<String>,

        /// Also fetch per-variant inventory data, writing one row per variant
        #[arg(short, long)]
        variants: bool,

        /// Output file (defaults to `SCRAPIFY_OUTPUT_PATH`, then `products.csv`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Run {
            target: Some(target),
            variants,
            output,
        }) => {
            // Config is only needed for an actual run; usage and help must
            // exit 0 even with a malformed environment.
            let config = scrapify_core::load_app_config()?;
            init_tracing(&config.log_level)?;

            let store_url = scrapify_scraper::normalize_store_url(&target)?;
            let run = scrapify_core::RunConfig::new(store_url, variants);
            let output = output.unwrap_or_else(|| config.output_path.clone());
            export::run(&config, run, &output).await?;
        }
        Some(Commands::Run { target: None, .. }) => print_run_usage(),
        None => Cli::command().print_help()?,
    }

    Ok(())
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}

/// A missing `--target` is not an error: print usage and exit 0.
fn print_run_usage() {
    let mut cmd = Cli::command();
    if let Some(run) = cmd.find_subcommand_mut("run") {
        println!("{}", run.render_usage());
    }
}
