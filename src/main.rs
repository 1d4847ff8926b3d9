use clap::Parser;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use solpower::Provider;
use solpower::core::config::{self, CliOverrides, SolpowerConfig};
use std::fs::File;

#[derive(Parser)]
#[command(name = "solpower", about = "SOLPOWER customer app for the terminal")]
struct Args {
    /// Tech-advice provider to use
    #[arg(short, long, value_enum)]
    provider: Option<Provider>,

    /// Model used for tech advice
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to solpower.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("solpower.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{e}; using defaults");
        SolpowerConfig::default()
    });
    let cli = CliOverrides {
        provider: args.provider.as_ref().map(|p| p.config_name().to_string()),
        model: args.model,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "SOLPOWER starting up with provider: {} (model: {}, key set: {})",
        resolved.provider,
        resolved.model,
        resolved.api_key.is_some()
    );

    solpower::tui::run(resolved)
}
