use clap::Parser;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use ttvpubsub_cli::config::{Args, Config};
use ttvpubsub_cli::decode::{decode_input, read_input};
use ttvpubsub_cli::output::render;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("ttvpubsub={}", level)))
        .unwrap_or_else(|_| EnvFilter::new("ttvpubsub=info"));
    // stdout is reserved for the decoded event.
    let sub = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(sub) {
        eprintln!("Failed to set global subscriber: {}", e);
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let args = Args::parse();

    let config = match Config::resolve(args) {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing("info");
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };
    init_tracing(&config.log_level);

    if let Err(e) = run(&config).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> anyhow::Result<()> {
    info!("ttvpubsub: input={:?} frame={} output={:?}", config.input, config.frame, config.output);

    let raw = read_input(&config.input).await?;
    if let Some(evt) = decode_input(&raw, config.frame)? {
        println!("{}", render(&evt, config.output)?);
    }
    Ok(())
}
