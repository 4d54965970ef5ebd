use clap::Parser;
use std::io;
use std::path::PathBuf;
use todoz::api::TodozApi;
use todoz::config::TodozConfig;
use todoz::error::Result;
use todoz::store::fs::FileStore;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod cli;

use args::Cli;
use cli::Session;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = cli.config.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = TodozConfig::load(&config_dir)?.with_overrides(cli.file, cli.page_size);
    config.validate()?;
    debug!(file = %config.file.display(), page_size = config.page_size, "config resolved");

    let store = FileStore::new(&config.file);
    let api = TodozApi::open(store, config.page_size)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(api, stdin.lock(), stdout.lock()).run()
}

fn init_logging(verbose: bool) {
    let default = if verbose { "todoz=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}
