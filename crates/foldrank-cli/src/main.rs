mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run_app().await {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook
        .install()
        .map_err(|e| CliError::Other(anyhow::anyhow!("{}", e)))?;
    let quiet = cli.quiet;
    std::panic::set_hook(Box::new(move |pi| {
        logging::emit_panic_report(&panic_hook.panic_report(pi), quiet, &mut std::io::stderr());
    }));

    info!("🚀 foldrank v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = commands::order::run(cli.order, !cli.quiet).await;

    match &command_result {
        Ok(_) => info!("✅ Ordering completed successfully."),
        Err(e) => error!("❌ Ordering failed: {}", e),
    }

    command_result
}
