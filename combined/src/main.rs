//! Pantry application entry point.
//!
//! Embeds the user and pantry services in one process and dispatches CLI
//! commands to them.

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use common::LogConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&LogConfig::from_env(cli.verbose));

    let result = match cli.command {
        Commands::Migrate(args) => commands::migrate::execute(args).await.map(|_| true),
        Commands::Users(args) => commands::users::execute(args).await,
        Commands::Pantry(args) => commands::pantry::execute(args).await,
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!(code = e.code(), "Command failed: {}", e);
            eprintln!("{}: {}", e.code(), e.user_message());
            std::process::exit(1);
        }
    }
}

/// Initialize tracing subscriber
fn init_tracing(config: &LogConfig) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(&config.filter))
        .init();
}
