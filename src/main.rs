//! group-export CLI
//!
//! Lists groups or exports group members from the Graph API

use clap::Parser;
use group_export::cli::{report_error, Cli, Runner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging on stderr so it never mixes with tables
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        let _ = report_error(&e, &mut std::io::stderr());
        std::process::exit(e.exit_code());
    }
}
