//! subboard CLI entry point.

use clap::Parser;
use subboard_client::cli::{Cli, Commands, OutputFormat};
use subboard_client::client::MonitorClient;
use subboard_client::output::{format_output, pretty};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "subboard=warn".into()),
        )
        .init();

    let client = MonitorClient::new(&cli.base_url);

    match cli.command {
        Commands::Query(query_cmd) => {
            let identity = query_cmd.identity();
            let options = query_cmd.options();

            if !cli.quiet {
                eprintln!("Querying monitor board for {}...", identity.school_name);
            }

            let payload = client.retrieve_timetable(&identity, &options).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&payload, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_payload(&payload)),
            }
        }
    }

    Ok(())
}
