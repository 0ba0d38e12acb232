use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use scanboard::api::{self, AppState};
use scanboard::cli::{Cli, Commands};
use scanboard::config::Config;
use scanboard::source::{StaticContributions, StaticTransactions};
use scanboard::upstream::UpstreamClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    let client = UpstreamClient::new(&config.upstream_base_url)?;

    match cli.command {
        Commands::Serve { addr } => {
            let bind = addr.unwrap_or_else(|| config.http_bind_addr.clone());
            let state = AppState {
                analytics: Arc::new(client.clone()),
                transactions: Arc::new(StaticTransactions),
                contributions: Arc::new(StaticContributions),
                lookup: Arc::new(client),
            };
            api::run_http_server(&bind, state).await?;
        }
        Commands::CheckUpstream => {
            let counts = client
                .fetch_analytics_counts()
                .await
                .context("upstream check failed")?;
            println!("{}", serde_json::to_string_pretty(&counts)?);
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}
