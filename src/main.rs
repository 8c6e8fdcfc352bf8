// src/main.rs
// QuickCalc - web calculator with optional per-session history

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use quickcalc::{api, config::CONFIG, history::HistoryStore, state::AppState};

#[derive(Parser)]
#[command(name = "quickcalc")]
#[command(about = "Minimal web calculator with per-session history")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server (default)
    Serve {
        /// Port to listen on (overrides CALC_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = CONFIG.log_level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let port = match cli.command {
        Some(Commands::Serve { port }) => port,
        None => None,
    }
    .unwrap_or(CONFIG.port);

    run_server(port).await
}

async fn run_server(port: u16) -> Result<()> {
    info!("Starting QuickCalc");

    // Best-effort persistence: without a database the app still calculates,
    // it just keeps no history.
    let history = match HistoryStore::connect(&CONFIG.database_url).await {
        Ok(store) => {
            info!("History store ready ({})", CONFIG.database_url);
            Some(store)
        }
        Err(e) => {
            warn!("History store unavailable, running stateless: {e:#}");
            None
        }
    };

    let state = Arc::new(AppState::new(history));
    let app = api::http::router(state);

    let bind_address = format!("{}:{}", CONFIG.host, port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Calculator listening on http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
