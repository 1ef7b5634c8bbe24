use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use demo_analytics_dashboard::{app::AppState, config::Config};

/// Scripted demo run standing in for the page's event wiring.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Fixed RNG seed for reproducible chart data
    #[arg(long)]
    seed: Option<u64>,

    /// Data type to switch every chart to ("sales", "users", "revenue", "conversion")
    #[arg(long)]
    data_type: Option<String>,

    /// Session mirror file path
    #[arg(long)]
    store_path: Option<PathBuf>,

    /// Number of charts to add beyond the default one
    #[arg(long, default_value_t = 2)]
    extra_charts: usize,

    /// Log out at the end instead of keeping the session for the next run
    #[arg(long)]
    logout: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    if args.seed.is_some() {
        config.charts.seed = args.seed;
    }
    if let Some(path) = args.store_path {
        config.store.path = path;
    }

    // Initialize logging
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Demo analytics dashboard starting..."
    );

    let state = Arc::new(AppState::new(config)?);

    // Adopt a session from a previous run, or log in as the demo user
    let view = state.session.restore().await;
    if !view.is_authenticated() {
        match state.session.login("demo@example.com", "hunter2").await {
            Ok(session) => info!(user = %session.name, "logged in"),
            Err(e) => error!(error = %e, "login failed"),
        }
    }

    for _ in 0..args.extra_charts {
        let id = state.charts.add_entry();
        info!(chart = %id, "chart added");
    }

    if let Some(data_type) = &args.data_type {
        state.charts.set_data_type(data_type)?;
    }
    state.charts.refresh_all();

    info!(
        charts = state.charts.len(),
        data_type = state.charts.data_type(),
        authenticated = state.session.view_state().is_authenticated(),
        "demo complete"
    );

    if args.logout {
        state.session.logout().await;
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        demo_analytics_dashboard::config::LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        demo_analytics_dashboard::config::LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
