use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use komuniteti::directory::{DirectorySeed, InMemoryDirectory};
use komuniteti::{routes, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "-help" || arg == "--help") {
        println!("Usage: komuniteti [OPTIONS]");
        println!("Options:");
        println!("  -config <path>  Path to configuration file (default: ./etc/komuniteti.toml)");
        println!("  -help, --help   Print this help message");
        return Ok(());
    }

    let config_path = args
        .iter()
        .skip_while(|arg| arg.as_str() != "-config")
        .nth(1)
        .map(|s| s.to_string())
        .unwrap_or_else(|| "./etc/komuniteti.toml".to_string());

    // Load configuration first (before logging init)
    let config = Config::load(&config_path).unwrap_or_else(|e| {
        eprintln!("Could not load config file: {}, using defaults", e);
        Config::default()
    });

    // Initialize logging
    // Priority: RUST_LOG env var > config file > default "info"
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    info!("Starting Komuniteti organization chart service...");
    info!("Loading configuration from: {}", config_path);

    let seed = match &config.directory.seed_file {
        Some(path) => {
            info!("Loading directory seed from: {}", path.display());
            DirectorySeed::load(path).map_err(|e| {
                tracing::error!("Directory seed failed to load: {}", e);
                anyhow::anyhow!("Directory seed failed to load: {}", e)
            })?
        }
        None => {
            info!("No directory seed configured, using built-in demo data");
            DirectorySeed::demo()
        }
    };
    info!(
        managers = seed.managers.len(),
        administrators = seed.administrators.len(),
        buildings = seed.buildings.len(),
        "Directory loaded"
    );

    let directory = Arc::new(InMemoryDirectory::new(seed, config.directory.latency()));
    let state = AppState::new(directory, config.clone());
    let app = routes::create_router(state);

    let addr: SocketAddr = match config.addr.parse() {
        Ok(addr) => addr,
        Err(_) => {
            tracing::warn!("Invalid address '{}', using default 0.0.0.0:8080", config.addr);
            SocketAddr::from(([0, 0, 0, 0], 8080))
        }
    };

    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
