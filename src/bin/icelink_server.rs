//! IceLink HTTP Server
//!
//! A standalone binary serving the public disclosure endpoint over an
//! in-memory backend seeded from a JSON dataset file.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use icelink::resolver::DisclosureService;
use icelink::storage::{Dataset, InMemoryStores};
use icelink::transport::{self, DEFAULT_RESOLVE_TIMEOUT};

/// Server configuration
struct Config {
    /// Address to bind to
    addr: SocketAddr,
    /// Seed dataset, if any
    data: Option<PathBuf>,
    /// Per-request resolution deadline
    resolve_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8787".parse().expect("static bind address"),
            data: None,
            resolve_timeout: DEFAULT_RESOLVE_TIMEOUT,
        }
    }
}

fn parse_args() -> Config {
    let args: Vec<String> = std::env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    let port: u16 = args[i + 1].parse().unwrap_or_else(|_| {
                        eprintln!("error: invalid port number: {}", args[i + 1]);
                        std::process::exit(1);
                    });
                    config.addr.set_port(port);
                    i += 2;
                } else {
                    eprintln!("error: --port requires a value");
                    std::process::exit(1);
                }
            }
            "--data" | "-d" => {
                if i + 1 < args.len() {
                    config.data = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    eprintln!("error: --data requires a value");
                    std::process::exit(1);
                }
            }
            "--resolve-timeout-ms" => {
                if i + 1 < args.len() {
                    let ms: u64 = args[i + 1].parse().unwrap_or_else(|_| {
                        eprintln!("error: invalid timeout: {}", args[i + 1]);
                        std::process::exit(1);
                    });
                    config.resolve_timeout = Duration::from_millis(ms);
                    i += 2;
                } else {
                    eprintln!("error: --resolve-timeout-ms requires a value");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("icelink-server - IceLink disclosure server");
                println!();
                println!("USAGE:");
                println!("    icelink-server [OPTIONS]");
                println!();
                println!("OPTIONS:");
                println!("    -p, --port <PORT>              Port to listen on [default: 8787]");
                println!("    -d, --data <FILE>              JSON dataset to seed the stores");
                println!("    --resolve-timeout-ms <MS>      Per-request deadline [default: 5000]");
                println!("    -h, --help                     Print help information");
                std::process::exit(0);
            }
            arg => {
                eprintln!("error: unknown argument: {arg}");
                std::process::exit(1);
            }
        }
    }

    config
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = parse_args();

    let stores = match &config.data {
        Some(path) => {
            let dataset = Dataset::from_json_file(path)?;
            info!(path = %path.display(), "seeding stores from dataset");
            InMemoryStores::from_dataset(dataset)?
        }
        None => InMemoryStores::default(),
    };

    let service = Arc::new(DisclosureService::new(
        Arc::new(stores.profiles),
        Arc::new(stores.contacts),
        Arc::new(stores.subscriptions),
    ));

    let app = transport::router(service, config.resolve_timeout);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    info!(addr = %config.addr, "disclosure server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = signal::ctrl_c().await;
        })
        .await?;

    info!("shut down");
    Ok(())
}
