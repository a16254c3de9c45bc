//! Gateway main entry point
//!
//! Serves the HTTP API and relays GCD requests to the compute service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_lib::{http, GatewayConfig, ServiceRouter, DEFAULT_LOG_FILTER};

async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = GatewayConfig::from_env();
    tracing::info!("Starting Gateway v{}", config.version);

    let router = Arc::new(ServiceRouter::from_config(&config)?);
    let app = http::app(router, config.version.clone());

    let listener = TcpListener::bind(&config.http_addr).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}

fn print_help() {
    println!("Gateway - HTTP front end for the GCD service");
    println!();
    println!("Usage:");
    println!("  gateway                  Run the HTTP server");
    println!("  gateway run              Run the HTTP server");
    println!();
    println!("Endpoints:");
    println!("  GET /gcd/:a/:b           Compute gcd(a, b)");
    println!("  GET /health              Gateway and GCD service health");
    println!();
    println!("Environment Variables:");
    println!("  GATEWAY_HTTP_ADDR        HTTP listen address (default: 0.0.0.0:3000)");
    println!("  GCD_SERVICE_URL          GCD service URL (default: http://gcd-service:3000)");
    println!("  GCD_CONNECT_TIMEOUT_SECS gRPC connect timeout (default: 5)");
    println!("  GCD_REQUEST_TIMEOUT_SECS gRPC request deadline (default: 10)");
    println!("  GCD_BACKEND              grpc | inprocess (default: grpc)");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("run") => {}
        Some("--help") | Some("-h") => {
            print_help();
            return Ok(());
        }
        Some(other) => {
            eprintln!("Unknown argument: {}", other);
            print_help();
            std::process::exit(2);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server())
}
