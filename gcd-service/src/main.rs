//! GCD service entry point

use std::sync::Arc;

use tonic::transport::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gcd_service::{GcdCalculator, GcdServiceConfig, GcdServiceImpl};
use proto::gcd_service_server::GcdServiceServer;

async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gcd_service=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = GcdServiceConfig::from_env();
    tracing::info!("Starting GCD service v{}", config.version);

    let addr = config.socket_addr()?;
    tracing::info!("gRPC server listening on {}", addr);

    let service = GcdServiceImpl::new(Arc::new(GcdCalculator::new()), config.version.clone());

    let reflection_service = if config.reflection {
        Some(
            tonic_reflection::server::Builder::configure()
                .register_encoded_file_descriptor_set(proto::FILE_DESCRIPTOR_SET)
                .build_v1()?,
        )
    } else {
        None
    };

    Server::builder()
        .add_optional_service(reflection_service)
        .add_service(GcdServiceServer::new(service))
        .serve_with_shutdown(addr, async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}

fn print_help() {
    println!("GCD Service - Euclidean GCD over gRPC");
    println!();
    println!("Usage:");
    println!("  gcd-service              Run the gRPC server");
    println!("  gcd-service run          Run the gRPC server");
    println!();
    println!("Environment Variables:");
    println!("  GCD_GRPC_ADDR            gRPC listen address (default: 0.0.0.0:3000)");
    println!("  GCD_REFLECTION           Register gRPC reflection (default: true)");
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
