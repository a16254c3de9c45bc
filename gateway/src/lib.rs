//! Gateway library
//!
//! HTTP front end that relays GCD requests to the compute service, either
//! over gRPC or through InProcess calls.

pub mod backend;
pub mod config;
pub mod http;
pub mod router;

/// `EnvFilter` directives used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "gateway=info,gateway_lib=info";

pub use backend::{BackendHealth, GcdBackend, GrpcBackend, InProcessBackend};
pub use config::{BackendKind, GatewayConfig};
pub use router::ServiceRouter;
