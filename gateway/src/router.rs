//! Service Router
//!
//! Routes GCD requests to the configured backend, either over gRPC or via
//! InProcess calls into the gcd-service crate.

use std::sync::Arc;

use error::Result;

use crate::backend::{BackendHealth, GcdBackend, GrpcBackend, InProcessBackend};
use crate::config::{BackendKind, GatewayConfig};

/// Service router that owns the compute backend
#[derive(Clone)]
pub struct ServiceRouter {
    backend: Arc<dyn GcdBackend>,
}

impl ServiceRouter {
    pub fn new(backend: Arc<dyn GcdBackend>) -> Self {
        Self { backend }
    }

    /// Router that computes in-process
    pub fn in_process() -> Self {
        Self::new(Arc::new(InProcessBackend::new()))
    }

    /// Build the backend selected by configuration
    pub fn from_config(config: &GatewayConfig) -> std::result::Result<Self, tonic::transport::Error> {
        let router = match config.backend {
            BackendKind::Grpc => {
                tracing::info!("Routing GCD requests to {}", config.gcd_service_url);
                Self::new(Arc::new(GrpcBackend::connect_lazy(config)?))
            }
            BackendKind::InProcess => {
                tracing::info!("Routing GCD requests in-process");
                Self::in_process()
            }
        };
        Ok(router)
    }

    /// Compute gcd(a, b) on the backend
    pub async fn compute(&self, a: u64, b: u64) -> Result<u64> {
        self.backend.compute(a, b).await
    }

    /// Health of the backend
    pub async fn backend_health(&self) -> Result<BackendHealth> {
        self.backend.health().await
    }
}

impl Default for ServiceRouter {
    fn default() -> Self {
        Self::in_process()
    }
}
