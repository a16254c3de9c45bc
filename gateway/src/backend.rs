//! Backends the gateway can route GCD requests to.
//!
//! [`GrpcBackend`] talks to a remote gcd-service; [`InProcessBackend`]
//! calls the gcd-service crate directly without network overhead.

use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use tonic::{Code, Status};

use error::{AppError, Result};
use gcd_service::GcdCalculator;
use proto::gcd_service_client::GcdServiceClient;
use proto::{GcdRequest, HealthCheckRequest};

use crate::config::GatewayConfig;

/// Health reported by a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendHealth {
    pub healthy: bool,
    pub version: String,
}

/// Trait for compute backends.
#[async_trait]
pub trait GcdBackend: Send + Sync {
    /// Compute gcd(a, b)
    async fn compute(&self, a: u64, b: u64) -> Result<u64>;

    /// Check the backend is reachable and healthy
    async fn health(&self) -> Result<BackendHealth>;
}

/// Map a gRPC status onto the gateway's error taxonomy.
pub fn map_status(status: Status) -> AppError {
    let message = if status.message().is_empty() {
        status.code().description().to_string()
    } else {
        status.message().to_string()
    };

    match status.code() {
        Code::InvalidArgument | Code::OutOfRange => AppError::InvalidArgument(message),
        Code::Unavailable => AppError::Unavailable(message),
        Code::DeadlineExceeded | Code::Cancelled => AppError::Timeout(message),
        _ => AppError::Upstream(message),
    }
}

/// gRPC client backend
#[derive(Debug, Clone)]
pub struct GrpcBackend {
    inner: GcdServiceClient<Channel>,
}

impl GrpcBackend {
    /// Build a lazily connected client.
    ///
    /// No connection is attempted until the first call, so the gateway can
    /// start before the compute service is up.
    pub fn connect_lazy(config: &GatewayConfig) -> std::result::Result<Self, tonic::transport::Error> {
        let endpoint = Endpoint::from_shared(config.gcd_service_url.clone())?
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout());

        Ok(Self {
            inner: GcdServiceClient::new(endpoint.connect_lazy()),
        })
    }
}

#[async_trait]
impl GcdBackend for GrpcBackend {
    async fn compute(&self, a: u64, b: u64) -> Result<u64> {
        let mut client = self.inner.clone();

        let response = client
            .compute(GcdRequest { a, b })
            .await
            .map_err(map_status)?;

        Ok(response.into_inner().result)
    }

    async fn health(&self) -> Result<BackendHealth> {
        let mut client = self.inner.clone();

        let response = client
            .health_check(HealthCheckRequest {})
            .await
            .map_err(map_status)?
            .into_inner();

        Ok(BackendHealth {
            healthy: response.healthy,
            version: response.version,
        })
    }
}

/// InProcess backend calling the gcd-service crate directly
#[derive(Debug, Clone, Default)]
pub struct InProcessBackend {
    calculator: GcdCalculator,
}

impl InProcessBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GcdBackend for InProcessBackend {
    async fn compute(&self, a: u64, b: u64) -> Result<u64> {
        Ok(self.calculator.compute(a, b))
    }

    async fn health(&self) -> Result<BackendHealth> {
        Ok(BackendHealth {
            healthy: true,
            version: format!("{} (in-process)", env!("CARGO_PKG_VERSION")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_status() {
        assert!(matches!(
            map_status(Status::invalid_argument("bad")),
            AppError::InvalidArgument(m) if m == "bad"
        ));
        assert!(matches!(
            map_status(Status::unavailable("down")),
            AppError::Unavailable(_)
        ));
        assert!(matches!(
            map_status(Status::deadline_exceeded("slow")),
            AppError::Timeout(_)
        ));
        assert!(matches!(
            map_status(Status::cancelled("Timeout expired")),
            AppError::Timeout(_)
        ));
        assert!(matches!(
            map_status(Status::internal("")),
            AppError::Upstream(m) if !m.is_empty()
        ));
    }

    #[tokio::test]
    async fn test_in_process_backend() {
        let backend = InProcessBackend::new();
        assert_eq!(backend.compute(48, 18).await.unwrap(), 6);
        assert_eq!(backend.compute(0, 0).await.unwrap(), 0);
        assert!(backend.health().await.unwrap().healthy);
    }

    #[test]
    fn test_invalid_url_rejected() {
        let config = GatewayConfig {
            gcd_service_url: "not a uri".to_string(),
            ..GatewayConfig::default()
        };
        assert!(GrpcBackend::connect_lazy(&config).is_err());
    }

    #[tokio::test]
    async fn test_lazy_connect_does_not_dial() {
        // Building the client must succeed even though nothing listens here.
        let config = GatewayConfig {
            gcd_service_url: "http://127.0.0.1:9".to_string(),
            ..GatewayConfig::default()
        };
        assert!(GrpcBackend::connect_lazy(&config).is_ok());
    }
}
