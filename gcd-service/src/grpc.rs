//! gRPC server implementation for the GCD service
//!
//! Handles gRPC requests and delegates to [`GcdCalculator`].

use std::sync::Arc;

use tonic::{Request, Response, Status};

use proto::gcd_service_server::GcdService;
use proto::{GcdRequest, GcdResponse, HealthCheckRequest, HealthCheckResponse};

use crate::service::GcdCalculator;

/// gRPC service implementation that wraps the domain calculator.
#[derive(Debug, Clone)]
pub struct GcdServiceImpl {
    calculator: Arc<GcdCalculator>,
    version: String,
}

impl GcdServiceImpl {
    pub fn new(calculator: Arc<GcdCalculator>, version: impl Into<String>) -> Self {
        Self {
            calculator,
            version: version.into(),
        }
    }
}

impl Default for GcdServiceImpl {
    fn default() -> Self {
        Self::new(Arc::new(GcdCalculator::new()), env!("CARGO_PKG_VERSION"))
    }
}

#[tonic::async_trait]
impl GcdService for GcdServiceImpl {
    async fn compute(&self, request: Request<GcdRequest>) -> Result<Response<GcdResponse>, Status> {
        let GcdRequest { a, b } = request.into_inner();
        let result = self.calculator.compute(a, b);
        Ok(Response::new(GcdResponse { result }))
    }

    async fn health_check(
        &self,
        _request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        tracing::debug!("GCD health check requested");
        Ok(Response::new(HealthCheckResponse {
            healthy: true,
            version: self.version.clone(),
        }))
    }
}
