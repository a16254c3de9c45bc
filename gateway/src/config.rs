use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the gateway reaches the compute service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Remote gcd-service over gRPC
    Grpc,
    /// Direct call into the gcd-service crate
    InProcess,
}

#[derive(Debug, Error)]
#[error("unknown backend kind: {0} (expected `grpc` or `inprocess`)")]
pub struct UnknownBackend(String);

impl FromStr for BackendKind {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grpc" => Ok(BackendKind::Grpc),
            "inprocess" | "in-process" => Ok(BackendKind::InProcess),
            _ => Err(UnknownBackend(s.to_string())),
        }
    }
}

/// Gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// HTTP listen address
    pub http_addr: String,

    /// URL of the gcd-service gRPC endpoint
    pub gcd_service_url: String,

    /// Connect timeout for the gRPC channel, in seconds
    pub connect_timeout_secs: u64,

    /// Per-request deadline for gRPC calls, in seconds
    pub request_timeout_secs: u64,

    /// Backend used to compute results
    pub backend: BackendKind,

    /// Service version
    pub version: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            http_addr: "0.0.0.0:3000".to_string(),
            gcd_service_url: "http://gcd-service:3000".to_string(),
            connect_timeout_secs: 5,
            request_timeout_secs: 10,
            backend: BackendKind::Grpc,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl GatewayConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = lookup("GATEWAY_HTTP_ADDR") {
            config.http_addr = addr;
        }

        if let Some(url) = lookup("GCD_SERVICE_URL") {
            config.gcd_service_url = url;
        }

        if let Some(timeout) = lookup("GCD_CONNECT_TIMEOUT_SECS") {
            if let Ok(n) = timeout.parse() {
                config.connect_timeout_secs = n;
            }
        }

        if let Some(timeout) = lookup("GCD_REQUEST_TIMEOUT_SECS") {
            if let Ok(n) = timeout.parse() {
                config.request_timeout_secs = n;
            }
        }

        if let Some(backend) = lookup("GCD_BACKEND") {
            match backend.parse() {
                Ok(kind) => config.backend = kind,
                Err(e) => tracing::warn!("{}, using {:?}", e, config.backend),
            }
        }

        config
    }

    /// Get connect timeout as Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
