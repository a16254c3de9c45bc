use std::net::{AddrParseError, SocketAddr};

use serde::{Deserialize, Serialize};

/// GCD service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GcdServiceConfig {
    /// gRPC server address
    pub grpc_addr: String,

    /// Register the gRPC reflection service
    pub reflection: bool,

    /// Service version
    pub version: String,
}

impl Default for GcdServiceConfig {
    fn default() -> Self {
        Self {
            grpc_addr: "0.0.0.0:3000".to_string(),
            reflection: true,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl GcdServiceConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = lookup("GCD_GRPC_ADDR") {
            config.grpc_addr = addr;
        }

        if let Some(reflection) = lookup("GCD_REFLECTION") {
            match parse_flag(&reflection) {
                Some(enabled) => config.reflection = enabled,
                None => tracing::warn!(
                    "Ignoring GCD_REFLECTION={:?}, keeping {}",
                    reflection,
                    config.reflection
                ),
            }
        }

        config
    }

    /// Parsed gRPC listen address
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.grpc_addr.parse()
    }
}

/// Parse a boolean setting; `None` for anything unrecognised.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = GcdServiceConfig::default();
        assert_eq!(config.grpc_addr, "0.0.0.0:3000");
        assert!(config.reflection);
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> =
            HashMap::from([("GCD_GRPC_ADDR", "127.0.0.1:50051"), ("GCD_REFLECTION", "0")]);
        let config = GcdServiceConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.grpc_addr, "127.0.0.1:50051");
        assert!(!config.reflection);
    }

    #[test]
    fn test_socket_addr() {
        let config = GcdServiceConfig::default();
        assert_eq!(config.socket_addr().unwrap().port(), 3000);

        let config = GcdServiceConfig {
            grpc_addr: "gcd-service:3000".to_string(),
            ..GcdServiceConfig::default()
        };
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_reflection_flag_values() {
        let with = |value: &str| {
            GcdServiceConfig::from_lookup(|k| (k == "GCD_REFLECTION").then(|| value.to_string()))
                .reflection
        };
        assert!(with("yes"));
        assert!(with("TRUE"));
        assert!(!with("off"));
        assert!(!with("No"));
        // Unrecognised values keep the default instead of disabling reflection
        assert!(with("maybe"));
        assert!(with(""));
    }
}
