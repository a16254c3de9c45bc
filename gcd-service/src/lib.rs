//! GCD Compute Service
//!
//! Stateless Euclidean GCD exposed over gRPC.

pub mod compute;
pub mod config;
pub mod grpc;
pub mod service;

pub use compute::gcd;
pub use config::GcdServiceConfig;
pub use grpc::GcdServiceImpl;
pub use service::GcdCalculator;
