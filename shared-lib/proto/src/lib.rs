//! Shared protobuf definitions for the GCD services
//!
//! Generated gRPC code for `proto/gcd.proto`. Enable the `reflection`
//! feature to get the encoded file descriptor set for server reflection.

/// GCD compute service definitions
pub mod gcd {
    tonic::include_proto!("gcd");
}

pub use gcd::*;

/// File descriptor set for gRPC reflection
#[cfg(feature = "reflection")]
pub const FILE_DESCRIPTOR_SET: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/gcd_descriptor.bin"));
