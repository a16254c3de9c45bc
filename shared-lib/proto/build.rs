fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/gcd.proto");

    // Both sides of the wire live in this crate: the compute service uses
    // the server stubs, the gateway uses the client.
    #[allow(unused_mut)]
    let mut config = tonic_build::configure()
        .build_server(true)
        .build_client(true);

    // Enable file descriptor set for reflection if the feature is enabled
    #[cfg(feature = "reflection")]
    {
        let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR")?);
        config = config.file_descriptor_set_path(out_dir.join("gcd_descriptor.bin"));
    }

    config.compile_protos(&["proto/gcd.proto"], &["proto"])?;

    Ok(())
}
