//! Build script for greeter-service.
//!
//! Compiles the protobuf definitions into Rust code using tonic-build and
//! emits the file descriptor set the reflection service serves.

use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    if env::var_os("PROTOC").is_none() {
        env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .file_descriptor_set_path(out_dir.join("helloworld_descriptor.bin"))
        .compile_protos(&["../../proto/helloworld.proto"], &["../../proto"])?;

    println!("cargo:rerun-if-changed=../../proto/helloworld.proto");

    Ok(())
}
