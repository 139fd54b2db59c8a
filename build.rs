use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Puts `memory.x` on the linker search path of everything that links
/// the board layer, the testsuite included.
fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=memory.x");

    if env::var_os("CARGO_FEATURE_BOARD").is_none() {
        return Ok(());
    }

    let out = PathBuf::from(env::var_os("OUT_DIR").ok_or("OUT_DIR is not set")?);
    fs::write(out.join("memory.x"), include_bytes!("memory.x"))?;
    println!("cargo:rustc-link-search={}", out.display());

    Ok(())
}
