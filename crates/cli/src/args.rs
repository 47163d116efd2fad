use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "llvm_version",
    version,
    about = "Extract the LLVM version from a CMakeLists.txt"
)]
pub struct Args {
    /// Path to llvm-project/llvm/CMakeLists.txt
    pub path: PathBuf,
}
