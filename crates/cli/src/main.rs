use clap::Parser;
use llvm_version_cli::args::Args;
use llvm_version_engine::error::EngineError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match llvm_version_engine::extract_version(&args.path) {
        Ok(version) => {
            println!("{version}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Show whatever was matched, with sentinels for the rest.
            if let EngineError::Extraction { partial } = &e {
                println!("{partial}");
            }
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
