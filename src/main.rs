use clap::Parser;
use log::{error, info};
use std::path::Path;
use std::process::ExitCode;

use coco_rescale::config::Args;
use coco_rescale::dataset::run;

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if !Path::new(&args.load_json_path).exists() {
        error!(
            "The specified load_json_path does not exist: {}",
            args.load_json_path
        );
        return ExitCode::FAILURE;
    }

    info!(
        "Starting dataset rescale to {0}x{0} (assumed source size {1})...",
        args.target_size, args.source_size
    );

    if let Err(e) = run(&args) {
        error!("Failed to rescale dataset: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Rescale process completed successfully.");
    ExitCode::SUCCESS
}
