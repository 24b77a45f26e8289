use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use dataset_staging::services::staging;

#[derive(Parser)]
#[command(
    name = "dataset-staging",
    about = "Offline staging utilities for an image classification dataset"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract a 7z dataset archive, flattening one redundant wrapper folder
    Extract {
        /// Path to the .7z archive
        archive: PathBuf,
        /// Destination directory, created if absent
        #[arg(long)]
        into: PathBuf,
    },
    /// Copy images into per-class folders driven by a label table
    Organize {
        /// CSV file with `id` and `label` columns
        labels: PathBuf,
        /// Flat directory holding one `<id>.png` per identifier
        #[arg(long)]
        images: PathBuf,
        /// Root of the per-class output tree, created if absent
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Extract { archive, into } => {
            let report = staging::extract_archive(&archive, &into)?;
            log::info!(
                "Extracted {} files{}",
                report.files_extracted,
                report
                    .flattened_wrapper
                    .map(|w| format!(" (removed wrapper '{w}')"))
                    .unwrap_or_default()
            );
        }
        Command::Organize { labels, images, out } => {
            let report = staging::prepare_folder_structure(&labels, &images, &out)?;
            log::info!(
                "Organized {} images by class, {} missing",
                report.files_copied,
                report.missing_ids.len()
            );
        }
    }
    Ok(())
}
