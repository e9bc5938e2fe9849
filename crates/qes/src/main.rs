use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use qes_core::{assemble_dataset, energy_loss_from_x, write_csv};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod download;

#[derive(Parser, Debug)]
#[command(author, version, about = "Quasielastic electron-nucleus scattering archive tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Download the archive data files
    Download(DownloadArgs),
    /// Merge downloaded .dat files into one CSV table
    Combine(CombineArgs),
}

#[derive(Args, Debug)]
struct DownloadArgs {
    /// Directory the data files are written to
    #[arg(long, default_value = "scrapped_data")]
    out_dir: PathBuf,

    /// Base URL of the archive data listing
    #[arg(long, default_value = download::ARCHIVE_BASE_URL)]
    base_url: String,
}

#[derive(Args, Debug)]
struct CombineArgs {
    /// Directory tree containing the downloaded .dat files
    #[arg(long, default_value = "scrapped_data")]
    input_dir: PathBuf,

    /// Path of the merged CSV table
    #[arg(long, default_value = "merged_table.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Download(args) => download::download_archive(&args.base_url, &args.out_dir),
        Command::Combine(args) => {
            let table = assemble_dataset(&args.input_dir)?;
            // Must run exactly once per assembled table; a second pass would
            // read the corrected values as x.
            let table = energy_loss_from_x(&table)?;
            write_csv(&table, &args.output)
                .with_context(|| format!("failed to write {}", args.output.display()))?;
            info!(output = %args.output.display(), "merged table written");
            Ok(())
        }
    }
}
