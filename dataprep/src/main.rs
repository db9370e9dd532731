mod commands;
mod store;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use crate::store::DataDir;

#[derive(Parser, Debug)]
#[command(name = "dataprep")]
#[command(about = "Check and repair the dashboard's static JSON datasets")]
struct Args {
    /// Directory holding games_cleaned.json and friends
    #[arg(long, env = "DASHBOARD_DATA_DIR", default_value = "public/data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rebuild genres.json from the genres the catalog uses
    SyncGenres {
        /// Report missing genres without rewriting the file
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Rewrite game_tags.json keyed by appid with display tag names
    NormalizeTags {
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Load every dataset and report gaps
    Check,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let dir = DataDir::new(args.data_dir);
    info!("Using data directory {}", dir.root().display());

    match args.command {
        Command::SyncGenres { dry_run } => {
            let result = commands::sync_genres(&dir, dry_run)?;
            if !result.written {
                info!("Dry run: {} genres missing from the list", result.missing.len());
            }
        }
        Command::NormalizeTags { dry_run } => {
            let result = commands::normalize_tags(&dir, dry_run)?;
            if !result.written {
                info!("Dry run: {} tag names would be renamed across {} entries", result.renamed, result.entries);
            }
        }
        Command::Check => {
            let report = commands::check(&dir)?;
            if report.unreadable_review_files > 0 {
                bail!("{} review files could not be decoded", report.unreadable_review_files);
            }
        }
    }

    Ok(())
}
