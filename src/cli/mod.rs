use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::extract::LoftyExtractor;
use crate::catalog::pipeline::{Catalog, CatalogRun};
use crate::catalog::record::OutputShape;
use crate::config;

#[derive(Parser)]
#[command(name = "trackdex")]
#[command(version = "0.1")]
#[command(about = "Builds a JSON catalog of a directory of audio files")]
pub struct Cli {
    /// Path to the config TOML file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the catalog and write it to the configured output file
    Build {
        /// Document shape, overrides the config
        #[arg(short, long, value_enum)]
        shape: Option<OutputShape>,
    },
    /// Build the catalog and print it instead of writing it
    Preview {
        /// Document shape, overrides the config
        #[arg(short, long, value_enum)]
        shape: Option<OutputShape>,
    },
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let cfg = config::Config::load(&cli.config)?;
    let default_shape = cfg.collection.shape;
    let catalog = Catalog::new(cfg, LoftyExtractor);

    match cli.command {
        Commands::Build { shape } => {
            let report = catalog
                .build(shape.unwrap_or(default_shape))
                .with_context(|| "Failed to build catalog")?;

            println!(
                "Successfully processed {} tracks!",
                report.run.document.total_tracks
            );
            println!("Output saved to: {}", report.output.display());
            println!("Total file size: {} bytes", report.size);
            print_summary(&report.run);
        }

        Commands::Preview { shape } => {
            let run = catalog
                .assemble(shape.unwrap_or(default_shape))
                .with_context(|| "Failed to assemble catalog")?;
            println!("{}", serde_json::to_string_pretty(&run.document)?);
        }
    }

    Ok(())
}

fn print_summary(run: &CatalogRun) {
    let doc = &run.document;
    let stats = crate::catalog::aggregate::CollectionStats::compute(&doc.tracks);

    println!();
    println!("Collection summary:");
    println!(
        "  Tracks with album art: {}/{}",
        stats.tracks_with_album_art, stats.total_tracks
    );
    println!("  Unique artists: {}", stats.unique_artists);
    println!("  Unique albums: {}", stats.unique_albums);
    if run.failed_extractions > 0 {
        println!(
            "  Cataloged from file name only: {}",
            run.failed_extractions
        );
    }
}
