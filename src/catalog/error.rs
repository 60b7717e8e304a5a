use std::path::PathBuf;

use thiserror::Error;

/// Failure to read tags from one file. The file still ends up in the catalog.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("tag parsing error: {0}")]
    Tags(#[from] lofty::error::LoftyError),

    #[error("unsupported file: {0}")]
    Unsupported(String),
}

/// Failure that aborts the whole run
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to list input directory {path}: {source}")]
    InputDir {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to load collation data: {0}")]
    Collation(#[from] icu_collator::CollatorError),

    #[error("failed to start extraction workers: {0}")]
    Workers(#[from] rayon::ThreadPoolBuildError),
}
