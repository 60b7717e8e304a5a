use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::{
    catalog::{
        aggregate::{CollectionDocument, aggregate},
        error::CatalogError,
        extract::TagExtractor,
        fallback::parse_filename,
        fs::list_audio_files,
        reconcile::reconcile,
        record::{OutputShape, TrackRecord, build_record},
    },
    config::{Collection, Config, Scan},
};

/// Result of one pass over the input directory, not yet written anywhere
#[derive(Debug)]
pub struct CatalogRun {
    pub document: CollectionDocument,
    /// files whose tags could not be read and were cataloged from their name alone
    pub failed_extractions: usize,
}

#[derive(Debug)]
pub struct BuildReport {
    pub run: CatalogRun,
    pub output: PathBuf,
    /// bytes written
    pub size: u64,
}

/// Main structure that drives a catalog build for one collection
pub struct Catalog<E> {
    collection: Collection,
    scan: Scan,
    extractor: E,
}

impl<E: TagExtractor> Catalog<E> {
    pub fn new(config: Config, extractor: E) -> Self {
        Self {
            collection: config.collection,
            scan: config.scan,
            extractor,
        }
    }

    /// Lists, extracts, reconciles and aggregates every file of the collection.
    ///
    /// Up to `max_open_files` files are read at once. Every listed file yields
    /// exactly one track, whether its tags could be read or not.
    pub fn assemble(&self, shape: OutputShape) -> Result<CatalogRun, CatalogError> {
        let files = list_audio_files(&self.collection.input_dir, &self.scan)?;
        info!(
            "Found {} {} files to process...",
            files.len(),
            self.scan.extension
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.scan.max_open_files.max(1))
            .build()?;
        let base_url = self.collection.base_url();

        let processed: Vec<(TrackRecord, bool)> = pool.install(|| {
            files
                .par_iter()
                .map(|path| self.process_file(path, shape, &base_url))
                .collect()
        });

        let failed_extractions = processed.iter().filter(|(_, ok)| !ok).count();
        let tracks = processed.into_iter().map(|(track, _)| track).collect();

        let document = aggregate(
            tracks,
            &self.collection.genre,
            &base_url,
            shape,
            Utc::now(),
        )?;

        Ok(CatalogRun {
            document,
            failed_extractions,
        })
    }

    /// Assembles the document and overwrites the configured output file with it
    pub fn build(&self, shape: OutputShape) -> Result<BuildReport, CatalogError> {
        let run = self.assemble(shape)?;
        let output = self.collection.output.clone();
        let size = write_document(&run.document, &output)?;

        Ok(BuildReport { run, output, size })
    }

    /// Runs one file through fallback, extraction, reconciliation and record building.
    /// The flag tells whether the tags were read.
    fn process_file(
        &self,
        path: &Path,
        shape: OutputShape,
        base_url: &str,
    ) -> (TrackRecord, bool) {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let tags = match self.extractor.extract(path) {
            Ok(tags) => Some(tags),
            Err(e) => {
                warn!("Error extracting metadata from {}: {e}", path.display());
                None
            }
        };
        let extracted = tags.is_some();

        let fields = reconcile(tags, parse_filename(&filename));
        match &fields.album {
            Some(album) => info!("Processed: {} - {} ({album})", fields.artist, fields.title),
            None => info!("Processed: {} - {}", fields.artist, fields.title),
        }

        let record = build_record(fields, shape, &filename, base_url);
        debug!("{filename} -> {}", record.id());
        (record, extracted)
    }
}

/// Serializes the document as pretty JSON, creating missing parent directories.
/// Returns the number of bytes written.
pub fn write_document(
    document: &CollectionDocument,
    path: &Path,
) -> Result<u64, CatalogError> {
    let output_err = |source| CatalogError::Output {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(output_err)?;
    }

    let json = serde_json::to_string_pretty(document)?;
    std::fs::write(path, &json).map_err(output_err)?;

    Ok(json.len() as u64)
}
