//! Assembling the collection document from per-track records

use std::collections::HashSet;

use chrono::{DateTime, SecondsFormat, Utc};
use icu_collator::{Collator, CollatorOptions};
use serde::Serialize;

use crate::catalog::{
    error::CatalogError,
    record::{OutputShape, TrackRecord},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionDocument {
    pub genre: String,
    pub total_tracks: usize,
    pub base_url: String,
    /// RFC 3339 timestamp of when the document was assembled
    pub last_updated: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<CollectionStats>,
    pub tracks: Vec<TrackRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectionStats {
    pub total_tracks: usize,
    pub tracks_with_album_art: usize,
    /// exact match, no case folding
    pub unique_artists: usize,
    pub unique_albums: usize,
}

impl CollectionStats {
    pub fn compute(tracks: &[TrackRecord]) -> Self {
        Self {
            total_tracks: tracks.len(),
            tracks_with_album_art: tracks.iter().filter(|t| t.has_album_art()).count(),
            unique_artists: tracks
                .iter()
                .map(|t| t.artist())
                .collect::<HashSet<_>>()
                .len(),
            unique_albums: tracks
                .iter()
                .filter_map(|t| t.album())
                .collect::<HashSet<_>>()
                .len(),
        }
    }
}

/// Sorts by artist then title in the root-locale collation order. Strings the
/// collator considers equal fall back to their exact code points. Identical
/// pairs keep their arrival order.
pub fn sort_tracks(tracks: &mut [TrackRecord]) -> Result<(), CatalogError> {
    let collator = Collator::try_new(&Default::default(), CollatorOptions::new())?;
    let collate = |a: &str, b: &str| collator.compare(a, b).then_with(|| a.cmp(b));

    tracks.sort_by(|a, b| {
        collate(a.artist(), b.artist()).then_with(|| collate(a.title(), b.title()))
    });
    Ok(())
}

/// Builds the final document. Stats are only part of the basic shape.
pub fn aggregate(
    mut tracks: Vec<TrackRecord>,
    genre: &str,
    base_url: &str,
    shape: OutputShape,
    generated_at: DateTime<Utc>,
) -> Result<CollectionDocument, CatalogError> {
    sort_tracks(&mut tracks)?;

    let stats = match shape {
        OutputShape::Basic => Some(CollectionStats::compute(&tracks)),
        OutputShape::Full => None,
    };

    Ok(CollectionDocument {
        genre: genre.to_string(),
        total_tracks: tracks.len(),
        base_url: base_url.to_string(),
        last_updated: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        stats,
        tracks,
    })
}
