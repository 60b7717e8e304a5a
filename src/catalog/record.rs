//! Public per-track records, in either of the two document shapes

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{id::TrackId, track::ReconciledFields},
    url::track_url,
};

const DEFAULT_ART_DESCRIPTION: &str = "Album Art";

/// Which document shape to emit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputShape {
    /// Flat records, artwork reduced to a flag, collection stats included
    #[default]
    Basic,
    /// Nested metadata with embedded base64 artwork, no stats
    Full,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TrackRecord {
    Basic(BasicTrack),
    Full(FullTrack),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicTrack {
    pub id: TrackId,
    pub artist: String,
    pub title: String,
    pub album: Option<String>,
    pub year: Option<u32>,
    pub genre: Option<String>,
    pub duration: Option<u64>,
    pub duration_formatted: Option<String>,
    pub bitrate: Option<u32>,
    pub has_album_art: bool,
    pub filename: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullTrack {
    pub id: TrackId,
    pub artist: String,
    pub title: String,
    pub filename: String,
    pub url: String,
    pub metadata: FullMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullMetadata {
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub year: Option<u32>,
    pub genre: Option<Vec<String>>,
    pub duration: Option<f64>,
    pub bitrate: Option<u32>,
    pub sample_rate: Option<u32>,
    pub album_art: Option<AlbumArt>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumArt {
    pub format: String,
    /// base64
    pub data: String,
    pub description: String,
}

impl TrackRecord {
    pub fn id(&self) -> &TrackId {
        match self {
            TrackRecord::Basic(t) => &t.id,
            TrackRecord::Full(t) => &t.id,
        }
    }

    pub fn artist(&self) -> &str {
        match self {
            TrackRecord::Basic(t) => &t.artist,
            TrackRecord::Full(t) => &t.artist,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            TrackRecord::Basic(t) => &t.title,
            TrackRecord::Full(t) => &t.title,
        }
    }

    pub fn album(&self) -> Option<&str> {
        match self {
            TrackRecord::Basic(t) => t.album.as_deref(),
            TrackRecord::Full(t) => t.metadata.album.as_deref(),
        }
    }

    pub fn has_album_art(&self) -> bool {
        match self {
            TrackRecord::Basic(t) => t.has_album_art,
            TrackRecord::Full(t) => t.metadata.album_art.is_some(),
        }
    }
}

/// Builds the public record of one track. Does no I/O.
pub fn build_record(
    fields: ReconciledFields,
    shape: OutputShape,
    filename: &str,
    base_url: &str,
) -> TrackRecord {
    let id = TrackId::new(&fields.artist, &fields.title);
    let url = track_url(base_url, filename);

    match shape {
        OutputShape::Basic => {
            let duration = fields.duration_secs.map(|d| d.max(0.0).round() as u64);
            TrackRecord::Basic(BasicTrack {
                id,
                album: fields.album,
                year: fields.year,
                genre: fields.genre.map(|g| g.join(", ")),
                duration,
                duration_formatted: format_duration(duration),
                bitrate: fields.bitrate,
                has_album_art: fields.artwork.is_some(),
                filename: filename.to_string(),
                url,
                artist: fields.artist,
                title: fields.title,
            })
        }
        OutputShape::Full => TrackRecord::Full(FullTrack {
            id,
            filename: filename.to_string(),
            url,
            metadata: FullMetadata {
                title: fields.title.clone(),
                artist: fields.artist.clone(),
                album: fields.album,
                year: fields.year,
                genre: fields.genre,
                duration: fields.duration_secs,
                bitrate: fields.bitrate,
                sample_rate: fields.sample_rate,
                album_art: fields.artwork.map(|art| AlbumArt {
                    format: art.format,
                    data: STANDARD.encode(&art.data),
                    description: art
                        .description
                        .unwrap_or_else(|| DEFAULT_ART_DESCRIPTION.to_string()),
                }),
            },
            artist: fields.artist,
            title: fields.title,
        }),
    }
}

/// `M:SS`, minutes are not wrapped into hours
pub fn format_duration(seconds: Option<u64>) -> Option<String> {
    seconds.map(|s| format!("{}:{:02}", s / 60, s % 60))
}
