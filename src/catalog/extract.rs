//! Reading embedded tags from audio files

use std::path::Path;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::picture::Picture;
use lofty::tag::{Accessor, ItemKey, Tag};
use log::debug;

use crate::{
    catalog::error::ExtractionError,
    domain::track::{Artwork, RawTags},
};

/// Reads a best-effort set of tags from a file.
///
/// Implementations are shared between extraction workers.
pub trait TagExtractor: Sync {
    fn extract(&self, path: &Path) -> Result<RawTags, ExtractionError>;
}

/// Extractor backed by lofty (ID3, Vorbis comments, MP4 atoms, ...)
#[derive(Debug, Default)]
pub struct LoftyExtractor;

impl TagExtractor for LoftyExtractor {
    fn extract(&self, path: &Path) -> Result<RawTags, ExtractionError> {
        debug!("Extracting metadata from: {}", path.display());

        let tagged_file = lofty::read_from_path(path)?;
        let properties = tagged_file.properties();

        let duration = properties.duration();
        let mut tags = RawTags {
            duration_secs: (!duration.is_zero()).then(|| duration.as_secs_f64()),
            bitrate: properties
                .audio_bitrate()
                .filter(|kbps| *kbps > 0)
                .map(|kbps| kbps * 1000),
            sample_rate: properties.sample_rate().filter(|hz| *hz > 0),
            ..Default::default()
        };

        if let Some(tag) = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())
        {
            read_tag(tag, &mut tags);
        }

        Ok(tags)
    }
}

fn read_tag(tag: &Tag, tags: &mut RawTags) {
    tags.title = tag.title().map(|s| s.to_string());
    tags.artist = tag.artist().map(|s| s.to_string());
    tags.album = tag.album().map(|s| s.to_string());
    tags.year = tag.year().filter(|y| *y > 0);
    tags.genre = tag
        .get_strings(&ItemKey::Genre)
        .flat_map(|g| g.split('\0'))
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect();
    tags.picture = tag.pictures().first().map(artwork_from_picture);
}

fn artwork_from_picture(picture: &Picture) -> Artwork {
    Artwork {
        format: picture
            .mime_type()
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string()),
        data: picture.data().to_vec(),
        description: picture
            .description()
            .filter(|d| !d.is_empty())
            .map(str::to_string),
    }
}
