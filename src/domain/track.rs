/// Tags read from an audio file. Every field is independent of the others.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<u32>,
    pub genre: Vec<String>,
    pub duration_secs: Option<f64>,
    /// bits per second
    pub bitrate: Option<u32>,
    /// Hz
    pub sample_rate: Option<u32>,
    pub picture: Option<Artwork>,
}

/// Picture embedded in the file's tags
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    /// MIME type, e.g. `image/jpeg`
    pub format: String,
    pub data: Vec<u8>,
    pub description: Option<String>,
}

/// Artist and title guessed from a file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameGuess {
    pub artist: String,
    pub title: String,
}

/// Metadata of one track after tags and file name were merged.
///
/// `artist` and `title` are always present.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledFields {
    pub artist: String,
    pub title: String,
    pub album: Option<String>,
    pub year: Option<u32>,
    pub genre: Option<Vec<String>>,
    pub duration_secs: Option<f64>,
    pub bitrate: Option<u32>,
    pub sample_rate: Option<u32>,
    pub artwork: Option<Artwork>,
}
