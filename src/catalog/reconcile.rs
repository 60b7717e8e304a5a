use crate::domain::track::{FilenameGuess, RawTags, ReconciledFields};

/// Merges tags with the file name guess.
///
/// A tag value wins whenever it is present and non-empty. Artist and title fall
/// back to the file name, everything else falls back to nothing.
pub fn reconcile(tags: Option<RawTags>, guess: FilenameGuess) -> ReconciledFields {
    let tags = tags.unwrap_or_default();

    ReconciledFields {
        artist: non_empty(tags.artist).unwrap_or(guess.artist),
        title: non_empty(tags.title).unwrap_or(guess.title),
        album: non_empty(tags.album),
        year: tags.year,
        genre: (!tags.genre.is_empty()).then_some(tags.genre),
        duration_secs: tags.duration_secs,
        bitrate: tags.bitrate,
        sample_rate: tags.sample_rate,
        artwork: tags.picture,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
