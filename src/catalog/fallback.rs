//! Guessing artist and title from a file name of the form `Artist - Title.ext`

use std::path::Path;

use crate::domain::track::FilenameGuess;

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
const SEPARATOR: &str = " - ";

/// Splits the file stem on the first `" - "`.
///
/// Without a separator the whole stem becomes the title. Never fails.
pub fn parse_filename(filename: &str) -> FilenameGuess {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string());

    match stem.split_once(SEPARATOR) {
        Some((artist, title)) => FilenameGuess {
            artist: non_empty_or(artist, UNKNOWN_ARTIST),
            title: non_empty_or(title, &stem),
        },
        None => FilenameGuess {
            artist: UNKNOWN_ARTIST.to_string(),
            title: stem,
        },
    }
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(artist: &str, title: &str) -> FilenameGuess {
        FilenameGuess {
            artist: artist.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_artist_dash_title() {
        assert_eq!(
            parse_filename("Boygenius - Cool About It.mp3"),
            guess("Boygenius", "Cool About It")
        );
    }

    #[test]
    fn test_no_separator() {
        assert_eq!(
            parse_filename("untitled demo.mp3"),
            guess(UNKNOWN_ARTIST, "untitled demo")
        );
    }

    #[test]
    fn test_only_first_separator_splits() {
        assert_eq!(
            parse_filename("Alvvays - Archie, Marry Me - Live.mp3"),
            guess("Alvvays", "Archie, Marry Me - Live")
        );
    }

    #[test]
    fn test_hyphen_without_spaces_is_not_a_separator() {
        assert_eq!(
            parse_filename("Jay-Som - Superbike.MP3"),
            guess("Jay-Som", "Superbike")
        );
        assert_eq!(
            parse_filename("lo-fi-song.mp3"),
            guess(UNKNOWN_ARTIST, "lo-fi-song")
        );
    }

    #[test]
    fn test_empty_segments_fall_back() {
        assert_eq!(parse_filename(" - Intro.mp3"), guess(UNKNOWN_ARTIST, "Intro"));
        assert_eq!(parse_filename("Cuco - .mp3"), guess("Cuco", "Cuco - "));
    }

    #[test]
    fn test_only_last_extension_is_stripped() {
        assert_eq!(
            parse_filename("Men I Trust - Show Me How.final.mp3"),
            guess("Men I Trust", "Show Me How.final")
        );
    }
}
