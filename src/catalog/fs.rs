//! Module to list audio files of a collection directory

use walkdir::WalkDir;

use std::path::{Path, PathBuf};

use crate::{catalog::error::CatalogError, config};

pub fn is_audio_file(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

/// Lists audio files directly inside `dir`, ordered by file name.
///
/// Subdirectories are not descended into. Symlinks to files are listed
/// regardless of `follow_symlinks`. Any listing error is fatal.
pub fn list_audio_files(
    dir: &Path,
    config: &config::Scan,
) -> Result<Vec<PathBuf>, CatalogError> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(config.follow_symlinks)
        .sort_by_file_name();

    let mut files = vec![];
    for entry in walker {
        let entry = entry.map_err(|source| CatalogError::InputDir {
            path: dir.to_path_buf(),
            source,
        })?;
        // links to files count even when links are not followed
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if is_file && is_audio_file(entry.path(), &config.extension) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tempfile::TempDir;

    use crate::{
        catalog::fs::{is_audio_file, list_audio_files},
        config,
    };

    #[test]
    fn extension_match_ignores_case() {
        assert!(is_audio_file(Path::new("a.mp3"), "mp3"));
        assert!(is_audio_file(Path::new("a.MP3"), "mp3"));
        assert!(is_audio_file(Path::new("a.Mp3"), "MP3"));
        assert!(!is_audio_file(Path::new("a.mp3.txt"), "mp3"));
        assert!(!is_audio_file(Path::new("mp3"), "mp3"));
        assert!(!is_audio_file(Path::new("a.flac"), "mp3"));
    }

    #[test]
    fn list_finds_audio_files_only() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();

        let song1 = root.join("b.mp3");
        let song2 = root.join("a.MP3");
        let not_music = root.join("notes.txt");
        let other_format = root.join("c.flac");

        std::fs::write(&song1, b"aaa").unwrap();
        std::fs::write(&song2, b"bbb").unwrap();
        std::fs::write(&not_music, b"ccc").unwrap();
        std::fs::write(&other_format, b"ddd").unwrap();

        let files = list_audio_files(root, &config::Scan::default()).unwrap();

        assert_eq!(files, vec![song2, song1]);
    }

    #[test]
    fn list_does_not_descend_into_subdirectories() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();

        let nested = root.join("nested.mp3");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("deep.mp3"), b"aaa").unwrap();
        std::fs::write(root.join("top.mp3"), b"bbb").unwrap();

        let files = list_audio_files(root, &config::Scan::default()).unwrap();

        assert_eq!(files, vec![root.join("top.mp3")]);
    }

    #[cfg(unix)]
    #[test]
    fn list_includes_symlinked_files() {
        let tmp = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let root = tmp.path();

        let target = elsewhere.path().join("real.mp3");
        std::fs::write(&target, b"aaa").unwrap();
        std::os::unix::fs::symlink(&target, root.join("linked.mp3")).unwrap();
        std::os::unix::fs::symlink(elsewhere.path(), root.join("dir.mp3")).unwrap();

        for follow_symlinks in [false, true] {
            let scan = config::Scan {
                follow_symlinks,
                ..Default::default()
            };
            let files = list_audio_files(root, &scan).unwrap();

            assert_eq!(files, vec![root.join("linked.mp3")]);
        }
    }

    #[test]
    fn list_missing_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing");

        assert!(list_audio_files(&missing, &config::Scan::default()).is_err());
    }

    #[test]
    fn list_empty_directory() {
        let tmp = TempDir::new().unwrap();

        let files = list_audio_files(tmp.path(), &config::Scan::default()).unwrap();

        assert!(files.is_empty());
    }
}
