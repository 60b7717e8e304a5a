/// returns url the track is served from, relative to the site root
pub fn track_url(base_url: &str, filename: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.starts_with('/') || base.is_empty() {
        format!("{base}/{filename}")
    } else {
        format!("/{base}/{filename}")
    }
}

#[cfg(test)]
mod tests {
    use crate::url::track_url;

    #[test]
    fn test_track_url() {
        let url = track_url("/bedroompop/", "Clairo - Pretty Girl.mp3");
        assert_eq!(url, "/bedroompop/Clairo - Pretty Girl.mp3");
    }

    #[test]
    fn test_track_url_without_trailing_slash() {
        assert_eq!(track_url("/bedroompop", "a.mp3"), "/bedroompop/a.mp3");
    }

    #[test]
    fn test_track_url_without_leading_slash() {
        assert_eq!(track_url("bedroompop/", "a.mp3"), "/bedroompop/a.mp3");
    }

    #[test]
    fn test_track_url_empty_base() {
        assert_eq!(track_url("", "a.mp3"), "/a.mp3");
        assert_eq!(track_url("/", "a.mp3"), "/a.mp3");
    }
}
