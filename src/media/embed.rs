//! YouTube embed resolution
//!
//! Turns a record's media URL into an autoplaying embed URL. URLs that do
//! not carry a recognizable video id resolve to `None`; callers then open
//! the original URL instead.

use regex::Regex;

use super::errors::{MediaError, MediaResult};

const VIDEO_ID_PATTERN: &str =
    r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// A resolved embed target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub video_id: String,
    pub embed_url: String,
}

/// Extracts video ids and builds embed URLs
#[derive(Debug, Clone)]
pub struct EmbedResolver {
    pattern: Regex,
}

impl EmbedResolver {
    pub fn new() -> MediaResult<Self> {
        let pattern =
            Regex::new(VIDEO_ID_PATTERN).map_err(|e| MediaError::InvalidPattern(e.to_string()))?;
        Ok(Self { pattern })
    }

    /// Returns the 11-character video id, if the URL carries one
    pub fn video_id<'u>(&self, url: &'u str) -> Option<&'u str> {
        self.pattern
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Resolves a media URL to its embed form
    pub fn resolve(&self, media_url: &str) -> Option<Embed> {
        self.video_id(media_url).map(|id| Embed {
            video_id: id.to_string(),
            embed_url: format!("{}{}?autoplay=1", EMBED_BASE, id),
        })
    }

    /// Like `resolve`, but an unrecognized URL is an error
    pub fn require(&self, media_url: &str) -> MediaResult<Embed> {
        self.resolve(media_url)
            .ok_or_else(|| MediaError::UnrecognizedUrl(media_url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> EmbedResolver {
        EmbedResolver::new().unwrap()
    }

    #[test]
    fn test_watch_url() {
        let embed = resolver()
            .resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .unwrap();
        assert_eq!(embed.video_id, "dQw4w9WgXcQ");
        assert_eq!(
            embed.embed_url,
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1"
        );
    }

    #[test]
    fn test_other_url_forms() {
        let r = resolver();
        assert_eq!(r.video_id("https://youtu.be/dQw4w9WgXcQ"), Some("dQw4w9WgXcQ"));
        assert_eq!(
            r.video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            r.video_id("https://www.youtube.com/v/dQw4w9WgXcQ?version=3"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            r.video_id("https://www.youtube.com/e/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            r.video_id("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_unrecognized_url() {
        let r = resolver();
        assert!(r.resolve("https://vimeo.com/123456").is_none());
        assert!(r.resolve("https://www.youtube.com/watch?v=short").is_none());

        let err = r.require("https://example.com/podcast.mp3").unwrap_err();
        assert!(matches!(err, MediaError::UnrecognizedUrl(_)));
    }
}
