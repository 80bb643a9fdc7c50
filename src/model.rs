use serde::Deserialize;

/// Shown in place of the title when the service reports an empty string,
/// which means nothing is currently playing.
pub const NOT_PLAYING: &str = "[not playing]";

/// Payload returned by `GET {host}/playing`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NowPlayingPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artwork: Option<Artwork>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Artwork {
    /// Base64-encoded image data.
    pub bytes: String,
    pub width: u32,
    pub height: u32,
}

impl NowPlayingPayload {
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            NOT_PLAYING
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_payload_without_artwork() {
        let payload: NowPlayingPayload = serde_json::from_str(r#"{"title":"Inception"}"#).unwrap();
        assert_eq!(payload.title, "Inception");
        assert!(payload.artwork.is_none());
    }

    #[test]
    fn parses_payload_with_artwork() {
        let payload: NowPlayingPayload = serde_json::from_str(
            r#"{"title":"X","artwork":{"bytes":"AAAA","width":180,"height":180}}"#,
        )
        .unwrap();
        let artwork = payload.artwork.unwrap();
        assert_eq!(artwork.bytes, "AAAA");
        assert_eq!(artwork.width, 180);
        assert_eq!(artwork.height, 180);
    }

    #[test]
    fn null_artwork_is_none() {
        let payload: NowPlayingPayload =
            serde_json::from_str(r#"{"title":"X","artwork":null}"#).unwrap();
        assert!(payload.artwork.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload: NowPlayingPayload =
            serde_json::from_str(r#"{"title":"X","position":42}"#).unwrap();
        assert_eq!(payload.title, "X");
    }

    #[test]
    fn empty_title_displays_placeholder() {
        let payload: NowPlayingPayload = serde_json::from_str(r#"{"title":""}"#).unwrap();
        assert_eq!(payload.display_title(), NOT_PLAYING);
    }

    #[test]
    fn non_empty_title_displays_verbatim() {
        let payload = NowPlayingPayload {
            title: "Stalker".to_string(),
            artwork: None,
        };
        assert_eq!(payload.display_title(), "Stalker");
    }
}
