//! Compose URLs that pre-fill a share dialog

/// The share dialog the compose URL opens
pub const COMPOSE_ENDPOINT: &str = "https://twitter.com/intent/tweet";

/// How the query values of a compose URL are written
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub enum ComposeEncoding {
    /// Values are interpolated verbatim.
    ///
    /// Text containing `&`, `#` or `=` truncates or corrupts the shared text.
    /// Kept as the default because existing consumers rely on the exact output.
    #[default]
    Raw,
    /// Values are `application/x-www-form-urlencoded`
    Encoded,
}

/// Builds the compose URL sharing `text` and `link`
pub fn compose_url(text: &str, link: &str, encoding: ComposeEncoding) -> String {
    match encoding {
        ComposeEncoding::Raw => format!("{COMPOSE_ENDPOINT}?text={text}&url={link}"),
        ComposeEncoding::Encoded => {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("text", text)
                .append_pair("url", link)
                .finish();
            format!("{COMPOSE_ENDPOINT}?{query}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_compose_url() {
        assert_eq!(
            compose_url("NowPlaying A, B - T", "http://x", ComposeEncoding::Raw),
            "https://twitter.com/intent/tweet?text=NowPlaying A, B - T&url=http://x"
        );
        assert_eq!(
            compose_url("NowPlaying A & B - T", "http://x", ComposeEncoding::default()),
            "https://twitter.com/intent/tweet?text=NowPlaying A & B - T&url=http://x"
        );
    }

    #[test]
    fn test_encoded_compose_url() {
        let composed = compose_url(
            "NowPlaying A & B - T",
            "https://open.spotify.com/track/1?si=2",
            ComposeEncoding::Encoded,
        );
        assert_eq!(
            composed,
            "https://twitter.com/intent/tweet?text=NowPlaying+A+%26+B+-+T&url=https%3A%2F%2Fopen.spotify.com%2Ftrack%2F1%3Fsi%3D2"
        );

        let parsed = url::Url::parse(&composed).expect("A valid URL");
        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("text".to_string(), "NowPlaying A & B - T".to_string()),
                (
                    "url".to_string(),
                    "https://open.spotify.com/track/1?si=2".to_string()
                ),
            ]
        );
    }
}
