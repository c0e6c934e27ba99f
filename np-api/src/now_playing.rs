/// The track currently playing for a user, as reported by the backend
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlaying {
    /// Artists credited on the track, in display order
    pub artist_names: Vec<String>,
    /// Title of the track
    pub track_name: String,
    /// Link to the track
    pub track_url: String,
}

impl NowPlaying {
    /// Formats the share text, `NowPlaying {artists} - {track}` with artists joined by `", "`
    pub fn share_text(&self) -> String {
        format!(
            "NowPlaying {} - {}",
            self.artist_names.join(", "),
            self.track_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now_playing(artists: &[&str], track: &str) -> NowPlaying {
        NowPlaying {
            artist_names: artists.iter().map(ToString::to_string).collect(),
            track_name: track.to_owned(),
            track_url: "http://x".to_owned(),
        }
    }

    #[test]
    fn test_share_text() {
        assert_eq!(
            now_playing(&["A", "B"], "T").share_text(),
            "NowPlaying A, B - T"
        );
        assert_eq!(now_playing(&["A"], "T").share_text(), "NowPlaying A - T");
        assert_eq!(now_playing(&[], "T").share_text(), "NowPlaying  - T");
        assert_eq!(
            now_playing(&["米津玄師"], "Lemon").share_text(),
            "NowPlaying 米津玄師 - Lemon"
        );
    }

    #[test]
    fn test_share_text_idempotent() {
        let np = now_playing(&["A", "B", "C"], "T & U");
        assert_eq!(np.share_text(), np.share_text());
        assert_eq!(np, now_playing(&["A", "B", "C"], "T & U"));
    }

    #[test]
    fn test_deserialize() -> serde_json::Result<()> {
        assert_eq!(
            serde_json::from_str::<Option<NowPlaying>>(
                r#"{"artistNames":["A","B"],"trackName":"T","trackUrl":"http://x"}"#
            )?,
            Some(now_playing(&["A", "B"], "T"))
        );
        assert_eq!(serde_json::from_str::<Option<NowPlaying>>("null")?, None);
        assert!(serde_json::from_str::<Option<NowPlaying>>(r#"{"trackName":"T"}"#).is_err());
        Ok(())
    }
}
