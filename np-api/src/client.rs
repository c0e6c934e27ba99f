use crate::{AccessToken, NowPlaying};
use utils::request::*;
use utils::{NotABaseError, Url};

/// Client for the now playing endpoint (`/np`) of the backend
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Client {
    endpoint: Url,
}

impl Client {
    /// Creates a client for the backend at `base`
    pub fn new(base: &Url) -> Self {
        Self {
            endpoint: base.with_path(["np"]),
        }
    }

    /// Creates a client for the backend serving the current page
    ///
    /// # Panics
    /// If the browser window doesn't exist.
    pub fn from_browser_location() -> std::result::Result<Self, NotABaseError> {
        Ok(Self::new(&Url::from_browser_location()?))
    }

    /// The request URL for `token`, with the token as the `token` query parameter
    pub fn endpoint_for(&self, token: &AccessToken) -> url::Url {
        let mut url = (*self.endpoint).clone();
        url.query_pairs_mut().append_pair("token", token.as_str());
        url
    }

    /// Fetches what is currently playing.
    ///
    /// Returns `None` when nothing is playing (a `null` or empty body).
    /// The HTTP status is not checked, only the body decides.
    pub async fn now_playing(&self, token: &AccessToken) -> Result<Option<NowPlaying>> {
        let url = self.endpoint_for(token);
        let now_playing: Option<NowPlaying> =
            request_body(&crate::CLIENT, |client| client.get(url.clone())).await?;
        log::debug!("Now playing: {now_playing:?}");
        Ok(now_playing)
    }
}
