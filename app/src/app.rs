use async_trait::async_trait;
use np::{AccessToken, ComposeEncoding, NowPlaying};
use utils::Store;

pub mod page;
pub use page::*;

/// Query parameter the authorisation provider delivers the access token in
pub const TOKEN_QUERY_PARAM: &str = "token";

#[derive(strum_macros::Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum StoreKeys {
    #[strum(serialize = "NPBTN_TOKEN")]
    AccessToken,
}

#[derive(
    strum_macros::Display,
    strum_macros::IntoStaticStr,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
)]
pub enum Routes {
    #[strum(serialize = "/")]
    Home,
    /// Served by the backend, starts the authorisation flow
    #[strum(serialize = "/spotify/auth")]
    Authorise,
}

impl Routes {
    pub fn path(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug)]
pub enum Error {
    Store(Box<dyn std::error::Error>),
    NowPlaying(Box<dyn std::error::Error>),
}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Store(err) => write!(f, "error using browser storage: {err}"),
            Error::NowPlaying(err) => write!(f, "failed to request now playing: {err}"),
        }
    }
}
impl std::error::Error for Error {}

/// What the page does once the controller has run
#[derive(Debug)]
pub enum Outcome {
    /// The token from the URL was stored, go back to the app root
    TokenCaptured,
    /// No access token is stored, start authorising
    Unauthorised,
    /// Nothing is playing, show the fallback message
    NothingPlaying,
    /// Open the compose URL
    Compose(String),
    /// Log the error and leave the page as it is
    Failed(Error),
}

impl Outcome {
    /// Where the page navigates to, if anywhere
    pub fn redirect_to(&self) -> Option<&str> {
        match self {
            Outcome::TokenCaptured => Some(Routes::Home.path()),
            Outcome::Unauthorised => Some(Routes::Authorise.path()),
            Outcome::Compose(url) => Some(url.as_str()),
            Outcome::NothingPlaying | Outcome::Failed(_) => None,
        }
    }
}

/// Source of what is currently playing for the holder of an [`AccessToken`]
#[async_trait(?Send)]
pub trait NowPlayingSource {
    type Error: std::error::Error + 'static;

    /// `Ok(None)` when nothing is playing
    async fn now_playing(&self, token: &AccessToken) -> Result<Option<NowPlaying>, Self::Error>;
}

#[async_trait(?Send)]
impl NowPlayingSource for np::Client {
    type Error = utils::request::Error;

    async fn now_playing(&self, token: &AccessToken) -> Result<Option<NowPlaying>, Self::Error> {
        np::Client::now_playing(self, token).await
    }
}

/// Resolves the access token and decides where the page goes next
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Controller {
    pub encoding: ComposeEncoding,
}

impl Controller {
    pub fn new(encoding: ComposeEncoding) -> Self {
        Self { encoding }
    }

    /// Runs once per page load.
    ///
    /// A `token` query parameter is stored and nothing else happens on this load.
    /// Otherwise the stored token is used to fetch what is playing, which is the only await point.
    pub async fn initialize<S, P>(&self, location: &url::Url, store: &mut S, source: &P) -> Outcome
    where
        S: Store,
        S::Error: std::error::Error + 'static,
        P: NowPlayingSource,
    {
        if let Some(token) = utils::query_param(location, TOKEN_QUERY_PARAM) {
            return match store.set(&StoreKeys::AccessToken, &token) {
                Ok(_) => {
                    log::info!("Stored access token from the URL");
                    Outcome::TokenCaptured
                }
                Err(err) => Outcome::Failed(Error::Store(Box::new(err))),
            };
        }

        let token = match store.get(&StoreKeys::AccessToken) {
            Ok(Some(token)) => AccessToken::from(token),
            Ok(None) => {
                log::info!("No access token stored, authorising");
                return Outcome::Unauthorised;
            }
            Err(err) => return Outcome::Failed(Error::Store(Box::new(err))),
        };

        match source.now_playing(&token).await {
            Ok(Some(now_playing)) => Outcome::Compose(self.compose_url(&now_playing)),
            Ok(None) => Outcome::NothingPlaying,
            Err(err) => Outcome::Failed(Error::NowPlaying(Box::new(err))),
        }
    }

    /// The compose URL sharing `now_playing`
    pub fn compose_url(&self, now_playing: &NowPlaying) -> String {
        np::compose_url(
            &now_playing.share_text(),
            &now_playing.track_url,
            self.encoding,
        )
    }
}
