//! Helper URL functions for extending a single base URL for API endpoint variations

/// Url convenience wrapper for extending URLs
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Url(url::Url);

impl TryFrom<url::Url> for Url {
    type Error = NotABaseError;
    fn try_from(url: url::Url) -> Result<Self, Self::Error> {
        Url::new(url)
    }
}

impl std::ops::Deref for Url {
    type Target = url::Url;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for Url {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl std::fmt::Display for Url {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for when a URL is not a base URL, meaning that parsing a relative URL string
/// with this URL as the base will return an error.
///
/// This is the case if the scheme and `:` delimiter are not followed by a `/` slash,
/// as is typically the case of `data:` and `mailto:` URLs.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct NotABaseError;
impl std::fmt::Display for NotABaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "URL is not a base URL")
    }
}
impl std::error::Error for NotABaseError {}

impl Url {
    /// Creates a new URL from the origin of the current browser location.
    ///
    /// Errors if the page has an opaque origin (`"null"`), as `file:` pages and sandboxed frames do.
    /// # Panics
    /// If the browser window doesn't exist.
    pub fn from_browser_location() -> Result<Url, NotABaseError> {
        let origin = crate::browser_window()
            .location()
            .origin()
            .map_err(|_| NotABaseError)?;
        Url::from_origin(&origin)
    }

    /// Creates a new URL from a serialized origin such as `location.origin`
    pub fn from_origin(origin: &str) -> Result<Url, NotABaseError> {
        Url::new(url::Url::parse(origin).map_err(|_| NotABaseError)?)
    }

    /// Errors if the given URL cannot be a base URL
    pub fn new(url: url::Url) -> Result<Url, NotABaseError> {
        if !url.cannot_be_a_base() {
            Ok(Url(url))
        } else {
            Err(NotABaseError)
        }
    }

    /// Creates a new URL with the given path segments appended
    pub fn with_path<I>(&self, path_segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut new_url = (*self).clone();
        new_url
            .path_segments_mut()
            .expect("A base URL")
            .extend(path_segments);
        new_url
    }
}
