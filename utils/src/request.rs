//! [`reqwest`] wrapper for consistant error handling and formatted errors
use ::reqwest as req;

/// A human readable HTTP Status code error with response body
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct StatusError {
    /// The HTTP status code/error
    pub status: req::StatusCode,
    /// The body of the response
    pub body: Option<String>,
}
impl std::error::Error for StatusError {}
impl std::fmt::Display for StatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HTTP Error: {}{}{}",
            self.status.as_str(),
            if let Some(desc) = self.status.canonical_reason() {
                ", ".to_string() + desc
            } else {
                "".to_string()
            },
            if let Some(body) = &self.body {
                "\nBody:\n".to_string() + body
            } else {
                "".to_string()
            }
        )
    }
}

/// A human readable response body deserialization error
#[derive(Debug)]
pub struct JSONError {
    /// The deserialization error
    pub error: serde_json::Error,
    /// The response body that failed to deserialize
    pub body: String,
}
impl std::error::Error for JSONError {}
impl std::fmt::Display for JSONError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "deserialization error, {} in {}", self.error, self.body)
    }
}

/// HTTP request error with human readable endpoint errors
#[derive(Debug)]
pub enum Error {
    /// A human readable HTTP Status code error with response body
    Status(StatusError),
    /// A human readable response body deserialization error
    Body(JSONError),
    /// Other reswest errors
    Reqwest(req::Error),
}
impl std::error::Error for Error {}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Error::Status(status) => status.to_string(),
                Error::Reqwest(req) => req.to_string(),
                Error::Body(body) => body.to_string(),
            }
        )
    }
}

/// HTTP request result
pub type Result<R> = std::result::Result<R, Error>;

/// [`reqwest`] wrapper for deserializing response and consistant error handling
pub async fn request<R, F>(client: &req::Client, build_request: F) -> Result<R>
where
    R: serde::de::DeserializeOwned,
    F: Fn(&req::Client) -> req::RequestBuilder,
{
    let res = send(client, build_request).await?;
    let status = res.status();
    if status.is_client_error() || status.is_server_error() {
        Err(Error::Status(StatusError {
            status,
            body: res.text().await.ok(),
        }))
    } else {
        parse_body(res.text().await.map_err(Error::Reqwest)?)
    }
}

/// Like [`request()`], but the body is deserialized whatever the HTTP status.
///
/// For endpoints whose body alone carries the answer, error statuses included.
pub async fn request_body<R, F>(client: &req::Client, build_request: F) -> Result<R>
where
    R: serde::de::DeserializeOwned,
    F: Fn(&req::Client) -> req::RequestBuilder,
{
    let res = send(client, build_request).await?;
    let status = res.status();
    if !status.is_success() {
        log::debug!("Reading body of a {status} response");
    }
    parse_body(res.text().await.map_err(Error::Reqwest)?)
}

async fn send<F>(client: &req::Client, build_request: F) -> Result<req::Response>
where
    F: Fn(&req::Client) -> req::RequestBuilder,
{
    build_request(client)
        .header(
            req::header::ACCEPT,
            req::header::HeaderValue::from_static("application/json"),
        )
        .send()
        .await
        .map_err(Error::Reqwest)
}

/// Deserializes a response body.
///
/// An empty (or whitespace only) body is read as JSON `null`,
/// so `Option` responses treat it as [`None`].
pub fn parse_body<R>(body: String) -> Result<R>
where
    R: serde::de::DeserializeOwned,
{
    let json = if body.trim().is_empty() {
        "null"
    } else {
        body.as_str()
    };
    serde_json::from_str(json).map_err(|error| Error::Body(JSONError { error, body }))
}
