use crate::auth::{Credentials, OAuthTransport};
use crate::client::Config;
use crate::endpoint::{self, GET, IMAGE, PHOTO, POST};
use crate::error::{Error, ErrorEnvelope, Result};
use crate::params::Params;
use crate::response;
use crate::transport::{RawResponse, Transport};
use crate::upload;
use serde::de::DeserializeOwned;
use url::Url;

/// API client owning the endpoint catalog view and, once authenticated, the
/// signing transport.
///
/// A client has exactly two states: unauthenticated (every dispatch fails
/// fast with [`Error::InvalidClient`]) and authenticated. The transition
/// happens once, via [`Client::authenticate`] or [`Client::with_transport`];
/// there is no way back, and re-authentication means constructing a new
/// client.
pub struct Client {
    /// Configuration
    pub config: Config,
    /// Authenticated transport, absent until authentication
    transport: Option<Box<dyn Transport>>,
}

impl Client {
    /// Create a new unauthenticated client with default configuration
    pub fn new() -> Self {
        Client {
            config: Config::default(),
            transport: None,
        }
    }

    /// Create a new unauthenticated client with custom configuration
    pub fn with_config(config: Config) -> Self {
        Client {
            config,
            transport: None,
        }
    }

    /// Install the stock OAuth 1.0a signing transport for these credentials
    pub fn authenticate(mut self, credentials: Credentials) -> Self {
        self.transport = Some(Box::new(OAuthTransport::new(credentials)));
        self
    }

    /// Install an arbitrary transport (custom signers, test doubles)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Whether the authentication handshake has populated the transport
    pub fn is_authenticated(&self) -> bool {
        self.transport.is_some()
    }

    /// Dispatch one request and return the raw success body.
    ///
    /// `method` is `"GET"`, `"POST"`, or one of the multipart pseudo-verbs
    /// `"photo"` / `"image"`; anything else is a programming error reported
    /// without touching the network. A `None` params argument means "no
    /// parameters". Success (HTTP 200–399) yields the trimmed body bytes
    /// as-is; decoding is the caller's concern.
    pub fn dispatch(&self, method: &str, url: &str, params: Option<&Params>) -> Result<Vec<u8>> {
        let transport = self.transport.as_ref().ok_or(Error::InvalidClient)?;

        let start = std::time::Instant::now();
        let raw = match method {
            GET => {
                let mut target = Url::parse(url)?;
                let pairs = params.map(|p| p.pairs()).unwrap_or_default();
                if !pairs.is_empty() {
                    let mut query = target.query_pairs_mut();
                    for (name, value) in &pairs {
                        query.append_pair(name, value);
                    }
                    drop(query);
                }
                transport.get(target.as_str())?
            }
            POST => {
                let pairs = params.map(|p| p.pairs()).unwrap_or_default();
                transport.post_form(url, &pairs)?
            }
            PHOTO | IMAGE => {
                let params = params.ok_or_else(|| {
                    Error::RequestBuild(format!("{} dispatch requires parameters", method))
                })?;
                let path = if method == PHOTO {
                    &params.photo_path
                } else {
                    &params.image_path
                };
                if path.is_empty() {
                    return Err(Error::RequestBuild(format!(
                        "{} dispatch requires a file path",
                        method
                    )));
                }
                // The file part is named after the verb; the remaining
                // non-empty params ride along as text parts.
                let form = upload::build_form(method, path, &params.pairs())?;
                transport.post_multipart(url, form)?
            }
            other => {
                return Err(Error::RequestBuild(format!(
                    "unsupported method: {}",
                    other
                )))
            }
        };

        if self.config.debug {
            eprintln!(
                "[chirp] {} {} => {:?} (status: {})",
                method,
                url,
                start.elapsed(),
                raw.status
            );
        }

        classify(raw)
    }

    /// Dispatch a catalog operation by name and return the raw success body
    pub(crate) fn invoke(&self, name: &str, params: Option<&Params>) -> Result<Vec<u8>> {
        let endpoint = endpoint::require(name);
        self.dispatch(endpoint.method, &self.config.resolve(endpoint), params)
    }

    /// Dispatch a catalog operation and decode the result into T
    pub fn call<T>(&self, name: &str, params: Option<&Params>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.invoke(name, params)?;
        response::decode(&body)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify the HTTP outcome: 200–399 is success and passes the trimmed
/// body through; anything above is a failure carrying the service's error
/// envelope, or a malformed-body error when the envelope itself won't parse.
fn classify(raw: RawResponse) -> Result<Vec<u8>> {
    if (200..400).contains(&raw.status) {
        return Ok(trim(&raw.body));
    }

    match serde_json::from_slice::<ErrorEnvelope>(&raw.body) {
        Ok(envelope) => Err(Error::from_envelope(raw.status, envelope)),
        Err(_) => Err(Error::MalformedResponse {
            status: raw.status,
            body: String::from_utf8_lossy(&raw.body).into_owned(),
        }),
    }
}

fn trim(body: &[u8]) -> Vec<u8> {
    let start = body
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(body.len());
    let end = body
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    body[start..end].to_vec()
}
