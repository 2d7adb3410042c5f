//! The API client: URL generation, request signing, and the take call.

use bytes::Bytes;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha2::Sha256;
use std::sync::Arc;
use thiserror::Error as ThisError;
use tracing::debug;
use url::Url;

use crate::http::{ReqwestTransport, Transport};
use crate::options::TakeOptions;

const BASE_URL: &str = "https://api.screenshotone.com/take";

/// Query-component escaping: RFC 3986 unreserved characters pass through,
/// everything else is percent-escaped. Space becomes `%20`, never `+`. The
/// server computes the signature over the escaped string, so this set is
/// part of the wire contract.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

type HmacSha256 = Hmac<Sha256>;

/// Errors that can occur while generating a take URL or fetching a
/// screenshot.
#[derive(ThisError, Debug)]
pub enum Error {
    /// The access key was empty or whitespace at construction.
    #[error("access key must be provided")]
    MissingAccessKey,

    /// The same rendering option was set more than once on a
    /// [`TakeOptions`].
    #[error("the `{0}` option was set more than once")]
    DuplicateOption(String),

    /// The generated URL did not parse as an absolute URL. Unreachable with
    /// correctly encoded options, but guarded anyway.
    #[error("unable to create a valid take URL from `{0}`")]
    InvalidUrl(String),

    /// The server rejected the request with a non-2xx status.
    #[error("Failed to take a screenshot, the server responded with {status} {reason}")]
    Rejected { status: u16, reason: String },

    /// A transport-level failure from the underlying HTTP client,
    /// propagated unmodified.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// A secret string for key material. Prevents accidental logging or display
/// of the secret.
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(s: String) -> Self {
        Self(s)
    }

    /// Get the underlying secret value.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

/// Client for the screenshot rendering API.
///
/// Holds the access key, the optional secret key that enables request
/// signing, and an optional [`Transport`]. Immutable after construction and
/// safe to share across concurrent requests.
///
/// # Example
/// ```no_run
/// use screenshotone::{Client, TakeOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), screenshotone::Error> {
///     let client = Client::new("your-access-key")?.with_secret_key("your-secret-key");
///
///     let options = TakeOptions::url("https://example.com").full_page(true);
///     let bytes = client.take(&options).await?;
///
///     std::fs::write("example.png", &bytes).unwrap();
///     Ok(())
/// }
/// ```
pub struct Client {
    access_key: String,
    secret_key: Option<SecretString>,
    transport: Option<Arc<dyn Transport>>,
}

impl Client {
    /// Create a client with the given access key.
    ///
    /// Fails with [`Error::MissingAccessKey`] when the key is empty or
    /// whitespace-only; this is checked before any URL is ever built.
    pub fn new(access_key: impl Into<String>) -> Result<Self, Error> {
        let access_key = access_key.into();
        if access_key.trim().is_empty() {
            return Err(Error::MissingAccessKey);
        }

        Ok(Self {
            access_key,
            secret_key: None,
            transport: None,
        })
    }

    /// Set the secret key. Once configured, every generated URL carries an
    /// HMAC-SHA256 `signature` parameter.
    pub fn with_secret_key(mut self, secret_key: impl Into<SecretString>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Set the transport used by [`take`](Self::take). When none is
    /// configured, a fresh [`ReqwestTransport`] is constructed per request.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Generate the fully qualified, optionally signed take URL for the
    /// given options.
    ///
    /// Pure and deterministic: equivalent options and key material always
    /// produce an identical string. The server recomputes the signature
    /// over the same parameter order, so the options' insertion order is
    /// preserved byte-for-byte.
    pub fn generate_take_url(&self, options: &TakeOptions) -> Result<String, Error> {
        if let Some(key) = options.duplicate_key() {
            return Err(Error::DuplicateOption(key.to_string()));
        }

        let unsigned = format!(
            "{}&access_key={}",
            build_query_string(options),
            self.access_key
        );
        let query = self.sign_if_required(unsigned);
        let take_url = format!("{BASE_URL}?{query}");

        // Validate, but return the string that was built: re-serializing
        // the parsed URL could alter the exact escaping the signature was
        // computed over.
        if Url::parse(&take_url).is_err() {
            return Err(Error::InvalidUrl(take_url));
        }

        Ok(take_url)
    }

    /// Take the screenshot and return the raw response body.
    ///
    /// Performs exactly one GET against the generated URL. A non-2xx status
    /// becomes [`Error::Rejected`]; transport failures propagate as
    /// [`Error::Http`].
    pub async fn take(&self, options: &TakeOptions) -> Result<Bytes, Error> {
        let url = self.generate_take_url(options)?;
        debug!(url = %url, "taking screenshot");

        let response = match &self.transport {
            Some(transport) => transport.get(&url).await?,
            None => ReqwestTransport::new().get(&url).await?,
        };

        if !response.status.is_success() {
            return Err(Error::Rejected {
                status: response.status.as_u16(),
                reason: response
                    .status
                    .canonical_reason()
                    .unwrap_or_default()
                    .to_string(),
            });
        }

        Ok(response.body)
    }

    fn sign_if_required(&self, query: String) -> String {
        let Some(secret_key) = &self.secret_key else {
            return query;
        };

        let mut mac = HmacSha256::new_from_slice(secret_key.expose_secret().as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(query.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());

        format!("{query}&signature={signature}")
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("access_key", &self.access_key)
            .field("secret_key", &self.secret_key)
            .finish_non_exhaustive()
    }
}

fn build_query_string(options: &TakeOptions) -> String {
    options
        .query()
        .iter()
        .flat_map(|(key, values)| {
            values
                .iter()
                .map(move |value| format!("{key}={}", utf8_percent_encode(value, QUERY_COMPONENT)))
        })
        .collect::<Vec<_>>()
        .join("&")
}
