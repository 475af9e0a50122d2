use std::time::Duration;

use reqwest::blocking::{Client, Request};
use reqwest::header::{self, HeaderMap, HeaderValue};
use url::Url;

use crate::core::errors::{AuditError, RequestCause, Result, SendCause};
use crate::core::models::envelope::Envelope;
use crate::core::models::product::user_agent;
use crate::core::models::splunk_env::SplunkEnv;

/// Timeout of the client installed when the caller supplies none.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the HTTP client in use came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientOrigin {
    /// Built internally with [`DEFAULT_TIMEOUT`].
    Default,
    /// Installed by the caller.
    Custom,
}

/// Build a blocking reqwest client with the given timeout.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AuditError::InvalidConfig {
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// Posts envelopes to the collector and hands back the raw ack body.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    origin: ClientOrigin,
}

impl Transport {
    /// Transport backed by the default client.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: build_client(DEFAULT_TIMEOUT)?,
            origin: ClientOrigin::Default,
        })
    }

    /// Transport backed by a caller-supplied client (custom TLS, proxy, timeout...).
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            origin: ClientOrigin::Custom,
        }
    }

    pub fn origin(&self) -> ClientOrigin {
        self.origin
    }

    /// Build the POST for `envelope` without sending it.
    ///
    /// Fails with `RequestConstruction` when the endpoint or a header value
    /// cannot be expressed as an HTTP request, and with `Send` when there is
    /// nothing a request could be sent to (empty endpoint, no scheme, no host).
    pub fn build_request(&self, envelope: &Envelope<'_>, env: &SplunkEnv) -> Result<Request> {
        let url = parse_endpoint(&env.endpoint)?;
        let headers = collector_headers(&env.token).map_err(request_error)?;

        self.client
            .post(url)
            .headers(headers)
            .body(envelope.to_bytes())
            .build()
            .map_err(|e| request_error(RequestCause::Build(e)))
    }

    /// Send `envelope` and return the full response body.
    ///
    /// The HTTP status is not inspected; the ack body alone decides whether
    /// the collector accepted the event.
    pub fn send(&self, envelope: &Envelope<'_>, env: &SplunkEnv) -> Result<Vec<u8>> {
        let request = self.build_request(envelope, env)?;
        let url = request.url().clone();

        let response = self.client.execute(request).map_err(send_error)?;
        let status = response.status();
        let body = response.bytes().map_err(send_error)?;

        tracing::debug!(%url, %status, bytes = body.len(), "collector responded");
        Ok(body.to_vec())
    }
}

/// The fixed header set of every audit write.
fn collector_headers(token: &str) -> std::result::Result<HeaderMap, RequestCause> {
    let mut authorization = HeaderValue::from_str(&format!("Splunk {token}"))?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
    headers.insert(header::AUTHORIZATION, authorization);
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=utf-8"),
    );
    headers.insert(header::USER_AGENT, HeaderValue::from_str(&user_agent())?);
    Ok(headers)
}

/// Turn the configured endpoint into a URL, classifying each failure as
/// either a request-construction or a send problem.
fn parse_endpoint(endpoint: &str) -> Result<Url> {
    if endpoint.is_empty() {
        return Err(send_error(SendCause::NoEndpoint));
    }

    if let Some(escape) = invalid_escape(endpoint) {
        return Err(request_error(RequestCause::InvalidEscape {
            endpoint: endpoint.to_string(),
            escape,
        }));
    }

    let url = match Url::parse(endpoint) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            return Err(send_error(SendCause::UnsupportedScheme {
                scheme: String::new(),
            }));
        }
        Err(url::ParseError::EmptyHost) => {
            return Err(send_error(SendCause::NoHost {
                endpoint: endpoint.to_string(),
            }));
        }
        Err(source) => {
            return Err(request_error(RequestCause::MalformedEndpoint {
                endpoint: endpoint.to_string(),
                source,
            }));
        }
    };

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(send_error(SendCause::UnsupportedScheme {
            scheme: other.to_string(),
        })),
    }
}

/// First `%` not followed by two hex digits in the endpoint's scheme,
/// authority, path or fragment, if any.
///
/// `Url::parse` silently keeps such sequences, but there they are a typo and
/// must be reported as such. The query string is passed through untouched.
fn invalid_escape(endpoint: &str) -> Option<String> {
    let (before_fragment, fragment) = endpoint.split_once('#').unwrap_or((endpoint, ""));
    let before_query = before_fragment
        .split_once('?')
        .map_or(before_fragment, |(head, _)| head);

    first_bad_escape(before_query).or_else(|| first_bad_escape(fragment))
}

fn first_bad_escape(part: &str) -> Option<String> {
    let bytes = part.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        match bytes.get(i + 1..i + 3) {
            Some(digits) if digits.iter().all(u8::is_ascii_hexdigit) => i += 3,
            _ => return Some(part[i..].chars().take(3).collect()),
        }
    }
    None
}

fn request_error(source: impl Into<RequestCause>) -> AuditError {
    AuditError::RequestConstruction {
        source: source.into(),
    }
}

fn send_error(source: impl Into<SendCause>) -> AuditError {
    AuditError::Send {
        source: source.into(),
    }
}
