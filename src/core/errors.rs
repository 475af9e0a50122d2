/// All domain errors for the audit sink.
///
/// The four collector variants map one-to-one onto the failure points of a
/// single write, so callers can branch on the kind with `matches!` or on
/// the message. Every variant keeps its underlying cause reachable through
/// `std::error::Error::source`.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("unable to create request to Splunk: {source}")]
    RequestConstruction {
        #[source]
        source: RequestCause,
    },

    #[error("unable to send request to Splunk: {source}")]
    Send {
        #[source]
        source: SendCause,
    },

    #[error("unable to unmarshal Splunk response: {source}")]
    ResponseDecode {
        #[source]
        source: serde_json::Error,
    },

    #[error("unable to write to Splunk: {text} (code {code})")]
    CollectorRejection { code: i64, text: String },

    #[error(
        "Invalid configuration: {detail}\n\n  \
         Check the [splunk] and [log] sections of your config file,\n  \
         the SPLUNK_* environment variables, or the matching flags."
    )]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why the outbound request could not be built.
///
/// These point at a configuration bug: the endpoint or token cannot be
/// expressed as an HTTP request at all.
#[derive(Debug, thiserror::Error)]
pub enum RequestCause {
    #[error("invalid URL escape {escape:?} in endpoint {endpoint:?}")]
    InvalidEscape { endpoint: String, escape: String },

    #[error("malformed endpoint {endpoint:?}: {source}")]
    MalformedEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("header value cannot be encoded: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error(transparent)]
    Build(reqwest::Error),
}

/// Why a well-formed request never produced a readable response.
///
/// These point at connectivity: nothing to connect to, or the connection
/// itself failed.
#[derive(Debug, thiserror::Error)]
pub enum SendCause {
    #[error("no collector endpoint configured")]
    NoEndpoint,

    #[error("no host in endpoint {endpoint:?}")]
    NoHost { endpoint: String },

    #[error("unsupported protocol scheme {scheme:?}")]
    UnsupportedScheme { scheme: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn collector_messages_lead_with_failure_point() {
        let send = AuditError::Send {
            source: SendCause::NoEndpoint,
        };
        assert!(
            send.to_string()
                .starts_with("unable to send request to Splunk")
        );

        let rejected = AuditError::CollectorRejection {
            code: 4,
            text: "Invalid token".into(),
        };
        let msg = rejected.to_string();
        assert!(msg.starts_with("unable to write to Splunk"));
        assert!(msg.contains("Invalid token"));
        assert!(msg.contains("code 4"));
    }

    #[test]
    fn cause_is_reachable_through_source() {
        let err = AuditError::RequestConstruction {
            source: RequestCause::InvalidEscape {
                endpoint: "http://test/%".into(),
                escape: "%".into(),
            },
        };
        let source = err.source().expect("cause should be attached");
        assert!(source.to_string().contains("invalid URL escape"));
    }
}
