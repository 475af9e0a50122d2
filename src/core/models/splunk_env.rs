use std::fmt;

use serde::{Deserialize, Serialize};

/// Collector endpoint, credentials and deployment identifiers.
///
/// Supplied by configuration loading and only read by the sink. Every field
/// may be empty: an empty endpoint fails at send time, an empty token yields
/// an unauthenticated request.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplunkEnv {
    /// Collector URL, e.g. `https://splunk:8088/services/collector/event`.
    pub endpoint: String,
    /// HEC token sent as `Authorization: Splunk <token>`.
    pub token: String,
    /// Target index; empty leaves the choice to the collector.
    pub index: String,
    pub host: String,
    pub namespace: String,
    pub pod: String,
}

impl SplunkEnv {
    /// Token suitable for display: empty stays empty, anything else is masked.
    pub fn redacted_token(&self) -> &'static str {
        if self.token.is_empty() { "" } else { "********" }
    }
}

impl fmt::Debug for SplunkEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplunkEnv")
            .field("endpoint", &self.endpoint)
            .field("token", &self.redacted_token())
            .field("index", &self.index)
            .field("host", &self.host)
            .field("namespace", &self.namespace)
            .field("pod", &self.pod)
            .finish()
    }
}
