use serde::Serialize;

use crate::core::models::query_record::QueryRecord;
use crate::core::models::splunk_env::SplunkEnv;

/// Source type stamped on every event; the collector parses `event` as JSON.
pub const SOURCETYPE: &str = "_json";

/// Body of one HEC event.
///
/// Field order is the serialized key order and is relied on by the
/// collector's indexed-field extraction. Do not reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<'a> {
    pub event: EventData<'a>,
    pub sourcetype: &'static str,
    pub host: &'a str,
    #[serde(skip_serializing_if = "is_unset")]
    pub index: &'a str,
    pub time: i64,
}

/// The audited query plus the pod that ran it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventData<'a> {
    pub query: &'a str,
    pub user: &'a str,
    pub namespace: &'a str,
    pub pod: &'a str,
}

fn is_unset(value: &&str) -> bool {
    value.is_empty()
}

impl<'a> Envelope<'a> {
    /// Build the envelope for `record`. Nothing is validated: empty strings
    /// and a zero timestamp go out as they are.
    pub fn new(record: &'a QueryRecord, env: &'a SplunkEnv) -> Self {
        Self {
            event: EventData {
                query: &record.query,
                user: &record.user,
                namespace: &env.namespace,
                pod: &env.pod,
            },
            sourcetype: SOURCETYPE,
            host: &env.host,
            index: &env.index,
            time: record.timestamp,
        }
    }

    /// Serialize to the JSON request body.
    pub fn to_bytes(&self) -> Vec<u8> {
        // Only strings and integers: serialization cannot fail.
        serde_json::to_vec(self).unwrap_or_default()
    }
}
