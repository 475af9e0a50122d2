use serde::Deserialize;

use crate::core::errors::{AuditError, Result};

/// Acknowledgment body returned by the collector.
///
/// HEC answers `{"text":"Success","code":0}`; older proxies capitalise the
/// keys. Both spellings are accepted and missing keys default to zero/empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CollectorAck {
    #[serde(rename = "Code", alias = "code")]
    pub code: i64,
    #[serde(rename = "Text", alias = "text")]
    pub text: String,
}

impl CollectorAck {
    /// Decode raw ack bytes.
    pub fn parse(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|source| AuditError::ResponseDecode { source })
    }

    /// `Ok` only for code 0; anything else is a rejection.
    pub fn into_result(self) -> Result<()> {
        if self.code == 0 {
            return Ok(());
        }
        Err(AuditError::CollectorRejection {
            code: self.code,
            text: self.text,
        })
    }
}

/// Turn a collector response body into success or a typed failure.
pub fn interpret(body: &[u8]) -> Result<()> {
    CollectorAck::parse(body)?.into_result()
}
