use reqwest::blocking::Client;

use crate::adapters::audit::transport::{ClientOrigin, Transport};
use crate::core::errors::{AuditError, Result};
use crate::core::models::collector_ack;
use crate::core::models::envelope::Envelope;
use crate::core::models::query_record::QueryRecord;
use crate::core::models::splunk_env::SplunkEnv;
use crate::core::traits::audit::AuditWriter;

/// Construction-time mutator applied once by [`SplunkAudit::new`].
pub type SinkOption = Box<dyn FnOnce(&mut SplunkAudit) + Send>;

/// Route events to `index` instead of the token's default index.
pub fn with_index(index: impl Into<String>) -> SinkOption {
    let index = index.into();
    Box::new(move |sink: &mut SplunkAudit| sink.env.index = index)
}

/// Use `client` instead of the default one.
pub fn with_http_client(client: Client) -> SinkOption {
    Box::new(move |sink: &mut SplunkAudit| sink.set_http_client(client))
}

/// Audit writer that delivers each record to a Splunk HTTP Event Collector.
///
/// One `write` is one blocking POST; nothing is buffered or retried. The
/// sink is `Sync`, so concurrent writers can share it behind an `Arc`.
/// Configuration and client can only be changed through `&mut self`, i.e.
/// never while a write is in flight.
#[derive(Debug, Clone)]
pub struct SplunkAudit {
    env: SplunkEnv,
    transport: Transport,
}

impl SplunkAudit {
    /// Create a sink for `env` with the default client, then apply `options`
    /// in order.
    pub fn new(env: SplunkEnv, options: impl IntoIterator<Item = SinkOption>) -> Result<Self> {
        Ok(Self::assemble(env, Transport::new()?, options))
    }

    /// Create a sink that uses `client` from the start, then apply `options`.
    /// No default client is built.
    pub fn with_client(
        env: SplunkEnv,
        client: Client,
        options: impl IntoIterator<Item = SinkOption>,
    ) -> Self {
        Self::assemble(env, Transport::with_client(client), options)
    }

    fn assemble(
        env: SplunkEnv,
        transport: Transport,
        options: impl IntoIterator<Item = SinkOption>,
    ) -> Self {
        let mut sink = Self { env, transport };
        for option in options {
            option(&mut sink);
        }
        sink
    }

    pub fn env(&self) -> &SplunkEnv {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut SplunkEnv {
        &mut self.env
    }

    /// Replace the HTTP client used for subsequent writes.
    pub fn set_http_client(&mut self, client: Client) {
        self.transport = Transport::with_client(client);
    }

    pub fn client_origin(&self) -> ClientOrigin {
        self.transport.origin()
    }
}

impl AuditWriter for SplunkAudit {
    fn write(&self, record: &QueryRecord) -> Result<()> {
        let envelope = Envelope::new(record, &self.env);

        tracing::debug!(
            user = %record.user,
            time = record.timestamp,
            index = %self.env.index,
            "writing audit event to Splunk"
        );

        let ack = self.transport.send(&envelope, &self.env)?;

        collector_ack::interpret(&ack).inspect_err(|e| {
            if let AuditError::CollectorRejection { code, text } = e {
                tracing::warn!(code, text = %text, "Splunk rejected audit event");
            }
        })
    }
}
