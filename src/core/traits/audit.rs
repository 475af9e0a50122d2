use crate::core::errors::Result;
use crate::core::models::query_record::QueryRecord;

/// Port for delivering audit events about executed queries.
///
/// Implementations live in `adapters` (e.g. `SplunkAudit`). A write is one
/// blocking round trip; its outcome is returned to the caller and never
/// retried or queued by the implementation.
pub trait AuditWriter: Send + Sync {
    /// Deliver one record.
    fn write(&self, record: &QueryRecord) -> Result<()>;
}
