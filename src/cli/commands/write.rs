use crate::adapters::audit::splunk_audit::SplunkAudit;
use crate::adapters::audit::transport::build_client;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::query_record::QueryRecord;
use crate::core::traits::audit::AuditWriter;

/// Execute the `gabi-audit write` command.
///
/// Sends exactly one event. A failure is reported and returned; it is up to
/// the caller to retry.
pub fn execute(config: &AppConfig, record: &QueryRecord, quiet: bool) -> Result<()> {
    let client = build_client(config.splunk.timeout())?;
    let sink = SplunkAudit::with_client(config.splunk.env.clone(), client, []);

    sink.write(record)?;

    if !quiet {
        output::success(&format!(
            "Audit event for '{}' accepted by {}",
            record.user,
            config.splunk.env.endpoint
        ));
    }
    Ok(())
}
