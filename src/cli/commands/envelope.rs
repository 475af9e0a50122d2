use crate::config::app_config::AppConfig;
use crate::core::models::envelope::Envelope;
use crate::core::models::query_record::QueryRecord;

/// Execute the `gabi-audit envelope` command.
///
/// Prints the exact request body on stdout so it can be piped elsewhere.
pub fn execute(config: &AppConfig, record: &QueryRecord) {
    let body = Envelope::new(record, &config.splunk.env).to_bytes();
    println!("{}", String::from_utf8_lossy(&body));
}
