use std::path::Path;

use crate::cli::{Cli, RecordArgs};
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::query_record::QueryRecord;

/// Resolve the configuration every command works from: config file, then
/// environment variables, then command-line flags.
pub fn load_config(args: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::resolve(args.config.as_deref().map(Path::new))?;
    config.apply_env(|name| std::env::var(name).ok());
    args.splunk.apply(&mut config.splunk.env);
    if let Some(secs) = args.splunk.timeout {
        config.splunk.timeout_secs = Some(secs);
    }
    config.validate()?;
    Ok(config)
}

/// Turn `--query/--user/--timestamp` into a record, stamping now when no
/// timestamp was given.
pub fn record_from(args: &RecordArgs) -> QueryRecord {
    match args.timestamp {
        Some(ts) => QueryRecord::new(args.query.as_str(), args.user.as_str(), ts),
        None => QueryRecord::now(args.query.as_str(), args.user.as_str()),
    }
}
