pub mod commands;
pub mod context;
pub mod output;

use clap::{Args, Parser, Subcommand};

use crate::core::models::splunk_env::SplunkEnv;

/// Deliver query audit events to a Splunk HTTP Event Collector.
#[derive(Parser, Debug)]
#[command(name = "gabi-audit", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the config file (default: ~/.config/gabi/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(flatten)]
    pub splunk: SplunkOverrides,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one audit event to the collector
    Write {
        #[command(flatten)]
        record: RecordArgs,
    },

    /// Print the event body `write` would send, without sending it
    Envelope {
        #[command(flatten)]
        record: RecordArgs,
    },

    /// Show the resolved collector configuration
    Config,
}

/// The query being audited.
#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Text of the executed statement
    #[arg(long, default_value = "")]
    pub query: String,

    /// User who ran the statement
    #[arg(long, default_value = "")]
    pub user: String,

    /// Epoch seconds of execution (default: now)
    #[arg(long)]
    pub timestamp: Option<i64>,
}

/// Command-line overrides; these win over the config file and environment.
#[derive(Args, Debug, Default)]
pub struct SplunkOverrides {
    /// Collector URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// HEC token
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Target index
    #[arg(long, global = true)]
    pub index: Option<String>,

    /// Host reported with each event
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Namespace reported with each event
    #[arg(long, global = true)]
    pub namespace: Option<String>,

    /// Pod reported with each event
    #[arg(long, global = true)]
    pub pod: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

impl SplunkOverrides {
    /// Overwrite every field of `env` that was given on the command line.
    pub fn apply(&self, env: &mut SplunkEnv) {
        for (value, field) in [
            (&self.endpoint, &mut env.endpoint),
            (&self.token, &mut env.token),
            (&self.index, &mut env.index),
            (&self.host, &mut env.host),
            (&self.namespace, &mut env.namespace),
            (&self.pod, &mut env.pod),
        ] {
            if let Some(value) = value {
                field.clone_from(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_only_touch_given_fields() {
        let mut env = SplunkEnv {
            endpoint: "http://from-file".into(),
            host: "file-host".into(),
            ..SplunkEnv::default()
        };
        let overrides = SplunkOverrides {
            endpoint: Some("http://from-flag".into()),
            token: Some(String::new()),
            ..SplunkOverrides::default()
        };

        overrides.apply(&mut env);

        assert_eq!(env.endpoint, "http://from-flag");
        assert_eq!(env.host, "file-host");
        assert_eq!(env.token, "");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
