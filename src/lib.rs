//! Audit sink that delivers one event per executed query to a Splunk HTTP
//! Event Collector.
//!
//! ```no_run
//! use gabi_audit::adapters::audit::splunk_audit::{SplunkAudit, with_index};
//! use gabi_audit::core::models::query_record::QueryRecord;
//! use gabi_audit::core::models::splunk_env::SplunkEnv;
//! use gabi_audit::core::traits::audit::AuditWriter;
//!
//! let env = SplunkEnv {
//!     endpoint: "https://splunk:8088/services/collector/event".into(),
//!     token: "00000000-0000-0000-0000-000000000000".into(),
//!     ..SplunkEnv::default()
//! };
//! let sink = SplunkAudit::new(env, [with_index("audit")])?;
//! sink.write(&QueryRecord::now("select 1;", "alice"))?;
//! # Ok::<(), gabi_audit::core::errors::AuditError>(())
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
