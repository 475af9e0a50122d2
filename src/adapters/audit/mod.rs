pub mod splunk_audit;
pub mod transport;
