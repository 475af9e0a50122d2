pub mod collector_ack;
pub mod envelope;
pub mod product;
pub mod query_record;
pub mod splunk_env;
