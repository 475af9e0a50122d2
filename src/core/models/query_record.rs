use serde::{Deserialize, Serialize};

/// One executed query, as handed over by the query-execution service.
///
/// Any field may be empty (or zero); the sink forwards them unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRecord {
    /// Text of the executed statement.
    #[serde(default)]
    pub query: String,
    /// Identity of the invoker.
    #[serde(default)]
    pub user: String,
    /// Epoch seconds at which the query ran.
    #[serde(default)]
    pub timestamp: i64,
}

impl QueryRecord {
    pub fn new(query: impl Into<String>, user: impl Into<String>, timestamp: i64) -> Self {
        Self {
            query: query.into(),
            user: user.into(),
            timestamp,
        }
    }

    /// Record stamped with the current wall-clock time.
    pub fn now(query: impl Into<String>, user: impl Into<String>) -> Self {
        Self::new(query, user, chrono::Utc::now().timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_uses_current_epoch_seconds() {
        let before = chrono::Utc::now().timestamp();
        let record = QueryRecord::now("select 1;", "alice");
        let after = chrono::Utc::now().timestamp();

        assert!(record.timestamp >= before && record.timestamp <= after);
        assert_eq!(record.query, "select 1;");
        assert_eq!(record.user, "alice");
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let record: QueryRecord = serde_json::from_str(r#"{"query":"select 1;"}"#).unwrap();
        assert_eq!(record, QueryRecord::new("select 1;", "", 0));
    }
}
