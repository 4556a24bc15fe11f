//! Audited operation kinds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity_type::ParseEnumError;

/// Kind of audited action recorded in a change-log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeOperation {
    Create,
    Update,
    Delete,
    StatusChange,
    Link,
    Unlink,
}

impl ChangeOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::StatusChange => "status_change",
            Self::Link => "link",
            Self::Unlink => "unlink",
        }
    }

    /// Creation entries may carry an empty change set (a record with no
    /// auditable initial fields); every other operation must not.
    #[inline]
    pub fn allows_empty_changes(self) -> bool {
        matches!(self, Self::Create)
    }
}

impl fmt::Display for ChangeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeOperation {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            "status_change" => Ok(Self::StatusChange),
            "link" => Ok(Self::Link),
            "unlink" => Ok(Self::Unlink),
            other => Err(ParseEnumError {
                kind: "operation",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_round_trip() {
        for s in ["create", "update", "delete", "status_change", "link", "unlink"] {
            let parsed: ChangeOperation = s.parse().unwrap();
            assert_eq!(parsed.as_str(), s);
        }
    }

    #[test]
    fn test_only_create_allows_empty_changes() {
        assert!(ChangeOperation::Create.allows_empty_changes());
        assert!(!ChangeOperation::Update.allows_empty_changes());
        assert!(!ChangeOperation::StatusChange.allows_empty_changes());
        assert!(!ChangeOperation::Link.allows_empty_changes());
    }

    #[test]
    fn test_operation_serde_snake_case() {
        let json = serde_json::to_string(&ChangeOperation::StatusChange).unwrap();
        assert_eq!(json, "\"status_change\"");
    }
}
