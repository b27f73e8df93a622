//! Failures the store recovered from
//!
//! Store operations never return errors. Whatever they swallow is logged and
//! also kept here so callers can report it.

use serde::Serialize;

use crate::model::CollectionKey;

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// The substrate could not be read; the collection was treated as empty
    ReadFailed,
    /// The stored text was not a readable collection
    Corrupt,
    /// The stored collection was written by a newer schema
    UnsupportedVersion,
    /// The collection could not be encoded
    EncodeFailed,
    /// The substrate refused the write; the change was not persisted
    WriteFailed,
    /// No unused id was left; the new record was not persisted
    IdsExhausted,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadFailed => write!(f, "read failed"),
            Self::Corrupt => write!(f, "corrupt data"),
            Self::UnsupportedVersion => write!(f, "unsupported schema version"),
            Self::EncodeFailed => write!(f, "encode failed"),
            Self::WriteFailed => write!(f, "write failed"),
            Self::IdsExhausted => write!(f, "no free id"),
        }
    }
}

/// One recovered failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreIssue {
    /// Collection involved
    pub key: CollectionKey,
    pub kind: IssueKind,
    /// Underlying error text
    pub detail: String,
}

impl StoreIssue {
    /// Whether this issue means a change was lost
    #[must_use]
    pub fn lost_write(&self) -> bool {
        matches!(
            self.kind,
            IssueKind::WriteFailed | IssueKind::EncodeFailed | IssueKind::IdsExhausted
        )
    }
}

impl std::fmt::Display for StoreIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.key, self.kind, self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_key_and_kind() {
        let issue = StoreIssue {
            key: CollectionKey::Appliances,
            kind: IssueKind::Corrupt,
            detail: "expected value at line 1".to_string(),
        };
        assert_eq!(
            issue.to_string(),
            "rental_appliances (corrupt data): expected value at line 1"
        );
        assert!(!issue.lost_write());
    }

    #[test]
    fn serializes_kind_in_snake_case() {
        let issue = StoreIssue {
            key: CollectionKey::Vendors,
            kind: IssueKind::WriteFailed,
            detail: "quota".to_string(),
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["key"], "rental_vendors");
        assert_eq!(json["kind"], "write_failed");
        assert!(issue.lost_write());
    }
}
