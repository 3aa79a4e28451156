use serde::{Deserialize, Serialize};

/// Purity record as stored by the backend.
///
/// The `(metalname, purity)` pair is unique; the backend is the sole
/// authority on that constraint and signals a violation with HTTP 406.
/// Records are created and deleted, never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurityRecord {
    /// Server-assigned identifier (`_id` on the wire).
    #[serde(rename = "_id")]
    pub id: String,
    pub metalname: String,
    pub purity: String,
}

/// One purity option offered for a given metal in the rate form selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurityOption {
    pub purity: String,
}

/// In-progress user input for a new purity record.
///
/// Owned by the purity form; reset to defaults on successful save and left
/// untouched on failure so the user can correct and retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PurityDraft {
    pub metalname: String,
    pub purity: String,
}

impl PurityDraft {
    /// Submission is permitted only when every field is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.metalname.trim().is_empty() && !self.purity.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_reads_wire_id_field() {
        let json = r#"{"_id":"665f1c","metalname":"Gold","purity":"24K"}"#;
        let record: PurityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "665f1c");
        assert_eq!(record.metalname, "Gold");
        assert_eq!(record.purity, "24K");
    }

    #[test]
    fn draft_requires_both_fields() {
        assert!(!PurityDraft::default().is_complete());
        assert!(!PurityDraft {
            metalname: "Gold".into(),
            purity: "  ".into(),
        }
        .is_complete());
        assert!(PurityDraft {
            metalname: "Gold".into(),
            purity: "24K".into(),
        }
        .is_complete());
    }
}
