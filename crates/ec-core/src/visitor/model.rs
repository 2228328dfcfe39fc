use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::VisitorId;

/// Outreach progress for a visitor.
///
/// The serialized names are the ones stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FollowupStatus {
    #[serde(rename = "pendente")]
    Pending,
    #[serde(rename = "em_andamento")]
    InProgress,
    #[serde(rename = "concluido")]
    Done,
}

impl FollowupStatus {
    pub const ALL: [FollowupStatus; 3] = [
        FollowupStatus::Pending,
        FollowupStatus::InProgress,
        FollowupStatus::Done,
    ];

    /// Storage name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowupStatus::Pending => "pendente",
            FollowupStatus::InProgress => "em_andamento",
            FollowupStatus::Done => "concluido",
        }
    }

    /// Human readable label shown on status pills.
    pub fn label(&self) -> &'static str {
        match self {
            FollowupStatus::Pending => "Pendente",
            FollowupStatus::InProgress => "Em andamento",
            FollowupStatus::Done => "Concluído",
        }
    }
}

impl fmt::Display for FollowupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown followup status: {0}")]
pub struct ParseFollowupStatusError(pub String);

impl FromStr for FollowupStatus {
    type Err = ParseFollowupStatusError;

    /// Accepts the storage names as well as their English aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pendente" | "pending" => Ok(FollowupStatus::Pending),
            "em_andamento" | "in_progress" | "inProgress" => Ok(FollowupStatus::InProgress),
            "concluido" | "done" => Ok(FollowupStatus::Done),
            other => Err(ParseFollowupStatusError(other.to_string())),
        }
    }
}

/// A visitor record as returned by the record source.
///
/// `visit_date` is kept as the raw `YYYY-MM-DD` string; only its date prefix is
/// significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visitor {
    pub id: VisitorId,
    pub name: String,
    pub visit_date: String,
    pub followup_status: FollowupStatus,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub is_member: bool,
    pub archived: bool,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl Visitor {
    /// Builds a fresh, active, pending visitor from an already validated draft.
    pub fn from_draft(id: VisitorId, draft: VisitorDraft, now_ms: i64) -> Self {
        Self {
            id,
            name: draft.name,
            visit_date: draft.visit_date,
            followup_status: FollowupStatus::Pending,
            phone: draft.phone,
            email: draft.email,
            notes: draft.notes,
            is_member: draft.is_member,
            archived: false,
            created_at_ms: now_ms,
            updated_at_ms: now_ms,
        }
    }

    /// Overwrites the editable fields. Status and archived flag are untouched.
    pub fn apply_draft(&mut self, draft: VisitorDraft, now_ms: i64) {
        self.name = draft.name;
        self.visit_date = draft.visit_date;
        self.phone = draft.phone;
        self.email = draft.email;
        self.notes = draft.notes;
        self.is_member = draft.is_member;
        self.updated_at_ms = now_ms;
    }

    /// Parses the `YYYY-MM-DD` prefix of `visit_date`.
    pub fn visit_day(&self) -> Option<NaiveDate> {
        parse_visit_day(&self.visit_date)
    }
}

pub(crate) fn parse_visit_day(raw: &str) -> Option<NaiveDate> {
    let prefix = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Form payload for creating or editing a visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorDraft {
    pub name: String,
    pub visit_date: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub is_member: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> VisitorDraft {
        VisitorDraft {
            name: "Maria".to_string(),
            visit_date: "2025-03-09".to_string(),
            phone: Some("5511987654321".to_string()),
            email: None,
            notes: Some("Veio com a família".to_string()),
            is_member: false,
        }
    }

    #[test]
    fn test_status_round_trips_storage_names() {
        for status in FollowupStatus::ALL {
            assert_eq!(status.as_str().parse::<FollowupStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_status_accepts_english_aliases() {
        assert_eq!("pending".parse(), Ok(FollowupStatus::Pending));
        assert_eq!("inProgress".parse(), Ok(FollowupStatus::InProgress));
        assert_eq!("done".parse(), Ok(FollowupStatus::Done));
        assert!("archived".parse::<FollowupStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_with_backend_names() {
        let json = serde_json::to_string(&FollowupStatus::InProgress).unwrap();
        assert_eq!(json, "\"em_andamento\"");
    }

    #[test]
    fn test_from_draft_starts_pending_and_active() {
        let v = Visitor::from_draft(VisitorId::from("v1"), draft(), 1_000);
        assert_eq!(v.followup_status, FollowupStatus::Pending);
        assert!(!v.archived);
        assert_eq!(v.created_at_ms, 1_000);
        assert_eq!(v.updated_at_ms, 1_000);
    }

    #[test]
    fn test_apply_draft_keeps_status_and_archive_flag() {
        let mut v = Visitor::from_draft(VisitorId::from("v1"), draft(), 1_000);
        v.followup_status = FollowupStatus::Done;
        v.archived = true;

        let mut edited = draft();
        edited.name = "Maria Clara".to_string();
        v.apply_draft(edited, 2_000);

        assert_eq!(v.name, "Maria Clara");
        assert_eq!(v.followup_status, FollowupStatus::Done);
        assert!(v.archived);
        assert_eq!(v.created_at_ms, 1_000);
        assert_eq!(v.updated_at_ms, 2_000);
    }

    #[test]
    fn test_visit_day_uses_date_prefix() {
        let mut v = Visitor::from_draft(VisitorId::from("v1"), draft(), 0);
        v.visit_date = "2025-03-09T10:00:00Z".to_string();
        assert_eq!(v.visit_day(), NaiveDate::from_ymd_opt(2025, 3, 9));

        v.visit_date = "09/03/2025".to_string();
        assert_eq!(v.visit_day(), None);
    }
}
