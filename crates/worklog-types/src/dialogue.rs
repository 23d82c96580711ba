//! Dialogue stage and per-user session types.
//!
//! A `UserSession` holds the fields collected so far while a user walks
//! through the "add record" flow. The transition logic lives in
//! `worklog-core::dialogue`.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Kind of work being logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    Installation,
    Removal,
}

impl WorkType {
    /// All work types in menu order.
    pub const ALL: [WorkType; 2] = [WorkType::Installation, WorkType::Removal];

    /// User-facing label, also the first word of a record.
    pub fn label(&self) -> &'static str {
        match self {
            WorkType::Installation => "Монтаж",
            WorkType::Removal => "Демонтаж",
        }
    }

    /// Token used in button callback data (`work_{token}`).
    pub fn token(&self) -> &'static str {
        match self {
            WorkType::Installation => "montage",
            WorkType::Removal => "dismantle",
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "montage" => Ok(WorkType::Installation),
            "dismantle" => Ok(WorkType::Removal),
            other => Err(format!("invalid work type: '{other}'")),
        }
    }
}

/// Where a user currently is in the "add record" flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Idle,
    AwaitingWorkType,
    AwaitingCategory,
    AwaitingCustomCategory,
    AwaitingQuantity,
    AwaitingLink,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Idle => "idle",
            Stage::AwaitingWorkType => "awaiting_work_type",
            Stage::AwaitingCategory => "awaiting_category",
            Stage::AwaitingCustomCategory => "awaiting_custom_category",
            Stage::AwaitingQuantity => "awaiting_quantity",
            Stage::AwaitingLink => "awaiting_link",
        };
        f.write_str(s)
    }
}

/// Transient dialogue state of one user.
///
/// Fields fill up in order: `work_type` before leaving `AwaitingWorkType`,
/// `category` before entering `AwaitingQuantity`, `pending_record` before
/// entering `AwaitingLink`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserSession {
    pub stage: Stage,
    pub work_type: Option<WorkType>,
    pub category: Option<String>,
    pub pending_record: Option<String>,
}

impl UserSession {
    /// A fresh session at the first step of the "add record" flow.
    pub fn begin() -> Self {
        Self {
            stage: Stage::AwaitingWorkType,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_type_token_roundtrip() {
        for wt in WorkType::ALL {
            let parsed: WorkType = wt.token().parse().unwrap();
            assert_eq!(parsed, wt);
        }
        assert!("welding".parse::<WorkType>().is_err());
    }

    #[test]
    fn test_work_type_labels() {
        assert_eq!(WorkType::Installation.to_string(), "Монтаж");
        assert_eq!(WorkType::Removal.to_string(), "Демонтаж");
    }

    #[test]
    fn test_begin_starts_at_work_type() {
        let session = UserSession::begin();
        assert_eq!(session.stage, Stage::AwaitingWorkType);
        assert!(session.work_type.is_none());
        assert!(session.category.is_none());
        assert!(session.pending_record.is_none());
    }

    #[test]
    fn test_stage_serde() {
        let json = serde_json::to_string(&Stage::AwaitingQuantity).unwrap();
        assert_eq!(json, "\"awaiting_quantity\"");
        assert_eq!(Stage::default(), Stage::Idle);
    }
}
