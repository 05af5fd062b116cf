use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A kind of sport an event accepts, with its suggested point value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityType {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub default_energy: Option<i32>,
}

/// Body for creating an activity type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTypeDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_energy: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<u64>,
}

/// A bug report filed by a participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BugReport {
    pub id: u64,
    pub bug_number: Option<String>,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub resolved_at: Option<NaiveDateTime>,
    pub admin_notes: Option<String>,
    pub badge_awarded: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BugReportDraft {
    pub title: String,
    pub description: String,
}
