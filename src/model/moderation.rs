use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{null_as_default, ActivityStatus};

/// Whether a moderation adjustment adds or removes points.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentKind {
    Bonus,
    Penalty,
}

/// A bonus or penalty a moderator can attach to an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusType {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    /// Signed points delta; penalties carry a negative value.
    pub points_adjustment: i32,
    #[serde(rename = "type")]
    pub kind: AdjustmentKind,
}

/// Body for creating or updating a bonus type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusTypeDraft {
    pub event_id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub points_adjustment: i32,
    #[serde(rename = "type")]
    pub kind: AdjustmentKind,
}

/// An activity waiting in the moderation queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingActivity {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub energy: i32,
    pub participant_name: String,
    pub participant_id: Option<u64>,
    pub team_name: Option<String>,
    pub team_id: Option<u64>,
    pub event_name: Option<String>,
    pub event_id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photo_urls: Vec<String>,
    #[serde(default = "pending", deserialize_with = "null_as_default")]
    pub status: ActivityStatus,
    pub created_at: NaiveDateTime,
}

fn pending() -> ActivityStatus {
    ActivityStatus::Pending
}

/// Counters shown at the top of the moderation panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationStats {
    pub pending_count: u64,
    pub approved_by_me: u64,
    pub rejected_by_me: u64,
}

/// Filter and page for the moderation queue.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<u64>,
    pub page: u32,
    pub size: u32,
}

impl Default for ModerationFilter {
    fn default() -> Self {
        Self {
            event_id: None,
            team_id: None,
            page: 0,
            size: 20,
        }
    }
}

/// Optional adjustments applied when approving an activity.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus_type_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_type_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RejectionBody<'a> {
    pub reason: &'a str,
}
