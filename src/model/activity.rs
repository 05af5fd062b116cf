use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{null_as_default, ReactionKind};

/// Moderation state of a submitted activity.
#[derive(
    Debug,
    Default,
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
pub enum ActivityStatus {
    Pending,
    #[default]
    Approved,
    Rejected,
}

/// A logged activity as shown in feeds and on its own page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub energy: i32,
    pub final_points: Option<i32>,
    pub duration_minutes: Option<u32>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participant_name: String,
    pub participant_id: Option<u64>,
    pub participant_avatar_url: Option<String>,
    pub team_name: Option<String>,
    pub team_id: Option<u64>,
    pub team_avatar_url: Option<String>,
    pub team_based_competition: Option<bool>,
    pub event_id: Option<u64>,
    pub event_name: Option<String>,
    photo_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    photo_urls: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ActivityStatus,
    pub created_at: NaiveDateTime,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reaction_counts: BTreeMap<ReactionKind, u32>,
    pub user_reaction: Option<ReactionKind>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_reactions: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment_count: u32,
}

impl Activity {
    /// Ordered photo URLs; older records carry a single `photoUrl` instead.
    pub fn photos(&self) -> Vec<String> {
        if !self.photo_urls.is_empty() {
            self.photo_urls.clone()
        } else {
            self.photo_url.iter().cloned().collect()
        }
    }

    /// Points to display: the moderated total when present, otherwise base energy.
    pub fn display_points(&self) -> i32 {
        self.final_points.unwrap_or(self.energy)
    }
}

/// Response to a successful activity submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedActivity {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub energy: i32,
    pub created_at: NaiveDateTime,
}

/// A page request for activity feeds.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedQuery {
    pub page: u32,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<u64>,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            event_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED_ITEM: &str = r#"{
        "id": 31,
        "type": "Running",
        "energy": 40,
        "finalPoints": 50,
        "participantName": "Olga",
        "teamName": "Night Owls",
        "photoUrl": "/uploads/legacy.jpg",
        "photoUrls": ["/uploads/a.jpg", "/uploads/b.jpg"],
        "status": "APPROVED",
        "createdAt": "2025-04-02T07:30:00",
        "reactionCounts": {"FIRE": 3, "LIKE": 1},
        "userReaction": "FIRE",
        "totalReactions": 4,
        "commentCount": 2
    }"#;

    #[test]
    fn test_decode_feed_item() {
        let activity: Activity = serde_json::from_str(FEED_ITEM).unwrap();
        assert_eq!(activity.kind, "Running");
        assert_eq!(activity.display_points(), 50);
        assert_eq!(activity.photos(), vec!["/uploads/a.jpg", "/uploads/b.jpg"]);
        assert_eq!(activity.reaction_counts.get(&ReactionKind::Fire), Some(&3));
        assert_eq!(activity.user_reaction, Some(ReactionKind::Fire));
    }

    #[test]
    fn test_legacy_single_photo() {
        let json = r#"{
            "id": 2, "type": "Yoga", "energy": 10,
            "photoUrl": "/uploads/one.jpg", "photoUrls": null,
            "createdAt": "2025-04-01T08:00:00"
        }"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.photos(), vec!["/uploads/one.jpg"]);
        assert_eq!(activity.display_points(), 10);
        assert!(activity.reaction_counts.is_empty());
    }
}
