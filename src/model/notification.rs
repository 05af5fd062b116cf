use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use super::null_as_default;

/// An in-app notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_read: bool,
    pub created_at: NaiveDateTime,
    pub activity_id: Option<u64>,
    pub activity_type: Option<String>,
}

/// Who an admin notification goes to.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipientType {
    /// Every participant of the event.
    #[default]
    All,
    /// Team captains only.
    Captains,
    /// The listed participants.
    Specific,
}

/// An admin notification, sent straight away or saved as a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDraft {
    pub event_id: u64,
    pub title: String,
    pub message: String,
    pub recipient_type: RecipientType,
    pub participant_ids: Vec<u64>,
}

/// A saved draft or an archived broadcast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationTemplate {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub recipient_type: RecipientType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participant_ids: Vec<u64>,
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sent_count: u32,
    pub created_at: NaiveDateTime,
    pub sent_at: Option<NaiveDateTime>,
    pub created_by_name: Option<String>,
}

/// Acknowledgement of an immediate broadcast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastReceipt {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u32,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_sent_template() {
        let json = r#"{
            "id": 12,
            "title": "Final week",
            "message": "Last push!",
            "recipientType": "CAPTAINS",
            "participantIds": null,
            "status": "SENT",
            "sentCount": 6,
            "createdAt": "2025-05-20T09:00:00",
            "sentAt": "2025-05-20T09:05:00",
            "createdByName": "Admin"
        }"#;
        let template: NotificationTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(template.recipient_type, RecipientType::Captains);
        assert!(template.participant_ids.is_empty());
        assert_eq!(template.sent_count, 6);
    }
}
