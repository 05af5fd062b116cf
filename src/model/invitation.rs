use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// An invitation for a participant to join a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInvitation {
    pub id: u64,
    pub team_id: u64,
    pub team_name: String,
    pub invited_by: Option<String>,
    pub invited_at: NaiveDateTime,
    pub message: Option<String>,
}

/// A registration link an admin hands out for an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationLink {
    pub id: u64,
    pub event_id: u64,
    pub event_name: String,
    pub invitation_token: String,
    pub invitation_url: String,
    pub description: Option<String>,
    pub max_uses: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub times_used: u32,
    pub expires_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_expired: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_maxed_out: bool,
    pub created_by_name: Option<String>,
    pub created_at: NaiveDateTime,
}

impl InvitationLink {
    /// Whether a new participant could register through this link right now.
    pub fn is_usable(&self) -> bool {
        self.is_active && !self.is_expired && !self.is_maxed_out
    }
}

/// Body for creating or editing a registration link.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationLinkDraft {
    pub event_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<NaiveDateTime>,
}

/// One registration made through a link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationUsage {
    pub id: u64,
    pub invitation_id: u64,
    pub invitation_description: Option<String>,
    pub participant_id: u64,
    pub participant_name: String,
    pub participant_username: String,
    pub ip_address: Option<String>,
    pub used_at: NaiveDateTime,
}

/// Aggregated registration statistics for an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationStats {
    pub event_id: u64,
    pub event_name: String,
    pub total_invitations: u32,
    pub active_invitations: u32,
    pub total_registrations: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub registrations_by_day: BTreeMap<String, u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub invitations: Vec<InvitationLink>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent_usages: Vec<InvitationUsage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maxed_out_link_is_not_usable() {
        let json = r#"{
            "id": 1, "eventId": 4, "eventName": "Spring Steps",
            "invitationToken": "abc", "invitationUrl": "https://example.org/join/abc",
            "maxUses": 5, "timesUsed": 5, "isActive": true,
            "isExpired": false, "isMaxedOut": true,
            "createdAt": "2025-03-01T12:00:00"
        }"#;
        let link: InvitationLink = serde_json::from_str(json).unwrap();
        assert!(!link.is_usable());
    }
}
