use chrono::NaiveDateTime;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};

use super::null_as_default;
use crate::dashboard::effective_order;

/// One of the home-page views an event can enable.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    strum_macros::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DashboardType {
    Ranking,
    Tracker,
    Feed,
    SimpleList,
}

impl DashboardType {
    /// Tab caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ranking => "Ranking",
            Self::Tracker => "Tracker",
            Self::Feed => "Feed",
            Self::SimpleList => "List",
        }
    }
}

/// Lifecycle state of an event.
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
pub enum EventStatus {
    #[default]
    Draft,
    Active,
    Completed,
    Archived,
}

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
pub enum EventVisibility {
    #[default]
    Public,
    Private,
}

/// A challenge event with its dashboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: EventStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub visibility: EventVisibility,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_on_homepage: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dashboard_types: Vec<DashboardType>,
    pub dashboard_order: Option<Vec<DashboardType>>,
    pub team_based_competition: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub track_activity_duration: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requires_activity_approval: bool,
    pub max_teams: Option<u32>,
    pub max_participants: Option<u32>,
    pub registration_deadline: Option<NaiveDateTime>,
    pub points_multiplier: Option<f64>,
    pub banner_image_url: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
}

impl Event {
    /// Points aggregate by team unless the event explicitly says otherwise.
    pub fn is_team_based(&self) -> bool {
        self.team_based_competition != Some(false)
    }
}

/// Compact event shape returned by the list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: EventStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_on_homepage: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dashboard_types: Vec<DashboardType>,
    pub dashboard_order: Option<Vec<DashboardType>>,
}

/// Admin write shape for creating or updating an event.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDateTime>,
    pub status: EventStatus,
    pub visibility: EventVisibility,
    pub requires_activity_approval: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_teams: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_deadline: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    pub display_on_homepage: bool,
    pub dashboard_types: Vec<DashboardType>,
    pub dashboard_order: Vec<DashboardType>,
    pub team_based_competition: bool,
    pub track_activity_duration: bool,
}

impl From<&Event> for EventRequest {
    fn from(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            description: event.description.clone(),
            start_date: Some(event.start_date),
            end_date: Some(event.end_date),
            status: event.status,
            visibility: event.visibility,
            requires_activity_approval: event.requires_activity_approval,
            max_teams: event.max_teams,
            max_participants: event.max_participants,
            registration_deadline: event.registration_deadline,
            points_multiplier: event.points_multiplier,
            banner_image_url: event.banner_image_url.clone(),
            logo_url: event.logo_url.clone(),
            primary_color: event.primary_color.clone(),
            display_on_homepage: event.display_on_homepage,
            dashboard_types: event.dashboard_types.iter().copied().unique().collect(),
            dashboard_order: effective_order(
                &event.dashboard_types,
                event.dashboard_order.as_deref(),
            ),
            team_based_competition: event.is_team_based(),
            track_activity_duration: event.track_activity_duration,
        }
    }
}

/// A news post published inside an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventNews {
    pub id: u64,
    pub event_id: u64,
    pub content: String,
    pub created_by_id: Option<u64>,
    pub created_by_name: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// Admin body inviting participants into an event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInvite {
    pub event_id: u64,
    pub participant_ids: Vec<u64>,
}

/// A participant's membership (or pending invitation) in an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventParticipant {
    pub id: u64,
    pub event_id: u64,
    pub event_name: Option<String>,
    pub participant_id: u64,
    pub participant_name: String,
    pub status: String,
    pub invited_at: Option<NaiveDateTime>,
    pub joined_at: Option<NaiveDateTime>,
    pub invited_by_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_displayed_event() {
        let json = r#"{
            "id": 4,
            "name": "Spring Steps",
            "description": "Walk more",
            "startDate": "2025-03-01T00:00:00",
            "endDate": "2025-05-31T23:59:59",
            "status": "ACTIVE",
            "visibility": "PUBLIC",
            "displayOnHomepage": true,
            "dashboardTypes": ["RANKING", "FEED", "SIMPLE_LIST"],
            "dashboardOrder": ["FEED", "RANKING", "SIMPLE_LIST"],
            "teamBasedCompetition": null,
            "trackActivityDuration": null,
            "requiresActivityApproval": true,
            "pointsMultiplier": 1.0
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.status, EventStatus::Active);
        assert!(event.display_on_homepage);
        assert!(event.is_team_based());
        assert!(!event.track_activity_duration);
        assert_eq!(
            event.dashboard_order.as_deref(),
            Some(&[DashboardType::Feed, DashboardType::Ranking, DashboardType::SimpleList][..])
        );
    }

    #[test]
    fn test_request_falls_back_to_enabled_order() {
        let json = r#"{
            "id": 1,
            "name": "Solo Run",
            "startDate": "2025-01-01T00:00:00",
            "endDate": "2025-02-01T00:00:00",
            "dashboardTypes": ["TRACKER", "RANKING"],
            "dashboardOrder": [],
            "teamBasedCompetition": false
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        let request = EventRequest::from(&event);
        assert_eq!(
            request.dashboard_order,
            vec![DashboardType::Tracker, DashboardType::Ranking]
        );
        assert!(!request.team_based_competition);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["dashboardOrder"][0], "TRACKER");
        assert!(body.get("maxTeams").is_none());
    }

    #[test]
    fn test_request_repairs_stale_order() {
        let json = r#"{
            "id": 2,
            "name": "Team Relay",
            "startDate": "2025-01-01T00:00:00",
            "endDate": "2025-02-01T00:00:00",
            "dashboardTypes": ["RANKING", "FEED", "RANKING"],
            "dashboardOrder": ["TRACKER", "FEED"]
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        let request = EventRequest::from(&event);

        assert_eq!(
            request.dashboard_types,
            vec![DashboardType::Ranking, DashboardType::Feed]
        );
        assert_eq!(
            request.dashboard_order,
            vec![DashboardType::Feed, DashboardType::Ranking]
        );
    }
}
