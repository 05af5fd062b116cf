use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Complete team profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u64,
    pub name: String,
    pub motto: Option<String>,
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_points: i64,
    pub rank: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<TeamMember>,
    pub event_id: Option<u64>,
}

/// A member of a team's roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: u64,
    pub name: String,
    pub username: Option<String>,
    pub profile_image_url: Option<String>,
    pub role: Option<String>,
}

/// A row of the team leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRanking {
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_points: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participant_count: u32,
    pub rank: u32,
    pub image_url: Option<String>,
}

/// Body for creating a team with its initial members.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motto: Option<String>,
    pub participant_ids: Vec<u64>,
}

/// Body for updating a team's profile and member roles.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<MemberRole>,
}

/// Admin body for creating a team, optionally attached to an event.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminTeamDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<u64>,
}

/// Id and name, as listed on the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRole {
    pub id: u64,
    pub name: String,
    pub role: String,
}

/// Per-day activity count as reported by the heatmap endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapDay {
    /// Either a date or a date-time; only the date part is used.
    pub date: String,
    pub count: u32,
}

impl HeatmapDay {
    pub fn day(&self) -> Option<NaiveDate> {
        let date = self.date.split('T').next().unwrap_or_default();
        NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
    }
}

/// Days covered by the team heatmap, ending today.
pub const HEATMAP_DAYS: u32 = 90;

/// One square of the heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub count: u32,
}

impl HeatmapCell {
    /// Intensity bucket: 0, 1, 2, or 3 for three or more activities.
    pub fn level(&self) -> u8 {
        self.count.min(3) as u8
    }
}

/// Lay the server's per-day counts onto the last [`HEATMAP_DAYS`] days,
/// oldest first. Days the server omitted count as zero.
pub fn heatmap_grid(days: &[HeatmapDay], today: NaiveDate) -> Vec<HeatmapCell> {
    let mut counts: HashMap<NaiveDate, u32> = HashMap::new();
    for day in days {
        if let Some(date) = day.day() {
            *counts.entry(date).or_insert(0) += day.count;
        }
    }

    (0..HEATMAP_DAYS)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back.into())))
        .map(|date| HeatmapCell {
            date,
            count: counts.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_team_with_null_points() {
        let json = r#"{
            "id": 12,
            "name": "Night Owls",
            "motto": "Run after dark",
            "imageUrl": null,
            "totalPoints": null,
            "rank": 3,
            "participants": [{"id": 5, "name": "Ivan", "role": "CAPTAIN"}],
            "eventId": 4
        }"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.total_points, 0);
        assert_eq!(team.participants.len(), 1);
        assert_eq!(team.participants[0].role.as_deref(), Some("CAPTAIN"));
    }

    #[test]
    fn test_heatmap_day_accepts_datetime() {
        let day = HeatmapDay {
            date: "2025-04-02T10:15:00".to_string(),
            count: 2,
        };
        assert_eq!(day.day(), NaiveDate::from_ymd_opt(2025, 4, 2));
    }

    #[test]
    fn test_heatmap_grid_covers_last_ninety_days() {
        let today = NaiveDate::from_ymd_opt(2025, 4, 30).unwrap();
        let days = vec![
            HeatmapDay {
                date: "2025-04-30".to_string(),
                count: 5,
            },
            HeatmapDay {
                date: "2025-04-28".to_string(),
                count: 1,
            },
            HeatmapDay {
                date: "2024-12-01".to_string(),
                count: 9,
            },
        ];
        let grid = heatmap_grid(&days, today);
        assert_eq!(grid.len(), 90);
        assert_eq!(grid.last().unwrap().date, today);
        assert_eq!(grid.last().unwrap().level(), 3);
        assert_eq!(grid[87].count, 1);
        assert_eq!(grid[88].level(), 0);
        assert_eq!(grid.iter().map(|c| c.count).sum::<u32>(), 6);
    }
}
