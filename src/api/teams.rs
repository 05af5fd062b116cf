use reqwest::multipart::Form;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::Backend;
use crate::error::{ChallengeError, Result};
use crate::forms::require_text;
use crate::model::{
    Activity, AdminTeamDraft, HeatmapDay, NewTeam, Team, TeamMember, TeamRanking, TeamRef,
    TeamUpdate,
};
use crate::session::Session;
use crate::upload::{check_image, PhotoFile};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InviteBody {
    participant_id: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadedImage {
    image_url: String,
}

pub(crate) async fn list(backend: Backend<'_>, session: &Session) -> Result<Vec<Team>> {
    let teams: Vec<Team> = backend.authed(Method::GET, "teams", session)?.json().await?;
    debug!(count = teams.len(), "fetched teams");
    Ok(teams)
}

pub(crate) async fn get(backend: Backend<'_>, session: &Session, id: u64) -> Result<Team> {
    backend
        .authed(Method::GET, &format!("teams/{id}"), session)?
        .json()
        .await
}

pub(crate) async fn create(
    backend: Backend<'_>,
    session: &Session,
    team: &NewTeam,
) -> Result<Team> {
    require_text(&team.name, "team name")?;
    backend
        .authed(Method::POST, "teams", session)?
        .map(|b| b.json(team))
        .json()
        .await
}

pub(crate) async fn update(
    backend: Backend<'_>,
    session: &Session,
    id: u64,
    update: &TeamUpdate,
) -> Result<Team> {
    require_text(&update.name, "team name")?;
    backend
        .authed(Method::PUT, &format!("teams/{id}"), session)?
        .map(|b| b.json(update))
        .json()
        .await
}

pub(crate) async fn delete(backend: Backend<'_>, session: &Session, id: u64) -> Result<()> {
    backend
        .authed(Method::DELETE, &format!("teams/{id}"), session)?
        .empty()
        .await
}

pub(crate) async fn leave(backend: Backend<'_>, session: &Session, id: u64) -> Result<()> {
    backend
        .authed(Method::POST, &format!("teams/{id}/leave"), session)?
        .empty()
        .await
}

pub(crate) async fn members(
    backend: Backend<'_>,
    session: &Session,
    id: u64,
) -> Result<Vec<TeamMember>> {
    let members: Vec<TeamMember> = backend
        .authed(Method::GET, &format!("teams/{id}/participants"), session)?
        .json()
        .await?;
    debug!(count = members.len(), "fetched team members");
    Ok(members)
}

pub(crate) async fn rankings(backend: Backend<'_>, session: &Session) -> Result<Vec<TeamRanking>> {
    let rankings: Vec<TeamRanking> = backend
        .authed(Method::GET, "teams/rankings", session)?
        .json()
        .await?;
    debug!(count = rankings.len(), "fetched team rankings");
    Ok(rankings)
}

pub(crate) async fn activities(
    backend: Backend<'_>,
    session: &Session,
    id: u64,
) -> Result<Vec<Activity>> {
    let activities: Vec<Activity> = backend
        .authed(Method::GET, &format!("teams/{id}/activities"), session)?
        .json()
        .await?;
    debug!(count = activities.len(), "fetched team activities");
    Ok(activities)
}

pub(crate) async fn heatmap(
    backend: Backend<'_>,
    session: &Session,
    id: u64,
) -> Result<Vec<HeatmapDay>> {
    let days: Vec<HeatmapDay> = backend
        .authed(Method::GET, &format!("teams/{id}/activity-heatmap"), session)?
        .json()
        .await?;
    debug!(count = days.len(), "fetched activity heatmap");
    Ok(days)
}

pub(crate) async fn invite(
    backend: Backend<'_>,
    session: &Session,
    team_id: u64,
    participant_id: u64,
) -> Result<()> {
    backend
        .authed(Method::POST, &format!("teams/{team_id}/invite"), session)?
        .map(|b| b.json(&InviteBody { participant_id }))
        .empty()
        .await
}

/// Upload a team avatar and return its new URL.
pub(crate) async fn upload_image(
    backend: Backend<'_>,
    session: &Session,
    team_id: u64,
    image: &PhotoFile,
) -> Result<String> {
    check_image(image)?;
    let call = backend.authed(Method::POST, &format!("teams/{team_id}/upload-image"), session)?;
    let part = image.to_part().map_err(|e| ChallengeError::Http {
        url: call.url().to_owned(),
        source: e,
    })?;
    let form = Form::new().part("image", part);
    let uploaded: UploadedImage = call.map(|b| b.multipart(form)).json().await?;
    debug!(url = uploaded.image_url, "uploaded team image");
    Ok(uploaded.image_url)
}

pub(crate) async fn admin_list(backend: Backend<'_>, session: &Session) -> Result<Vec<TeamRef>> {
    let teams: Vec<TeamRef> = backend
        .authed(Method::GET, "admin/teams", session)?
        .json()
        .await?;
    debug!(count = teams.len(), "fetched teams for admin");
    Ok(teams)
}

pub(crate) async fn admin_create(
    backend: Backend<'_>,
    session: &Session,
    draft: &AdminTeamDraft,
) -> Result<TeamRef> {
    require_text(&draft.name, "team name")?;
    backend
        .authed(Method::POST, "admin/teams", session)?
        .map(|b| b.json(draft))
        .json()
        .await
}

pub(crate) async fn admin_delete(backend: Backend<'_>, session: &Session, id: u64) -> Result<()> {
    backend
        .authed(Method::DELETE, &format!("admin/teams/{id}"), session)?
        .empty()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_shape() {
        let uploaded: UploadedImage =
            serde_json::from_str(r#"{"imageUrl":"/uploads/teams/7.png","message":"ok"}"#).unwrap();
        assert_eq!(uploaded.image_url, "/uploads/teams/7.png");
    }

    #[test]
    fn test_invite_body_shape() {
        assert_eq!(
            serde_json::to_value(InviteBody { participant_id: 9 }).unwrap(),
            serde_json::json!({"participantId": 9})
        );
    }

    #[test]
    fn test_admin_team_body_and_reply() {
        let draft = AdminTeamDraft {
            name: "Night Owls".into(),
            event_id: Some(4),
            ..AdminTeamDraft::default()
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            serde_json::json!({"name": "Night Owls", "eventId": 4})
        );

        let created: TeamRef = serde_json::from_str(
            r#"{"id":11,"name":"Night Owls","motto":null,"imageUrl":null,"totalPoints":0}"#,
        )
        .unwrap();
        assert_eq!(
            created,
            TeamRef {
                id: 11,
                name: "Night Owls".into()
            }
        );
    }
}
