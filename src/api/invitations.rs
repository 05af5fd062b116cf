use reqwest::Method;
use tracing::debug;

use crate::api::Backend;
use crate::error::Result;
use crate::model::{
    EventParticipant, InvitationLink, InvitationLinkDraft, InvitationStats, InvitationUsage,
    TeamInvitation,
};
use crate::session::Session;

/// Accept or decline.
fn answer(accept: bool) -> &'static str {
    if accept {
        "accept"
    } else {
        "decline"
    }
}

pub(crate) async fn team_invitations(
    backend: Backend<'_>,
    session: &Session,
) -> Result<Vec<TeamInvitation>> {
    let invitations: Vec<TeamInvitation> = backend
        .authed(
            Method::GET,
            &format!("participants/{}/invitations", session.participant_id),
            session,
        )?
        .json()
        .await?;
    debug!(count = invitations.len(), "fetched team invitations");
    Ok(invitations)
}

pub(crate) async fn answer_team_invitation(
    backend: Backend<'_>,
    session: &Session,
    id: u64,
    accept: bool,
) -> Result<()> {
    backend
        .authed(Method::POST, &format!("invitations/{id}/{}", answer(accept)), session)?
        .empty()
        .await
}

pub(crate) async fn event_invitations(
    backend: Backend<'_>,
    session: &Session,
) -> Result<Vec<EventParticipant>> {
    let invitations: Vec<EventParticipant> = backend
        .authed(Method::GET, "participants/event-invitations", session)?
        .json()
        .await?;
    debug!(count = invitations.len(), "fetched event invitations");
    Ok(invitations)
}

pub(crate) async fn answer_event_invitation(
    backend: Backend<'_>,
    session: &Session,
    id: u64,
    accept: bool,
) -> Result<EventParticipant> {
    backend
        .authed(
            Method::POST,
            &format!("event-invitations/{id}/{}", answer(accept)),
            session,
        )?
        .json()
        .await
}

pub(crate) async fn create_link(
    backend: Backend<'_>,
    session: &Session,
    draft: &InvitationLinkDraft,
) -> Result<InvitationLink> {
    let link: InvitationLink = backend
        .authed(Method::POST, "admin/event-invitations", session)?
        .map(|b| b.json(draft))
        .json()
        .await?;
    debug!(id = link.id, "created registration link");
    Ok(link)
}

pub(crate) async fn set_link_active(
    backend: Backend<'_>,
    session: &Session,
    id: u64,
    active: bool,
) -> Result<()> {
    let action = if active { "activate" } else { "deactivate" };
    backend
        .authed(
            Method::POST,
            &format!("admin/event-invitations/{id}/{action}"),
            session,
        )?
        .empty()
        .await
}

pub(crate) async fn delete_link(backend: Backend<'_>, session: &Session, id: u64) -> Result<()> {
    backend
        .authed(Method::DELETE, &format!("admin/event-invitations/{id}"), session)?
        .empty()
        .await
}

pub(crate) async fn links(
    backend: Backend<'_>,
    session: &Session,
    event_id: u64,
) -> Result<Vec<InvitationLink>> {
    let links: Vec<InvitationLink> = backend
        .authed(Method::GET, &format!("admin/events/{event_id}/invitations"), session)?
        .json()
        .await?;
    debug!(count = links.len(), "fetched registration links");
    Ok(links)
}

pub(crate) async fn stats(
    backend: Backend<'_>,
    session: &Session,
    event_id: u64,
) -> Result<InvitationStats> {
    backend
        .authed(
            Method::GET,
            &format!("admin/events/{event_id}/invitation-stats"),
            session,
        )?
        .json()
        .await
}

pub(crate) async fn usages(
    backend: Backend<'_>,
    session: &Session,
    id: u64,
) -> Result<Vec<InvitationUsage>> {
    let usages: Vec<InvitationUsage> = backend
        .authed(Method::GET, &format!("admin/event-invitations/{id}/usages"), session)?
        .json()
        .await?;
    debug!(count = usages.len(), "fetched registration link usages");
    Ok(usages)
}
