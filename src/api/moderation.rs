use reqwest::Method;
use serde::Serialize;
use tracing::debug;

use crate::api::Backend;
use crate::error::Result;
use crate::forms::require_text;
use crate::model::{
    Approval, BonusType, BonusTypeDraft, ModerationFilter, ModerationStats, PendingActivity,
    RejectionBody,
};
use crate::session::Session;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EventFilter {
    event_id: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PenaltyParam {
    #[serde(skip_serializing_if = "Option::is_none")]
    penalty_type_id: Option<u64>,
}

pub(crate) async fn pending(
    backend: Backend<'_>,
    session: &Session,
    filter: &ModerationFilter,
) -> Result<Vec<PendingActivity>> {
    let queue: Vec<PendingActivity> = backend
        .authed(Method::GET, "moderation/activities/pending", session)?
        .map(|b| b.query(filter))
        .json()
        .await?;
    debug!(count = queue.len(), page = filter.page, "fetched moderation queue");
    Ok(queue)
}

pub(crate) async fn approve(
    backend: Backend<'_>,
    session: &Session,
    activity_id: u64,
    approval: &Approval,
) -> Result<()> {
    backend
        .authed(
            Method::POST,
            &format!("moderation/activities/{activity_id}/approve"),
            session,
        )?
        .map(|b| b.query(approval))
        .empty()
        .await
}

/// Reject with a mandatory reason and an optional penalty.
pub(crate) async fn reject(
    backend: Backend<'_>,
    session: &Session,
    activity_id: u64,
    reason: &str,
    penalty_type_id: Option<u64>,
) -> Result<()> {
    require_text(reason, "rejection reason")?;
    let body = RejectionBody {
        reason: reason.trim(),
    };
    backend
        .authed(
            Method::POST,
            &format!("moderation/activities/{activity_id}/reject"),
            session,
        )?
        .map(|b| b.query(&PenaltyParam { penalty_type_id }).json(&body))
        .empty()
        .await
}

pub(crate) async fn stats(backend: Backend<'_>, session: &Session) -> Result<ModerationStats> {
    backend
        .authed(Method::GET, "moderation/stats", session)?
        .json()
        .await
}

pub(crate) async fn bonus_types(
    backend: Backend<'_>,
    session: &Session,
    event_id: u64,
) -> Result<Vec<BonusType>> {
    let types: Vec<BonusType> = backend
        .authed(Method::GET, "bonus-types", session)?
        .map(|b| b.query(&EventFilter { event_id }))
        .json()
        .await?;
    debug!(count = types.len(), "fetched bonus types");
    Ok(types)
}

pub(crate) async fn create_bonus_type(
    backend: Backend<'_>,
    session: &Session,
    draft: &BonusTypeDraft,
) -> Result<BonusType> {
    require_text(&draft.name, "bonus name")?;
    backend
        .authed(Method::POST, "bonus-types", session)?
        .map(|b| b.json(draft))
        .json()
        .await
}

pub(crate) async fn update_bonus_type(
    backend: Backend<'_>,
    session: &Session,
    id: u64,
    draft: &BonusTypeDraft,
) -> Result<BonusType> {
    require_text(&draft.name, "bonus name")?;
    backend
        .authed(Method::PUT, &format!("bonus-types/{id}"), session)?
        .map(|b| b.json(draft))
        .json()
        .await
}

pub(crate) async fn delete_bonus_type(
    backend: Backend<'_>,
    session: &Session,
    id: u64,
) -> Result<()> {
    backend
        .authed(Method::DELETE, &format!("bonus-types/{id}"), session)?
        .empty()
        .await
}
