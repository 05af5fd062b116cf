use reqwest::Method;
use serde::Serialize;
use tracing::debug;

use crate::api::Backend;
use crate::error::Result;
use crate::forms::require_text;
use crate::model::{ActivityType, ActivityTypeDraft, BugReport, BugReportDraft};
use crate::session::Session;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TypeFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    event_id: Option<u64>,
}

/// Activity types, optionally narrowed to one event's catalog.
pub(crate) async fn activity_types(
    backend: Backend<'_>,
    session: &Session,
    event_id: Option<u64>,
) -> Result<Vec<ActivityType>> {
    let types: Vec<ActivityType> = backend
        .authed(Method::GET, "activity-types", session)?
        .map(|b| b.query(&TypeFilter { event_id }))
        .json()
        .await?;
    debug!(count = types.len(), "fetched activity types");
    Ok(types)
}

pub(crate) async fn create_activity_type(
    backend: Backend<'_>,
    session: &Session,
    draft: &ActivityTypeDraft,
) -> Result<ActivityType> {
    require_text(&draft.name, "activity type name")?;
    backend
        .authed(Method::POST, "admin/activity-types", session)?
        .map(|b| b.json(draft))
        .json()
        .await
}

pub(crate) async fn delete_activity_type(
    backend: Backend<'_>,
    session: &Session,
    id: u64,
) -> Result<()> {
    backend
        .authed(Method::DELETE, &format!("admin/activity-types/{id}"), session)?
        .empty()
        .await
}

pub(crate) async fn report_bug(
    backend: Backend<'_>,
    session: &Session,
    draft: &BugReportDraft,
) -> Result<BugReport> {
    require_text(&draft.title, "title")?;
    require_text(&draft.description, "description")?;
    backend
        .authed(Method::POST, "bug-reports", session)?
        .map(|b| b.json(draft))
        .json()
        .await
}

pub(crate) async fn my_bug_reports(
    backend: Backend<'_>,
    session: &Session,
) -> Result<Vec<BugReport>> {
    let reports: Vec<BugReport> = backend
        .authed(Method::GET, "bug-reports/my", session)?
        .json()
        .await?;
    debug!(count = reports.len(), "fetched bug reports");
    Ok(reports)
}
