use reqwest::multipart::Form;
use reqwest::Method;
use tracing::debug;

use crate::api::Backend;
use crate::error::{ChallengeError, Result};
use crate::forms::{ActivityForm, ValidationError};
use crate::model::{Activity, CreatedActivity, FeedQuery};
use crate::session::Session;

/// One page of the activity feed, newest first.
pub(crate) async fn feed(
    backend: Backend<'_>,
    session: &Session,
    query: &FeedQuery,
) -> Result<Vec<Activity>> {
    let activities: Vec<Activity> = backend
        .authed(Method::GET, "activities/all", session)?
        .map(|b| b.query(query))
        .json()
        .await?;
    debug!(count = activities.len(), page = query.page, "fetched activity feed");
    Ok(activities)
}

pub(crate) async fn get(backend: Backend<'_>, session: &Session, id: u64) -> Result<Activity> {
    backend
        .authed(Method::GET, &format!("activities/{id}"), session)?
        .json()
        .await
}

/// Validate the form and submit it as multipart. Photo parts are rebuilt from
/// the batch on every call.
pub(crate) async fn submit(
    backend: Backend<'_>,
    session: &Session,
    form: &ActivityForm,
) -> Result<CreatedActivity> {
    form.validate()?;
    let call = backend.authed(Method::POST, "activities", session)?;
    let body = multipart(form, session).map_err(|e| match e {
        FormError::Invalid(e) => ChallengeError::Validation(e),
        FormError::Part(source) => ChallengeError::Http {
            url: call.url().to_owned(),
            source,
        },
    })?;
    let created: CreatedActivity = call.map(|b| b.multipart(body)).json().await?;
    debug!(
        id = created.id,
        photos = form.photos.len(),
        "submitted activity"
    );
    Ok(created)
}

/// Remove the caller from a shared activity.
pub(crate) async fn leave(backend: Backend<'_>, session: &Session, id: u64) -> Result<()> {
    backend
        .authed(Method::POST, &format!("activities/{id}/leave"), session)?
        .empty()
        .await
}

enum FormError {
    Invalid(ValidationError),
    Part(reqwest::Error),
}

/// Text fields as sent, in order. Split out from [`multipart`] so the field
/// layout can be checked without a request.
fn text_fields(
    form: &ActivityForm,
    session: &Session,
) -> std::result::Result<Vec<(&'static str, String)>, ValidationError> {
    let activity_type = form
        .activity_type
        .as_ref()
        .ok_or(ValidationError::MissingField("activity type"))?;
    let energy = form.energy.ok_or(ValidationError::MissingField("energy"))?;

    let mut fields = Vec::new();
    if let Some(team_id) = form.team_id {
        fields.push(("teamId", team_id.to_string()));
    }
    fields.push(("participantId", session.participant_id.to_string()));
    for id in &form.participant_ids {
        fields.push(("participantIds", id.to_string()));
    }
    fields.push(("type", activity_type.name.clone()));
    fields.push(("energy", energy.to_string()));
    let description = form.description.as_deref().map(str::trim);
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        fields.push(("description", description.to_string()));
    }
    if let Some(minutes) = form.duration_to_send() {
        fields.push(("durationMinutes", minutes.to_string()));
    }
    Ok(fields)
}

fn multipart(form: &ActivityForm, session: &Session) -> std::result::Result<Form, FormError> {
    let body = text_fields(form, session)
        .map_err(FormError::Invalid)?
        .into_iter()
        .fold(Form::new(), |body, (name, value)| body.text(name, value));
    form.photos.attach(body, "photos").map_err(FormError::Part)
}
