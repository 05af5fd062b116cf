use reqwest::Method;
use tracing::debug;

use crate::api::Backend;
use crate::error::Result;
use crate::forms::require_text;
use crate::forms::ValidationError;
use crate::model::{
    Badge, Participant, ParticipantAccount, ParticipantRanking, ParticipantSummary, ProfileUpdate,
};
use crate::session::Session;

pub(crate) async fn get(backend: Backend<'_>, session: &Session, id: u64) -> Result<Participant> {
    backend
        .authed(Method::GET, &format!("participants/{id}"), session)?
        .json()
        .await
}

pub(crate) async fn update(
    backend: Backend<'_>,
    session: &Session,
    id: u64,
    profile: &ProfileUpdate,
) -> Result<Participant> {
    require_text(&profile.name, "name")?;
    backend
        .authed(Method::PUT, &format!("participants/{id}"), session)?
        .map(|b| b.json(profile))
        .json()
        .await
}

/// Name search. Blank queries never reach the server.
pub(crate) async fn search(
    backend: Backend<'_>,
    session: &Session,
    query: &str,
) -> Result<Vec<ParticipantSummary>> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }
    let hits: Vec<ParticipantSummary> = backend
        .authed(Method::GET, "participants/search", session)?
        .map(|b| b.query(&[("query", query)]))
        .json()
        .await?;
    debug!(count = hits.len(), "participant search");
    Ok(hits)
}

pub(crate) async fn rankings(
    backend: Backend<'_>,
    session: &Session,
) -> Result<Vec<ParticipantRanking>> {
    let rankings: Vec<ParticipantRanking> = backend
        .authed(Method::GET, "participants/rankings", session)?
        .json()
        .await?;
    debug!(count = rankings.len(), "fetched participant rankings");
    Ok(rankings)
}

pub(crate) async fn badges(backend: Backend<'_>, session: &Session, id: u64) -> Result<Vec<Badge>> {
    let badges: Vec<Badge> = backend
        .authed(Method::GET, &format!("participants/{id}/badges"), session)?
        .json()
        .await?;
    debug!(count = badges.len(), "fetched badges");
    Ok(badges)
}

pub(crate) async fn admin_list(
    backend: Backend<'_>,
    session: &Session,
) -> Result<Vec<Participant>> {
    let participants: Vec<Participant> = backend
        .authed(Method::GET, "admin/participants", session)?
        .json()
        .await?;
    debug!(count = participants.len(), "fetched participants for admin");
    Ok(participants)
}

pub(crate) async fn admin_create(
    backend: Backend<'_>,
    session: &Session,
    account: &ParticipantAccount,
) -> Result<Participant> {
    require_text(&account.username, "username")?;
    require_text(&account.name, "name")?;
    if account.password.as_deref().map_or(true, |p| p.trim().is_empty()) {
        return Err(ValidationError::MissingField("password").into());
    }
    backend
        .authed(Method::POST, "admin/participants", session)?
        .map(|b| b.json(account))
        .json()
        .await
}

pub(crate) async fn admin_update(
    backend: Backend<'_>,
    session: &Session,
    id: u64,
    account: &ParticipantAccount,
) -> Result<Participant> {
    require_text(&account.name, "name")?;
    backend
        .authed(Method::PUT, &format!("admin/participants/{id}"), session)?
        .map(|b| b.json(account))
        .json()
        .await
}

pub(crate) async fn admin_delete(backend: Backend<'_>, session: &Session, id: u64) -> Result<()> {
    backend
        .authed(Method::DELETE, &format!("admin/participants/{id}"), session)?
        .empty()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::base;
    use crate::error::{ChallengeError, ErrorKind};

    fn backend_for<'a>(http: &'a reqwest::Client, base: &'a url::Url) -> Backend<'a> {
        Backend {
            http,
            base_url: base,
        }
    }

    #[tokio::test]
    async fn test_new_account_needs_a_password() {
        let http = reqwest::Client::new();
        let base = base();
        let account = ParticipantAccount {
            username: "olga".into(),
            name: "Olga".into(),
            ..ParticipantAccount::default()
        };

        let err = admin_create(backend_for(&http, &base), &Session::new("t", 1, "a", "A"), &account)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(matches!(
            err,
            ChallengeError::Validation(ValidationError::MissingField("password"))
        ));
    }
}
