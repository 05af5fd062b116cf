use reqwest::Method;
use serde::Serialize;
use tracing::debug;

use crate::api::Backend;
use crate::error::Result;
use crate::forms::PasswordChange;
use crate::model::{
    Credentials, InvitationLink, InvitationRegistration, Participant, Registration,
};
use crate::session::Session;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordBody<'a> {
    old_password: &'a str,
    new_password: &'a str,
}

pub(crate) async fn login(backend: Backend<'_>, credentials: &Credentials) -> Result<Session> {
    let session: Session = backend
        .public(Method::POST, "auth/login")?
        .map(|b| b.json(credentials))
        .json()
        .await?;
    debug!(participant_id = session.participant_id, "logged in");
    Ok(session)
}

pub(crate) async fn register(backend: Backend<'_>, registration: &Registration) -> Result<Session> {
    let session: Session = backend
        .public(Method::POST, "auth/register")?
        .map(|b| b.json(registration))
        .json()
        .await?;
    debug!(participant_id = session.participant_id, "registered");
    Ok(session)
}

/// The invitation flow answers with the created participant, not a token;
/// the caller logs in afterwards.
pub(crate) async fn register_with_invitation(
    backend: Backend<'_>,
    registration: &InvitationRegistration,
) -> Result<Participant> {
    backend
        .public(Method::POST, "public/register-with-invitation")?
        .map(|b| b.json(registration))
        .json()
        .await
}

pub(crate) async fn invitation_by_token(
    backend: Backend<'_>,
    token: &str,
) -> Result<InvitationLink> {
    backend
        .public(Method::GET, &format!("public/invitation/{token}"))?
        .json()
        .await
}

pub(crate) async fn change_password(
    backend: Backend<'_>,
    session: &Session,
    change: &PasswordChange,
) -> Result<()> {
    change.validate()?;
    let body = ChangePasswordBody {
        old_password: &change.old_password,
        new_password: &change.new_password,
    };
    backend
        .authed(
            Method::POST,
            &format!("participants/{}/change-password", session.participant_id),
            session,
        )?
        .map(|b| b.json(&body))
        .empty()
        .await
}

/// Admin: reset a participant's password to their username.
pub(crate) async fn reset_password(
    backend: Backend<'_>,
    session: &Session,
    participant_id: u64,
) -> Result<()> {
    backend
        .authed(
            Method::POST,
            &format!("admin/participants/{participant_id}/reset-password"),
            session,
        )?
        .empty()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::base;
    use crate::error::ChallengeError;
    use crate::forms::ValidationError;

    #[tokio::test]
    async fn test_password_change_is_checked_before_sending() {
        let http = reqwest::Client::new();
        let base = base();
        let backend = Backend {
            http: &http,
            base_url: &base,
        };
        let change = PasswordChange {
            old_password: "old".to_string(),
            new_password: "abcd".to_string(),
            confirm_password: "abce".to_string(),
        };
        let err = change_password(backend, &Session::new("t", 1, "u", "U"), &change)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ChallengeError::Validation(ValidationError::PasswordMismatch)
        ));
    }

    #[test]
    fn test_change_password_body_shape() {
        let body = ChangePasswordBody {
            old_password: "a",
            new_password: "bcde",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"oldPassword": "a", "newPassword": "bcde"})
        );
    }
}
