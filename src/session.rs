use serde::{Deserialize, Serialize};

/// An authenticated session returned by login or registration.
///
/// Every authenticated [`crate::ChallengeClient`] method takes a `&Session`;
/// nothing is read from ambient storage.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    token: String,
    #[serde(rename = "userId")]
    pub participant_id: u64,
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    /// Set after an admin reset; the caller should force a password change.
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub password_reset_required: bool,
}

impl Session {
    pub fn new(
        token: impl Into<String>,
        participant_id: u64,
        username: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            participant_id,
            username: username.into(),
            name: name.into(),
            role: None,
            password_reset_required: false,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("ADMIN")
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("participant_id", &self.participant_id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
