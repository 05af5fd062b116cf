use crate::forms::ValidationError;
use crate::upload::UploadError;

/// Fallback shown when a rejected request carries no readable message.
pub(crate) const FALLBACK_REJECTION: &str = "request was rejected by the server";

/// Shown for any failure to reach the server or read its answer.
pub(crate) const CONNECTION_MESSAGE: &str = "server connection error";

/// All errors that can occur while talking to the challenge backend.
#[derive(thiserror::Error, Debug)]
pub enum ChallengeError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Failed to read the response body.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The server refused the session token.
    #[error("not authorized for {url}")]
    Unauthorized { url: String },

    /// Server returned a non-success HTTP status code.
    #[error("{message} ({status} for {url})")]
    Rejected {
        url: String,
        status: reqwest::StatusCode,
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("unexpected response shape from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// A request path could not be joined onto the base URL.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// Client configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// A form failed client-side checks; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A photo batch was refused before upload.
    #[error(transparent)]
    Upload(#[from] UploadError),
}

/// Coarse category of a [`ChallengeError`], used to pick what to show the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The server could not be reached or its answer could not be read.
    Connection,
    /// Client-side checks failed before any request was made.
    Validation,
    /// The server answered with a non-success status or an unusable body.
    Rejected,
}

impl ChallengeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http { .. } | Self::ResponseBody { .. } => ErrorKind::Connection,
            Self::Validation(_) | Self::Upload(_) => ErrorKind::Validation,
            Self::Unauthorized { .. }
            | Self::Rejected { .. }
            | Self::Decode { .. }
            | Self::Url(_)
            | Self::Config(_) => ErrorKind::Rejected,
        }
    }

    /// True when the caller should send the user back to the login screen.
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// A message suitable for showing inline next to the action that failed.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { .. } | Self::ResponseBody { .. } => CONNECTION_MESSAGE.to_string(),
            Self::Rejected { message, .. } => message.clone(),
            Self::Unauthorized { .. } => "please sign in again".to_string(),
            Self::Decode { .. } | Self::Url(_) | Self::Config(_) => {
                FALLBACK_REJECTION.to_string()
            }
            Self::Validation(e) => e.to_string(),
            Self::Upload(e) => e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChallengeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_is_shown_verbatim() {
        let err = ChallengeError::Rejected {
            url: "http://localhost/api/teams".to_string(),
            status: reqwest::StatusCode::BAD_REQUEST,
            message: "team name already taken".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Rejected);
        assert_eq!(err.user_message(), "team name already taken");
        assert!(!err.requires_login());
    }

    #[test]
    fn test_unauthorized_requires_login() {
        let err = ChallengeError::Unauthorized {
            url: "http://localhost/api/notifications".to_string(),
        };
        assert!(err.requires_login());
        assert_eq!(err.kind(), ErrorKind::Rejected);
    }

    #[test]
    fn test_validation_errors_are_validation_kind() {
        let err: ChallengeError = ValidationError::MissingField("energy").into();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.user_message(), "required field is missing: energy");
    }

    #[test]
    fn test_decode_errors_use_fallback_message() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = ChallengeError::Decode {
            url: "http://localhost/api/events/1".to_string(),
            source,
        };
        assert_eq!(err.user_message(), FALLBACK_REJECTION);
    }
}
