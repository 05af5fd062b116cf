pub(crate) mod activities;
pub(crate) mod auth;
pub(crate) mod catalog;
pub(crate) mod events;
pub(crate) mod invitations;
pub(crate) mod moderation;
pub(crate) mod notifications;
pub(crate) mod participants;
pub(crate) mod social;
pub(crate) mod teams;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ChallengeError, Result, FALLBACK_REJECTION};
use crate::session::Session;

/// Borrowed view of the HTTP client and API root used by the request functions.
#[derive(Clone, Copy)]
pub(crate) struct Backend<'a> {
    pub http: &'a reqwest::Client,
    pub base_url: &'a Url,
}

/// A request that has been built but not sent, remembered with its URL for errors.
pub(crate) struct Call {
    url: String,
    builder: RequestBuilder,
}

impl<'a> Backend<'a> {
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Start a request with no credentials.
    pub fn public(&self, method: Method, path: &str) -> Result<Call> {
        let url = self.url(path)?;
        Ok(Call {
            url: url.to_string(),
            builder: self.http.request(method, url),
        })
    }

    /// Start a request carrying the session's bearer token.
    pub fn authed(&self, method: Method, path: &str, session: &Session) -> Result<Call> {
        let call = self.public(method, path)?;
        Ok(call.map(|b| b.bearer_auth(session.token())))
    }
}

impl Call {
    pub fn map(self, f: impl FnOnce(RequestBuilder) -> RequestBuilder) -> Self {
        Self {
            url: self.url,
            builder: f(self.builder),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send and decode the JSON body into `T`.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let (url, body) = self.send().await?;
        decode(&url, &body)
    }

    /// Send and decode a body that may legitimately be empty or `null`.
    pub async fn optional_json<T: DeserializeOwned>(self) -> Result<Option<T>> {
        let (url, body) = self.send().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        decode(&url, &body)
    }

    /// Send and discard the body.
    pub async fn empty(self) -> Result<()> {
        self.send().await.map(|_| ())
    }

    async fn send(self) -> Result<(String, String)> {
        let Call { url, builder } = self;
        debug!(url, "sending request");

        let response = builder.send().await.map_err(|e| ChallengeError::Http {
            url: url.clone(),
            source: e,
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ChallengeError::ResponseBody {
                url: url.clone(),
                source: e,
            })?;

        if status == StatusCode::UNAUTHORIZED {
            warn!(url, "session rejected");
            return Err(ChallengeError::Unauthorized { url });
        }
        if !status.is_success() {
            warn!(url, %status, "request rejected");
            return Err(ChallengeError::Rejected {
                message: rejection_message(&body),
                url,
                status,
            });
        }

        Ok((url, body))
    }
}

pub(crate) fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| ChallengeError::Decode {
        url: url.to_owned(),
        source: e,
    })
}

/// Best-effort human message from an error body: `message`, then `error`.
pub(crate) fn rejection_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "error"]
                .iter()
                .find_map(|key| v.get(key).and_then(|m| m.as_str()).map(str::to_owned))
        })
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_REJECTION.to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn base() -> Url {
        Url::parse("http://localhost:8080/api/").unwrap()
    }

    /// A canned JSON response for one request path.
    pub(crate) struct Route {
        pub path: &'static str,
        pub status: u16,
        pub body: &'static str,
    }

    /// Serve `routes` on a loopback port and return the matching API root.
    /// Unknown paths answer 404. Each connection handles one request.
    pub(crate) async fn serve(routes: Vec<Route>) -> Url {
        use std::sync::Arc;
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes = Arc::new(routes);

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let routes = Arc::clone(&routes);
                tokio::spawn(async move {
                    let mut head = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                        match stream.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => head.extend_from_slice(&chunk[..n]),
                        }
                    }
                    let head = String::from_utf8_lossy(&head);
                    let path = head.split_whitespace().nth(1).unwrap_or("/");
                    let (status, body) = routes
                        .iter()
                        .find(|r| r.path == path)
                        .map_or((404, ""), |r| (r.status, r.body));
                    let response = format!(
                        "HTTP/1.1 {status} Canned\r\ncontent-type: application/json\r\n\
                         content-length: {}\r\nconnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        Url::parse(&format!("http://{addr}/api/")).unwrap()
    }

    #[test]
    fn test_paths_join_under_api_root() {
        let http = reqwest::Client::new();
        let base = base();
        let backend = Backend {
            http: &http,
            base_url: &base,
        };
        assert_eq!(
            backend.url("/teams/3/activities").unwrap().as_str(),
            "http://localhost:8080/api/teams/3/activities"
        );
        assert_eq!(
            backend.url("events/displayed").unwrap().as_str(),
            "http://localhost:8080/api/events/displayed"
        );
    }

    #[test]
    fn test_rejection_message_prefers_message_then_error() {
        assert_eq!(
            rejection_message(r#"{"message":"Invalid current password","error":"Bad Request"}"#),
            "Invalid current password"
        );
        assert_eq!(rejection_message(r#"{"error":"Forbidden"}"#), "Forbidden");
        assert_eq!(rejection_message("<html>502</html>"), FALLBACK_REJECTION);
        assert_eq!(rejection_message(r#"{"message":"  "}"#), FALLBACK_REJECTION);
    }

    #[test]
    fn test_decode_reports_url() {
        let err = decode::<Vec<u32>>("http://localhost/api/x", r#"{"not":"a list"}"#).unwrap_err();
        assert!(err.to_string().contains("http://localhost/api/x"));
    }
}
