use reqwest::Method;
use tracing::debug;

use crate::api::Backend;
use crate::error::Result;
use crate::forms::require_text;
use crate::model::{
    Comment, CommentDraft, ReactionKind, ReactionRequest, ReactionSummary, ReactionTarget,
};
use crate::reactions::{ReactionIntent, ReactionState};
use crate::session::Session;

/// Send the request implied by selecting `kind` and, once the server accepts
/// it, apply the change to `state`. On error `state` is left untouched.
pub(crate) async fn react(
    backend: Backend<'_>,
    session: &Session,
    target: ReactionTarget,
    kind: ReactionKind,
    state: &mut ReactionState,
) -> Result<ReactionIntent> {
    let intent = state.intent(kind);
    let path = target.path();
    let call = match intent {
        ReactionIntent::Add(kind) => backend
            .authed(Method::POST, &path, session)?
            .map(|b| b.json(&ReactionRequest { reaction_type: kind })),
        ReactionIntent::Remove(_) => backend.authed(Method::DELETE, &path, session)?,
    };
    call.empty().await?;
    state.apply(intent);
    debug!(?target, ?intent, total = state.total(), "reaction applied");
    Ok(intent)
}

pub(crate) async fn reactions(
    backend: Backend<'_>,
    session: &Session,
    activity_id: u64,
) -> Result<ReactionSummary> {
    backend
        .authed(Method::GET, &ReactionTarget::Activity(activity_id).path(), session)?
        .json()
        .await
}

pub(crate) async fn comments(
    backend: Backend<'_>,
    session: &Session,
    activity_id: u64,
) -> Result<Vec<Comment>> {
    let comments: Vec<Comment> = backend
        .authed(Method::GET, &format!("activities/{activity_id}/comments"), session)?
        .json()
        .await?;
    debug!(count = comments.len(), "fetched comments");
    Ok(comments)
}

pub(crate) async fn add_comment(
    backend: Backend<'_>,
    session: &Session,
    activity_id: u64,
    draft: &CommentDraft,
) -> Result<Comment> {
    require_text(&draft.text, "comment")?;
    backend
        .authed(Method::POST, &format!("activities/{activity_id}/comments"), session)?
        .map(|b| b.json(draft))
        .json()
        .await
}

pub(crate) async fn edit_comment(
    backend: Backend<'_>,
    session: &Session,
    comment_id: u64,
    draft: &CommentDraft,
) -> Result<Comment> {
    require_text(&draft.text, "comment")?;
    backend
        .authed(Method::PUT, &format!("comments/{comment_id}"), session)?
        .map(|b| b.json(draft))
        .json()
        .await
}

pub(crate) async fn delete_comment(
    backend: Backend<'_>,
    session: &Session,
    comment_id: u64,
) -> Result<()> {
    backend
        .authed(Method::DELETE, &format!("comments/{comment_id}"), session)?
        .empty()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::base;
    use crate::error::ErrorKind;

    #[tokio::test]
    async fn test_failed_reaction_leaves_state_untouched() {
        // Nothing listens on port 9; the request fails to connect.
        let http = reqwest::Client::new();
        let base = url::Url::parse("http://127.0.0.1:9/api/").unwrap();
        let backend = Backend {
            http: &http,
            base_url: &base,
        };
        let mut state = ReactionState::new([(ReactionKind::Fire, 1)].into_iter().collect(), None);
        let before = state.clone();

        let err = react(
            backend,
            &Session::new("t", 1, "u", "U"),
            ReactionTarget::Comment(3),
            ReactionKind::Like,
            &mut state,
        )
        .await
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Connection);
        assert_eq!(state, before);
    }

    #[test]
    fn test_reaction_paths() {
        let base = base();
        assert_eq!(
            base.join(&ReactionTarget::Comment(3).path()).unwrap().as_str(),
            "http://localhost:8080/api/comments/3/reactions"
        );
    }
}
