use reqwest::Method;
use tracing::debug;

use crate::api::Backend;
use crate::error::Result;
use crate::forms::prepare_broadcast;
use crate::model::{BroadcastReceipt, Notification, NotificationDraft, NotificationTemplate};
use crate::session::Session;

pub(crate) async fn list(backend: Backend<'_>, session: &Session) -> Result<Vec<Notification>> {
    let notifications: Vec<Notification> = backend
        .authed(Method::GET, "notifications", session)?
        .json()
        .await?;
    debug!(count = notifications.len(), "fetched notifications");
    Ok(notifications)
}

/// The endpoint answers with a bare number.
pub(crate) async fn unread_count(backend: Backend<'_>, session: &Session) -> Result<u64> {
    backend
        .authed(Method::GET, "notifications/unread/count", session)?
        .json()
        .await
}

pub(crate) async fn mark_read(backend: Backend<'_>, session: &Session, id: u64) -> Result<()> {
    backend
        .authed(Method::PUT, &format!("notifications/{id}/read"), session)?
        .empty()
        .await
}

pub(crate) async fn mark_all_read(backend: Backend<'_>, session: &Session) -> Result<()> {
    backend
        .authed(Method::PUT, "notifications/read-all", session)?
        .empty()
        .await
}

pub(crate) async fn delete(backend: Backend<'_>, session: &Session, id: u64) -> Result<()> {
    backend
        .authed(Method::DELETE, &format!("notifications/{id}"), session)?
        .empty()
        .await
}

/// Send an admin notification to the draft's audience right away.
pub(crate) async fn broadcast(
    backend: Backend<'_>,
    session: &Session,
    draft: &NotificationDraft,
) -> Result<BroadcastReceipt> {
    let draft = prepare_broadcast(draft)?;
    let receipt: BroadcastReceipt = backend
        .authed(Method::POST, "notifications/admin/send", session)?
        .map(|b| b.json(&draft))
        .json()
        .await?;
    debug!(event_id = draft.event_id, count = receipt.count, "notification sent");
    Ok(receipt)
}

pub(crate) async fn save_draft(
    backend: Backend<'_>,
    session: &Session,
    draft: &NotificationDraft,
) -> Result<NotificationTemplate> {
    let draft = prepare_broadcast(draft)?;
    backend
        .authed(Method::POST, "notifications/admin/drafts", session)?
        .map(|b| b.json(&draft))
        .json()
        .await
}

pub(crate) async fn drafts(
    backend: Backend<'_>,
    session: &Session,
    event_id: u64,
) -> Result<Vec<NotificationTemplate>> {
    templates(backend, session, &format!("notifications/admin/drafts/{event_id}")).await
}

pub(crate) async fn sent(
    backend: Backend<'_>,
    session: &Session,
    event_id: u64,
) -> Result<Vec<NotificationTemplate>> {
    templates(backend, session, &format!("notifications/admin/sent/{event_id}")).await
}

async fn templates(
    backend: Backend<'_>,
    session: &Session,
    path: &str,
) -> Result<Vec<NotificationTemplate>> {
    let templates: Vec<NotificationTemplate> =
        backend.authed(Method::GET, path, session)?.json().await?;
    debug!(count = templates.len(), "fetched notification templates");
    Ok(templates)
}

/// Send a saved draft; the returned template carries the recipient count.
pub(crate) async fn send_template(
    backend: Backend<'_>,
    session: &Session,
    template_id: u64,
) -> Result<NotificationTemplate> {
    backend
        .authed(
            Method::POST,
            &format!("notifications/admin/templates/{template_id}/send"),
            session,
        )?
        .json()
        .await
}

pub(crate) async fn delete_template(
    backend: Backend<'_>,
    session: &Session,
    template_id: u64,
) -> Result<()> {
    backend
        .authed(
            Method::DELETE,
            &format!("notifications/admin/templates/{template_id}"),
            session,
        )?
        .empty()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{serve, Route};
    use crate::model::RecipientType;

    #[test]
    fn test_broadcast_body_shape() {
        let draft = prepare_broadcast(&NotificationDraft {
            event_id: 4,
            title: "Final week".into(),
            message: "Last push!".into(),
            recipient_type: RecipientType::All,
            participant_ids: vec![9],
        })
        .unwrap();
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            serde_json::json!({
                "eventId": 4,
                "title": "Final week",
                "message": "Last push!",
                "recipientType": "ALL",
                "participantIds": []
            })
        );
    }

    #[tokio::test]
    async fn test_unread_count_and_drafts_decode() {
        let base = serve(vec![
            Route {
                path: "/api/notifications/unread/count",
                status: 200,
                body: "3",
            },
            Route {
                path: "/api/notifications/admin/drafts/4",
                status: 200,
                body: r#"[{"id":1,"title":"Hi","message":"Go","recipientType":"SPECIFIC",
                    "participantIds":[2],"status":"DRAFT","sentCount":null,
                    "createdAt":"2025-05-01T10:00:00","sentAt":null,"createdByName":"Admin"}]"#,
            },
        ])
        .await;
        let http = reqwest::Client::new();
        let backend = Backend {
            http: &http,
            base_url: &base,
        };
        let session = Session::new("t", 1, "admin", "Admin");

        assert_eq!(unread_count(backend, &session).await.unwrap(), 3);
        let drafts = drafts(backend, &session, 4).await.unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].participant_ids, vec![2]);
        assert_eq!(drafts[0].sent_count, 0);
    }
}
