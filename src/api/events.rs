use reqwest::Method;
use serde::Serialize;
use tracing::{debug, warn};

use crate::api::Backend;
use crate::dashboard::{DashboardView, HomePage};
use crate::error::Result;
use crate::forms::{require_text, ValidationError};
use crate::model::{Event, EventInvite, EventNews, EventParticipant, EventRequest, EventSummary};
use crate::session::Session;

#[derive(Serialize)]
struct NewsBody<'a> {
    content: &'a str,
}

pub(crate) async fn list(backend: Backend<'_>, session: &Session) -> Result<Vec<EventSummary>> {
    let events: Vec<EventSummary> = backend.authed(Method::GET, "events", session)?.json().await?;
    debug!(count = events.len(), "fetched events");
    Ok(events)
}

pub(crate) async fn active(backend: Backend<'_>, session: &Session) -> Result<Vec<EventSummary>> {
    let events: Vec<EventSummary> = backend
        .authed(Method::GET, "events/active", session)?
        .json()
        .await?;
    debug!(count = events.len(), "fetched active events");
    Ok(events)
}

pub(crate) async fn get(backend: Backend<'_>, session: &Session, id: u64) -> Result<Event> {
    backend
        .authed(Method::GET, &format!("events/{id}"), session)?
        .json()
        .await
}

/// The event flagged for the home page, if any.
pub(crate) async fn displayed(backend: Backend<'_>, session: &Session) -> Result<Option<Event>> {
    backend
        .authed(Method::GET, "events/displayed", session)?
        .optional_json()
        .await
}

/// Featured event with its dashboards, or the active events when nothing is
/// featured or the featured lookup fails.
pub(crate) async fn home_page(backend: Backend<'_>, session: &Session) -> Result<HomePage> {
    match displayed(backend, session).await {
        Ok(Some(event)) => {
            let view = DashboardView::for_event(&event);
            debug!(event_id = event.id, tabs = view.tabs().len(), "featured event");
            return Ok(HomePage::Featured {
                event: Box::new(event),
                view,
            });
        }
        Ok(None) => debug!("no featured event"),
        Err(e) => warn!(error = %e, "featured event lookup failed, listing active events"),
    }
    active(backend, session).await.map(HomePage::EventList)
}

pub(crate) async fn participants(
    backend: Backend<'_>,
    session: &Session,
    event_id: u64,
) -> Result<Vec<EventParticipant>> {
    let participants: Vec<EventParticipant> = backend
        .authed(Method::GET, &format!("events/{event_id}/participants"), session)?
        .json()
        .await?;
    debug!(count = participants.len(), "fetched event participants");
    Ok(participants)
}

pub(crate) async fn admin_list(backend: Backend<'_>, session: &Session) -> Result<Vec<Event>> {
    let events: Vec<Event> = backend
        .authed(Method::GET, "admin/events", session)?
        .json()
        .await?;
    debug!(count = events.len(), "fetched events for admin");
    Ok(events)
}

pub(crate) async fn create(
    backend: Backend<'_>,
    session: &Session,
    request: &EventRequest,
) -> Result<Event> {
    require_text(&request.name, "event name")?;
    backend
        .authed(Method::POST, "admin/events", session)?
        .map(|b| b.json(request))
        .json()
        .await
}

pub(crate) async fn update(
    backend: Backend<'_>,
    session: &Session,
    id: u64,
    request: &EventRequest,
) -> Result<Event> {
    require_text(&request.name, "event name")?;
    backend
        .authed(Method::PUT, &format!("admin/events/{id}"), session)?
        .map(|b| b.json(request))
        .json()
        .await
}

pub(crate) async fn delete(backend: Backend<'_>, session: &Session, id: u64) -> Result<()> {
    backend
        .authed(Method::DELETE, &format!("admin/events/{id}"), session)?
        .empty()
        .await
}

/// Show or hide an event on the home page.
pub(crate) async fn set_displayed(
    backend: Backend<'_>,
    session: &Session,
    id: u64,
    shown: bool,
) -> Result<()> {
    let action = if shown { "display" } else { "hide" };
    backend
        .authed(Method::POST, &format!("admin/events/{id}/{action}"), session)?
        .empty()
        .await
}

pub(crate) async fn news(
    backend: Backend<'_>,
    session: &Session,
    event_id: u64,
) -> Result<Vec<EventNews>> {
    let news: Vec<EventNews> = backend
        .authed(Method::GET, &format!("events/{event_id}/news"), session)?
        .json()
        .await?;
    debug!(count = news.len(), "fetched event news");
    Ok(news)
}

pub(crate) async fn post_news(
    backend: Backend<'_>,
    session: &Session,
    event_id: u64,
    content: &str,
) -> Result<EventNews> {
    require_text(content, "news")?;
    backend
        .authed(Method::POST, &format!("events/{event_id}/news"), session)?
        .map(|b| b.json(&NewsBody { content }))
        .json()
        .await
}

pub(crate) async fn edit_news(
    backend: Backend<'_>,
    session: &Session,
    news_id: u64,
    content: &str,
) -> Result<EventNews> {
    require_text(content, "news")?;
    backend
        .authed(Method::PUT, &format!("events/news/{news_id}"), session)?
        .map(|b| b.json(&NewsBody { content }))
        .json()
        .await
}

/// Invite participants into an event; returns the created memberships.
pub(crate) async fn invite(
    backend: Backend<'_>,
    session: &Session,
    invite: &EventInvite,
) -> Result<Vec<EventParticipant>> {
    if invite.participant_ids.is_empty() {
        return Err(ValidationError::NoRecipients.into());
    }
    let invited: Vec<EventParticipant> = backend
        .authed(Method::POST, "admin/events/invite", session)?
        .map(|b| b.json(invite))
        .json()
        .await?;
    debug!(event_id = invite.event_id, count = invited.len(), "invited participants");
    Ok(invited)
}

pub(crate) async fn delete_news(
    backend: Backend<'_>,
    session: &Session,
    news_id: u64,
) -> Result<()> {
    backend
        .authed(Method::DELETE, &format!("events/news/{news_id}"), session)?
        .empty()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{serve, Route};
    use crate::model::DashboardType;

    const ACTIVE: &str = r#"[{
        "id": 3,
        "name": "Autumn Ride",
        "startDate": "2025-09-01T00:00:00",
        "endDate": "2025-11-30T23:59:59",
        "status": "ACTIVE"
    }]"#;

    #[test]
    fn test_invite_and_news_bodies() {
        let invite = EventInvite {
            event_id: 4,
            participant_ids: vec![2, 3],
        };
        assert_eq!(
            serde_json::to_value(&invite).unwrap(),
            serde_json::json!({"eventId": 4, "participantIds": [2, 3]})
        );
        assert_eq!(
            serde_json::to_value(NewsBody { content: "Route changed" }).unwrap(),
            serde_json::json!({"content": "Route changed"})
        );
    }

    #[tokio::test]
    async fn test_empty_invite_is_refused_locally() {
        let http = reqwest::Client::new();
        let base = crate::api::tests::base();
        let backend = Backend {
            http: &http,
            base_url: &base,
        };
        let invite = EventInvite {
            event_id: 4,
            participant_ids: Vec::new(),
        };
        let err = super::invite(backend, &Session::new("t", 1, "a", "A"), &invite)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Validation);
    }

    async fn home_page_with(displayed: Route) -> HomePage {
        let base = serve(vec![
            displayed,
            Route {
                path: "/api/events/active",
                status: 200,
                body: ACTIVE,
            },
        ])
        .await;
        let http = reqwest::Client::new();
        let backend = Backend {
            http: &http,
            base_url: &base,
        };
        home_page(backend, &Session::new("t", 1, "anna", "Anna"))
            .await
            .unwrap()
    }

    fn assert_lists_active(page: HomePage) {
        match page {
            HomePage::EventList(events) => {
                assert_eq!(events.len(), 1);
                assert_eq!(events[0].name, "Autumn Ride");
            }
            HomePage::Featured { .. } => panic!("expected the active event list"),
        }
    }

    #[tokio::test]
    async fn test_home_page_lists_active_events_when_nothing_featured() {
        for body in ["", "null"] {
            let page = home_page_with(Route {
                path: "/api/events/displayed",
                status: 200,
                body,
            })
            .await;
            assert_lists_active(page);
        }
    }

    #[tokio::test]
    async fn test_home_page_lists_active_events_when_lookup_fails() {
        let page = home_page_with(Route {
            path: "/api/events/displayed",
            status: 500,
            body: r#"{"message":"boom"}"#,
        })
        .await;
        assert_lists_active(page);
    }

    #[tokio::test]
    async fn test_home_page_renders_featured_dashboards() {
        let page = home_page_with(Route {
            path: "/api/events/displayed",
            status: 200,
            body: r#"{
                "id": 4,
                "name": "Spring Steps",
                "startDate": "2025-03-01T00:00:00",
                "endDate": "2025-05-31T23:59:59",
                "dashboardTypes": ["RANKING", "FEED"],
                "dashboardOrder": ["TRACKER", "FEED"],
                "teamBasedCompetition": false
            }"#,
        })
        .await;

        let HomePage::Featured { event, view } = page else {
            panic!("expected the featured event");
        };
        assert_eq!(event.id, 4);
        assert_eq!(view.event_id(), 4);
        assert_eq!(view.tabs(), [DashboardType::Feed, DashboardType::Ranking]);
        assert_eq!(view.active(), Some(DashboardType::Feed));
        assert!(!view.is_team_based());
    }
}
