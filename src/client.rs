use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::instrument;
use url::Url;

use crate::api::{self, Backend};
use crate::config::ClientConfig;
use crate::dashboard::HomePage;
use crate::error::{ChallengeError, Result};
use crate::forms::{ActivityForm, PasswordChange};
use crate::model::*;
use crate::reactions::{ReactionIntent, ReactionState};
use crate::search::{ParticipantSearch, SearchResults, SEARCH_DEBOUNCE};
use crate::session::Session;
use crate::upload::PhotoFile;

/// The main entry point for talking to the challenge backend.
///
/// `ChallengeClient` wraps a [`reqwest::Client`] and the API root, and
/// exposes one method per backend operation. Authenticated methods take the
/// [`Session`] returned by [`ChallengeClient::login`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> challenge_client::Result<()> {
/// use challenge_client::{ChallengeClient, Credentials, HomePage};
///
/// let client = ChallengeClient::new()?;
/// let session = client
///     .login(&Credentials {
///         username: "anna".into(),
///         password: "secret".into(),
///     })
///     .await?;
/// if let HomePage::Featured { view, .. } = client.home_page(&session).await? {
///     println!("tabs: {:?}", view.tabs());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ChallengeClient {
    http: reqwest::Client,
    base_url: Url,
    search_debounce: Duration,
}

impl ChallengeClient {
    /// Create a client for the default API root.
    pub fn new() -> Result<Self> {
        Self::from_config(&ClientConfig::default())
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ChallengeError::Http {
                url: config.base_url.clone(),
                source: e,
            })?;
        let client = Self::with_client(http, &config.base_url)?;
        Ok(client.with_search_debounce(config.search_debounce()))
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            http: client,
            base_url: normalize_base(base_url)?,
            search_debounce: SEARCH_DEBOUNCE,
        })
    }

    /// Override the delay used by [`ChallengeClient::participant_search`].
    pub fn with_search_debounce(mut self, delay: Duration) -> Self {
        self.search_debounce = delay;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn search_debounce(&self) -> Duration {
        self.search_debounce
    }

    /// A search-as-you-type box backed by this client, using the configured
    /// debounce delay. Must be fed from within a tokio runtime.
    pub fn participant_search(
        &self,
        session: Session,
    ) -> (ParticipantSearch<Self>, mpsc::UnboundedReceiver<SearchResults>) {
        ParticipantSearch::new(Arc::new(self.clone()), session, self.search_debounce)
    }

    fn backend(&self) -> Backend<'_> {
        Backend {
            http: &self.http,
            base_url: &self.base_url,
        }
    }

    // auth

    /// Log in and obtain a session.
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        api::auth::login(self.backend(), credentials).await
    }

    #[instrument(skip(self, registration), fields(username = %registration.username))]
    pub async fn register(&self, registration: &Registration) -> Result<Session> {
        api::auth::register(self.backend(), registration).await
    }

    /// Register through an event registration link.
    #[instrument(skip(self, registration), fields(username = %registration.username))]
    pub async fn register_with_invitation(
        &self,
        registration: &InvitationRegistration,
    ) -> Result<Participant> {
        api::auth::register_with_invitation(self.backend(), registration).await
    }

    /// Look up a registration link before signing up with it.
    #[instrument(skip(self))]
    pub async fn invitation_by_token(&self, token: &str) -> Result<InvitationLink> {
        api::auth::invitation_by_token(self.backend(), token).await
    }

    #[instrument(skip(self, session, change), fields(participant_id = session.participant_id))]
    pub async fn change_password(&self, session: &Session, change: &PasswordChange) -> Result<()> {
        api::auth::change_password(self.backend(), session, change).await
    }

    #[instrument(skip(self, session))]
    pub async fn reset_password(&self, session: &Session, participant_id: u64) -> Result<()> {
        api::auth::reset_password(self.backend(), session, participant_id).await
    }

    // admin accounts

    #[instrument(skip(self, session))]
    pub async fn admin_participants(&self, session: &Session) -> Result<Vec<Participant>> {
        api::participants::admin_list(self.backend(), session).await
    }

    #[instrument(skip(self, session, account), fields(username = %account.username))]
    pub async fn create_participant(
        &self,
        session: &Session,
        account: &ParticipantAccount,
    ) -> Result<Participant> {
        api::participants::admin_create(self.backend(), session, account).await
    }

    #[instrument(skip(self, session, account))]
    pub async fn update_participant(
        &self,
        session: &Session,
        id: u64,
        account: &ParticipantAccount,
    ) -> Result<Participant> {
        api::participants::admin_update(self.backend(), session, id, account).await
    }

    #[instrument(skip(self, session))]
    pub async fn delete_participant(&self, session: &Session, id: u64) -> Result<()> {
        api::participants::admin_delete(self.backend(), session, id).await
    }

    // events

    #[instrument(skip(self, session))]
    pub async fn events(&self, session: &Session) -> Result<Vec<EventSummary>> {
        api::events::list(self.backend(), session).await
    }

    #[instrument(skip(self, session))]
    pub async fn active_events(&self, session: &Session) -> Result<Vec<EventSummary>> {
        api::events::active(self.backend(), session).await
    }

    #[instrument(skip(self, session))]
    pub async fn event(&self, session: &Session, id: u64) -> Result<Event> {
        api::events::get(self.backend(), session, id).await
    }

    /// The event flagged for the home page, if any.
    #[instrument(skip(self, session))]
    pub async fn displayed_event(&self, session: &Session) -> Result<Option<Event>> {
        api::events::displayed(self.backend(), session).await
    }

    /// Compose the home page: the featured event's dashboards, or the active
    /// events when nothing is featured.
    #[instrument(skip(self, session))]
    pub async fn home_page(&self, session: &Session) -> Result<HomePage> {
        api::events::home_page(self.backend(), session).await
    }

    #[instrument(skip(self, session))]
    pub async fn event_participants(
        &self,
        session: &Session,
        event_id: u64,
    ) -> Result<Vec<EventParticipant>> {
        api::events::participants(self.backend(), session, event_id).await
    }

    #[instrument(skip(self, session))]
    pub async fn admin_events(&self, session: &Session) -> Result<Vec<Event>> {
        api::events::admin_list(self.backend(), session).await
    }

    #[instrument(skip(self, session, request), fields(name = %request.name))]
    pub async fn create_event(&self, session: &Session, request: &EventRequest) -> Result<Event> {
        api::events::create(self.backend(), session, request).await
    }

    #[instrument(skip(self, session, request))]
    pub async fn update_event(
        &self,
        session: &Session,
        id: u64,
        request: &EventRequest,
    ) -> Result<Event> {
        api::events::update(self.backend(), session, id, request).await
    }

    #[instrument(skip(self, session))]
    pub async fn delete_event(&self, session: &Session, id: u64) -> Result<()> {
        api::events::delete(self.backend(), session, id).await
    }

    /// Show (`true`) or hide (`false`) an event on the home page.
    #[instrument(skip(self, session))]
    pub async fn set_event_displayed(&self, session: &Session, id: u64, shown: bool) -> Result<()> {
        api::events::set_displayed(self.backend(), session, id, shown).await
    }

    #[instrument(skip(self, session))]
    pub async fn event_news(&self, session: &Session, event_id: u64) -> Result<Vec<EventNews>> {
        api::events::news(self.backend(), session, event_id).await
    }

    #[instrument(skip(self, session, content))]
    pub async fn post_news(
        &self,
        session: &Session,
        event_id: u64,
        content: &str,
    ) -> Result<EventNews> {
        api::events::post_news(self.backend(), session, event_id, content).await
    }

    #[instrument(skip(self, session))]
    pub async fn delete_news(&self, session: &Session, news_id: u64) -> Result<()> {
        api::events::delete_news(self.backend(), session, news_id).await
    }

    #[instrument(skip(self, session, content))]
    pub async fn edit_news(
        &self,
        session: &Session,
        news_id: u64,
        content: &str,
    ) -> Result<EventNews> {
        api::events::edit_news(self.backend(), session, news_id, content).await
    }

    /// Invite participants into an event.
    #[instrument(skip(self, session, invite), fields(event_id = invite.event_id))]
    pub async fn invite_to_event(
        &self,
        session: &Session,
        invite: &EventInvite,
    ) -> Result<Vec<EventParticipant>> {
        api::events::invite(self.backend(), session, invite).await
    }

    // teams

    #[instrument(skip(self, session))]
    pub async fn teams(&self, session: &Session) -> Result<Vec<Team>> {
        api::teams::list(self.backend(), session).await
    }

    #[instrument(skip(self, session))]
    pub async fn team(&self, session: &Session, id: u64) -> Result<Team> {
        api::teams::get(self.backend(), session, id).await
    }

    #[instrument(skip(self, session))]
    pub async fn create_team(&self, session: &Session, team: &NewTeam) -> Result<Team> {
        api::teams::create(self.backend(), session, team).await
    }

    #[instrument(skip(self, session))]
    pub async fn update_team(
        &self,
        session: &Session,
        id: u64,
        update: &TeamUpdate,
    ) -> Result<Team> {
        api::teams::update(self.backend(), session, id, update).await
    }

    #[instrument(skip(self, session))]
    pub async fn delete_team(&self, session: &Session, id: u64) -> Result<()> {
        api::teams::delete(self.backend(), session, id).await
    }

    #[instrument(skip(self, session))]
    pub async fn leave_team(&self, session: &Session, id: u64) -> Result<()> {
        api::teams::leave(self.backend(), session, id).await
    }

    #[instrument(skip(self, session))]
    pub async fn team_members(&self, session: &Session, id: u64) -> Result<Vec<TeamMember>> {
        api::teams::members(self.backend(), session, id).await
    }

    #[instrument(skip(self, session))]
    pub async fn team_rankings(&self, session: &Session) -> Result<Vec<TeamRanking>> {
        api::teams::rankings(self.backend(), session).await
    }

    #[instrument(skip(self, session))]
    pub async fn team_activities(&self, session: &Session, id: u64) -> Result<Vec<Activity>> {
        api::teams::activities(self.backend(), session, id).await
    }

    /// Raw per-day counts; lay them out with [`heatmap_grid`].
    #[instrument(skip(self, session))]
    pub async fn team_heatmap(&self, session: &Session, id: u64) -> Result<Vec<HeatmapDay>> {
        api::teams::heatmap(self.backend(), session, id).await
    }

    #[instrument(skip(self, session))]
    pub async fn invite_to_team(
        &self,
        session: &Session,
        team_id: u64,
        participant_id: u64,
    ) -> Result<()> {
        api::teams::invite(self.backend(), session, team_id, participant_id).await
    }

    /// Upload a team avatar; returns the stored image URL.
    #[instrument(skip(self, session))]
    pub async fn upload_team_image(
        &self,
        session: &Session,
        team_id: u64,
        image: &PhotoFile,
    ) -> Result<String> {
        api::teams::upload_image(self.backend(), session, team_id, image).await
    }

    #[instrument(skip(self, session))]
    pub async fn admin_teams(&self, session: &Session) -> Result<Vec<TeamRef>> {
        api::teams::admin_list(self.backend(), session).await
    }

    /// Create a team from the admin panel, without initial members.
    #[instrument(skip(self, session, draft), fields(name = %draft.name))]
    pub async fn admin_create_team(
        &self,
        session: &Session,
        draft: &AdminTeamDraft,
    ) -> Result<TeamRef> {
        api::teams::admin_create(self.backend(), session, draft).await
    }

    #[instrument(skip(self, session))]
    pub async fn admin_delete_team(&self, session: &Session, id: u64) -> Result<()> {
        api::teams::admin_delete(self.backend(), session, id).await
    }

    // participants

    #[instrument(skip(self, session))]
    pub async fn participant(&self, session: &Session, id: u64) -> Result<Participant> {
        api::participants::get(self.backend(), session, id).await
    }

    #[instrument(skip(self, session))]
    pub async fn update_profile(
        &self,
        session: &Session,
        id: u64,
        profile: &ProfileUpdate,
    ) -> Result<Participant> {
        api::participants::update(self.backend(), session, id, profile).await
    }

    /// Search participants by name. For search-as-you-type use
    /// [`crate::search::ParticipantSearch`].
    #[instrument(skip(self, session))]
    pub async fn search_participants(
        &self,
        session: &Session,
        query: &str,
    ) -> Result<Vec<ParticipantSummary>> {
        api::participants::search(self.backend(), session, query).await
    }

    #[instrument(skip(self, session))]
    pub async fn participant_rankings(&self, session: &Session) -> Result<Vec<ParticipantRanking>> {
        api::participants::rankings(self.backend(), session).await
    }

    #[instrument(skip(self, session))]
    pub async fn badges(&self, session: &Session, participant_id: u64) -> Result<Vec<Badge>> {
        api::participants::badges(self.backend(), session, participant_id).await
    }

    // activities

    /// Fetch one page of the activity feed.
    #[instrument(skip(self, session))]
    pub async fn feed(&self, session: &Session, query: &FeedQuery) -> Result<Vec<Activity>> {
        api::activities::feed(self.backend(), session, query).await
    }

    #[instrument(skip(self, session))]
    pub async fn activity(&self, session: &Session, id: u64) -> Result<Activity> {
        api::activities::get(self.backend(), session, id).await
    }

    /// Validate and submit the activity form with its photos.
    #[instrument(skip(self, session, form), fields(photos = form.photos.len()))]
    pub async fn submit_activity(
        &self,
        session: &Session,
        form: &ActivityForm,
    ) -> Result<CreatedActivity> {
        api::activities::submit(self.backend(), session, form).await
    }

    #[instrument(skip(self, session))]
    pub async fn leave_activity(&self, session: &Session, id: u64) -> Result<()> {
        api::activities::leave(self.backend(), session, id).await
    }

    // social

    /// Toggle `kind` on `target`. `state` is updated only if the server
    /// accepts the change.
    #[instrument(skip(self, session, state))]
    pub async fn react(
        &self,
        session: &Session,
        target: ReactionTarget,
        kind: ReactionKind,
        state: &mut ReactionState,
    ) -> Result<ReactionIntent> {
        api::social::react(self.backend(), session, target, kind, state).await
    }

    #[instrument(skip(self, session))]
    pub async fn activity_reactions(
        &self,
        session: &Session,
        activity_id: u64,
    ) -> Result<ReactionSummary> {
        api::social::reactions(self.backend(), session, activity_id).await
    }

    #[instrument(skip(self, session))]
    pub async fn comments(&self, session: &Session, activity_id: u64) -> Result<Vec<Comment>> {
        api::social::comments(self.backend(), session, activity_id).await
    }

    #[instrument(skip(self, session))]
    pub async fn add_comment(
        &self,
        session: &Session,
        activity_id: u64,
        draft: &CommentDraft,
    ) -> Result<Comment> {
        api::social::add_comment(self.backend(), session, activity_id, draft).await
    }

    #[instrument(skip(self, session))]
    pub async fn edit_comment(
        &self,
        session: &Session,
        comment_id: u64,
        draft: &CommentDraft,
    ) -> Result<Comment> {
        api::social::edit_comment(self.backend(), session, comment_id, draft).await
    }

    #[instrument(skip(self, session))]
    pub async fn delete_comment(&self, session: &Session, comment_id: u64) -> Result<()> {
        api::social::delete_comment(self.backend(), session, comment_id).await
    }

    // moderation

    #[instrument(skip(self, session))]
    pub async fn pending_activities(
        &self,
        session: &Session,
        filter: &ModerationFilter,
    ) -> Result<Vec<PendingActivity>> {
        api::moderation::pending(self.backend(), session, filter).await
    }

    #[instrument(skip(self, session))]
    pub async fn approve_activity(
        &self,
        session: &Session,
        activity_id: u64,
        approval: &Approval,
    ) -> Result<()> {
        api::moderation::approve(self.backend(), session, activity_id, approval).await
    }

    #[instrument(skip(self, session))]
    pub async fn reject_activity(
        &self,
        session: &Session,
        activity_id: u64,
        reason: &str,
        penalty_type_id: Option<u64>,
    ) -> Result<()> {
        api::moderation::reject(self.backend(), session, activity_id, reason, penalty_type_id).await
    }

    #[instrument(skip(self, session))]
    pub async fn moderation_stats(&self, session: &Session) -> Result<ModerationStats> {
        api::moderation::stats(self.backend(), session).await
    }

    #[instrument(skip(self, session))]
    pub async fn bonus_types(&self, session: &Session, event_id: u64) -> Result<Vec<BonusType>> {
        api::moderation::bonus_types(self.backend(), session, event_id).await
    }

    #[instrument(skip(self, session))]
    pub async fn create_bonus_type(
        &self,
        session: &Session,
        draft: &BonusTypeDraft,
    ) -> Result<BonusType> {
        api::moderation::create_bonus_type(self.backend(), session, draft).await
    }

    #[instrument(skip(self, session))]
    pub async fn update_bonus_type(
        &self,
        session: &Session,
        id: u64,
        draft: &BonusTypeDraft,
    ) -> Result<BonusType> {
        api::moderation::update_bonus_type(self.backend(), session, id, draft).await
    }

    #[instrument(skip(self, session))]
    pub async fn delete_bonus_type(&self, session: &Session, id: u64) -> Result<()> {
        api::moderation::delete_bonus_type(self.backend(), session, id).await
    }

    // notifications

    #[instrument(skip(self, session))]
    pub async fn notifications(&self, session: &Session) -> Result<Vec<Notification>> {
        api::notifications::list(self.backend(), session).await
    }

    #[instrument(skip(self, session))]
    pub async fn unread_notification_count(&self, session: &Session) -> Result<u64> {
        api::notifications::unread_count(self.backend(), session).await
    }

    #[instrument(skip(self, session))]
    pub async fn mark_notification_read(&self, session: &Session, id: u64) -> Result<()> {
        api::notifications::mark_read(self.backend(), session, id).await
    }

    #[instrument(skip(self, session))]
    pub async fn mark_all_notifications_read(&self, session: &Session) -> Result<()> {
        api::notifications::mark_all_read(self.backend(), session).await
    }

    #[instrument(skip(self, session))]
    pub async fn delete_notification(&self, session: &Session, id: u64) -> Result<()> {
        api::notifications::delete(self.backend(), session, id).await
    }

    /// Send an admin notification now.
    #[instrument(skip(self, session, draft), fields(event_id = draft.event_id))]
    pub async fn broadcast_notification(
        &self,
        session: &Session,
        draft: &NotificationDraft,
    ) -> Result<BroadcastReceipt> {
        api::notifications::broadcast(self.backend(), session, draft).await
    }

    #[instrument(skip(self, session, draft), fields(event_id = draft.event_id))]
    pub async fn save_notification_draft(
        &self,
        session: &Session,
        draft: &NotificationDraft,
    ) -> Result<NotificationTemplate> {
        api::notifications::save_draft(self.backend(), session, draft).await
    }

    #[instrument(skip(self, session))]
    pub async fn notification_drafts(
        &self,
        session: &Session,
        event_id: u64,
    ) -> Result<Vec<NotificationTemplate>> {
        api::notifications::drafts(self.backend(), session, event_id).await
    }

    #[instrument(skip(self, session))]
    pub async fn sent_notifications(
        &self,
        session: &Session,
        event_id: u64,
    ) -> Result<Vec<NotificationTemplate>> {
        api::notifications::sent(self.backend(), session, event_id).await
    }

    #[instrument(skip(self, session))]
    pub async fn send_notification_template(
        &self,
        session: &Session,
        template_id: u64,
    ) -> Result<NotificationTemplate> {
        api::notifications::send_template(self.backend(), session, template_id).await
    }

    #[instrument(skip(self, session))]
    pub async fn delete_notification_template(
        &self,
        session: &Session,
        template_id: u64,
    ) -> Result<()> {
        api::notifications::delete_template(self.backend(), session, template_id).await
    }

    // invitations

    /// Pending team invitations for the session's participant.
    #[instrument(skip(self, session))]
    pub async fn team_invitations(&self, session: &Session) -> Result<Vec<TeamInvitation>> {
        api::invitations::team_invitations(self.backend(), session).await
    }

    #[instrument(skip(self, session))]
    pub async fn answer_team_invitation(
        &self,
        session: &Session,
        invitation_id: u64,
        accept: bool,
    ) -> Result<()> {
        api::invitations::answer_team_invitation(self.backend(), session, invitation_id, accept)
            .await
    }

    #[instrument(skip(self, session))]
    pub async fn event_invitations(&self, session: &Session) -> Result<Vec<EventParticipant>> {
        api::invitations::event_invitations(self.backend(), session).await
    }

    #[instrument(skip(self, session))]
    pub async fn answer_event_invitation(
        &self,
        session: &Session,
        invitation_id: u64,
        accept: bool,
    ) -> Result<EventParticipant> {
        api::invitations::answer_event_invitation(self.backend(), session, invitation_id, accept)
            .await
    }

    #[instrument(skip(self, session))]
    pub async fn create_invitation_link(
        &self,
        session: &Session,
        draft: &InvitationLinkDraft,
    ) -> Result<InvitationLink> {
        api::invitations::create_link(self.backend(), session, draft).await
    }

    #[instrument(skip(self, session))]
    pub async fn set_invitation_link_active(
        &self,
        session: &Session,
        id: u64,
        active: bool,
    ) -> Result<()> {
        api::invitations::set_link_active(self.backend(), session, id, active).await
    }

    #[instrument(skip(self, session))]
    pub async fn delete_invitation_link(&self, session: &Session, id: u64) -> Result<()> {
        api::invitations::delete_link(self.backend(), session, id).await
    }

    #[instrument(skip(self, session))]
    pub async fn invitation_links(
        &self,
        session: &Session,
        event_id: u64,
    ) -> Result<Vec<InvitationLink>> {
        api::invitations::links(self.backend(), session, event_id).await
    }

    #[instrument(skip(self, session))]
    pub async fn invitation_stats(
        &self,
        session: &Session,
        event_id: u64,
    ) -> Result<InvitationStats> {
        api::invitations::stats(self.backend(), session, event_id).await
    }

    #[instrument(skip(self, session))]
    pub async fn invitation_usages(
        &self,
        session: &Session,
        id: u64,
    ) -> Result<Vec<InvitationUsage>> {
        api::invitations::usages(self.backend(), session, id).await
    }

    // catalog

    #[instrument(skip(self, session))]
    pub async fn activity_types(
        &self,
        session: &Session,
        event_id: Option<u64>,
    ) -> Result<Vec<ActivityType>> {
        api::catalog::activity_types(self.backend(), session, event_id).await
    }

    #[instrument(skip(self, session))]
    pub async fn create_activity_type(
        &self,
        session: &Session,
        draft: &ActivityTypeDraft,
    ) -> Result<ActivityType> {
        api::catalog::create_activity_type(self.backend(), session, draft).await
    }

    #[instrument(skip(self, session))]
    pub async fn delete_activity_type(&self, session: &Session, id: u64) -> Result<()> {
        api::catalog::delete_activity_type(self.backend(), session, id).await
    }

    #[instrument(skip(self, session))]
    pub async fn report_bug(&self, session: &Session, draft: &BugReportDraft) -> Result<BugReport> {
        api::catalog::report_bug(self.backend(), session, draft).await
    }

    #[instrument(skip(self, session))]
    pub async fn my_bug_reports(&self, session: &Session) -> Result<Vec<BugReport>> {
        api::catalog::my_bug_reports(self.backend(), session).await
    }
}

/// Parse the API root and make sure relative paths join beneath it.
fn normalize_base(base_url: &str) -> Result<Url> {
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Ok(Url::parse(&base)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client =
            ChallengeClient::with_client(reqwest::Client::new(), "http://localhost:8080/api")
                .unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/api/");
        assert_eq!(
            client.backend().url("teams/rankings").unwrap().as_str(),
            "http://localhost:8080/api/teams/rankings"
        );
    }

    #[test]
    fn test_invalid_base_url_is_an_error() {
        assert!(ChallengeClient::with_client(reqwest::Client::new(), "not a url").is_err());
    }

    #[test]
    fn test_search_box_uses_configured_debounce() {
        let config = ClientConfig {
            search_debounce_ms: 50,
            ..ClientConfig::default()
        };
        let client = ChallengeClient::from_config(&config).unwrap();
        assert_eq!(client.search_debounce(), Duration::from_millis(50));

        let (search, _rx) = client.participant_search(Session::new("t", 1, "anna", "Anna"));
        assert_eq!(search.delay(), Duration::from_millis(50));

        let default = ChallengeClient::new().unwrap();
        assert_eq!(default.search_debounce(), SEARCH_DEBOUNCE);
    }

    #[test]
    fn test_default_client_points_at_local_api() {
        let client = ChallengeClient::new().unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/api/");
    }
}
