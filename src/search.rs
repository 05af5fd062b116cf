//! Debounced participant lookup.
//!
//! Each keystroke cancels the pending lookup and schedules a new one; only a
//! query that survives the full delay reaches the backend.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::Result;
use crate::model::ParticipantSummary;
use crate::session::Session;
use crate::ChallengeClient;

/// Delay used by the participant search boxes.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Cancel-and-reschedule timer: at most one scheduled job is alive at a time.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `job` after the delay unless another call to `schedule` or
    /// [`Debouncer::cancel`] comes first. Must be called within a tokio runtime.
    pub fn schedule<F>(&mut self, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            job.await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Anything that can look participants up by name.
pub trait ParticipantLookup: Send + Sync + 'static {
    fn search(
        &self,
        session: &Session,
        query: &str,
    ) -> impl Future<Output = Result<Vec<ParticipantSummary>>> + Send;
}

impl ParticipantLookup for ChallengeClient {
    async fn search(&self, session: &Session, query: &str) -> Result<Vec<ParticipantSummary>> {
        self.search_participants(session, query).await
    }
}

/// Outcome delivered for each query that survived the debounce window.
#[derive(Debug)]
pub struct SearchResults {
    pub query: String,
    pub hits: Result<Vec<ParticipantSummary>>,
}

/// A search box wired to a lookup backend.
pub struct ParticipantSearch<L: ParticipantLookup> {
    lookup: Arc<L>,
    session: Arc<Session>,
    debouncer: Debouncer,
    results: mpsc::UnboundedSender<SearchResults>,
}

impl<L: ParticipantLookup> ParticipantSearch<L> {
    /// Returns the search box and the stream of results it produces.
    pub fn new(
        lookup: Arc<L>,
        session: Session,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<SearchResults>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let search = Self {
            lookup,
            session: Arc::new(session),
            debouncer: Debouncer::new(delay),
            results: tx,
        };
        (search, rx)
    }

    /// Feed the current contents of the input box.
    ///
    /// A blank query yields an empty result without touching the backend.
    pub fn input(&mut self, text: &str) {
        let query = text.trim().to_string();
        let lookup = Arc::clone(&self.lookup);
        let session = Arc::clone(&self.session);
        let results = self.results.clone();

        self.debouncer.schedule(async move {
            let hits = if query.is_empty() {
                Ok(Vec::new())
            } else {
                debug!(query, "searching participants");
                lookup.search(&session, &query).await
            };
            if let Err(e) = &hits {
                warn!(query, error = %e, "participant search failed");
            }
            // Receiver gone means the search box was torn down.
            let _ = results.send(SearchResults { query, hits });
        });
    }

    pub fn clear(&mut self) {
        self.debouncer.cancel();
    }

    pub fn delay(&self) -> Duration {
        self.debouncer.delay()
    }
}
