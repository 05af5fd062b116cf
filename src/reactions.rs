//! Reaction state shared by every surface that shows reactions.
//!
//! Selecting a kind is interpreted in one place: choosing the caller's current
//! reaction removes it, choosing anything else adds it and replaces the old one.

use std::collections::BTreeMap;

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::model::{Activity, Comment, ReactionKind, ReactionSummary};

/// Request implied by a selection in the reaction picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionIntent {
    Add(ReactionKind),
    Remove(ReactionKind),
}

/// Counts per kind plus the caller's own reaction for one target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionState {
    counts: BTreeMap<ReactionKind, u32>,
    mine: Option<ReactionKind>,
}

impl ReactionState {
    pub fn new(counts: BTreeMap<ReactionKind, u32>, mine: Option<ReactionKind>) -> Self {
        let counts = counts.into_iter().filter(|(_, n)| *n > 0).collect();
        Self { counts, mine }
    }

    pub fn of_activity(activity: &Activity) -> Self {
        Self::new(activity.reaction_counts.clone(), activity.user_reaction)
    }

    pub fn of_comment(comment: &Comment) -> Self {
        Self::new(comment.reaction_counts.clone(), comment.user_reaction)
    }

    pub fn mine(&self) -> Option<ReactionKind> {
        self.mine
    }

    pub fn count(&self, kind: ReactionKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// What selecting `kind` means for the current state.
    pub fn intent(&self, kind: ReactionKind) -> ReactionIntent {
        if self.mine == Some(kind) {
            ReactionIntent::Remove(kind)
        } else {
            ReactionIntent::Add(kind)
        }
    }

    /// Apply a confirmed intent to the local counts.
    pub fn apply(&mut self, intent: ReactionIntent) {
        match intent {
            ReactionIntent::Remove(kind) => {
                self.decrement(kind);
                if self.mine == Some(kind) {
                    self.mine = None;
                }
            }
            ReactionIntent::Add(kind) => {
                if self.mine == Some(kind) {
                    return;
                }
                if let Some(previous) = self.mine.take() {
                    self.decrement(previous);
                }
                *self.counts.entry(kind).or_insert(0) += 1;
                self.mine = Some(kind);
            }
        }
    }

    /// Replace local state with the server's view.
    pub fn sync(&mut self, summary: ReactionSummary) {
        *self = Self::new(summary.reaction_counts, summary.user_reaction);
    }

    /// Kinds with a non-zero count, most popular first.
    pub fn visible(&self) -> Vec<(ReactionKind, u32)> {
        self.counts
            .iter()
            .map(|(k, n)| (*k, *n))
            .sorted_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)))
            .collect()
    }

    /// Every kind the "add reaction" picker offers, marking the caller's own.
    pub fn picker(&self) -> Vec<(ReactionKind, bool)> {
        ReactionKind::iter()
            .map(|k| (k, self.mine == Some(k)))
            .collect()
    }

    pub fn write_back(&self, activity: &mut Activity) {
        activity.reaction_counts = self.counts.clone();
        activity.user_reaction = self.mine;
        activity.total_reactions = self.total();
    }

    fn decrement(&mut self, kind: ReactionKind) {
        if let Some(n) = self.counts.get_mut(&kind) {
            *n = n.saturating_sub(1);
            if *n == 0 {
                self.counts.remove(&kind);
            }
        }
    }
}

/// Panel shown under an activity or comment: visible reactions plus a
/// collapsible picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionPanel {
    pub state: ReactionState,
    picker_open: bool,
}

impl ReactionPanel {
    pub fn new(state: ReactionState) -> Self {
        Self {
            state,
            picker_open: false,
        }
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
    }

    /// Pick a kind: closes the picker and returns the request to make.
    pub fn choose(&mut self, kind: ReactionKind) -> ReactionIntent {
        self.picker_open = false;
        self.state.intent(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ReactionKind::*;

    fn state(counts: &[(ReactionKind, u32)], mine: Option<ReactionKind>) -> ReactionState {
        ReactionState::new(counts.iter().copied().collect(), mine)
    }

    #[test]
    fn test_same_kind_toggles_off() {
        let mut s = state(&[(Fire, 2)], Some(Fire));
        let intent = s.intent(Fire);
        assert_eq!(intent, ReactionIntent::Remove(Fire));
        s.apply(intent);
        assert_eq!(s.count(Fire), 1);
        assert_eq!(s.mine(), None);
    }

    #[test]
    fn test_switching_kind_moves_the_vote() {
        let mut s = state(&[(Fire, 1), (Like, 2)], Some(Fire));
        let intent = s.intent(Like);
        assert_eq!(intent, ReactionIntent::Add(Like));
        s.apply(intent);
        assert_eq!(s.count(Fire), 0);
        assert_eq!(s.count(Like), 3);
        assert_eq!(s.mine(), Some(Like));
        assert_eq!(s.total(), 3);
        assert!(s.visible().iter().all(|(k, _)| *k != Fire));
    }

    #[test]
    fn test_first_reaction_increments_total() {
        let mut s = ReactionState::default();
        s.apply(s.intent(Clap));
        assert_eq!(s.total(), 1);
        assert_eq!(s.mine(), Some(Clap));
    }

    #[test]
    fn test_visible_sorted_by_count_then_kind() {
        let s = state(&[(Love, 2), (Like, 2), (Strong, 5), (Clap, 0)], None);
        assert_eq!(s.visible(), vec![(Strong, 5), (Like, 2), (Love, 2)]);
    }

    #[test]
    fn test_picker_lists_every_kind() {
        let s = state(&[], Some(Strong));
        let picker = s.picker();
        assert_eq!(picker.len(), 5);
        assert_eq!(picker.iter().filter(|(_, mine)| *mine).count(), 1);
        assert!(picker.contains(&(Strong, true)));
    }

    #[test]
    fn test_panel_choose_closes_picker() {
        let mut panel = ReactionPanel::new(state(&[(Like, 1)], Some(Like)));
        panel.toggle_picker();
        assert!(panel.is_picker_open());
        assert_eq!(panel.choose(Like), ReactionIntent::Remove(Like));
        assert!(!panel.is_picker_open());
    }

    #[test]
    fn test_sync_replaces_local_state() {
        let mut s = state(&[(Fire, 1)], Some(Fire));
        s.sync(ReactionSummary {
            reaction_counts: [(Love, 4)].into_iter().collect(),
            user_reaction: None,
        });
        assert_eq!(s.visible(), vec![(Love, 4)]);
        assert_eq!(s.mine(), None);
    }
}
