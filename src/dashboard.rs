//! Dashboard composition for an event's home page and the admin tab-order editor.
//!
//! An event enables a set of [`DashboardType`]s and may carry an explicit
//! display order over them. [`DashboardView`] is what the home page renders:
//! one active view at a time, chosen from the effective order.
//! [`DashboardEditor`] is the admin side: toggling kinds and dragging tabs,
//! always keeping the order a permutation of the enabled set.

use itertools::Itertools;

use crate::model::{DashboardType, Event, EventRequest, EventSummary};

/// Effective left-to-right tab order.
///
/// The explicit order wins when it is non-empty, otherwise the enabled set in
/// server order. Kinds the order names but the event no longer enables are
/// dropped, and enabled kinds the order forgot are appended, so the result is
/// always a permutation of the enabled set.
pub fn effective_order(
    enabled: &[DashboardType],
    order: Option<&[DashboardType]>,
) -> Vec<DashboardType> {
    let enabled: Vec<DashboardType> = enabled.iter().copied().unique().collect();
    let preferred = order
        .filter(|o| !o.is_empty())
        .unwrap_or(enabled.as_slice());

    let mut result: Vec<DashboardType> = preferred
        .iter()
        .copied()
        .filter(|kind| enabled.contains(kind))
        .unique()
        .collect();
    for kind in &enabled {
        if !result.contains(kind) {
            result.push(*kind);
        }
    }
    result
}

/// Mismatch between an event's enabled dashboards and its stored order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardDesync {
    /// Ordered but not enabled.
    pub stray: Vec<DashboardType>,
    /// Enabled but absent from the order.
    pub missing: Vec<DashboardType>,
}

impl DashboardDesync {
    /// Compare a stored order against the enabled set. `None` when they agree
    /// or when no explicit order is stored.
    pub fn detect(
        enabled: &[DashboardType],
        order: Option<&[DashboardType]>,
    ) -> Option<Self> {
        let order = order.filter(|o| !o.is_empty())?;
        let stray: Vec<_> = order
            .iter()
            .copied()
            .filter(|k| !enabled.contains(k))
            .unique()
            .collect();
        let missing: Vec<_> = enabled
            .iter()
            .copied()
            .filter(|k| !order.contains(k))
            .unique()
            .collect();
        (!stray.is_empty() || !missing.is_empty()).then_some(Self { stray, missing })
    }
}

/// The home page's dashboard tabs and the one currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    event_id: u64,
    tabs: Vec<DashboardType>,
    active: Option<DashboardType>,
    team_based: bool,
}

impl DashboardView {
    pub fn new(
        event_id: u64,
        enabled: &[DashboardType],
        order: Option<&[DashboardType]>,
        team_based: bool,
    ) -> Self {
        let tabs = effective_order(enabled, order);
        let active = tabs.first().copied();
        Self {
            event_id,
            tabs,
            active,
            team_based,
        }
    }

    pub fn for_event(event: &Event) -> Self {
        Self::new(
            event.id,
            &event.dashboard_types,
            event.dashboard_order.as_deref(),
            event.is_team_based(),
        )
    }

    pub fn event_id(&self) -> u64 {
        self.event_id
    }

    /// Tabs in display order.
    pub fn tabs(&self) -> &[DashboardType] {
        &self.tabs
    }

    /// The view to render, or `None` for the empty state.
    pub fn active(&self) -> Option<DashboardType> {
        self.active
    }

    pub fn is_team_based(&self) -> bool {
        self.team_based
    }

    /// Switch to another tab. Returns `false` and changes nothing when the kind
    /// is not one of this event's tabs.
    pub fn select(&mut self, kind: DashboardType) -> bool {
        if self.tabs.contains(&kind) {
            self.active = Some(kind);
            true
        } else {
            false
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

/// What the home page shows.
#[derive(Debug, Clone)]
pub enum HomePage {
    /// An event is flagged for the home page; render its dashboards.
    Featured {
        event: Box<Event>,
        view: DashboardView,
    },
    /// No featured event; list the active ones.
    EventList(Vec<EventSummary>),
}

/// Admin-side editor for an event's dashboards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardEditor {
    enabled: Vec<DashboardType>,
    order: Vec<DashboardType>,
    dragged: Option<usize>,
}

impl DashboardEditor {
    pub fn new(enabled: &[DashboardType], order: Option<&[DashboardType]>) -> Self {
        let enabled: Vec<_> = enabled.iter().copied().unique().collect();
        let order = effective_order(&enabled, order);
        Self {
            enabled,
            order,
            dragged: None,
        }
    }

    pub fn for_event(event: &Event) -> Self {
        Self::new(&event.dashboard_types, event.dashboard_order.as_deref())
    }

    pub fn enabled(&self) -> &[DashboardType] {
        &self.enabled
    }

    pub fn order(&self) -> &[DashboardType] {
        &self.order
    }

    pub fn is_enabled(&self, kind: DashboardType) -> bool {
        self.enabled.contains(&kind)
    }

    /// Enable or disable a kind. Disabling drops it from the order; enabling
    /// appends it to the end of the order.
    pub fn toggle(&mut self, kind: DashboardType) {
        if self.is_enabled(kind) {
            self.enabled.retain(|k| *k != kind);
            self.order.retain(|k| *k != kind);
        } else {
            self.enabled.push(kind);
            self.order.push(kind);
        }
        self.dragged = None;
    }

    /// Move the tab at `from` to `to`. Out-of-range indices are ignored.
    pub fn move_tab(&mut self, from: usize, to: usize) {
        if from == to || from >= self.order.len() || to >= self.order.len() {
            return;
        }
        let kind = self.order.remove(from);
        self.order.insert(to, kind);
    }

    pub fn start_drag(&mut self, index: usize) {
        if index < self.order.len() {
            self.dragged = Some(index);
        }
    }

    /// Drop the dragged tab at `index`.
    pub fn drop_at(&mut self, index: usize) {
        if let Some(from) = self.dragged.take() {
            self.move_tab(from, index);
        }
    }

    pub fn cancel_drag(&mut self) {
        self.dragged = None;
    }

    pub fn dragged(&self) -> Option<usize> {
        self.dragged
    }

    /// Write the enabled set and order into an update request.
    pub fn apply_to(&self, request: &mut EventRequest) {
        request.dashboard_types = self.enabled.clone();
        request.dashboard_order = self.order.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DashboardType::*;

    #[test]
    fn test_explicit_order_wins() {
        let view = DashboardView::new(
            1,
            &[Ranking, Feed, Tracker],
            Some(&[Feed, Tracker, Ranking]),
            true,
        );
        assert_eq!(view.tabs(), &[Feed, Tracker, Ranking]);
        assert_eq!(view.active(), Some(Feed));
    }

    #[test]
    fn test_empty_order_falls_back_to_enabled() {
        let view = DashboardView::new(1, &[Tracker, SimpleList], Some(&[]), false);
        assert_eq!(view.tabs(), &[Tracker, SimpleList]);
        assert_eq!(view.active(), Some(Tracker));

        let view = DashboardView::new(1, &[SimpleList], None, false);
        assert_eq!(view.active(), Some(SimpleList));
    }

    #[test]
    fn test_no_enabled_dashboards_renders_nothing() {
        let view = DashboardView::new(1, &[], Some(&[Ranking]), true);
        assert!(view.is_empty());
        assert_eq!(view.active(), None);
    }

    #[test]
    fn test_order_is_intersected_with_enabled() {
        let order = effective_order(&[Ranking, Feed], Some(&[Tracker, Feed, Ranking]));
        assert_eq!(order, vec![Feed, Ranking]);

        let order = effective_order(&[Ranking, Feed, SimpleList], Some(&[Feed]));
        assert_eq!(order, vec![Feed, Ranking, SimpleList]);
    }

    #[test]
    fn test_desync_report() {
        let desync = DashboardDesync::detect(&[Ranking, Feed], Some(&[Tracker, Feed])).unwrap();
        assert_eq!(desync.stray, vec![Tracker]);
        assert_eq!(desync.missing, vec![Ranking]);

        assert!(DashboardDesync::detect(&[Ranking, Feed], Some(&[Feed, Ranking])).is_none());
        assert!(DashboardDesync::detect(&[Ranking], None).is_none());
    }

    #[test]
    fn test_select_is_local_and_guarded() {
        let mut view = DashboardView::new(1, &[Ranking, Feed], None, true);
        assert!(view.select(Feed));
        assert_eq!(view.active(), Some(Feed));
        assert!(!view.select(Tracker));
        assert_eq!(view.active(), Some(Feed));
    }

    #[test]
    fn test_move_tab_relocates_one_and_keeps_the_rest() {
        let all = [Ranking, Tracker, Feed, SimpleList];
        for from in 0..all.len() {
            for to in 0..all.len() {
                let mut editor = DashboardEditor::new(&all, None);
                editor.move_tab(from, to);
                let order = editor.order().to_vec();

                assert_eq!(order.len(), all.len());
                assert_eq!(order[to], all[from]);
                let others: Vec<_> = order.iter().filter(|k| **k != all[from]).collect();
                let expected: Vec<_> = all.iter().filter(|k| **k != all[from]).collect();
                assert_eq!(others, expected);
            }
        }
    }

    #[test]
    fn test_drag_and_drop() {
        let mut editor = DashboardEditor::new(&[Ranking, Tracker, Feed], None);
        editor.start_drag(0);
        editor.drop_at(2);
        assert_eq!(editor.order(), &[Tracker, Feed, Ranking]);
        assert_eq!(editor.dragged(), None);

        editor.drop_at(0);
        assert_eq!(editor.order(), &[Tracker, Feed, Ranking]);
    }

    #[test]
    fn test_toggle_off_then_on_appends() {
        let mut editor = DashboardEditor::new(&[Ranking, Tracker, Feed], None);
        editor.toggle(Ranking);
        assert!(!editor.is_enabled(Ranking));
        assert_eq!(editor.order(), &[Tracker, Feed]);
        assert_eq!(editor.enabled(), &[Tracker, Feed]);

        editor.toggle(Ranking);
        assert_eq!(editor.order(), &[Tracker, Feed, Ranking]);
        assert!(editor.is_enabled(Ranking));
    }

    #[test]
    fn test_editor_repairs_stored_desync() {
        let editor = DashboardEditor::new(&[Ranking, Feed], Some(&[SimpleList, Feed]));
        assert_eq!(editor.order(), &[Feed, Ranking]);

        let mut request = EventRequest::default();
        editor.apply_to(&mut request);
        assert_eq!(request.dashboard_types, vec![Ranking, Feed]);
        assert_eq!(request.dashboard_order, vec![Feed, Ranking]);
    }
}
