//! Scroll pagination
//!
//! Keeps a snap-scrolling container and a page indicator in sync. The
//! container holds N stacked sections; the rendering surface reports the
//! scroll offset and the section tops, and the tracker publishes which
//! section is active.
//!
//! A jump started with [`ScrollPagination::paginate`] shows its target right
//! away. Scroll events fired while the smooth scroll is animating are ignored
//! until it arrives, or until the navigation timeout passes.

use std::time::{Duration, Instant};

use tokio::sync::watch;
use tracing::debug;

use crate::domain::ports::{ScrollBehavior, ScrollSurface};

/// Distance from the target boundary that still counts as arrived
pub const DEFAULT_ARRIVAL_TOLERANCE: f64 = 1.0;

/// Default time a programmatic jump may take before the tracker settles
pub const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_millis(1000);

/// Index of the section the viewport has scrolled into.
///
/// Returns the last boundary at or before `offset`. Offsets before the first
/// boundary map to 0, offsets past the last to N-1. An offset equal to a
/// boundary belongs to that boundary's section. `None` when there are no
/// sections.
pub fn compute_active_index(offset: f64, boundaries: &[f64]) -> Option<usize> {
    if boundaries.is_empty() {
        return None;
    }
    let passed = boundaries.partition_point(|&top| top <= offset);
    Some(passed.saturating_sub(1))
}

/// Where the tracker is
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaginationPhase {
    /// No section determined yet
    Idle,
    /// Following the user's scrolling
    Settled(usize),
    /// A programmatic jump is animating towards `target`
    Navigating { target: usize, deadline: Instant },
}

impl PaginationPhase {
    pub fn active_index(&self) -> Option<usize> {
        match *self {
            PaginationPhase::Idle => None,
            PaginationPhase::Settled(index) => Some(index),
            PaginationPhase::Navigating { target, .. } => Some(target),
        }
    }
}

/// Tracker for one scroll container
pub struct ScrollPagination<S>
where
    S: ScrollSurface,
{
    surface: S,
    boundaries: Vec<f64>,
    phase: PaginationPhase,
    navigation_timeout: Duration,
    arrival_tolerance: f64,
    scroll_behavior: ScrollBehavior,
    active: watch::Sender<Option<usize>>,
}

impl<S> ScrollPagination<S>
where
    S: ScrollSurface,
{
    pub fn new(surface: S, boundaries: Vec<f64>) -> Self {
        let (active, _) = watch::channel(None);
        Self {
            surface,
            boundaries,
            phase: PaginationPhase::Idle,
            navigation_timeout: DEFAULT_NAVIGATION_TIMEOUT,
            arrival_tolerance: DEFAULT_ARRIVAL_TOLERANCE,
            scroll_behavior: ScrollBehavior::Smooth,
            active,
        }
    }

    pub fn with_navigation_timeout(mut self, timeout: Duration) -> Self {
        self.navigation_timeout = timeout;
        self
    }

    pub fn with_arrival_tolerance(mut self, tolerance: f64) -> Self {
        self.arrival_tolerance = tolerance.abs();
        self
    }

    /// How [`paginate`](Self::paginate) scrolls; smooth by default
    pub fn with_scroll_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.scroll_behavior = behavior;
        self
    }

    /// Receiver for the page indicator
    pub fn subscribe(&self) -> watch::Receiver<Option<usize>> {
        self.active.subscribe()
    }

    pub fn active_page_index(&self) -> Option<usize> {
        self.phase.active_index()
    }

    pub fn phase(&self) -> PaginationPhase {
        self.phase
    }

    pub fn section_count(&self) -> usize {
        self.boundaries.len()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Replace the section tops after a layout change.
    ///
    /// A different number of sections resets the active index.
    pub fn set_sections(&mut self, boundaries: Vec<f64>) {
        let count_changed = boundaries.len() != self.boundaries.len();
        self.boundaries = boundaries;

        if count_changed {
            debug!(sections = self.boundaries.len(), "Section count changed, resetting");
            self.enter(PaginationPhase::Idle);
        }
    }

    /// Jump to section `target`.
    ///
    /// Targets past the last section are clamped to it. Does nothing when
    /// there are no sections. Returns the section jumped to.
    pub fn paginate(&mut self, target: usize, now: Instant) -> Option<usize> {
        let last = self.boundaries.len().checked_sub(1)?;
        let target = target.min(last);

        self.surface
            .scroll_to(self.boundaries[target], self.scroll_behavior);
        self.enter(PaginationPhase::Navigating {
            target,
            deadline: now + self.navigation_timeout,
        });
        debug!(target, "Paginating");

        Some(target)
    }

    /// The container scrolled to `offset`
    pub fn on_scroll(&mut self, offset: f64, now: Instant) {
        if let PaginationPhase::Navigating { target, deadline } = self.phase {
            if self.arrived(offset, target) {
                self.enter(PaginationPhase::Settled(target));
                return;
            }
            if now < deadline {
                return;
            }
            debug!(target, "Navigation timed out");
            self.enter(PaginationPhase::Settled(target));
        }

        if let Some(index) = compute_active_index(offset, &self.boundaries) {
            self.enter(PaginationPhase::Settled(index));
        }
    }

    /// Settle a jump whose arrival was never reported
    pub fn tick(&mut self, now: Instant) {
        if let PaginationPhase::Navigating { target, deadline } = self.phase {
            if now >= deadline {
                debug!(target, "Navigation timed out");
                self.enter(PaginationPhase::Settled(target));
            }
        }
    }

    fn arrived(&self, offset: f64, target: usize) -> bool {
        self.boundaries
            .get(target)
            .is_some_and(|&top| (offset - top).abs() <= self.arrival_tolerance)
    }

    fn enter(&mut self, phase: PaginationPhase) {
        self.phase = phase;
        let index = phase.active_index();
        self.active.send_if_modified(|current| {
            if *current == index {
                false
            } else {
                *current = index;
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingScrollSurface;

    const BOUNDARIES: [f64; 3] = [0.0, 100.0, 250.0];

    fn tracker() -> ScrollPagination<RecordingScrollSurface> {
        ScrollPagination::new(RecordingScrollSurface::default(), BOUNDARIES.to_vec())
            .with_navigation_timeout(Duration::from_millis(500))
    }

    #[test]
    fn active_index_at_boundaries() {
        assert_eq!(compute_active_index(0.0, &BOUNDARIES), Some(0));
        assert_eq!(compute_active_index(99.0, &BOUNDARIES), Some(0));
        assert_eq!(compute_active_index(100.0, &BOUNDARIES), Some(1));
        assert_eq!(compute_active_index(250.0, &BOUNDARIES), Some(2));
    }

    #[test]
    fn active_index_clamps_outside_range() {
        assert_eq!(compute_active_index(300.0, &BOUNDARIES), Some(2));
        assert_eq!(compute_active_index(-10.0, &BOUNDARIES), Some(0));
        assert_eq!(compute_active_index(f64::NAN, &BOUNDARIES), Some(0));
    }

    #[test]
    fn active_index_before_non_zero_first_boundary() {
        assert_eq!(compute_active_index(10.0, &[50.0, 120.0]), Some(0));
    }

    #[test]
    fn active_index_with_equal_boundaries() {
        assert_eq!(compute_active_index(100.0, &[0.0, 100.0, 100.0]), Some(2));
    }

    #[test]
    fn active_index_without_sections() {
        assert_eq!(compute_active_index(10.0, &[]), None);
    }

    #[test]
    fn starts_idle() {
        let tracker = tracker();
        assert_eq!(tracker.active_page_index(), None);
        assert_eq!(tracker.phase(), PaginationPhase::Idle);
        assert_eq!(*tracker.subscribe().borrow(), None);
    }

    #[test]
    fn user_scroll_updates_active_index() {
        let mut tracker = tracker();
        let now = Instant::now();

        tracker.on_scroll(120.0, now);
        assert_eq!(tracker.active_page_index(), Some(1));

        tracker.on_scroll(260.0, now);
        assert_eq!(tracker.active_page_index(), Some(2));
        assert_eq!(tracker.phase(), PaginationPhase::Settled(2));
        assert!(tracker.surface().commands.is_empty());
    }

    #[test]
    fn paginate_sets_index_immediately_and_scrolls_once() {
        let mut tracker = tracker();
        let rx = tracker.subscribe();

        let target = tracker.paginate(2, Instant::now());

        assert_eq!(target, Some(2));
        assert_eq!(tracker.active_page_index(), Some(2));
        assert_eq!(*rx.borrow(), Some(2));
        assert_eq!(
            tracker.surface().commands,
            vec![(250.0, ScrollBehavior::Smooth)]
        );
    }

    #[test]
    fn paginate_clamps_out_of_range_target() {
        let mut tracker = tracker();

        let target = tracker.paginate(5, Instant::now());

        assert_eq!(target, Some(2));
        assert_eq!(tracker.active_page_index(), Some(2));
        assert_eq!(
            tracker.surface().commands,
            vec![(250.0, ScrollBehavior::Smooth)]
        );
    }

    #[test]
    fn instant_jump_arrives_on_first_report() {
        let mut tracker = tracker().with_scroll_behavior(ScrollBehavior::Instant);
        let now = Instant::now();

        tracker.paginate(1, now);
        tracker.on_scroll(100.0, now);

        assert_eq!(tracker.phase(), PaginationPhase::Settled(1));
        assert_eq!(
            tracker.surface().commands,
            vec![(100.0, ScrollBehavior::Instant)]
        );
    }

    #[test]
    fn paginate_without_sections_is_noop() {
        let mut tracker = ScrollPagination::new(RecordingScrollSurface::default(), Vec::new());

        assert_eq!(tracker.paginate(0, Instant::now()), None);
        assert_eq!(tracker.active_page_index(), None);
        assert!(tracker.surface().commands.is_empty());
    }

    #[test]
    fn intermediate_scroll_events_are_ignored_while_navigating() {
        let mut tracker = tracker();
        let now = Instant::now();
        tracker.on_scroll(0.0, now);

        tracker.paginate(2, now);
        tracker.on_scroll(40.0, now + Duration::from_millis(50));
        tracker.on_scroll(150.0, now + Duration::from_millis(100));

        assert_eq!(tracker.active_page_index(), Some(2));
        assert!(matches!(
            tracker.phase(),
            PaginationPhase::Navigating { target: 2, .. }
        ));
    }

    #[test]
    fn arrival_settles_on_target() {
        let mut tracker = tracker();
        let now = Instant::now();

        tracker.paginate(1, now);
        tracker.on_scroll(99.5, now + Duration::from_millis(200));

        assert_eq!(tracker.phase(), PaginationPhase::Settled(1));

        tracker.on_scroll(10.0, now + Duration::from_millis(300));
        assert_eq!(tracker.active_page_index(), Some(0));
    }

    #[test]
    fn timeout_settles_without_scroll_event() {
        let mut tracker = tracker();
        let now = Instant::now();

        tracker.paginate(2, now);
        tracker.tick(now + Duration::from_millis(100));
        assert!(matches!(tracker.phase(), PaginationPhase::Navigating { .. }));

        tracker.tick(now + Duration::from_millis(500));
        assert_eq!(tracker.phase(), PaginationPhase::Settled(2));
    }

    #[test]
    fn scroll_after_timeout_is_treated_as_user_scroll() {
        let mut tracker = tracker();
        let now = Instant::now();

        tracker.paginate(2, now);
        tracker.on_scroll(120.0, now + Duration::from_millis(600));

        assert_eq!(tracker.phase(), PaginationPhase::Settled(1));
    }

    #[test]
    fn section_count_change_resets_index() {
        let mut tracker = tracker();
        let rx = tracker.subscribe();
        tracker.on_scroll(260.0, Instant::now());
        assert_eq!(*rx.borrow(), Some(2));

        tracker.set_sections(vec![0.0, 100.0, 250.0, 400.0]);

        assert_eq!(tracker.active_page_index(), None);
        assert_eq!(*rx.borrow(), None);
        assert_eq!(tracker.section_count(), 4);
    }

    #[test]
    fn resize_keeps_index_when_count_unchanged() {
        let mut tracker = tracker();
        tracker.on_scroll(120.0, Instant::now());

        tracker.set_sections(vec![0.0, 80.0, 160.0]);

        assert_eq!(tracker.active_page_index(), Some(1));
    }

    #[test]
    fn observers_only_notified_on_change() {
        let mut tracker = tracker();
        let mut rx = tracker.subscribe();
        let now = Instant::now();

        tracker.on_scroll(10.0, now);
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();

        tracker.on_scroll(20.0, now);
        assert!(!rx.has_changed().unwrap());
    }
}
