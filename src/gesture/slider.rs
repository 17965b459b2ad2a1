//! Slide-to-confirm control.
//!
//! The handle is dragged along a finite track. Releasing at or past the
//! release threshold, or dragging past the live threshold, commits: the
//! handle snaps to the end of the track and the slider fires exactly once.
//! Releasing short of the threshold snaps the handle back to zero.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::GestureConfig;

use super::listeners::ListenerHost;
use super::tracker::{DragTracker, TrackMetrics};
use super::{ControlState, GestureControl};

/// What a slider call produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderOutcome {
    /// Nothing happened (no session, unmeasured track, or already committed).
    Ignored,
    /// A session opened on the handle.
    Pressed,
    /// The handle moved to this position.
    Moved(f32),
    /// The action fired. Reported once per slider.
    Committed,
    /// Released short of the threshold; the handle is back at zero.
    SnappedBack,
}

#[derive(Debug)]
pub struct ActionSlider {
    tracker: DragTracker,
    release_ratio: f32,
    drag_ratio: f32,
    position: f32,
    state: ControlState,
    started: bool,
    dragging: bool,
}

impl ActionSlider {
    pub fn new(metrics: TrackMetrics, config: &GestureConfig) -> Self {
        Self {
            tracker: DragTracker::bounded(metrics),
            release_ratio: config.release_commit_ratio,
            drag_ratio: config.drag_commit_ratio,
            position: 0.0,
            state: ControlState::Idle,
            started: false,
            dragging: false,
        }
    }

    pub fn with_listeners(mut self, host: Arc<dyn ListenerHost>) -> Self {
        self.tracker = self.tracker.with_listeners(host);
        self
    }

    pub fn set_metrics(&mut self, metrics: TrackMetrics) {
        self.tracker.set_metrics(metrics);
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    /// Styling flag; true between press and release.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_committed(&self) -> bool {
        self.started
    }

    pub fn max_travel(&self) -> Option<f32> {
        self.tracker.max_travel()
    }

    /// Grab the handle itself.
    pub fn press_handle(&mut self, coordinate: f32) -> SliderOutcome {
        if self.started {
            return SliderOutcome::Ignored;
        }
        if !self.tracker.begin(coordinate) {
            return SliderOutcome::Ignored;
        }
        self.dragging = true;
        self.state = ControlState::Dragging;
        SliderOutcome::Pressed
    }

    /// Touch the track away from the handle: the session opens there and
    /// the handle jumps to the touch point.
    pub fn press_track(&mut self, coordinate: f32) -> SliderOutcome {
        if self.started {
            return SliderOutcome::Ignored;
        }
        if self.press_handle(coordinate) == SliderOutcome::Ignored {
            return SliderOutcome::Ignored;
        }
        match self.move_to(coordinate) {
            SliderOutcome::Ignored => SliderOutcome::Pressed,
            outcome => outcome,
        }
    }

    fn move_to(&mut self, coordinate: f32) -> SliderOutcome {
        if self.started {
            return SliderOutcome::Ignored;
        }
        let Some(position) = self.tracker.update(coordinate) else {
            return SliderOutcome::Ignored;
        };
        self.position = position;

        match self.tracker.max_travel() {
            Some(max) if max > 0.0 && position > max * self.drag_ratio => self.commit(),
            _ => SliderOutcome::Moved(position),
        }
    }

    fn finish(&mut self) -> SliderOutcome {
        if !self.tracker.is_active() {
            return SliderOutcome::Ignored;
        }
        self.tracker.end();
        self.dragging = false;

        match self.tracker.max_travel() {
            Some(max) if max > 0.0 && self.position >= max * self.release_ratio => self.commit(),
            _ => {
                debug!(position = self.position, "slider released short, snapping back");
                self.position = 0.0;
                self.state = ControlState::Idle;
                SliderOutcome::SnappedBack
            }
        }
    }

    fn commit(&mut self) -> SliderOutcome {
        if self.started {
            return SliderOutcome::Ignored;
        }
        self.started = true;
        self.dragging = false;
        self.state = ControlState::Committed;
        self.position = self.tracker.max_travel().unwrap_or(self.position);
        self.tracker.end();
        info!(position = self.position, "slider committed");
        SliderOutcome::Committed
    }

    /// Back to a fresh, uncommitted slider (screen re-entered).
    pub fn reset(&mut self) {
        self.tracker.end();
        self.position = 0.0;
        self.state = ControlState::Idle;
        self.started = false;
        self.dragging = false;
    }
}

impl GestureControl for ActionSlider {
    type Outcome = SliderOutcome;

    fn press(&mut self, coordinate: f32) -> SliderOutcome {
        self.press_handle(coordinate)
    }

    fn drag(&mut self, coordinate: f32) -> SliderOutcome {
        self.move_to(coordinate)
    }

    fn release(&mut self) -> SliderOutcome {
        self.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::InputEvent;
    use crate::gesture::listeners::CountingListenerHost;

    fn slider() -> ActionSlider {
        // Track 300 wide, handle 50 wide: max travel 250.
        ActionSlider::new(TrackMetrics::new(0.0, 300.0, 50.0), &GestureConfig::default())
    }

    #[test]
    fn release_past_sixty_percent_commits_to_end() {
        let mut s = slider();
        s.press(0.0);
        assert_eq!(s.drag(160.0), SliderOutcome::Moved(160.0));
        assert_eq!(s.release(), SliderOutcome::Committed);
        assert_eq!(s.position(), 250.0);
        assert!(s.is_committed());
        assert_eq!(s.state(), ControlState::Committed);
    }

    #[test]
    fn release_exactly_at_sixty_percent_commits() {
        let mut s = slider();
        s.press(0.0);
        s.drag(150.0);
        assert_eq!(s.release(), SliderOutcome::Committed);
    }

    #[test]
    fn release_short_snaps_back() {
        let mut s = slider();
        s.press(0.0);
        s.drag(149.0);
        assert_eq!(s.release(), SliderOutcome::SnappedBack);
        assert_eq!(s.position(), 0.0);
        assert_eq!(s.state(), ControlState::Idle);
        assert!(!s.is_committed());
    }

    #[test]
    fn dragging_past_seventy_five_percent_commits_before_release() {
        let mut s = slider();
        s.press(0.0);
        assert_eq!(s.drag(187.5), SliderOutcome::Moved(187.5));
        assert_eq!(s.drag(200.0), SliderOutcome::Committed);
        assert_eq!(s.position(), 250.0);
        assert!(!s.is_dragging());
        // The release that follows has nothing left to do.
        assert_eq!(s.release(), SliderOutcome::Ignored);
    }

    #[test]
    fn commit_fires_once() {
        let mut s = slider();
        s.press(0.0);
        assert_eq!(s.drag(240.0), SliderOutcome::Committed);
        assert_eq!(s.press(0.0), SliderOutcome::Ignored);
        assert_eq!(s.drag(240.0), SliderOutcome::Ignored);
        assert_eq!(s.press_track(280.0), SliderOutcome::Ignored);
        assert_eq!(s.release(), SliderOutcome::Ignored);
        assert_eq!(s.position(), 250.0);
    }

    #[test]
    fn track_press_jumps_handle() {
        let mut s = slider();
        assert_eq!(s.press_track(100.0), SliderOutcome::Moved(100.0));
        assert!(s.is_dragging());
        assert_eq!(s.drag(120.0), SliderOutcome::Moved(120.0));
        assert_eq!(s.release(), SliderOutcome::SnappedBack);
    }

    #[test]
    fn track_press_near_end_commits_immediately() {
        let mut s = slider();
        assert_eq!(s.press_track(290.0), SliderOutcome::Committed);
        assert_eq!(s.position(), 250.0);
    }

    #[test]
    fn dragging_flag_follows_session() {
        let mut s = slider();
        assert!(!s.is_dragging());
        s.press(0.0);
        assert!(s.is_dragging());
        s.release();
        assert!(!s.is_dragging());
    }

    #[test]
    fn unmeasured_handle_never_commits() {
        let metrics = TrackMetrics {
            origin: 0.0,
            track_extent: Some(300.0),
            control_extent: None,
        };
        let mut s = ActionSlider::new(metrics, &GestureConfig::default());
        s.press(0.0);
        assert_eq!(s.drag(280.0), SliderOutcome::Ignored);
        assert_eq!(s.release(), SliderOutcome::SnappedBack);
        assert!(!s.is_committed());
    }

    #[test]
    fn position_never_leaves_track() {
        let mut s = ActionSlider::new(TrackMetrics::new(20.0, 300.0, 50.0), &GestureConfig::default());
        s.press(20.0);
        for x in [-100.0, 0.0, 19.0, 60.0, 140.0, 180.0] {
            if let SliderOutcome::Moved(p) = s.drag(x) {
                assert!((0.0..=250.0).contains(&p));
            }
        }
        assert_eq!(s.drag(-100.0), SliderOutcome::Moved(0.0));
    }

    #[test]
    fn handles_raw_touch_events() {
        let mut s = slider();
        assert_eq!(s.handle(&InputEvent::touch_start(0.0)), SliderOutcome::Pressed);
        assert_eq!(s.handle(&InputEvent::touch_move(170.0)), SliderOutcome::Moved(170.0));
        assert_eq!(s.handle(&InputEvent::touch_end()), SliderOutcome::Committed);
    }

    #[test]
    fn listeners_released_on_every_exit() {
        let host = CountingListenerHost::new();
        let mut s = slider().with_listeners(host.clone());

        s.press(0.0);
        assert_eq!(host.live(), 1);
        s.release();
        assert_eq!(host.live(), 0);

        s.press(0.0);
        assert_eq!(host.live(), 1);
        s.drag(240.0);
        assert_eq!(host.live(), 0, "commit closes the session");
    }

    #[test]
    fn non_finite_coordinates_keep_position_on_track() {
        let mut s = slider();
        assert_eq!(s.press_track(f32::NAN), SliderOutcome::Ignored);
        assert!(!s.is_dragging());

        s.press(0.0);
        s.drag(100.0);
        assert_eq!(s.drag(f32::NAN), SliderOutcome::Ignored);
        assert_eq!(s.drag(f32::INFINITY), SliderOutcome::Ignored);
        assert_eq!(s.position(), 100.0);
        assert_eq!(s.release(), SliderOutcome::SnappedBack);
        assert_eq!(s.position(), 0.0);
    }

    #[test]
    fn reset_allows_new_commit() {
        let mut s = slider();
        s.press(0.0);
        s.drag(240.0);
        s.reset();
        assert!(!s.is_committed());
        assert_eq!(s.position(), 0.0);
        s.press(0.0);
        assert_eq!(s.drag(240.0), SliderOutcome::Committed);
    }
}
