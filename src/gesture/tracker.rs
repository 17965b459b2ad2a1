//! Drag gesture tracker — the position math shared by every control.
//!
//! A tracker turns a stream of horizontal coordinates into a single
//! position value while a session is open. In a [`TrackFrame::Track`]
//! frame the position is measured from the track's leading edge and
//! clamped to `[0, track_extent - control_extent]`; in a
//! [`TrackFrame::Relative`] frame it is the signed distance from the
//! session origin.

use std::sync::Arc;

use super::listeners::{ListenerGuard, ListenerHost};

/// Measured geometry of a bounded track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackMetrics {
    /// Leading edge of the track in client coordinates.
    pub origin: f32,
    /// Track length; `None` until layout has settled.
    pub track_extent: Option<f32>,
    /// Handle length; `None` until layout has settled.
    pub control_extent: Option<f32>,
}

impl TrackMetrics {
    pub fn new(origin: f32, track_extent: f32, control_extent: f32) -> Self {
        Self {
            origin,
            track_extent: Some(track_extent),
            control_extent: Some(control_extent),
        }
    }

    /// Distance the handle can travel, or `None` while unmeasured.
    pub fn max_travel(&self) -> Option<f32> {
        let track = self.track_extent?;
        let control = self.control_extent?;
        Some((track - control).max(0.0))
    }

    /// Clamp a raw client coordinate onto the track.
    pub fn clamp_position(&self, coordinate: f32) -> Option<f32> {
        let max = self.max_travel()?;
        Some((coordinate - self.origin).clamp(0.0, max))
    }
}

/// How positions are measured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackFrame {
    /// Signed offset from where the session began.
    Relative,
    /// Clamped offset from the track's leading edge.
    Track(TrackMetrics),
}

/// State of one press-to-release interaction.
#[derive(Debug)]
pub struct GestureSession {
    origin: f32,
    position: f32,
    _listeners: Option<ListenerGuard>,
}

impl GestureSession {
    pub fn origin(&self) -> f32 {
        self.origin
    }

    pub fn position(&self) -> f32 {
        self.position
    }
}

/// Tracks at most one gesture session at a time.
pub struct DragTracker {
    frame: TrackFrame,
    session: Option<GestureSession>,
    listeners: Option<Arc<dyn ListenerHost>>,
}

impl DragTracker {
    pub fn new(frame: TrackFrame) -> Self {
        Self {
            frame,
            session: None,
            listeners: None,
        }
    }

    pub fn relative() -> Self {
        Self::new(TrackFrame::Relative)
    }

    pub fn bounded(metrics: TrackMetrics) -> Self {
        Self::new(TrackFrame::Track(metrics))
    }

    /// Attach document-level listeners for the lifetime of each session.
    pub fn with_listeners(mut self, host: Arc<dyn ListenerHost>) -> Self {
        self.listeners = Some(host);
        self
    }

    pub fn frame(&self) -> TrackFrame {
        self.frame
    }

    /// Replace track measurements, e.g. after a layout pass.
    pub fn set_metrics(&mut self, metrics: TrackMetrics) {
        self.frame = TrackFrame::Track(metrics);
    }

    pub fn max_travel(&self) -> Option<f32> {
        match self.frame {
            TrackFrame::Relative => None,
            TrackFrame::Track(metrics) => metrics.max_travel(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Open a session at `coordinate`. An already-open session is closed first.
    ///
    /// A non-finite coordinate opens nothing and leaves any current session
    /// as it was; returns whether a session was opened.
    pub fn begin(&mut self, coordinate: f32) -> bool {
        if !coordinate.is_finite() {
            return false;
        }
        // Drop the old guard before attaching a new one.
        self.session = None;
        let listeners = self.listeners.clone().map(ListenerGuard::acquire);
        self.session = Some(GestureSession {
            origin: coordinate,
            position: 0.0,
            _listeners: listeners,
        });
        true
    }

    /// Recompute the position for `coordinate`.
    ///
    /// Returns `None` when no session is open, when the track has not been
    /// measured yet, or for a non-finite coordinate; the session is left
    /// untouched in each case.
    pub fn update(&mut self, coordinate: f32) -> Option<f32> {
        if !coordinate.is_finite() {
            return None;
        }
        let frame = self.frame;
        let session = self.session.as_mut()?;
        let position = match frame {
            TrackFrame::Relative => coordinate - session.origin,
            TrackFrame::Track(metrics) => metrics.clamp_position(coordinate)?,
        };
        session.position = position;
        Some(position)
    }

    /// Move the session origin to `coordinate` so later updates are relative to it.
    pub fn rebase(&mut self, coordinate: f32) {
        if let Some(session) = self.session.as_mut() {
            session.origin = coordinate;
            if matches!(self.frame, TrackFrame::Relative) {
                session.position = 0.0;
            }
        }
    }

    /// Close the session and return its last position.
    pub fn end(&mut self) -> Option<f32> {
        self.session.take().map(|s| s.position)
    }
}

impl std::fmt::Debug for DragTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragTracker")
            .field("frame", &self.frame)
            .field("session", &self.session)
            .field("listeners", &self.listeners.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::listeners::CountingListenerHost;

    #[test]
    fn bounded_position_is_clamped() {
        let mut tracker = DragTracker::bounded(TrackMetrics::new(10.0, 300.0, 50.0));
        tracker.begin(20.0);
        assert_eq!(tracker.update(0.0), Some(0.0));
        assert_eq!(tracker.update(110.0), Some(100.0));
        assert_eq!(tracker.update(900.0), Some(250.0));
        assert_eq!(tracker.end(), Some(250.0));
        assert!(!tracker.is_active());
    }

    #[test]
    fn update_without_session_is_noop() {
        let mut tracker = DragTracker::relative();
        assert_eq!(tracker.update(42.0), None);
        assert_eq!(tracker.end(), None);
    }

    #[test]
    fn unmeasured_track_is_noop() {
        let metrics = TrackMetrics {
            origin: 0.0,
            track_extent: Some(300.0),
            control_extent: None,
        };
        let mut tracker = DragTracker::bounded(metrics);
        tracker.begin(5.0);
        assert_eq!(tracker.update(120.0), None);
        assert!(tracker.is_active());
        assert_eq!(tracker.end(), Some(0.0));
    }

    #[test]
    fn late_measurement_takes_effect() {
        let mut tracker = DragTracker::bounded(TrackMetrics::default());
        tracker.begin(0.0);
        assert_eq!(tracker.update(80.0), None);
        tracker.set_metrics(TrackMetrics::new(0.0, 300.0, 50.0));
        assert_eq!(tracker.update(80.0), Some(80.0));
    }

    #[test]
    fn relative_frame_is_signed_and_rebases() {
        let mut tracker = DragTracker::relative();
        tracker.begin(100.0);
        assert_eq!(tracker.update(55.0), Some(-45.0));
        tracker.rebase(55.0);
        assert_eq!(tracker.session().map(|s| s.origin()), Some(55.0));
        assert_eq!(tracker.update(75.0), Some(20.0));
    }

    #[test]
    fn non_finite_coordinates_are_noops() {
        let mut tracker = DragTracker::bounded(TrackMetrics::new(0.0, 300.0, 50.0));
        assert!(!tracker.begin(f32::NAN));
        assert!(!tracker.is_active());

        assert!(tracker.begin(0.0));
        assert_eq!(tracker.update(120.0), Some(120.0));
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert_eq!(tracker.update(bad), None);
            assert!(!tracker.begin(bad));
        }
        assert_eq!(tracker.session().map(|s| s.origin()), Some(0.0));
        assert_eq!(tracker.end(), Some(120.0));
    }

    #[test]
    fn control_wider_than_track_pins_to_zero() {
        let metrics = TrackMetrics::new(0.0, 40.0, 50.0);
        assert_eq!(metrics.max_travel(), Some(0.0));
        assert_eq!(metrics.clamp_position(30.0), Some(0.0));
    }

    #[test]
    fn listeners_live_only_during_session() {
        let host = CountingListenerHost::new();
        let mut tracker = DragTracker::relative().with_listeners(host.clone());
        assert_eq!(host.live(), 0);
        tracker.begin(0.0);
        assert_eq!(host.live(), 1);
        tracker.begin(10.0);
        assert_eq!(host.live(), 1);
        assert_eq!(host.attached_total(), 2);
        tracker.end();
        assert_eq!(host.live(), 0);
    }

    #[test]
    fn dropping_tracker_releases_listeners() {
        let host = CountingListenerHost::new();
        {
            let mut tracker = DragTracker::relative().with_listeners(host.clone());
            tracker.begin(0.0);
            assert_eq!(host.live(), 1);
        }
        assert_eq!(host.live(), 0);
    }
}
