//! Swipeable carousel over a fixed, ordered set of options.
//!
//! A horizontal swipe longer than the threshold moves one card in the
//! swipe's direction (left swipe → next card), records that card as the
//! selection, and ends the session so one swipe moves at most one card.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GestureConfig;

use super::listeners::ListenerHost;
use super::tracker::DragTracker;
use super::{ControlState, GestureControl};

/// What a carousel call produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselOutcome {
    Ignored,
    Pressed,
    /// Moved without crossing the swipe threshold.
    Tracking,
    /// A swipe crossed the threshold and selected this index.
    Swiped { index: usize },
    /// A card or dot was tapped.
    Selected { index: usize },
    Released,
}

/// Visual placement of one card relative to the current card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardTransform {
    pub scale: f32,
    /// Horizontal offset as a percentage of the card width.
    pub offset_percent: f32,
    pub opacity: f32,
    pub z_index: u8,
}

#[derive(Debug)]
pub struct Carousel<T> {
    options: Vec<T>,
    tracker: DragTracker,
    swipe_px: f32,
    current: usize,
    selected: Option<usize>,
    state: ControlState,
}

impl<T> Carousel<T> {
    pub fn new(options: Vec<T>, config: &GestureConfig) -> Self {
        Self {
            options,
            tracker: DragTracker::relative(),
            swipe_px: config.carousel_swipe_px,
            current: 0,
            selected: None,
            state: ControlState::Idle,
        }
    }

    pub fn with_listeners(mut self, host: Arc<dyn ListenerHost>) -> Self {
        self.tracker = self.tracker.with_listeners(host);
        self
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&T> {
        self.options.get(self.current)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.and_then(|i| self.options.get(i))
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    /// Jump straight to `index` and select it. Out-of-range taps are ignored.
    pub fn select(&mut self, index: usize) -> CarouselOutcome {
        if index >= self.options.len() {
            return CarouselOutcome::Ignored;
        }
        self.current = index;
        self.selected = Some(index);
        CarouselOutcome::Selected { index }
    }

    /// Placement of card `index` given the current card.
    pub fn card_transform(&self, index: usize) -> CardTransform {
        let active = index == self.current;
        let offset = index as f32 - self.current as f32;
        CardTransform {
            scale: if active { 1.0 } else { 0.85 },
            offset_percent: offset * 100.0,
            opacity: if active { 1.0 } else { 0.5 },
            z_index: if active { 2 } else { 1 },
        }
    }

    /// Back to the first card with nothing selected (screen re-entered).
    pub fn reset(&mut self) {
        self.tracker.end();
        self.current = 0;
        self.selected = None;
        self.state = ControlState::Idle;
    }

    fn step(&mut self, delta: f32) -> usize {
        let last = self.options.len().saturating_sub(1);
        if delta > 0.0 {
            self.current = self.current.saturating_sub(1);
        } else if delta < 0.0 && self.current < last {
            self.current += 1;
        }
        self.current
    }
}

impl<T> GestureControl for Carousel<T> {
    type Outcome = CarouselOutcome;

    fn press(&mut self, coordinate: f32) -> CarouselOutcome {
        if self.options.is_empty() {
            return CarouselOutcome::Ignored;
        }
        if !self.tracker.begin(coordinate) {
            return CarouselOutcome::Ignored;
        }
        self.state = ControlState::Dragging;
        CarouselOutcome::Pressed
    }

    fn drag(&mut self, coordinate: f32) -> CarouselOutcome {
        let Some(delta) = self.tracker.update(coordinate) else {
            return CarouselOutcome::Ignored;
        };
        if delta.abs() <= self.swipe_px {
            return CarouselOutcome::Tracking;
        }
        let index = self.step(delta);
        self.selected = Some(index);
        self.tracker.end();
        self.state = ControlState::Idle;
        debug!(delta, index, "carousel swipe");
        CarouselOutcome::Swiped { index }
    }

    fn release(&mut self) -> CarouselOutcome {
        if self.tracker.end().is_none() {
            return CarouselOutcome::Ignored;
        }
        self.state = ControlState::Idle;
        CarouselOutcome::Released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> Carousel<&'static str> {
        Carousel::new(vec!["loss", "maintenance", "gain"], &GestureConfig::default())
    }

    #[test]
    fn left_swipe_advances_one() {
        let mut c = three();
        c.press(300.0);
        assert_eq!(c.drag(220.0), CarouselOutcome::Swiped { index: 1 });
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.selected(), Some(&"maintenance"));
    }

    #[test]
    fn right_swipe_goes_back() {
        let mut c = three();
        c.select(2);
        c.press(0.0);
        assert_eq!(c.drag(51.0), CarouselOutcome::Swiped { index: 1 });
    }

    #[test]
    fn swipe_at_threshold_does_nothing() {
        let mut c = three();
        c.press(100.0);
        assert_eq!(c.drag(50.0), CarouselOutcome::Tracking);
        assert_eq!(c.drag(150.0), CarouselOutcome::Tracking);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.selected_index(), None);
    }

    #[test]
    fn one_step_per_session() {
        let mut c = three();
        c.press(400.0);
        assert_eq!(c.drag(300.0), CarouselOutcome::Swiped { index: 1 });
        // Session ended on the swipe; further moves need a new press.
        assert_eq!(c.drag(100.0), CarouselOutcome::Ignored);
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.release(), CarouselOutcome::Ignored);
    }

    #[test]
    fn index_clamped_at_edges() {
        let mut c = three();
        c.press(0.0);
        assert_eq!(c.drag(80.0), CarouselOutcome::Swiped { index: 0 });
        assert_eq!(c.selected_index(), Some(0));

        c.select(2);
        c.press(200.0);
        assert_eq!(c.drag(100.0), CarouselOutcome::Swiped { index: 2 });
    }

    #[test]
    fn tap_selects_any_index() {
        let mut c = three();
        assert_eq!(c.select(2), CarouselOutcome::Selected { index: 2 });
        assert_eq!(c.select(0), CarouselOutcome::Selected { index: 0 });
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.select(3), CarouselOutcome::Ignored);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn empty_carousel_ignores_everything() {
        let mut c: Carousel<&str> = Carousel::new(Vec::new(), &GestureConfig::default());
        assert_eq!(c.press(0.0), CarouselOutcome::Ignored);
        assert_eq!(c.drag(-200.0), CarouselOutcome::Ignored);
        assert_eq!(c.select(0), CarouselOutcome::Ignored);
    }

    #[test]
    fn transforms_follow_offset() {
        let mut c = three();
        c.select(1);
        let left = c.card_transform(0);
        let active = c.card_transform(1);
        let right = c.card_transform(2);
        assert_eq!(left.offset_percent, -100.0);
        assert_eq!(left.scale, 0.85);
        assert_eq!(active.scale, 1.0);
        assert_eq!(active.opacity, 1.0);
        assert_eq!(active.z_index, 2);
        assert_eq!(right.offset_percent, 100.0);
        assert_eq!(right.opacity, 0.5);
    }

    #[test]
    fn non_finite_moves_never_swipe() {
        let mut c = three();
        assert_eq!(c.press(f32::NAN), CarouselOutcome::Ignored);
        c.press(300.0);
        assert_eq!(c.drag(f32::NEG_INFINITY), CarouselOutcome::Ignored);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.selected_index(), None);
    }

    #[test]
    fn reset_returns_to_first_card() {
        let mut c = three();
        c.select(2);
        c.reset();
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.selected_index(), None);
    }
}
