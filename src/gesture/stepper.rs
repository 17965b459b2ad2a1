//! Bounded numeric stepper adjusted by horizontal drags or taps.
//!
//! Drag direction is inverted: moving the pointer right lowers the value,
//! like pulling a ruler under a fixed marker. Each applied change re-bases
//! the origin, so motion is measured relative to the last step.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{GestureConfig, StepperRange};

use super::listeners::ListenerHost;
use super::tracker::DragTracker;
use super::{ControlState, GestureControl};

/// Previous/current/next values shown around the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readout {
    pub previous: i32,
    pub current: i32,
    pub next: i32,
}

/// What a stepper call produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepperOutcome {
    Ignored,
    Pressed,
    /// The drag or tap applied and the value is now this.
    Changed(i32),
    /// A move or tap was absorbed without changing the value.
    Unchanged(i32),
    Released(i32),
}

#[derive(Debug)]
pub struct NumericStepper {
    tracker: DragTracker,
    range: StepperRange,
    value: i32,
    jitter_px: f32,
    px_per_unit: f32,
    tap_decrement_below: f32,
    tap_increment_above: f32,
    /// Leading edge and width of the control, for tap zones.
    bounds: Option<(f32, f32)>,
    state: ControlState,
}

impl NumericStepper {
    pub fn new(initial: i32, range: StepperRange, config: &GestureConfig) -> Self {
        Self {
            tracker: DragTracker::relative(),
            range,
            value: range.clamp(initial),
            jitter_px: config.stepper_jitter_px,
            px_per_unit: config.stepper_px_per_unit,
            tap_decrement_below: config.stepper_tap_decrement_below,
            tap_increment_above: config.stepper_tap_increment_above,
            bounds: None,
            state: ControlState::Idle,
        }
    }

    pub fn weight(initial: i32, config: &GestureConfig) -> Self {
        Self::new(initial, StepperRange::WEIGHT_KG, config)
    }

    pub fn height(initial: i32, config: &GestureConfig) -> Self {
        Self::new(initial, StepperRange::HEIGHT_CM, config)
    }

    pub fn with_listeners(mut self, host: Arc<dyn ListenerHost>) -> Self {
        self.tracker = self.tracker.with_listeners(host);
        self
    }

    /// Record the control's measured leading edge and width.
    pub fn set_bounds(&mut self, left: f32, width: f32) {
        self.bounds = Some((left, width));
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn range(&self) -> StepperRange {
        self.range
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn readout(&self) -> Readout {
        Readout {
            previous: self.value - 1,
            current: self.value,
            next: self.value + 1,
        }
    }

    fn set_value(&mut self, value: i32) -> StepperOutcome {
        let clamped = self.range.clamp(value);
        if clamped == self.value {
            return StepperOutcome::Unchanged(self.value);
        }
        self.value = clamped;
        StepperOutcome::Changed(clamped)
    }

    fn apply_drag(&mut self, coordinate: f32) -> StepperOutcome {
        let Some(delta) = self.tracker.update(coordinate) else {
            return StepperOutcome::Ignored;
        };
        if delta.abs() <= self.jitter_px {
            return StepperOutcome::Unchanged(self.value);
        }
        // Toward zero; saturates at the i32 bounds.
        let units = (delta / self.px_per_unit) as i32;
        if units == 0 {
            return StepperOutcome::Unchanged(self.value);
        }
        self.tracker.rebase(coordinate);
        let outcome = self.set_value(self.value.saturating_sub(units));
        debug!(delta, units, value = self.value, "stepper drag applied");
        outcome
    }

    /// Tap inside the control: left third steps down, right third steps up.
    pub fn tap(&mut self, coordinate: f32) -> StepperOutcome {
        let Some((left, width)) = self.bounds else {
            return StepperOutcome::Ignored;
        };
        if width <= 0.0 {
            return StepperOutcome::Ignored;
        }
        let fraction = (coordinate - left) / width;
        if fraction < self.tap_decrement_below {
            self.set_value(self.value - 1)
        } else if fraction > self.tap_increment_above {
            self.set_value(self.value + 1)
        } else {
            StepperOutcome::Unchanged(self.value)
        }
    }

    pub fn reset(&mut self, value: i32) {
        self.tracker.end();
        self.value = self.range.clamp(value);
        self.state = ControlState::Idle;
    }
}

impl GestureControl for NumericStepper {
    type Outcome = StepperOutcome;

    fn press(&mut self, coordinate: f32) -> StepperOutcome {
        if !self.tracker.begin(coordinate) {
            return StepperOutcome::Ignored;
        }
        self.state = ControlState::Dragging;
        StepperOutcome::Pressed
    }

    fn drag(&mut self, coordinate: f32) -> StepperOutcome {
        self.apply_drag(coordinate)
    }

    fn release(&mut self) -> StepperOutcome {
        if self.tracker.end().is_none() {
            return StepperOutcome::Ignored;
        }
        self.state = ControlState::Idle;
        StepperOutcome::Released(self.value)
    }
}
