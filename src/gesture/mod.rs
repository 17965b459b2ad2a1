//! Gesture-driven controls.
//!
//! One tracking core ([`DragTracker`]) with three thin policies on top:
//! a commit-threshold slider, a delta-to-unit stepper and an index-snapping
//! carousel. Every control walks the same small state machine:
//! Idle → Dragging on press, Dragging → Idle on a release below threshold,
//! Dragging → Committed once the threshold is crossed.

pub mod carousel;
pub mod input;
pub mod listeners;
pub mod slider;
pub mod stepper;
pub mod tracker;

use serde::{Deserialize, Serialize};

pub use carousel::{CardTransform, Carousel, CarouselOutcome};
pub use input::{GesturePhase, InputEvent, MouseEvent, TouchEvent, TouchPoint};
pub use listeners::{CountingListenerHost, ListenerGuard, ListenerHost, ListenerToken};
pub use slider::{ActionSlider, SliderOutcome};
pub use stepper::{NumericStepper, Readout, StepperOutcome};
pub use tracker::{DragTracker, GestureSession, TrackFrame, TrackMetrics};

/// Interaction state of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlState {
    #[default]
    Idle,
    Dragging,
    Committed,
}

impl std::fmt::Display for ControlState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Dragging => "dragging",
            Self::Committed => "committed",
        };
        write!(f, "{s}")
    }
}

/// A control that consumes the press/move/release contract.
pub trait GestureControl {
    /// What a single press, move or release reports back.
    type Outcome;

    fn press(&mut self, coordinate: f32) -> Self::Outcome;

    fn drag(&mut self, coordinate: f32) -> Self::Outcome;

    fn release(&mut self) -> Self::Outcome;

    /// Route a raw mouse or touch event to the matching call.
    fn handle(&mut self, event: &InputEvent) -> Self::Outcome {
        match event.phase() {
            GesturePhase::Down(x) => self.press(x),
            GesturePhase::Move(x) => self.drag(x),
            GesturePhase::Up => self.release(),
        }
    }
}
