//! The wizard's screens. Each owns its control and hands back its
//! result at most once per screen instance.

use std::sync::Arc;

use serde::Serialize;

use crate::config::{GestureConfig, ProfileDefaults};
use crate::gesture::{
    ActionSlider, CardTransform, Carousel, CarouselOutcome, GestureControl, GesturePhase,
    InputEvent, ListenerHost, NumericStepper, Readout, SliderOutcome, StepperOutcome,
    TrackMetrics,
};

use super::model::{Gender, Goal, GoalOption};
use super::state::Screen;

/// The value a screen commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenResult {
    Started,
    Gender { gender: Gender },
    Measurements { weight_kg: i32, height_cm: i32 },
    Goal { goal: Goal },
}

impl ScreenResult {
    /// The screen that produces this result.
    pub fn screen(&self) -> Screen {
        match self {
            Self::Started => Screen::Start,
            Self::Gender { .. } => Screen::Gender,
            Self::Measurements { .. } => Screen::Measurements,
            Self::Goal { .. } => Screen::Goal,
        }
    }
}

impl std::fmt::Display for ScreenResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Started => write!(f, "started"),
            Self::Gender { gender } => write!(f, "gender:{gender}"),
            Self::Measurements {
                weight_kg,
                height_cm,
            } => write!(f, "measurements:{weight_kg}kg/{height_cm}cm"),
            Self::Goal { goal } => write!(f, "goal:{goal}"),
        }
    }
}

/// Lets a value through once.
#[derive(Debug, Default)]
struct OneShot {
    fired: bool,
}

impl OneShot {
    fn fire<T>(&mut self, value: T) -> Option<T> {
        if self.fired {
            return None;
        }
        self.fired = true;
        Some(value)
    }
}

/// Which part of the start slider was touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderPart {
    Handle,
    Track,
}

/// "Let's start" slide-to-confirm gate.
#[derive(Debug)]
pub struct StartScreen {
    slider: ActionSlider,
    once: OneShot,
}

impl StartScreen {
    pub fn new(config: &GestureConfig, listeners: Option<Arc<dyn ListenerHost>>) -> Self {
        let mut slider = ActionSlider::new(TrackMetrics::default(), config);
        if let Some(host) = listeners {
            slider = slider.with_listeners(host);
        }
        Self {
            slider,
            once: OneShot::default(),
        }
    }

    pub fn measure(&mut self, metrics: TrackMetrics) {
        self.slider.set_metrics(metrics);
    }

    pub fn slider(&self) -> &ActionSlider {
        &self.slider
    }

    pub fn pointer(&mut self, part: SliderPart, event: &InputEvent) -> Option<ScreenResult> {
        let outcome = match (part, event.phase()) {
            (SliderPart::Track, GesturePhase::Down(x)) => self.slider.press_track(x),
            _ => self.slider.handle(event),
        };
        match outcome {
            SliderOutcome::Committed => self.once.fire(ScreenResult::Started),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct GenderScreen {
    selected: Option<Gender>,
    once: OneShot,
}

impl GenderScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<Gender> {
        self.selected
    }

    pub fn select(&mut self, gender: Gender) {
        self.selected = Some(gender);
    }

    /// "Next" does nothing until a gender is chosen.
    pub fn next(&mut self) -> Option<ScreenResult> {
        let gender = self.selected?;
        self.once.fire(ScreenResult::Gender { gender })
    }
}

/// Which stepper on the measurements screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Weight,
    Height,
}

#[derive(Debug)]
pub struct MeasurementsScreen {
    weight: NumericStepper,
    height: NumericStepper,
    once: OneShot,
}

impl MeasurementsScreen {
    pub fn new(
        config: &GestureConfig,
        defaults: ProfileDefaults,
        listeners: Option<Arc<dyn ListenerHost>>,
    ) -> Self {
        let mut weight = NumericStepper::weight(defaults.weight_kg, config);
        let mut height = NumericStepper::height(defaults.height_cm, config);
        if let Some(host) = listeners {
            weight = weight.with_listeners(host.clone());
            height = height.with_listeners(host);
        }
        Self {
            weight,
            height,
            once: OneShot::default(),
        }
    }

    pub fn stepper(&self, quantity: Quantity) -> &NumericStepper {
        match quantity {
            Quantity::Weight => &self.weight,
            Quantity::Height => &self.height,
        }
    }

    fn stepper_mut(&mut self, quantity: Quantity) -> &mut NumericStepper {
        match quantity {
            Quantity::Weight => &mut self.weight,
            Quantity::Height => &mut self.height,
        }
    }

    pub fn measure(&mut self, quantity: Quantity, left: f32, width: f32) {
        self.stepper_mut(quantity).set_bounds(left, width);
    }

    pub fn pointer(&mut self, quantity: Quantity, event: &InputEvent) -> StepperOutcome {
        self.stepper_mut(quantity).handle(event)
    }

    pub fn tap(&mut self, quantity: Quantity, x: f32) -> StepperOutcome {
        self.stepper_mut(quantity).tap(x)
    }

    pub fn next(&mut self) -> Option<ScreenResult> {
        let result = ScreenResult::Measurements {
            weight_kg: self.weight.value(),
            height_cm: self.height.value(),
        };
        self.once.fire(result)
    }
}

#[derive(Debug)]
pub struct GoalScreen {
    carousel: Carousel<GoalOption>,
    once: OneShot,
}

impl GoalScreen {
    pub fn new(config: &GestureConfig, listeners: Option<Arc<dyn ListenerHost>>) -> Self {
        let mut carousel = Carousel::new(Goal::options(), config);
        if let Some(host) = listeners {
            carousel = carousel.with_listeners(host);
        }
        Self {
            carousel,
            once: OneShot::default(),
        }
    }

    pub fn carousel(&self) -> &Carousel<GoalOption> {
        &self.carousel
    }

    pub fn pointer(&mut self, event: &InputEvent) -> CarouselOutcome {
        self.carousel.handle(event)
    }

    /// Tap on a card or its dot.
    pub fn select(&mut self, index: usize) -> CarouselOutcome {
        self.carousel.select(index)
    }

    pub fn card_transforms(&self) -> Vec<CardTransform> {
        (0..self.carousel.len())
            .map(|i| self.carousel.card_transform(i))
            .collect()
    }

    /// "Next" does nothing until a goal is chosen.
    pub fn next(&mut self) -> Option<ScreenResult> {
        let goal = self.carousel.selected()?.id;
        self.once.fire(ScreenResult::Goal { goal })
    }
}

/// Serializable snapshot of the active screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenView {
    Start {
        position: f32,
        dragging: bool,
        committed: bool,
    },
    Gender {
        selected: Option<Gender>,
    },
    Measurements {
        weight: Readout,
        height: Readout,
    },
    Goal {
        current_index: usize,
        current: Option<Goal>,
        selected: Option<Goal>,
    },
    Complete,
}

impl From<&StartScreen> for ScreenView {
    fn from(s: &StartScreen) -> Self {
        Self::Start {
            position: s.slider.position(),
            dragging: s.slider.is_dragging(),
            committed: s.slider.is_committed(),
        }
    }
}

impl From<&GenderScreen> for ScreenView {
    fn from(s: &GenderScreen) -> Self {
        Self::Gender {
            selected: s.selected,
        }
    }
}

impl From<&MeasurementsScreen> for ScreenView {
    fn from(s: &MeasurementsScreen) -> Self {
        Self::Measurements {
            weight: s.weight.readout(),
            height: s.height.readout(),
        }
    }
}

impl From<&GoalScreen> for ScreenView {
    fn from(s: &GoalScreen) -> Self {
        Self::Goal {
            current_index: s.carousel.current_index(),
            current: s.carousel.current().map(|o| o.id),
            selected: s.carousel.selected().map(|o| o.id),
        }
    }
}
