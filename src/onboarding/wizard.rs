//! Synchronous sequencer: owns the active screen and the profile.
//!
//! Every advance builds a fresh screen instance, so per-screen state (the
//! slider's commit guard, the carousel index) starts over on entry.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::{GestureConfig, ProfileDefaults};
use crate::error::WizardError;
use crate::gesture::{InputEvent, ListenerHost, TrackMetrics};

use super::model::{Gender, Profile};
use super::reducer::reduce;
use super::screens::{
    GenderScreen, GoalScreen, MeasurementsScreen, Quantity, ScreenResult, ScreenView, SliderPart,
    StartScreen,
};
use super::state::Screen;

/// Control a pointer action is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    SliderHandle,
    SliderTrack,
    Weight,
    Height,
    Goals,
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::SliderHandle => "handle",
            Self::SliderTrack => "track",
            Self::Weight => "weight",
            Self::Height => "height",
            Self::Goals => "goal",
        };
        write!(f, "{s}")
    }
}

/// Everything the wizard can be asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    /// Layout pass reported the geometry of the start slider.
    Layout { target: Target, metrics: TrackMetrics },
    /// Layout pass reported a stepper's leading edge and width.
    Bounds { target: Target, left: f32, width: f32 },
    Pointer { target: Target, event: InputEvent },
    Tap { target: Target, x: f32 },
    SelectGender(Gender),
    /// Tap on goal card or dot `index`.
    SelectGoal(usize),
    Next,
}

impl std::fmt::Display for WizardAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Layout { target, .. } => write!(f, "layout:{target}"),
            Self::Bounds { target, .. } => write!(f, "bounds:{target}"),
            Self::Pointer { target, .. } => write!(f, "pointer:{target}"),
            Self::Tap { target, .. } => write!(f, "tap:{target}"),
            Self::SelectGender(g) => write!(f, "select_gender:{g}"),
            Self::SelectGoal(i) => write!(f, "select_goal:{i}"),
            Self::Next => write!(f, "next"),
        }
    }
}

/// A completed screen change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
    pub result: ScreenResult,
}

#[derive(Debug)]
enum ActiveScreen {
    Start(StartScreen),
    Gender(GenderScreen),
    Measurements(MeasurementsScreen),
    Goal(GoalScreen),
    Complete,
}

#[derive(Debug)]
pub struct Wizard {
    run_id: Uuid,
    config: GestureConfig,
    defaults: ProfileDefaults,
    listeners: Option<Arc<dyn ListenerHost>>,
    screen: Screen,
    active: ActiveScreen,
    profile: Profile,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(GestureConfig::default(), ProfileDefaults::default())
    }
}

impl Wizard {
    pub fn new(config: GestureConfig, defaults: ProfileDefaults) -> Self {
        let run_id = Uuid::new_v4();
        info!(%run_id, "onboarding wizard started");
        let active = ActiveScreen::Start(StartScreen::new(&config, None));
        Self {
            run_id,
            config,
            defaults,
            listeners: None,
            screen: Screen::Start,
            active,
            profile: Profile::with_defaults(defaults),
        }
    }

    /// Give every control document-level listeners for its drag sessions.
    pub fn with_listeners(mut self, host: Arc<dyn ListenerHost>) -> Self {
        self.listeners = Some(host);
        self.active = self.enter(self.screen);
        self
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn is_complete(&self) -> bool {
        self.screen.is_terminal()
    }

    pub fn view(&self) -> ScreenView {
        match &self.active {
            ActiveScreen::Start(s) => s.into(),
            ActiveScreen::Gender(s) => s.into(),
            ActiveScreen::Measurements(s) => s.into(),
            ActiveScreen::Goal(s) => s.into(),
            ActiveScreen::Complete => ScreenView::Complete,
        }
    }

    fn enter(&self, screen: Screen) -> ActiveScreen {
        let listeners = self.listeners.clone();
        match screen {
            Screen::Start => ActiveScreen::Start(StartScreen::new(&self.config, listeners)),
            Screen::Gender => ActiveScreen::Gender(GenderScreen::new()),
            Screen::Measurements => ActiveScreen::Measurements(MeasurementsScreen::new(
                &self.config,
                self.defaults,
                listeners,
            )),
            Screen::Goal => ActiveScreen::Goal(GoalScreen::new(&self.config, listeners)),
            Screen::Complete => ActiveScreen::Complete,
        }
    }

    /// Apply one action to the active screen.
    ///
    /// Returns the transition when the action made the screen commit.
    pub fn apply(&mut self, action: WizardAction) -> Result<Option<Transition>, WizardError> {
        if self.is_complete() {
            return Err(WizardError::AlreadyComplete);
        }

        let unexpected = |screen: Screen, action: &WizardAction| WizardError::UnexpectedAction {
            screen,
            action: action.to_string(),
        };

        let result = match (&mut self.active, &action) {
            (ActiveScreen::Start(s), WizardAction::Layout { target, metrics })
                if matches!(target, Target::SliderHandle | Target::SliderTrack) =>
            {
                s.measure(*metrics);
                None
            }
            (ActiveScreen::Start(s), WizardAction::Pointer { target, event }) => {
                let part = match target {
                    Target::SliderHandle => SliderPart::Handle,
                    Target::SliderTrack => SliderPart::Track,
                    _ => return Err(unexpected(self.screen, &action)),
                };
                s.pointer(part, event)
            }
            (ActiveScreen::Gender(s), WizardAction::SelectGender(gender)) => {
                s.select(*gender);
                None
            }
            (ActiveScreen::Gender(s), WizardAction::Next) => s.next(),
            (ActiveScreen::Measurements(s), WizardAction::Bounds { target, left, width }) => {
                let quantity = quantity_of(*target).ok_or_else(|| unexpected(self.screen, &action))?;
                s.measure(quantity, *left, *width);
                None
            }
            (ActiveScreen::Measurements(s), WizardAction::Pointer { target, event }) => {
                let quantity = quantity_of(*target).ok_or_else(|| unexpected(self.screen, &action))?;
                let outcome = s.pointer(quantity, event);
                debug!(?quantity, ?outcome, "stepper event");
                None
            }
            (ActiveScreen::Measurements(s), WizardAction::Tap { target, x }) => {
                let quantity = quantity_of(*target).ok_or_else(|| unexpected(self.screen, &action))?;
                let outcome = s.tap(quantity, *x);
                debug!(?quantity, ?outcome, "stepper tap");
                None
            }
            (ActiveScreen::Measurements(s), WizardAction::Next) => s.next(),
            (ActiveScreen::Goal(s), WizardAction::Pointer { target: Target::Goals, event }) => {
                let outcome = s.pointer(event);
                debug!(?outcome, "carousel event");
                None
            }
            (ActiveScreen::Goal(s), WizardAction::SelectGoal(index)) => {
                s.select(*index);
                None
            }
            (ActiveScreen::Goal(s), WizardAction::Next) => s.next(),
            _ => return Err(unexpected(self.screen, &action)),
        };

        match result {
            Some(result) => self.advance(result).map(Some),
            None => Ok(None),
        }
    }

    fn advance(&mut self, result: ScreenResult) -> Result<Transition, WizardError> {
        let from = self.screen;
        let (profile, to) = reduce(self.profile.clone(), from, result)?;
        self.profile = profile;
        self.screen = to;
        self.active = self.enter(to);
        info!(
            run_id = %self.run_id,
            from = %from,
            to = %to,
            result = %result,
            "onboarding screen committed"
        );
        if to.is_terminal() {
            info!(run_id = %self.run_id, profile = %self.profile.summary(), "onboarding complete");
        }
        Ok(Transition { from, to, result })
    }
}

fn quantity_of(target: Target) -> Option<Quantity> {
    match target {
        Target::Weight => Some(Quantity::Weight),
        Target::Height => Some(Quantity::Height),
        _ => None,
    }
}
