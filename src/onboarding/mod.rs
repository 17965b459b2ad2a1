//! Onboarding wizard — start gate, gender, weight/height, goal.
//!
//! Each screen owns one control and commits one value. The wizard merges
//! each value into the `Profile` and moves strictly forward until the
//! profile is complete.

pub mod manager;
pub mod model;
pub mod reducer;
pub mod routes;
pub mod screens;
pub mod state;
pub mod wizard;

pub use manager::{OnboardingManager, OnboardingStatus, WizardEvent};
pub use model::{Gender, Goal, GoalOption, Profile};
pub use reducer::{reduce, reduce_at};
pub use routes::{OnboardingRouteState, onboarding_routes};
pub use screens::{Quantity, ScreenResult, ScreenView, SliderPart};
pub use state::Screen;
pub use wizard::{Target, Transition, Wizard, WizardAction};
