//! Screen sequence — which screen of the wizard is active.

use serde::{Deserialize, Serialize};

/// The wizard's screens.
///
/// Progresses strictly forward: Start → Gender → Measurements → Goal →
/// Complete. There is no back-navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Start,
    Gender,
    Measurements,
    Goal,
    Complete,
}

impl Screen {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: Screen) -> bool {
        use Screen::*;
        matches!(
            (self, target),
            (Start, Gender) | (Gender, Measurements) | (Measurements, Goal) | (Goal, Complete)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }

    pub fn next(&self) -> Option<Screen> {
        use Screen::*;
        match self {
            Start => Some(Gender),
            Gender => Some(Measurements),
            Measurements => Some(Goal),
            Goal => Some(Complete),
            Complete => None,
        }
    }

    /// Progress bar fill, in percent.
    pub fn progress(&self) -> u8 {
        match self {
            Self::Start => 0,
            Self::Gender => 20,
            Self::Measurements => 40,
            Self::Goal => 60,
            Self::Complete => 100,
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::Gender => "gender",
            Self::Measurements => "measurements",
            Self::Goal => "goal",
            Self::Complete => "complete",
        };
        write!(f, "{s}")
    }
}
