//! `(profile, screen, result) -> (profile, next screen)`.

use chrono::{DateTime, Utc};

use crate::config::StepperRange;
use crate::error::WizardError;

use super::model::Profile;
use super::screens::ScreenResult;
use super::state::Screen;

/// Merge a screen's result into the profile and name the next screen.
pub fn reduce(
    profile: Profile,
    screen: Screen,
    result: ScreenResult,
) -> Result<(Profile, Screen), WizardError> {
    reduce_at(profile, screen, result, Utc::now())
}

/// As [`reduce`], with an explicit completion timestamp.
pub fn reduce_at(
    mut profile: Profile,
    screen: Screen,
    result: ScreenResult,
    now: DateTime<Utc>,
) -> Result<(Profile, Screen), WizardError> {
    let next = screen.next().ok_or(WizardError::AlreadyComplete)?;
    if result.screen() != screen {
        return Err(WizardError::UnexpectedResult {
            screen,
            result: result.to_string(),
        });
    }

    match result {
        ScreenResult::Started => {}
        ScreenResult::Gender { gender } => {
            if profile.gender.is_some() {
                return Err(WizardError::FieldAlreadySet {
                    field: "gender".into(),
                });
            }
            profile.gender = Some(gender);
        }
        ScreenResult::Measurements {
            weight_kg,
            height_cm,
        } => {
            profile.weight_kg = StepperRange::WEIGHT_KG.clamp(weight_kg);
            profile.height_cm = StepperRange::HEIGHT_CM.clamp(height_cm);
        }
        ScreenResult::Goal { goal } => {
            if profile.goal.is_some() {
                return Err(WizardError::FieldAlreadySet {
                    field: "goal".into(),
                });
            }
            profile.goal = Some(goal);
        }
    }

    if next.is_terminal() {
        profile.completed = true;
        profile.completed_at = Some(now);
    }

    Ok((profile, next))
}
