//! OnboardingManager — shares one wizard between the input loop and the
//! status routes, and fans transitions out to subscribers.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{RwLock, broadcast};
use tracing::warn;

use crate::error::WizardError;

use super::model::Profile;
use super::screens::ScreenView;
use super::state::Screen;
use super::wizard::{Transition, Wizard, WizardAction};

/// Default broadcast channel capacity.
const DEFAULT_BROADCAST_CAPACITY: usize = 64;

/// Events pushed to subscribers.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardEvent {
    Transition { transition: Transition },
    Completed { profile: Profile },
}

pub struct OnboardingManager {
    wizard: RwLock<Wizard>,
    tx: broadcast::Sender<WizardEvent>,
}

impl OnboardingManager {
    pub fn new(wizard: Wizard) -> Arc<Self> {
        let (tx, _rx) = broadcast::channel(DEFAULT_BROADCAST_CAPACITY);
        Arc::new(Self {
            wizard: RwLock::new(wizard),
            tx,
        })
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WizardEvent> {
        self.tx.subscribe()
    }

    pub async fn current_screen(&self) -> Screen {
        self.wizard.read().await.screen()
    }

    pub async fn is_complete(&self) -> bool {
        self.wizard.read().await.is_complete()
    }

    /// Apply an action; on a transition, broadcast it.
    pub async fn dispatch(&self, action: WizardAction) -> Result<Option<Transition>, WizardError> {
        let (outcome, profile) = {
            let mut wizard = self.wizard.write().await;
            let outcome = wizard.apply(action);
            (outcome, wizard.profile().clone())
        };

        match &outcome {
            Ok(Some(transition)) => {
                // Ok if nobody is listening
                let _ = self.tx.send(WizardEvent::Transition {
                    transition: *transition,
                });
                if transition.to.is_terminal() {
                    let _ = self.tx.send(WizardEvent::Completed { profile });
                }
            }
            Ok(None) => {}
            Err(e) => warn!("Rejected onboarding action: {}", e),
        }
        outcome
    }

    /// Finished profile, or `None` while the wizard is still running.
    pub async fn completed_profile(&self) -> Option<Profile> {
        let wizard = self.wizard.read().await;
        wizard.is_complete().then(|| wizard.profile().clone())
    }

    pub async fn get_status(&self) -> OnboardingStatus {
        let wizard = self.wizard.read().await;
        OnboardingStatus {
            run_id: wizard.run_id().to_string(),
            onboarding_completed: wizard.is_complete(),
            screen: wizard.screen(),
            progress: wizard.screen().progress(),
            view: wizard.view(),
            profile: wizard.profile().clone(),
        }
    }
}

/// Status returned by the REST endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingStatus {
    pub run_id: String,
    pub onboarding_completed: bool,
    pub screen: Screen,
    pub progress: u8,
    pub view: ScreenView,
    pub profile: Profile,
}
