//! In-process host bridge that records what the app asked of it.

use std::sync::Mutex;

use crate::error::HostError;

use super::bridge::{
    ColorScheme, EventHandler, HostBridge, HostEvent, SwipeSettings, ThemeParams,
    version_at_least,
};

/// One recorded bridge call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Expand,
    Ready,
    Subscribe(HostEvent),
    SetSwipeSettings(SwipeSettings),
}

pub struct SimulatedHost {
    available: bool,
    version: String,
    native_swipe_settings: bool,
    theme: Mutex<ThemeParams>,
    calls: Mutex<Vec<HostCall>>,
    handlers: Mutex<Vec<(HostEvent, EventHandler)>>,
}

impl SimulatedHost {
    /// Available host reporting `version`; native swipe settings from 7.7 on.
    pub fn new(version: &str) -> Self {
        Self {
            available: true,
            version: version.to_string(),
            native_swipe_settings: version_at_least(version, "7.7"),
            theme: Mutex::new(ThemeParams::default()),
            calls: Mutex::new(Vec::new()),
            handlers: Mutex::new(Vec::new()),
        }
    }

    /// Plain-browser case: the bridge object is absent.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new("0")
        }
    }

    /// Report a recent version but lack `setSwipeSettings`.
    pub fn without_swipe_settings(mut self) -> Self {
        self.native_swipe_settings = false;
        self
    }

    pub fn with_color_scheme(self, scheme: ColorScheme) -> Self {
        self.theme
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .color_scheme = Some(scheme);
        self
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn record(&self, call: HostCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }

    /// Change the theme and notify `themeChanged` subscribers, as the
    /// client does when the user switches themes.
    pub fn set_theme(&self, params: ThemeParams) {
        *self.theme.lock().unwrap_or_else(|e| e.into_inner()) = params;
        let handlers = self.handlers.lock().unwrap_or_else(|e| e.into_inner());
        for (event, handler) in handlers.iter() {
            if *event == HostEvent::ThemeChanged {
                handler();
            }
        }
    }
}

impl HostBridge for SimulatedHost {
    fn is_available(&self) -> bool {
        self.available
    }

    fn expand(&self) {
        self.record(HostCall::Expand);
    }

    fn ready(&self) {
        self.record(HostCall::Ready);
    }

    fn theme_params(&self) -> ThemeParams {
        self.theme.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn on_event(&self, event: HostEvent, handler: EventHandler) {
        self.record(HostCall::Subscribe(event));
        self.handlers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((event, handler));
    }

    fn is_version_at_least(&self, version: &str) -> bool {
        version_at_least(&self.version, version)
    }

    fn set_swipe_settings(&self, settings: SwipeSettings) -> Result<(), HostError> {
        if !self.native_swipe_settings {
            return Err(HostError::Unsupported {
                capability: "setSwipeSettings".into(),
            });
        }
        self.record(HostCall::SetSwipeSettings(settings));
        Ok(())
    }
}
