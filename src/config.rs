//! Configuration types.

use crate::error::ConfigError;
use crate::host::ColorScheme;

/// Thresholds shared by the gesture-driven controls.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Fraction of travel at or past which a released slider commits.
    pub release_commit_ratio: f32,
    /// Fraction of travel past which a slider commits while still dragging.
    pub drag_commit_ratio: f32,
    /// Minimum horizontal delta (px) before a stepper reacts to a drag.
    pub stepper_jitter_px: f32,
    /// Pixels of drag per stepper unit.
    pub stepper_px_per_unit: f32,
    /// Left fraction of a stepper that decrements on tap.
    pub stepper_tap_decrement_below: f32,
    /// Right fraction of a stepper that increments on tap.
    pub stepper_tap_increment_above: f32,
    /// Minimum horizontal delta (px) for a carousel swipe.
    pub carousel_swipe_px: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            release_commit_ratio: 0.6,
            drag_commit_ratio: 0.75,
            stepper_jitter_px: 10.0,
            stepper_px_per_unit: 20.0,
            stepper_tap_decrement_below: 0.33,
            stepper_tap_increment_above: 0.66,
            carousel_swipe_px: 50.0,
        }
    }
}

/// Closed integer range a stepper is clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepperRange {
    pub min: i32,
    pub max: i32,
}

impl StepperRange {
    pub const WEIGHT_KG: StepperRange = StepperRange { min: 30, max: 200 };
    pub const HEIGHT_CM: StepperRange = StepperRange { min: 100, max: 250 };

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Starting values for a fresh profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileDefaults {
    pub weight_kg: i32,
    pub height_cm: i32,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            weight_kg: 65,
            height_cm: 178,
        }
    }
}

/// Process-level settings for the dev harness binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port for the status routes; `None` leaves the HTTP server off.
    pub http_port: Option<u16>,
    /// Version string the simulated host reports.
    pub host_version: String,
    /// Colour scheme the simulated host reports.
    pub color_scheme: ColorScheme,
    pub gesture: GestureConfig,
    pub defaults: ProfileDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http_port: None,
            host_version: "7.7".to_string(),
            color_scheme: ColorScheme::Light,
            gesture: GestureConfig::default(),
            defaults: ProfileDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Build from `NUTRI_ONBOARD_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("NUTRI_ONBOARD_HTTP_PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "NUTRI_ONBOARD_HTTP_PORT".into(),
                    message: e.to_string(),
                })?;
            config.http_port = Some(port);
        }

        if let Some(version) = lookup("NUTRI_ONBOARD_HOST_VERSION") {
            let version = version.trim();
            if version.is_empty() || version.split('.').any(|p| p.parse::<u32>().is_err()) {
                return Err(ConfigError::InvalidValue {
                    key: "NUTRI_ONBOARD_HOST_VERSION".into(),
                    message: format!("expected dotted numeric version, got {version:?}"),
                });
            }
            config.host_version = version.to_string();
        }

        if let Some(scheme) = lookup("NUTRI_ONBOARD_COLOR_SCHEME") {
            config.color_scheme =
                scheme
                    .trim()
                    .parse()
                    .map_err(|message: String| ConfigError::InvalidValue {
                        key: "NUTRI_ONBOARD_COLOR_SCHEME".into(),
                        message,
                    })?;
        }

        Ok(config)
    }
}
