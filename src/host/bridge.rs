//! Host-platform bridge contract (the chat client's WebApp object).

use serde::{Deserialize, Serialize};

use crate::error::HostError;

/// Light or dark client theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("Unknown color scheme: {}", s)),
        }
    }
}

/// Theme values as reported by the host. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<ColorScheme>,
}

/// Host events the app subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HostEvent {
    ThemeChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeSettings {
    /// Whether vertical swipes may minimise or close the app.
    pub vertical: bool,
}

pub type EventHandler = Box<dyn Fn() + Send + Sync>;

pub trait HostBridge: Send + Sync {
    fn is_available(&self) -> bool;

    /// Ask for full-height presentation.
    fn expand(&self);

    /// Tell the host the app is ready to show.
    fn ready(&self);

    fn theme_params(&self) -> ThemeParams;

    /// Register a handler for `event`. Handlers live as long as the host.
    fn on_event(&self, event: HostEvent, handler: EventHandler);

    fn is_version_at_least(&self, version: &str) -> bool;

    /// Only newer hosts can disable vertical swipes natively.
    fn set_swipe_settings(&self, _settings: SwipeSettings) -> Result<(), HostError> {
        Err(HostError::Unsupported {
            capability: "setSwipeSettings".into(),
        })
    }
}

/// Compare dotted numeric versions; missing components count as zero.
///
/// Non-numeric components compare as zero as well.
pub fn version_at_least(current: &str, minimum: &str) -> bool {
    let parse = |v: &str| -> Vec<u64> {
        v.trim()
            .split('.')
            .map(|p| p.parse::<u64>().unwrap_or(0))
            .collect()
    };
    let a = parse(current);
    let b = parse(minimum);
    let len = a.len().max(b.len());
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        if x != y {
            return x > y;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_comparison() {
        assert!(version_at_least("7.7", "7.7"));
        assert!(version_at_least("7.10", "7.7"));
        assert!(version_at_least("8", "7.7"));
        assert!(version_at_least("7.7.0", "7.7"));
        assert!(!version_at_least("7.6", "7.7"));
        assert!(!version_at_least("6.9.9", "7.7"));
        assert!(!version_at_least("7", "7.7"));
    }

    #[test]
    fn color_scheme_parses() {
        assert_eq!("dark".parse::<ColorScheme>(), Ok(ColorScheme::Dark));
        assert_eq!(ColorScheme::default(), ColorScheme::Light);
        assert!("DARK".parse::<ColorScheme>().is_err());
    }

    #[test]
    fn theme_event_name() {
        assert_eq!(
            serde_json::to_string(&HostEvent::ThemeChanged).unwrap(),
            "\"themeChanged\""
        );
    }
}
