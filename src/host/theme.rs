//! Theme colours and their application to the document root.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::bridge::{ColorScheme, HostBridge};

pub const DEFAULT_BACKGROUND: &str = "#ffffff";
pub const DEFAULT_TEXT: &str = "#000000";
pub const DEFAULT_BUTTON: &str = "#98c93c";
pub const DEFAULT_BUTTON_TEXT: &str = "#ffffff";
pub const DEFAULT_HINT: &str = "#999999";
pub const DEFAULT_LINK: &str = "#2481cc";

/// Root class toggled for dark hosts.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Fully resolved theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub background_color: String,
    pub text_color: String,
    pub button_color: String,
    pub button_text_color: String,
    pub hint_color: String,
    pub link_color: String,
    pub color_scheme: ColorScheme,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND.to_string(),
            text_color: DEFAULT_TEXT.to_string(),
            button_color: DEFAULT_BUTTON.to_string(),
            button_text_color: DEFAULT_BUTTON_TEXT.to_string(),
            hint_color: DEFAULT_HINT.to_string(),
            link_color: DEFAULT_LINK.to_string(),
            color_scheme: ColorScheme::Light,
        }
    }
}

impl ThemeColors {
    /// Host theme with per-field fallbacks; all defaults without a host.
    pub fn resolve(bridge: Option<&dyn HostBridge>) -> Self {
        let Some(bridge) = bridge.filter(|b| b.is_available()) else {
            return Self::default();
        };
        let params = bridge.theme_params();
        let or = |value: Option<String>, fallback: &str| {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };
        Self {
            background_color: or(params.background_color, DEFAULT_BACKGROUND),
            text_color: or(params.text_color, DEFAULT_TEXT),
            button_color: or(params.button_color, DEFAULT_BUTTON),
            button_text_color: or(params.button_text_color, DEFAULT_BUTTON_TEXT),
            hint_color: or(params.hint_color, DEFAULT_HINT),
            link_color: or(params.link_color, DEFAULT_LINK),
            color_scheme: params.color_scheme.unwrap_or_default(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.color_scheme == ColorScheme::Dark
    }

    /// CSS custom properties in application order.
    pub fn css_variables(&self) -> [(&'static str, &str); 6] {
        [
            ("--tg-bg-color", self.background_color.as_str()),
            ("--tg-text-color", self.text_color.as_str()),
            ("--tg-button-color", self.button_color.as_str()),
            ("--tg-button-text-color", self.button_text_color.as_str()),
            ("--tg-hint-color", self.hint_color.as_str()),
            ("--tg-link-color", self.link_color.as_str()),
        ]
    }
}

/// Styling of the document root element.
pub trait StyleSink {
    fn set_property(&mut self, name: &str, value: &str);
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
}

/// Write the theme's variables and dark-mode class onto the root.
pub fn apply_theme(colors: &ThemeColors, sink: &mut dyn StyleSink) {
    for (name, value) in colors.css_variables() {
        sink.set_property(name, value);
    }
    if colors.is_dark() {
        sink.add_class(DARK_MODE_CLASS);
    } else {
        sink.remove_class(DARK_MODE_CLASS);
    }
}

/// In-memory document: root variables and classes, body styles, scroll.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RootStyle {
    pub properties: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    pub body: BTreeMap<String, String>,
    pub scroll_y: f32,
    pub inner_height: f32,
}

impl RootStyle {
    pub fn new(inner_height: f32) -> Self {
        Self {
            inner_height,
            ..Default::default()
        }
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

impl StyleSink for RootStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::bridge::ThemeParams;
    use crate::host::simulated::SimulatedHost;

    #[test]
    fn no_host_means_defaults() {
        let colors = ThemeColors::resolve(None);
        assert_eq!(colors, ThemeColors::default());
        assert_eq!(colors.button_color, "#98c93c");
        assert!(!colors.is_dark());
    }

    #[test]
    fn missing_fields_fall_back_individually() {
        let host = SimulatedHost::new("7.7");
        host.set_theme(ThemeParams {
            background_color: Some("#17212b".into()),
            text_color: Some(String::new()),
            color_scheme: Some(ColorScheme::Dark),
            ..Default::default()
        });
        let colors = ThemeColors::resolve(Some(&host));
        assert_eq!(colors.background_color, "#17212b");
        assert_eq!(colors.text_color, DEFAULT_TEXT);
        assert_eq!(colors.link_color, DEFAULT_LINK);
        assert!(colors.is_dark());
    }

    #[test]
    fn unavailable_host_means_defaults() {
        let host = SimulatedHost::unavailable();
        host.set_theme(ThemeParams {
            background_color: Some("#000000".into()),
            ..Default::default()
        });
        assert_eq!(ThemeColors::resolve(Some(&host)), ThemeColors::default());
    }

    #[test]
    fn apply_sets_variables_and_toggles_class() {
        let mut root = RootStyle::default();
        let mut colors = ThemeColors {
            color_scheme: ColorScheme::Dark,
            ..Default::default()
        };
        apply_theme(&colors, &mut root);
        assert_eq!(root.property("--tg-bg-color"), Some("#ffffff"));
        assert_eq!(root.property("--tg-link-color"), Some("#2481cc"));
        assert_eq!(root.properties.len(), 6);
        assert!(root.has_class(DARK_MODE_CLASS));

        colors.color_scheme = ColorScheme::Light;
        apply_theme(&colors, &mut root);
        assert!(!root.has_class(DARK_MODE_CLASS));
    }
}
