//! Startup handshake with the host.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::{debug, info, warn};

use super::bridge::{HostBridge, HostEvent, SwipeSettings};
use super::swipe_guard::{SwipeGuard, Viewport, apply_body_overflow};
use super::theme::{StyleSink, ThemeColors, apply_theme};

/// First host version with native swipe settings.
pub const SWIPE_SETTINGS_MIN_VERSION: &str = "7.7";

/// How vertical swipe-to-dismiss was suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeProtection {
    /// No host; nothing to protect against.
    None,
    /// `setSwipeSettings({ vertical: false })`.
    Native,
    /// Body overflow plus document touch guard.
    Fallback,
}

/// Outcome of [`init_host`].
#[derive(Debug, Clone)]
pub struct HostSession {
    pub available: bool,
    pub colors: ThemeColors,
    pub swipe: SwipeProtection,
    /// Present when the fallback is active; feed it document touch events.
    pub guard: Option<SwipeGuard>,
}

/// Expand, theme, subscribe to theme changes, signal ready, and disable
/// vertical swipes.
///
/// Without a host the document keeps default colours and nothing else is
/// touched. The theme subscription is installed once and never removed;
/// it holds only a weak reference to the bridge.
pub fn init_host<D>(bridge: Option<Arc<dyn HostBridge>>, document: Arc<Mutex<D>>) -> HostSession
where
    D: StyleSink + Viewport + Send + 'static,
{
    let Some(bridge) = bridge.filter(|b| b.is_available()) else {
        info!("Host bridge not available; running as a plain browser page");
        return HostSession {
            available: false,
            colors: ThemeColors::default(),
            swipe: SwipeProtection::None,
            guard: None,
        };
    };

    bridge.expand();

    let colors = ThemeColors::resolve(Some(&*bridge));
    apply_theme(&colors, &mut *document.lock().unwrap_or_else(|e| e.into_inner()));

    let weak = Arc::downgrade(&bridge);
    let doc = Arc::clone(&document);
    bridge.on_event(
        HostEvent::ThemeChanged,
        Box::new(move || {
            let Some(bridge) = weak.upgrade() else {
                return;
            };
            let colors = ThemeColors::resolve(Some(&*bridge));
            debug!(scheme = %colors.color_scheme, "host theme changed");
            apply_theme(&colors, &mut *doc.lock().unwrap_or_else(|e| e.into_inner()));
        }),
    );

    bridge.ready();

    let native = bridge.is_version_at_least(SWIPE_SETTINGS_MIN_VERSION)
        && match bridge.set_swipe_settings(SwipeSettings { vertical: false }) {
            Ok(()) => true,
            Err(e) => {
                warn!("Native swipe settings failed, using fallback: {}", e);
                false
            }
        };

    let (swipe, guard) = if native {
        (SwipeProtection::Native, None)
    } else {
        apply_body_overflow(&mut *document.lock().unwrap_or_else(|e| e.into_inner()));
        (SwipeProtection::Fallback, Some(SwipeGuard::new()))
    };

    info!(
        scheme = %colors.color_scheme,
        swipe = ?swipe,
        "Host bridge initialised"
    );

    HostSession {
        available: true,
        colors,
        swipe,
        guard,
    }
}
