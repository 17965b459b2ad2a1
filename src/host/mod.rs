//! Host-platform integration: the WebApp bridge contract, theme
//! adaptation, and vertical swipe suppression.

pub mod bridge;
pub mod init;
pub mod simulated;
pub mod swipe_guard;
pub mod theme;

pub use bridge::{
    ColorScheme, EventHandler, HostBridge, HostEvent, SwipeSettings, ThemeParams,
    version_at_least,
};
pub use init::{HostSession, SwipeProtection, init_host};
pub use simulated::{HostCall, SimulatedHost};
pub use swipe_guard::{SwipeGuard, Viewport, apply_body_overflow};
pub use theme::{RootStyle, StyleSink, ThemeColors, apply_theme};
