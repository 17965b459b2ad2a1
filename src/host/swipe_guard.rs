//! Fallback against swipe-to-dismiss on hosts that cannot disable
//! vertical swipes natively.
//!
//! The body is made taller than the viewport and pre-scrolled, so a
//! downward pull scrolls the page instead of dragging the app sheet. A
//! touch guard then blocks the remaining case: pulling further down while
//! the app container is already at its top.

use super::theme::RootStyle;

/// Extra body height and initial scroll offset, in px.
pub const SWIPE_OVERFLOW_PX: f32 = 100.0;

/// Body styling and window scroll.
pub trait Viewport {
    fn inner_height(&self) -> f32;
    fn set_body_style(&mut self, property: &str, value: &str);
    fn scroll_to(&mut self, x: f32, y: f32);
}

impl Viewport for RootStyle {
    fn inner_height(&self) -> f32 {
        self.inner_height
    }

    fn set_body_style(&mut self, property: &str, value: &str) {
        self.body.insert(property.to_string(), value.to_string());
    }

    fn scroll_to(&mut self, _x: f32, y: f32) {
        self.scroll_y = y;
    }
}

/// Pad the body and scroll past the padding.
pub fn apply_body_overflow(viewport: &mut dyn Viewport) {
    let overflow = SWIPE_OVERFLOW_PX;
    let height = viewport.inner_height() + overflow;
    viewport.set_body_style("overflow-y", "hidden");
    viewport.set_body_style("margin-top", &format!("{overflow}px"));
    viewport.set_body_style("height", &format!("{height}px"));
    viewport.set_body_style("padding-bottom", &format!("{overflow}px"));
    viewport.scroll_to(0.0, overflow);
}

/// Decides whether a document touch-move must be cancelled.
#[derive(Debug, Clone, Default)]
pub struct SwipeGuard {
    touch_start_y: Option<f32>,
}

impl SwipeGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_touch_start(&mut self, client_y: f32) {
        self.touch_start_y = Some(client_y);
    }

    /// `container_scroll_top` is the app container's scroll offset, or
    /// `None` if the container is not in the document. Returns true when
    /// the move should be prevented.
    pub fn on_touch_move(&self, client_y: f32, container_scroll_top: Option<f32>) -> bool {
        let Some(scroll_top) = container_scroll_top else {
            return true;
        };
        let pulling_down = self.touch_start_y.is_some_and(|start| start < client_y);
        scroll_top <= 0.0 && pulling_down
    }
}
