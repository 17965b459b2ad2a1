//! Raw pointer/touch events and their normalisation into gesture phases.

use serde::{Deserialize, Serialize};

/// A single touch point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub client_x: f32,
    pub client_y: f32,
}

/// Mouse-style pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MouseEvent {
    Down { client_x: f32 },
    Move { client_x: f32 },
    Up,
    Leave,
}

/// Touch events carry the list of touches still on the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TouchEvent {
    Start { touches: Vec<TouchPoint> },
    Move { touches: Vec<TouchPoint> },
    End { touches: Vec<TouchPoint> },
    Cancel,
}

/// Any input event a control can receive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum InputEvent {
    Mouse(MouseEvent),
    Touch(TouchEvent),
}

/// The three calls every control understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
    Down(f32),
    Move(f32),
    Up,
}

impl InputEvent {
    pub fn mouse_down(x: f32) -> Self {
        Self::Mouse(MouseEvent::Down { client_x: x })
    }

    pub fn mouse_move(x: f32) -> Self {
        Self::Mouse(MouseEvent::Move { client_x: x })
    }

    pub fn mouse_up() -> Self {
        Self::Mouse(MouseEvent::Up)
    }

    pub fn touch_start(x: f32) -> Self {
        Self::Touch(TouchEvent::Start {
            touches: vec![TouchPoint {
                client_x: x,
                client_y: 0.0,
            }],
        })
    }

    pub fn touch_move(x: f32) -> Self {
        Self::Touch(TouchEvent::Move {
            touches: vec![TouchPoint {
                client_x: x,
                client_y: 0.0,
            }],
        })
    }

    pub fn touch_end() -> Self {
        Self::Touch(TouchEvent::End {
            touches: Vec::new(),
        })
    }

    /// Map onto a gesture phase using the first touch's horizontal coordinate.
    ///
    /// A touch event with no touches left releases. A touch end always
    /// releases, even if other fingers remain on the surface.
    pub fn phase(&self) -> GesturePhase {
        match self {
            Self::Mouse(MouseEvent::Down { client_x }) => GesturePhase::Down(*client_x),
            Self::Mouse(MouseEvent::Move { client_x }) => GesturePhase::Move(*client_x),
            Self::Mouse(MouseEvent::Up) | Self::Mouse(MouseEvent::Leave) => GesturePhase::Up,
            Self::Touch(TouchEvent::Start { touches }) => touches
                .first()
                .map_or(GesturePhase::Up, |t| GesturePhase::Down(t.client_x)),
            Self::Touch(TouchEvent::Move { touches }) => touches
                .first()
                .map_or(GesturePhase::Up, |t| GesturePhase::Move(t.client_x)),
            Self::Touch(TouchEvent::End { .. }) | Self::Touch(TouchEvent::Cancel) => {
                GesturePhase::Up
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_and_touch_normalise_alike() {
        assert_eq!(InputEvent::mouse_down(12.0).phase(), GesturePhase::Down(12.0));
        assert_eq!(InputEvent::touch_start(12.0).phase(), GesturePhase::Down(12.0));
        assert_eq!(InputEvent::mouse_move(40.0).phase(), GesturePhase::Move(40.0));
        assert_eq!(InputEvent::touch_move(40.0).phase(), GesturePhase::Move(40.0));
        assert_eq!(InputEvent::mouse_up().phase(), GesturePhase::Up);
        assert_eq!(InputEvent::touch_end().phase(), GesturePhase::Up);
    }

    #[test]
    fn touch_without_touches_releases() {
        let event = InputEvent::Touch(TouchEvent::Move {
            touches: Vec::new(),
        });
        assert_eq!(event.phase(), GesturePhase::Up);
    }

    #[test]
    fn mouse_leave_and_touch_cancel_release() {
        assert_eq!(
            InputEvent::Mouse(MouseEvent::Leave).phase(),
            GesturePhase::Up
        );
        assert_eq!(
            InputEvent::Touch(TouchEvent::Cancel).phase(),
            GesturePhase::Up
        );
    }

    #[test]
    fn input_event_serde_shape() {
        let json = serde_json::to_value(InputEvent::mouse_down(5.0)).unwrap();
        assert_eq!(json["source"], "mouse");
        assert_eq!(json["type"], "down");
        assert_eq!(json["client_x"], 5.0);
    }
}
