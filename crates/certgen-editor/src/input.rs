//! Input abstraction layer.
//!
//! Normalizes the few browser events the editor reacts to into an
//! `InputEvent` the controller can consume without knowing about the DOM.

use crate::shortcuts::{ShortcutAction, ShortcutMap};
use kurbo::{Point, Rect};

/// A normalized input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary click, in viewport (client) coordinates.
    Click { client_x: f64, client_y: f64 },

    Key {
        key: String,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    },
}

impl InputEvent {
    pub fn click(client_x: f64, client_y: f64) -> Self {
        Self::Click { client_x, client_y }
    }

    pub fn key(key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        Self::Key {
            key: key.to_string(),
            ctrl,
            shift,
            alt,
            meta,
        }
    }

    /// Click position relative to the canvas whose bounding client rect is
    /// `canvas_rect`. `None` for non-pointer events.
    pub fn canvas_point(&self, canvas_rect: Rect) -> Option<Point> {
        match self {
            Self::Click { client_x, client_y } => Some(canvas_point(
                Point::new(*client_x, *client_y),
                canvas_rect,
            )),
            Self::Key { .. } => None,
        }
    }

    /// Shortcut bound to a key event. Clicks never map to one.
    pub fn shortcut(&self) -> Option<ShortcutAction> {
        match self {
            Self::Key {
                key,
                ctrl,
                shift,
                alt,
                meta,
            } => ShortcutMap::resolve(key, *ctrl, *shift, *alt, *meta),
            Self::Click { .. } => None,
        }
    }
}

/// Translate a client-space point into canvas pixels.
pub fn canvas_point(client: Point, canvas_rect: Rect) -> Point {
    client - canvas_rect.origin().to_vec2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_is_relative_to_canvas_origin() {
        let rect = Rect::new(40.0, 120.0, 840.0, 720.0);
        let event = InputEvent::click(140.0, 270.0);
        assert_eq!(event.canvas_point(rect), Some(Point::new(100.0, 150.0)));
    }

    #[test]
    fn keys_have_no_position() {
        let event = InputEvent::key("Escape", false, false, false, false);
        assert_eq!(event.canvas_point(Rect::ZERO), None);
    }

    #[test]
    fn key_events_resolve_to_shortcuts() {
        assert_eq!(
            InputEvent::key("z", true, false, false, false).shortcut(),
            Some(ShortcutAction::Undo)
        );
        assert_eq!(
            InputEvent::key("S", false, false, false, true).shortcut(),
            Some(ShortcutAction::Save)
        );
        assert_eq!(
            InputEvent::key("Escape", false, false, false, false).shortcut(),
            Some(ShortcutAction::Dismiss)
        );
        assert_eq!(InputEvent::key("z", false, false, false, false).shortcut(), None);
        assert_eq!(InputEvent::click(1.0, 1.0).shortcut(), None);
    }
}
