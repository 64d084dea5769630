use winit::event::MouseButton as WinitMouseButton;

use crate::geometry::Point;

/// Pointer button, collapsed to the three buckets callers distinguish.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    /// Middle, back, forward and any extra buttons.
    Other,
}

/// One pointer press on the canvas.
///
/// `position` is in logical canvas units relative to the surface top-left,
/// the same space drawing calls use.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClickEvent {
    pub position: Point,
    pub button: PointerButton,
}

impl ClickEvent {
    #[inline]
    pub const fn new(position: Point, button: PointerButton) -> Self {
        Self { position, button }
    }

    #[inline]
    pub fn is_left(&self) -> bool {
        self.button == PointerButton::Left
    }

    #[inline]
    pub fn is_right(&self) -> bool {
        self.button == PointerButton::Right
    }
}

/// Callback invoked synchronously on the UI thread for each pointer press.
///
/// The scene lock is never held during dispatch, so the handler is free to
/// call back into drawing and render entry points. `Send` because the handler
/// moves into the UI thread at initialization.
pub type ClickHandler = Box<dyn Fn(ClickEvent) + Send>;

pub(crate) fn map_pointer_button(button: WinitMouseButton) -> PointerButton {
    match button {
        WinitMouseButton::Left => PointerButton::Left,
        WinitMouseButton::Right => PointerButton::Right,
        WinitMouseButton::Middle
        | WinitMouseButton::Back
        | WinitMouseButton::Forward
        | WinitMouseButton::Other(_) => PointerButton::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_and_right_map_directly() {
        assert_eq!(map_pointer_button(WinitMouseButton::Left), PointerButton::Left);
        assert_eq!(map_pointer_button(WinitMouseButton::Right), PointerButton::Right);
    }

    #[test]
    fn every_other_button_collapses() {
        assert_eq!(map_pointer_button(WinitMouseButton::Middle), PointerButton::Other);
        assert_eq!(map_pointer_button(WinitMouseButton::Back), PointerButton::Other);
        assert_eq!(map_pointer_button(WinitMouseButton::Forward), PointerButton::Other);
        assert_eq!(map_pointer_button(WinitMouseButton::Other(7)), PointerButton::Other);
    }

    #[test]
    fn click_event_button_predicates() {
        let left = ClickEvent::new(Point::new(1.0, 2.0), PointerButton::Left);
        assert!(left.is_left());
        assert!(!left.is_right());
    }
}
