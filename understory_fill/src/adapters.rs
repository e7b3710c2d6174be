// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translate raw input into fill requests.
//!
//! ## Mapping
//!
//! - Mouse enter/leave: nearest edge of the element bounds, `In`/`Out`.
//! - Touch pointer-down anywhere in the window: nearest edge of the tapped
//!   target's bounds, inverted, `In` if the target is inside the element and
//!   `Out` otherwise. Other pointer kinds are ignored.
//! - Focus/blur: the configured `focus_enter`/`focus_leave` edges.
//! - Pointer move: never a request; it resolves pending pointer checks instead.
//!
//! Each mapping only applies while its [`InputSources`] flag is enabled.

use kurbo::{Point, Rect};

use crate::config::{FillConfig, InputSources};
use crate::edge::{Direction, Edge, nearest_edge};

/// Kind of device behind a pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse or trackpad.
    Mouse,
    /// Pen or stylus.
    Pen,
    /// Finger on a touch surface.
    Touch,
}

/// Input delivered by the host, in window coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// The mouse entered the element.
    MouseEnter {
        /// Pointer position.
        position: Point,
    },
    /// The mouse left the element.
    MouseLeave {
        /// Pointer position.
        position: Point,
    },
    /// A pointer went down somewhere in the window.
    PointerDown {
        /// Pointer position.
        position: Point,
        /// Device kind.
        kind: PointerKind,
        /// Bounds of the element that was hit.
        target_bounds: Rect,
        /// Whether the hit element is the fill's element or one of its descendants.
        inside: bool,
    },
    /// The pointer moved somewhere in the window.
    PointerMove {
        /// Pointer position.
        position: Point,
    },
    /// The element gained focus.
    Focus,
    /// The element lost focus.
    Blur,
}

/// Map an input event to a fill request.
///
/// `bounds` are the element's bounds; `None` while it is not mounted, in which
/// case geometry-based mouse mappings produce nothing.
pub fn request_for(
    event: &InputEvent,
    config: &FillConfig,
    bounds: Option<Rect>,
) -> Option<(Edge, Direction)> {
    let inputs = config.inputs;
    match *event {
        InputEvent::MouseEnter { position } if inputs.contains(InputSources::MOUSE) => {
            Some((nearest_edge(position, bounds?), Direction::In))
        }
        InputEvent::MouseLeave { position } if inputs.contains(InputSources::MOUSE) => {
            Some((nearest_edge(position, bounds?), Direction::Out))
        }
        InputEvent::PointerDown {
            position,
            kind: PointerKind::Touch,
            target_bounds,
            inside,
        } if inputs.contains(InputSources::TOUCH) => {
            let edge = nearest_edge(position, target_bounds).invert();
            let direction = if inside {
                Direction::In
            } else {
                Direction::Out
            };
            Some((edge, direction))
        }
        InputEvent::Focus if inputs.contains(InputSources::FOCUS) => {
            Some((config.focus_enter, Direction::In))
        }
        InputEvent::Blur if inputs.contains(InputSources::FOCUS) => {
            Some((config.focus_leave, Direction::Out))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(10.0, 10.0, 110.0, 60.0);

    #[test]
    fn mouse_uses_element_bounds() {
        let c = FillConfig::default();
        let enter = InputEvent::MouseEnter {
            position: Point::new(60.0, 10.5),
        };
        assert_eq!(request_for(&enter, &c, Some(BOUNDS)), Some((Edge::Up, Direction::In)));
        let leave = InputEvent::MouseLeave {
            position: Point::new(110.0, 30.0),
        };
        assert_eq!(
            request_for(&leave, &c, Some(BOUNDS)),
            Some((Edge::Right, Direction::Out))
        );
    }

    #[test]
    fn mouse_without_bounds_is_ignored() {
        let c = FillConfig::default();
        let enter = InputEvent::MouseEnter {
            position: Point::new(60.0, 10.5),
        };
        assert_eq!(request_for(&enter, &c, None), None);
    }

    #[test]
    fn touch_inverts_edge_and_uses_containment() {
        let c = FillConfig::default();
        let tap = |inside| InputEvent::PointerDown {
            position: Point::new(12.0, 30.0),
            kind: PointerKind::Touch,
            target_bounds: BOUNDS,
            inside,
        };
        // Nearest is left, inverted to right.
        assert_eq!(
            request_for(&tap(true), &c, Some(BOUNDS)),
            Some((Edge::Right, Direction::In))
        );
        assert_eq!(request_for(&tap(false), &c, None), Some((Edge::Right, Direction::Out)));
    }

    #[test]
    fn non_touch_pointer_down_is_ignored() {
        let c = FillConfig::default();
        for kind in [PointerKind::Mouse, PointerKind::Pen] {
            let ev = InputEvent::PointerDown {
                position: Point::new(12.0, 30.0),
                kind,
                target_bounds: BOUNDS,
                inside: true,
            };
            assert_eq!(request_for(&ev, &c, Some(BOUNDS)), None);
        }
    }

    #[test]
    fn focus_uses_configured_edges() {
        let c = FillConfig::default().with_focus_edges(Edge::Left, Edge::Right);
        assert_eq!(request_for(&InputEvent::Focus, &c, None), Some((Edge::Left, Direction::In)));
        assert_eq!(request_for(&InputEvent::Blur, &c, None), Some((Edge::Right, Direction::Out)));
    }

    #[test]
    fn disabled_sources_produce_nothing() {
        let c = FillConfig::default().with_inputs(InputSources::empty());
        let events = [
            InputEvent::MouseEnter {
                position: Point::new(60.0, 10.5),
            },
            InputEvent::MouseLeave {
                position: Point::new(60.0, 10.5),
            },
            InputEvent::PointerDown {
                position: Point::new(12.0, 30.0),
                kind: PointerKind::Touch,
                target_bounds: BOUNDS,
                inside: true,
            },
            InputEvent::Focus,
            InputEvent::Blur,
        ];
        for ev in &events {
            assert_eq!(request_for(ev, &c, Some(BOUNDS)), None, "{ev:?}");
        }
    }

    #[test]
    fn pointer_move_is_never_a_request() {
        let c = FillConfig::default();
        let ev = InputEvent::PointerMove {
            position: Point::new(60.0, 30.0),
        };
        assert_eq!(request_for(&ev, &c, Some(BOUNDS)), None);
    }
}
