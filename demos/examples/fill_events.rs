// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving the fill from input events inside a listener scope.
//!
//! A toy event source stands in for the host's event system. Events are fed
//! through `HoverFill::handle_event`, and the scope detaches every listener
//! when the "component" unmounts.
//!
//! Run:
//! - `cargo run -p understory_demos --example fill_events`

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, Waker};

use kurbo::{Point, Rect};
use understory_fill::adapters::{InputEvent, PointerKind};
use understory_fill::config::FillConfig;
use understory_fill::fill::HoverFill;
use understory_fill::listeners::{EventKind, EventSource, ListenerScope, ListenerTarget};
use understory_fill::timeline::Player;

#[derive(Debug, Default)]
struct ToySource {
    next: u32,
    live: Vec<(u32, ListenerTarget, EventKind)>,
}

impl EventSource for ToySource {
    type Handle = u32;

    fn listen(&mut self, target: ListenerTarget, kind: EventKind) -> u32 {
        self.next += 1;
        self.live.push((self.next, target, kind));
        println!("  + listen #{} {target:?} {kind:?}", self.next);
        self.next
    }

    fn unlisten(&mut self, handle: u32) {
        self.live.retain(|(id, ..)| *id != handle);
        println!("  - unlisten #{handle}");
    }
}

impl ToySource {
    fn is_listening(&self, target: ListenerTarget, kind: EventKind) -> bool {
        self.live.iter().any(|&(_, t, k)| t == target && k == kind)
    }
}

fn main() {
    let bounds = Rect::new(20.0, 20.0, 220.0, 80.0);
    let config = FillConfig::default();

    println!("== Mount ==");
    let scope = ListenerScope::activate(ToySource::default(), config.inputs);
    let mut fill = HoverFill::new(config, Player::default());
    fill.set_bounds(Some(bounds));

    let events = [
        // Mouse comes in through the right side.
        InputEvent::MouseEnter {
            position: Point::new(219.0, 50.0),
        },
        // Redundant: already filled.
        InputEvent::Focus,
        // Leaves through the bottom.
        InputEvent::MouseLeave {
            position: Point::new(120.0, 80.5),
        },
        // A tap inside the element, near its top.
        InputEvent::PointerDown {
            position: Point::new(100.0, 22.0),
            kind: PointerKind::Touch,
            target_bounds: bounds,
            inside: true,
        },
    ];

    println!("== Events ==");
    for event in &events {
        let started = fill.handle_event(event);
        println!("  {event:?} -> started={started} filled={}", fill.is_filled());
        // Let each slide finish before the next event.
        while fill.animator().is_animating() {
            fill.animator_mut().tick(1.0 / 60.0);
        }
    }

    println!("== Pointer check ==");
    let mut check = fill.check_pointer();
    let mut cx = Context::from_waker(Waker::noop());
    assert_eq!(Pin::new(&mut check).poll(&mut cx), Poll::Pending);
    // The scope keeps a window pointer-move listener; deliver the move through it.
    if let Some(source) = scope.source()
        && source.is_listening(ListenerTarget::Window, EventKind::PointerMove)
    {
        fill.handle_event(&InputEvent::PointerMove {
            position: Point::new(50.0, 50.0),
        });
    }
    println!("  pointer inside: {:?}", check.try_result());

    println!("== Unmount ==");
    fill.set_bounds(None);
    let source = scope.release();
    assert!(source.live.is_empty());
}
