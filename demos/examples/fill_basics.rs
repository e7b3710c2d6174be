// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill basics: manual slides, the lock, and the SVG attributes per frame.
//!
//! Run:
//! - `cargo run -p understory_demos --example fill_basics`

use understory_fill::config::FillConfig;
use understory_fill::edge::{Direction, Edge};
use understory_fill::fill::{AnimateOptions, HoverFill};
use understory_fill::state::Bypass;
use understory_fill::timeline::{Frame, Player};

fn print_frame(label: &str, frame: Frame) {
    println!("  {label:>6}: viewBox=\"{}\" d=\"{}\"", frame.view_box, frame.shape);
}

fn main() {
    let config = FillConfig::default().with_duration(0.4);
    let mut fill = HoverFill::new(config, Player::new(Frame::resting(false)));
    print_frame("start", fill.initial_frame());

    // Leaving before anything filled is ignored.
    fill.animate(Edge::Down, Direction::Out, AnimateOptions::default());
    assert!(!fill.animator().is_animating());

    println!("== Slide in from the left ==");
    fill.animate(
        Edge::Left,
        Direction::In,
        AnimateOptions::default().on_complete(|| println!("  (slide in complete)")),
    );
    let mut t = 0.0;
    while fill.animator().is_animating() {
        let frame = fill.animator_mut().tick(0.1);
        t += 0.1;
        print_frame(&format!("{t:.1}s"), frame);
    }
    assert!(fill.is_filled());

    println!("== Locked: slide out is suppressed ==");
    fill.lock()
        .animate(Edge::Up, Direction::Out, AnimateOptions::default());
    assert!(fill.is_filled());

    println!("== Lock bypass: slide out through the top ==");
    fill.animate(
        Edge::Up,
        Direction::Out,
        AnimateOptions::bypass(Bypass::IGNORE_LOCK),
    );
    while fill.animator().is_animating() {
        fill.animator_mut().tick(1.0 / 60.0);
    }
    print_frame("end", fill.animator().frame());
    assert!(!fill.is_filled());
    assert_eq!(fill.animator().frame(), Frame::resting(false));
}
