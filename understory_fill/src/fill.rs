// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fill instance: configuration, state, and an animator for one element.
//!
//! ## Usage
//!
//! 1) Create a [`HoverFill`] with a [`FillConfig`] and an [`Animator`].
//! 2) Keep its bounds current with [`HoverFill::set_bounds`] (`None` while unmounted).
//! 3) Forward input with [`HoverFill::handle_event`], or drive it by hand with
//!    [`HoverFill::animate`].
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_fill::adapters::InputEvent;
//! use understory_fill::config::FillConfig;
//! use understory_fill::fill::HoverFill;
//! use understory_fill::timeline::Player;
//!
//! let mut fill = HoverFill::new(FillConfig::default(), Player::default());
//! fill.set_bounds(Some(Rect::new(0.0, 0.0, 200.0, 80.0)));
//!
//! let enter = InputEvent::MouseEnter { position: Point::new(100.0, 1.0) };
//! assert!(fill.handle_event(&enter));
//! assert!(fill.is_filled());
//! assert!(fill.animator().is_animating());
//!
//! // Entering again is redundant.
//! assert!(!fill.handle_event(&enter));
//! ```

use kurbo::Rect;

use crate::adapters::{InputEvent, request_for};
use crate::config::FillConfig;
use crate::edge::{Direction, Edge, contains_inclusive};
use crate::probe::{PendingChecks, PointerCheck};
use crate::state::{Bypass, FillMachine, Transition};
use crate::timeline::{Animator, Callback, FillTimeline, Frame};

/// Per-call options for [`HoverFill::animate`].
#[derive(Default)]
pub struct AnimateOptions {
    /// Guards to skip for this call.
    pub bypass: Bypass,
    /// Runs once the slide has finished, if it is accepted and not replaced.
    pub on_complete: Option<Callback>,
}

impl core::fmt::Debug for AnimateOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnimateOptions")
            .field("bypass", &self.bypass)
            .field("has_callback", &self.on_complete.is_some())
            .finish()
    }
}

impl AnimateOptions {
    /// Options that skip the given guards.
    pub fn bypass(bypass: Bypass) -> Self {
        Self {
            bypass,
            on_complete: None,
        }
    }

    /// Attach a completion callback.
    #[must_use]
    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(alloc::boxed::Box::new(f));
        self
    }
}

/// Directional fill effect for one element.
#[derive(Debug)]
pub struct HoverFill<A: Animator> {
    config: FillConfig,
    machine: FillMachine,
    bounds: Option<Rect>,
    checks: PendingChecks,
    animator: A,
}

impl<A: Animator> HoverFill<A> {
    /// Create an unfilled, unlocked instance with unknown bounds.
    pub fn new(config: FillConfig, animator: A) -> Self {
        Self {
            config,
            machine: FillMachine::new(),
            bounds: None,
            checks: PendingChecks::default(),
            animator,
        }
    }

    /// The configuration this instance was created with.
    pub fn config(&self) -> &FillConfig {
        &self.config
    }

    /// Element bounds in window coordinates, if mounted.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Update the element bounds; `None` marks the element as unmounted.
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
    }

    /// Suppress all transitions until [`HoverFill::unlock`].
    pub fn lock(&mut self) -> &mut Self {
        self.machine.lock();
        self
    }

    /// Resume normal behavior after [`HoverFill::lock`].
    pub fn unlock(&mut self) -> &mut Self {
        self.machine.unlock();
        self
    }

    /// Whether transitions are suppressed.
    pub fn is_locked(&self) -> bool {
        self.machine.is_locked()
    }

    /// Whether the fill currently covers the element.
    pub fn is_filled(&self) -> bool {
        self.machine.is_filled()
    }

    /// The frame to show before anything has animated.
    pub fn initial_frame(&self) -> Frame {
        Frame::resting(self.machine.is_filled())
    }

    /// The animator driving this instance.
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Mutable access to the animator, for ticking.
    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    /// Request a slide by hand.
    ///
    /// Rejected requests are silent no-ops and drop the callback uncalled.
    pub fn animate(
        &mut self,
        edge: Edge,
        direction: Direction,
        options: AnimateOptions,
    ) -> &mut Self {
        let _ = self.run(edge, direction, options);
        self
    }

    /// Feed an input event; returns `true` if it started a slide.
    ///
    /// Pointer moves resolve pending [`PointerCheck`]s instead.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        if let InputEvent::PointerMove { position } = *event {
            if !self.checks.is_empty() {
                let inside = self
                    .bounds
                    .is_some_and(|b| contains_inclusive(b, position));
                tracing::trace!(inside, "resolving pointer checks");
                self.checks.resolve(inside);
            }
            return false;
        }
        let Some((edge, direction)) = request_for(event, &self.config, self.bounds) else {
            return false;
        };
        self.run(edge, direction, AnimateOptions::default()).is_some()
    }

    /// Ask whether the pointer is over the element.
    ///
    /// The returned future resolves on the next [`InputEvent::PointerMove`]
    /// passed to [`HoverFill::handle_event`].
    pub fn check_pointer(&mut self) -> PointerCheck {
        self.checks.push()
    }

    fn run(
        &mut self,
        edge: Edge,
        direction: Direction,
        options: AnimateOptions,
    ) -> Option<Transition> {
        let transition = self.machine.request(
            edge,
            direction,
            options.bypass,
            self.config.invert_direction,
        )?;
        let timeline = FillTimeline::new(transition.preset, self.config.duration)
            .with_callback(options.on_complete);
        self.animator.play(timeline);
        Some(transition)
    }
}
