// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill state machine: decide whether a slide runs and which preset it uses.
//!
//! ## Guards
//!
//! A request `(edge, direction)` is rejected when:
//! - the machine is locked, unless [`Bypass::IGNORE_LOCK`] is set;
//! - it would not change anything (`In` while filled, `Out` while unfilled),
//!   unless [`Bypass::IGNORE_FILL_STATE`] is set.
//!
//! Guards only look at the direction and the current state, never at the edge.
//! Edge inversion is applied after they pass and only changes which preset is used.
//!
//! ```
//! use understory_fill::edge::{Direction, Edge};
//! use understory_fill::state::{Bypass, FillMachine};
//!
//! let mut m = FillMachine::new();
//! // Leaving while unfilled does nothing.
//! assert!(m.request(Edge::Up, Direction::Out, Bypass::empty(), false).is_none());
//! // Entering fills.
//! let t = m.request(Edge::Up, Direction::In, Bypass::empty(), false).unwrap();
//! assert_eq!(t.resolved_edge, Edge::Up);
//! assert!(m.is_filled());
//! ```

use crate::edge::{Direction, Edge};
use crate::preset::{Preset, preset};

bitflags::bitflags! {
    /// Guards a single request may skip.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Bypass: u8 {
        /// Run even while the machine is locked.
        const IGNORE_LOCK = 0b0000_0001;
        /// Run even if the fill is already in the requested state.
        const IGNORE_FILL_STATE = 0b0000_0010;
    }
}

impl Default for Bypass {
    fn default() -> Self {
        Self::empty()
    }
}

/// An accepted request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    /// Edge as requested.
    pub edge: Edge,
    /// Edge whose preset is used, after optional inversion.
    pub resolved_edge: Edge,
    /// Requested direction.
    pub direction: Direction,
    /// Slide geometry for `(resolved_edge, direction)`.
    pub preset: Preset,
}

/// Owned fill and lock flags for one element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FillMachine {
    filled: bool,
    locked: bool,
}

impl FillMachine {
    /// Create an unfilled, unlocked machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the fill currently covers the element.
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Whether requests are currently suppressed.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Suppress all requests that do not carry [`Bypass::IGNORE_LOCK`].
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Resume normal behavior.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Evaluate a request and, if accepted, commit the new fill state.
    ///
    /// With `invert_direction` the preset of `edge.invert()` is used instead,
    /// reversing the slide visually without affecting the guards.
    ///
    /// An accepted request flips the fill state. Without
    /// [`Bypass::IGNORE_FILL_STATE`] this always lands on filled after `In` and
    /// unfilled after `Out`; a forced request flips it regardless of direction.
    pub fn request(
        &mut self,
        edge: Edge,
        direction: Direction,
        bypass: Bypass,
        invert_direction: bool,
    ) -> Option<Transition> {
        if self.locked && !bypass.contains(Bypass::IGNORE_LOCK) {
            tracing::trace!(%edge, %direction, "fill request rejected: locked");
            return None;
        }
        if !bypass.contains(Bypass::IGNORE_FILL_STATE) {
            let redundant = match direction {
                Direction::In => self.filled,
                Direction::Out => !self.filled,
            };
            if redundant {
                tracing::trace!(
                    %edge,
                    %direction,
                    filled = self.filled,
                    "fill request rejected: already in requested state"
                );
                return None;
            }
        }

        let resolved_edge = if invert_direction { edge.invert() } else { edge };
        self.filled = !self.filled;
        tracing::trace!(%edge, %resolved_edge, %direction, "fill request accepted");
        Some(Transition {
            edge,
            resolved_edge,
            direction,
            preset: preset(resolved_edge, direction),
        })
    }
}
