// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edges, fill directions, and nearest-edge detection.
//!
//! ## Overview
//!
//! [`nearest_edge`] answers "which side of this box did the pointer come from?".
//! It measures the distance from the pointer to the line through each side of the
//! rectangle and picks the smallest one.
//!
//! Because each side is treated as an infinite line, a pointer well outside a
//! corner can be attributed to a side it never crossed. For enter/leave events
//! the pointer sits on or next to the boundary, where this is accurate.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_fill::edge::{Edge, nearest_edge};
//!
//! let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
//! assert_eq!(nearest_edge(Point::new(50.0, 2.0), rect), Edge::Up);
//! assert_eq!(nearest_edge(Point::new(99.0, 40.0), rect), Edge::Right);
//! assert_eq!(Edge::Up.invert(), Edge::Down);
//! ```

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect};

/// One of the four sides of a box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Edge {
    /// The top side (smaller `y`).
    Up,
    /// The bottom side (larger `y`).
    Down,
    /// The left side (smaller `x`).
    Left,
    /// The right side (larger `x`).
    Right,
}

impl Edge {
    /// All edges, in tie-break order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The opposite edge. Applying this twice yields the original edge.
    #[must_use]
    pub const fn invert(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Lowercase name, as used in configuration strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Distance from `pt` to the line through this side of `rect`.
    pub fn distance(self, pt: Point, rect: Rect) -> f64 {
        match self {
            Self::Up => abs_diff(rect.y0, pt.y),
            Self::Down => abs_diff(rect.y1, pt.y),
            Self::Left => abs_diff(rect.x0, pt.x),
            Self::Right => abs_diff(rect.x1, pt.x),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an [`Edge`] from a string fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown edge name (expected one of `up`, `down`, `left`, `right`)")]
pub struct ParseEdgeError;

impl FromStr for Edge {
    type Err = ParseEdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ParseEdgeError),
        }
    }
}

/// Whether the fill slides in (covering the content) or out (uncovering it).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Slide the fill in; the element becomes filled.
    In,
    /// Slide the fill out; the element becomes unfilled.
    Out,
}

impl Direction {
    /// The other direction.
    #[must_use]
    pub const fn invert(self) -> Self {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
        }
    }

    /// Lowercase name, as used in configuration strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Direction`] from a string fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction name (expected `in` or `out`)")]
pub struct ParseDirectionError;

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            _ => Err(ParseDirectionError),
        }
    }
}

/// Return the side of `rect` whose line is closest to `pt`.
///
/// Ties resolve in the order of [`Edge::ALL`] (up, down, left, right).
/// A NaN coordinate compares as never closer, so the result is [`Edge::Up`].
pub fn nearest_edge(pt: Point, rect: Rect) -> Edge {
    let mut best = Edge::Up;
    let mut best_distance = Edge::Up.distance(pt, rect);
    for edge in &Edge::ALL[1..] {
        let d = edge.distance(pt, rect);
        // Strict comparison keeps the earlier candidate on ties.
        if d < best_distance {
            best = *edge;
            best_distance = d;
        }
    }
    best
}

/// Closed-rectangle containment: points on any boundary count as inside.
///
/// Unlike [`Rect::contains`], the right and bottom sides are inclusive too.
pub fn contains_inclusive(rect: Rect, pt: Point) -> bool {
    rect.x0 <= pt.x && pt.x <= rect.x1 && rect.y0 <= pt.y && pt.y <= rect.y1
}

#[inline]
fn abs_diff(a: f64, b: f64) -> f64 {
    if a > b { a - b } else { b - a }
}
