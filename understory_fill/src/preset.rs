// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG geometry for the fill overlay and the eight slide presets.
//!
//! ## Coordinate model
//!
//! The overlay is a 100×100 user-space square stretched over the element.
//! Moving the [`ViewBox`] origin by a little more than one square (101 units)
//! hides the fill past one edge; [`ViewBox::CENTER`] shows it covering the element.
//!
//! The fill outline is a [`FillShape`]: four quadratic segments between the corners
//! of the square, one control point per side. While sliding, the trailing side
//! bulges outwards when entering and caves inwards when leaving, which gives the
//! motion its "liquid" look. Timelines always settle back to [`FillShape::SQUARE`].
//!
//! ## Presets
//!
//! [`preset`] is a lookup table keyed by `(Edge, Direction)`:
//!
//! ```
//! use understory_fill::edge::{Direction, Edge};
//! use understory_fill::preset::{ViewBox, preset};
//!
//! let p = preset(Edge::Up, Direction::In);
//! assert_eq!(p.view_box_from, ViewBox::hidden(Edge::Up));
//! assert_eq!(p.view_box_to, ViewBox::CENTER);
//! assert_eq!(
//!     p.shape.to_string(),
//!     "M 0 0 Q 50 0 100 0 Q 100 50 100 100 Q 50 150 0 100 Q 0 50 0 0",
//! );
//! ```

use core::fmt;

use kurbo::{BezPath, Point};

use crate::edge::{Direction, Edge};

/// Side length of the overlay's user-space square.
pub const SIZE: f64 = 100.0;

/// Offset that moves the viewBox just past one full square.
const HIDDEN_OFFSET: f64 = 101.0;

/// How far a convex side pushes its control point outwards.
const BULGE: f64 = 50.0;

/// The origin of the overlay's `viewBox`; the size is always [`SIZE`]².
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewBox {
    /// User-space origin of the visible window.
    pub origin: Point,
}

impl ViewBox {
    /// The fill covers the element.
    pub const CENTER: Self = Self::new(0.0, 0.0);

    /// Create a viewBox with the given origin.
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            origin: Point::new(x, y),
        }
    }

    /// The viewBox that hides the fill past `edge`.
    ///
    /// A fill entering from `edge` starts here; a fill leaving towards `edge` ends here.
    pub const fn hidden(edge: Edge) -> Self {
        match edge {
            Edge::Up => Self::new(0.0, HIDDEN_OFFSET),
            Edge::Down => Self::new(0.0, -HIDDEN_OFFSET),
            Edge::Left => Self::new(HIDDEN_OFFSET, 0.0),
            Edge::Right => Self::new(-HIDDEN_OFFSET, 0.0),
        }
    }

    /// Linear interpolation between two viewBoxes.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            origin: self.origin.lerp(other.origin, t),
        }
    }
}

impl fmt::Display for ViewBox {
    /// Formats as the value of an SVG `viewBox` attribute, e.g. `0 101 100 100`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.origin.x, self.origin.y, SIZE, SIZE)
    }
}

/// How a single side of the outline is deformed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Bulge {
    /// The side bows outwards, away from the centre.
    Convex,
    /// The side bows inwards, towards the centre.
    Concave,
}

/// Closed outline of the fill: corners fixed, one quadratic control per side.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FillShape {
    /// Control points for the top, right, bottom, and left sides, in path order.
    pub controls: [Point; 4],
}

impl FillShape {
    /// The undistorted square; every control sits at its side's midpoint.
    pub const SQUARE: Self = Self {
        controls: [
            Point::new(SIZE / 2.0, 0.0),
            Point::new(SIZE, SIZE / 2.0),
            Point::new(SIZE / 2.0, SIZE),
            Point::new(0.0, SIZE / 2.0),
        ],
    };

    /// Corners in path order; segment `i` ends at `CORNERS[i + 1]`.
    const CORNERS: [Point; 5] = [
        Point::new(0.0, 0.0),
        Point::new(SIZE, 0.0),
        Point::new(SIZE, SIZE),
        Point::new(0.0, SIZE),
        Point::new(0.0, 0.0),
    ];

    /// A square with one side deformed.
    pub const fn bulged(side: Edge, bulge: Bulge) -> Self {
        let mut shape = Self::SQUARE;
        let i = side_index(side);
        let c = shape.controls[i];
        shape.controls[i] = match bulge {
            Bulge::Concave => Point::new(SIZE / 2.0, SIZE / 2.0),
            Bulge::Convex => match side {
                Edge::Up => Point::new(c.x, c.y - BULGE),
                Edge::Down => Point::new(c.x, c.y + BULGE),
                Edge::Left => Point::new(c.x - BULGE, c.y),
                Edge::Right => Point::new(c.x + BULGE, c.y),
            },
        };
        shape
    }

    /// Pointwise linear interpolation between two outlines.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let mut controls = self.controls;
        for (c, o) in controls.iter_mut().zip(other.controls) {
            *c = c.lerp(o, t);
        }
        Self { controls }
    }

    /// The outline as a Kurbo path in overlay user space.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(Self::CORNERS[0]);
        for (i, ctrl) in self.controls.iter().enumerate() {
            path.quad_to(*ctrl, Self::CORNERS[i + 1]);
        }
        path
    }
}

impl Default for FillShape {
    fn default() -> Self {
        Self::SQUARE
    }
}

impl fmt::Display for FillShape {
    /// Formats as SVG path data: `M 0 0 Q cx cy 100 0 Q ...`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = Self::CORNERS[0];
        write!(f, "M {} {}", start.x, start.y)?;
        for (i, ctrl) in self.controls.iter().enumerate() {
            let end = Self::CORNERS[i + 1];
            write!(f, " Q {} {} {} {}", ctrl.x, ctrl.y, end.x, end.y)?;
        }
        Ok(())
    }
}

const fn side_index(side: Edge) -> usize {
    match side {
        Edge::Up => 0,
        Edge::Right => 1,
        Edge::Down => 2,
        Edge::Left => 3,
    }
}

/// One canned slide: the viewBox travel and the shape the path morphs through.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preset {
    /// ViewBox at the start of the slide.
    pub view_box_from: ViewBox,
    /// ViewBox at the end of the slide.
    pub view_box_to: ViewBox,
    /// Distorted outline shown mid-slide before settling back to a square.
    pub shape: FillShape,
}

/// Look up the slide preset for `edge` and `direction`.
///
/// Entering from an edge moves the viewBox from [`ViewBox::hidden`] to
/// [`ViewBox::CENTER`]; leaving towards it moves the other way. In both cases the
/// side opposite `edge` (the trailing side) is deformed: convex on the way in,
/// concave on the way out.
pub fn preset(edge: Edge, direction: Direction) -> Preset {
    PRESETS[table_index(edge, direction)]
}

fn table_index(edge: Edge, direction: Direction) -> usize {
    let e = match edge {
        Edge::Up => 0,
        Edge::Down => 1,
        Edge::Left => 2,
        Edge::Right => 3,
    };
    let d = match direction {
        Direction::In => 0,
        Direction::Out => 1,
    };
    e * 2 + d
}

const fn entry(edge: Edge, direction: Direction) -> Preset {
    // Only the side opposite the edge deforms.
    let trailing = edge.invert();
    match direction {
        Direction::In => Preset {
            view_box_from: ViewBox::hidden(edge),
            view_box_to: ViewBox::CENTER,
            shape: FillShape::bulged(trailing, Bulge::Convex),
        },
        Direction::Out => Preset {
            view_box_from: ViewBox::CENTER,
            view_box_to: ViewBox::hidden(edge),
            shape: FillShape::bulged(trailing, Bulge::Concave),
        },
    }
}

/// Indexed by [`table_index`].
const PRESETS: [Preset; 8] = [
    entry(Edge::Up, Direction::In),
    entry(Edge::Up, Direction::Out),
    entry(Edge::Down, Direction::In),
    entry(Edge::Down, Direction::Out),
    entry(Edge::Left, Direction::In),
    entry(Edge::Left, Direction::Out),
    entry(Edge::Right, Direction::In),
    entry(Edge::Right, Direction::Out),
];

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn square_path_data() {
        assert_eq!(
            FillShape::SQUARE.to_string(),
            "M 0 0 Q 50 0 100 0 Q 100 50 100 100 Q 50 100 0 100 Q 0 50 0 0"
        );
    }

    #[test]
    fn view_box_strings() {
        assert_eq!(ViewBox::CENTER.to_string(), "0 0 100 100");
        assert_eq!(ViewBox::hidden(Edge::Up).to_string(), "0 101 100 100");
        assert_eq!(ViewBox::hidden(Edge::Down).to_string(), "0 -101 100 100");
        assert_eq!(ViewBox::hidden(Edge::Left).to_string(), "101 0 100 100");
        assert_eq!(ViewBox::hidden(Edge::Right).to_string(), "-101 0 100 100");
    }

    #[test]
    fn all_presets_match_expected_strings() {
        // (edge, direction, viewBox from, viewBox to, path)
        let expected = [
            (
                Edge::Up,
                Direction::In,
                "0 101 100 100",
                "0 0 100 100",
                "M 0 0 Q 50 0 100 0 Q 100 50 100 100 Q 50 150 0 100 Q 0 50 0 0",
            ),
            (
                Edge::Up,
                Direction::Out,
                "0 0 100 100",
                "0 101 100 100",
                "M 0 0 Q 50 0 100 0 Q 100 50 100 100 Q 50 50 0 100 Q 0 50 0 0",
            ),
            (
                Edge::Down,
                Direction::In,
                "0 -101 100 100",
                "0 0 100 100",
                "M 0 0 Q 50 -50 100 0 Q 100 50 100 100 Q 50 100 0 100 Q 0 50 0 0",
            ),
            (
                Edge::Down,
                Direction::Out,
                "0 0 100 100",
                "0 -101 100 100",
                "M 0 0 Q 50 50 100 0 Q 100 50 100 100 Q 50 100 0 100 Q 0 50 0 0",
            ),
            (
                Edge::Left,
                Direction::In,
                "101 0 100 100",
                "0 0 100 100",
                "M 0 0 Q 50 0 100 0 Q 150 50 100 100 Q 50 100 0 100 Q 0 50 0 0",
            ),
            (
                Edge::Left,
                Direction::Out,
                "0 0 100 100",
                "101 0 100 100",
                "M 0 0 Q 50 0 100 0 Q 50 50 100 100 Q 50 100 0 100 Q 0 50 0 0",
            ),
            (
                Edge::Right,
                Direction::In,
                "-101 0 100 100",
                "0 0 100 100",
                "M 0 0 Q 50 0 100 0 Q 100 50 100 100 Q 50 100 0 100 Q -50 50 0 0",
            ),
            (
                Edge::Right,
                Direction::Out,
                "0 0 100 100",
                "-101 0 100 100",
                "M 0 0 Q 50 0 100 0 Q 100 50 100 100 Q 50 100 0 100 Q 50 50 0 0",
            ),
        ];
        for (edge, dir, from, to, path) in expected {
            let p = preset(edge, dir);
            assert_eq!(p.view_box_from.to_string(), from, "{edge} {dir} from");
            assert_eq!(p.view_box_to.to_string(), to, "{edge} {dir} to");
            assert_eq!(p.shape.to_string(), path, "{edge} {dir} path");
        }
    }

    #[test]
    fn in_and_out_are_symmetric() {
        for edge in Edge::ALL {
            let i = preset(edge, Direction::In);
            let o = preset(edge, Direction::Out);
            assert_eq!(i.view_box_from, o.view_box_to, "{edge}");
            assert_eq!(i.view_box_to, o.view_box_from, "{edge}");
            assert_eq!(i.shape, FillShape::bulged(edge.invert(), Bulge::Convex));
            assert_eq!(o.shape, FillShape::bulged(edge.invert(), Bulge::Concave));
        }
    }

    #[test]
    fn bez_path_has_four_quads() {
        let path = FillShape::SQUARE.to_bez_path();
        // One move plus four quadratic segments.
        assert_eq!(path.elements().len(), 5);
        assert_eq!(path.segments().count(), 4);
    }

    #[test]
    fn shape_lerp_endpoints_and_midpoint() {
        let convex = FillShape::bulged(Edge::Down, Bulge::Convex);
        assert_eq!(FillShape::SQUARE.lerp(&convex, 0.0), FillShape::SQUARE);
        assert_eq!(FillShape::SQUARE.lerp(&convex, 1.0), convex);
        let mid = FillShape::SQUARE.lerp(&convex, 0.5);
        assert_eq!(mid.controls[2], Point::new(50.0, 125.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn preset_values_implement_serde() {
        fn serde_value<T: serde::Serialize + for<'de> serde::Deserialize<'de>>() {}
        serde_value::<ViewBox>();
        serde_value::<Bulge>();
        serde_value::<FillShape>();
        serde_value::<Preset>();
        serde_value::<crate::timeline::Easing>();
        serde_value::<crate::timeline::Frame>();
        serde_value::<crate::state::Bypass>();
    }

    #[test]
    fn view_box_lerp() {
        let a = ViewBox::hidden(Edge::Left);
        let b = ViewBox::CENTER;
        assert_eq!(a.lerp(b, 0.5), ViewBox::new(50.5, 0.0));
    }
}
