// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element configuration of the fill effect.

use alloc::string::String;

use crate::edge::Edge;

bitflags::bitflags! {
    /// Input sources that may trigger the fill.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct InputSources: u8 {
        /// Mouse enter/leave on the element.
        const MOUSE = 0b0000_0001;
        /// Touch taps anywhere in the window.
        const TOUCH = 0b0000_0010;
        /// Focus/blur of the element.
        const FOCUS = 0b0000_0100;
    }
}

impl Default for InputSources {
    fn default() -> Self {
        Self::all()
    }
}

/// Stacking order of the overlay relative to the element's content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ZIndex {
    /// Leave stacking to the host (`z-index: auto`).
    Auto,
    /// Explicit z-index.
    Value(i32),
}

/// Configuration of one fill instance.
///
/// The defaults give a white, fully opaque, color-inverting fill that reacts to
/// every input source, enters from the top on focus and leaves through the bottom on blur.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FillConfig {
    /// Fill color, as a CSS color string.
    pub color: String,
    /// Fill opacity in `[0, 1]`.
    pub opacity: f32,
    /// Slide duration in seconds.
    pub duration: f64,
    /// Blend the fill so it inverts the colors beneath it.
    pub invert_colors: bool,
    /// Which inputs trigger the fill.
    pub inputs: InputSources,
    /// Edge the fill enters from on focus.
    pub focus_enter: Edge,
    /// Edge the fill leaves through on blur.
    pub focus_leave: Edge,
    /// Slide from the opposite edge of the one detected.
    pub invert_direction: bool,
    /// Explicit stacking order; see [`FillConfig::z_index`] for the default.
    pub z: Option<ZIndex>,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            color: String::from("white"),
            opacity: 1.0,
            duration: 0.5,
            invert_colors: true,
            inputs: InputSources::default(),
            focus_enter: Edge::Up,
            focus_leave: Edge::Down,
            invert_direction: false,
            z: None,
        }
    }
}

impl FillConfig {
    /// Set the fill color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the fill opacity, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the slide duration in seconds.
    #[must_use]
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    /// Enable or disable color inversion.
    #[must_use]
    pub fn with_invert_colors(mut self, invert: bool) -> Self {
        self.invert_colors = invert;
        self
    }

    /// Choose which inputs trigger the fill.
    #[must_use]
    pub fn with_inputs(mut self, inputs: InputSources) -> Self {
        self.inputs = inputs;
        self
    }

    /// Set the focus enter and blur leave edges.
    #[must_use]
    pub fn with_focus_edges(mut self, enter: Edge, leave: Edge) -> Self {
        self.focus_enter = enter;
        self.focus_leave = leave;
        self
    }

    /// Slide from the opposite edge of the one detected.
    #[must_use]
    pub fn with_invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Set an explicit stacking order.
    #[must_use]
    pub fn with_z(mut self, z: ZIndex) -> Self {
        self.z = Some(z);
        self
    }

    /// Effective stacking order.
    ///
    /// Without an explicit value, an inverting fill stacks with the content
    /// (`Auto`) and a plain fill sits behind it (`-1`).
    pub fn z_index(&self) -> ZIndex {
        self.z.unwrap_or(if self.invert_colors {
            ZIndex::Auto
        } else {
            ZIndex::Value(-1)
        })
    }
}
