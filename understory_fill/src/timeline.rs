// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill timelines, the [`Animator`] seam, and a small built-in [`Player`].
//!
//! ## Schedule
//!
//! A [`FillTimeline`] built from a [`Preset`] with duration `D` runs three tweens:
//!
//! - the viewBox jumps to `view_box_from` and tweens to `view_box_to` over `[0, D]`;
//! - the path morphs from its start shape to the preset shape over `[0, D]`;
//! - the path morphs back to [`FillShape::SQUARE`] over `[0.3·D, 1.3·D]`.
//!
//! The settle tween starts 70% of a duration before the first pair ends, so the
//! outline is never left distorted. Once it starts it owns the path: it begins
//! from wherever the first morph had got to and overrides it from then on.
//!
//! ## Animators
//!
//! Hosts with their own tweening engine implement [`Animator`] and translate the
//! timeline into engine calls. Hosts without one can use [`Player`], which samples
//! the schedule on every [`Player::tick`].
//!
//! ```
//! use understory_fill::edge::{Direction, Edge};
//! use understory_fill::preset::{FillShape, ViewBox, preset};
//! use understory_fill::timeline::{Animator, FillTimeline, Frame, Player};
//!
//! let mut player = Player::new(Frame::resting(false));
//! player.play(FillTimeline::new(preset(Edge::Left, Direction::In), 0.5));
//! while player.is_animating() {
//!     player.tick(1.0 / 60.0);
//! }
//! assert_eq!(player.frame().view_box, ViewBox::CENTER);
//! assert_eq!(player.frame().shape, FillShape::SQUARE);
//! ```

use alloc::boxed::Box;

use crate::edge::Edge;
use crate::preset::{FillShape, Preset, ViewBox};

/// Completion callback carried by a timeline.
pub type Callback = Box<dyn FnOnce()>;

/// Fraction of the duration by which the settle tween overlaps the slide.
const SETTLE_OVERLAP: f64 = 0.7;

/// Easing curve applied to every tween of a timeline.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Quadratic ease-out, `1 − (1 − t)²`: fast start, slow finish.
    #[default]
    Power2Out,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress. Input is clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power2Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
        }
    }
}

/// One sampled state of the overlay.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Current `viewBox` of the overlay.
    pub view_box: ViewBox,
    /// Current outline of the fill path.
    pub shape: FillShape,
}

impl Frame {
    /// The frame shown when nothing is animating.
    ///
    /// Filled elements show the fill centred; unfilled ones keep it hidden past the top edge.
    pub const fn resting(filled: bool) -> Self {
        Self {
            view_box: if filled {
                ViewBox::CENTER
            } else {
                ViewBox::hidden(Edge::Up)
            },
            shape: FillShape::SQUARE,
        }
    }
}

/// A scheduled slide: preset, timing, and an optional completion callback.
pub struct FillTimeline {
    /// Slide geometry.
    pub preset: Preset,
    /// Duration of the slide tween in seconds; the whole timeline lasts 1.3× this.
    pub duration: f64,
    /// Easing shared by all tweens.
    pub easing: Easing,
    /// Outline the path morphs from; normally whatever is currently shown.
    pub start_shape: FillShape,
    on_complete: Option<Callback>,
}

impl core::fmt::Debug for FillTimeline {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FillTimeline")
            .field("preset", &self.preset)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("start_shape", &self.start_shape)
            .field("has_callback", &self.on_complete.is_some())
            .finish()
    }
}

impl FillTimeline {
    /// Create a timeline for `preset` lasting `duration` seconds per tween.
    ///
    /// Negative or NaN durations are treated as zero.
    pub fn new(preset: Preset, duration: f64) -> Self {
        Self {
            preset,
            duration: if duration > 0.0 { duration } else { 0.0 },
            easing: Easing::default(),
            start_shape: FillShape::SQUARE,
            on_complete: None,
        }
    }

    /// Replace the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Replace the outline the path morphs from.
    #[must_use]
    pub fn with_start_shape(mut self, shape: FillShape) -> Self {
        self.start_shape = shape;
        self
    }

    /// Attach a callback that runs once the whole timeline has finished.
    #[must_use]
    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    pub(crate) fn with_callback(mut self, callback: Option<Callback>) -> Self {
        self.on_complete = callback;
        self
    }

    /// Whether a completion callback is attached.
    pub fn has_callback(&self) -> bool {
        self.on_complete.is_some()
    }

    /// Detach the completion callback, leaving none behind.
    ///
    /// Animators call this when the timeline completes and invoke the result.
    pub fn take_callback(&mut self) -> Option<Callback> {
        self.on_complete.take()
    }

    /// Time at which the settle tween starts.
    pub fn settle_start(&self) -> f64 {
        self.duration * (1.0 - SETTLE_OVERLAP)
    }

    /// Total length of the timeline in seconds.
    pub fn total_duration(&self) -> f64 {
        self.settle_start() + self.duration
    }

    /// The frame the timeline rests on once complete.
    pub fn end_frame(&self) -> Frame {
        Frame {
            view_box: self.preset.view_box_to,
            shape: FillShape::SQUARE,
        }
    }

    /// Sample the overlay state `t` seconds into the timeline.
    pub fn sample(&self, t: f64) -> Frame {
        if t >= self.total_duration() {
            return self.end_frame();
        }
        let t = t.max(0.0);
        let view_box = self
            .preset
            .view_box_from
            .lerp(self.preset.view_box_to, self.progress(t));
        let settle = self.settle_start();
        let shape = if t < settle {
            self.start_shape.lerp(&self.preset.shape, self.progress(t))
        } else {
            self.start_shape
                .lerp(&self.preset.shape, self.progress(settle))
                .lerp(&FillShape::SQUARE, self.progress(t - settle))
        };
        Frame { view_box, shape }
    }

    fn progress(&self, local: f64) -> f64 {
        if self.duration > 0.0 {
            self.easing.apply(local / self.duration)
        } else {
            1.0
        }
    }
}

/// Something that runs fill timelines, typically an adapter over a tweening engine.
///
/// Implementations own completion: once the timeline has run to its end they
/// must call the callback from [`FillTimeline::take_callback`] exactly once.
pub trait Animator {
    /// Start `timeline`, replacing whatever the animator was running.
    fn play(&mut self, timeline: FillTimeline);
}

#[derive(Debug)]
struct Active {
    timeline: FillTimeline,
    elapsed: f64,
}

/// Built-in animator that samples one active timeline at a time.
///
/// Starting a new timeline cancels the running one: its callback is dropped
/// without being called, and the new path morph starts from the outline
/// currently on screen so there is no visual jump in the shape.
#[derive(Debug)]
pub struct Player {
    active: Option<Active>,
    frame: Frame,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Frame::resting(false))
    }
}

impl Player {
    /// Create an idle player showing `initial`.
    pub fn new(initial: Frame) -> Self {
        Self {
            active: None,
            frame: initial,
        }
    }

    /// The most recently sampled frame.
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Whether a timeline is in flight.
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Seconds elapsed in the active timeline, if any.
    pub fn elapsed(&self) -> Option<f64> {
        self.active.as_ref().map(|a| a.elapsed)
    }

    /// Advance the active timeline by `dt` seconds and return the new frame.
    ///
    /// When the timeline reaches its end it is retired and its callback runs.
    /// A zero-length timeline completes on the first tick.
    pub fn tick(&mut self, dt: f64) -> Frame {
        let Some(active) = self.active.as_mut() else {
            return self.frame;
        };
        if dt > 0.0 {
            active.elapsed += dt;
        }
        self.frame = active.timeline.sample(active.elapsed);
        let done = active.elapsed >= active.timeline.total_duration();

        if done
            && let Some(mut finished) = self.active.take()
        {
            tracing::trace!(elapsed = finished.elapsed, "fill timeline complete");
            if let Some(callback) = finished.timeline.take_callback() {
                callback();
            }
        }
        self.frame
    }

    /// Stop the active timeline where it is, dropping its callback.
    ///
    /// Returns `true` if a timeline was running.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }
}

impl Animator for Player {
    fn play(&mut self, timeline: FillTimeline) {
        if let Some(prev) = self.active.take() {
            tracing::debug!(
                elapsed = prev.elapsed,
                "replacing in-flight fill timeline"
            );
        }
        let timeline = timeline.with_start_shape(self.frame.shape);
        self.frame = timeline.sample(0.0);
        self.active = Some(Active {
            timeline,
            elapsed: 0.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Direction;
    use crate::preset::preset;
    use alloc::rc::Rc;
    use core::cell::Cell;

    fn approx(a: f64, b: f64) -> bool {
        let d = a - b;
        d < 1e-9 && d > -1e-9
    }

    #[test]
    fn easing_endpoints() {
        for e in [Easing::Linear, Easing::Power2Out] {
            assert_eq!(e.apply(0.0), 0.0);
            assert_eq!(e.apply(1.0), 1.0);
            assert_eq!(e.apply(2.0), 1.0);
            assert_eq!(e.apply(-1.0), 0.0);
        }
        assert!(approx(Easing::Power2Out.apply(0.5), 0.75));
        assert!(approx(Easing::Linear.apply(0.25), 0.25));
    }

    #[test]
    fn schedule_lengths() {
        let tl = FillTimeline::new(preset(Edge::Up, Direction::In), 1.0);
        assert!(approx(tl.settle_start(), 0.3));
        assert!(approx(tl.total_duration(), 1.3));
    }

    #[test]
    fn sample_start_and_end() {
        let p = preset(Edge::Down, Direction::Out);
        let tl = FillTimeline::new(p, 0.5);
        let first = tl.sample(0.0);
        assert_eq!(first.view_box, p.view_box_from);
        assert_eq!(first.shape, FillShape::SQUARE);

        let last = tl.sample(tl.total_duration());
        assert_eq!(last, tl.end_frame());
        assert_eq!(last.view_box, p.view_box_to);
        assert_eq!(last.shape, FillShape::SQUARE);
    }

    #[test]
    fn settle_takes_over_from_slide_morph() {
        let p = preset(Edge::Up, Direction::In);
        let tl = FillTimeline::new(p, 1.0).with_easing(Easing::Linear);
        // Just before the settle starts the slide morph is 30% of the way.
        let before = tl.sample(0.3 - 1e-12);
        assert!(approx(before.shape.controls[2].y, 100.0 + 50.0 * 0.3));
        // At the settle start both agree.
        let at = tl.sample(0.3);
        assert!(approx(at.shape.controls[2].y, 115.0));
        // Halfway through the settle, halfway back to the square.
        let mid = tl.sample(0.8);
        assert!(approx(mid.shape.controls[2].y, 107.5));
        // The viewBox has finished by D even though the path has not.
        assert_eq!(tl.sample(1.0).view_box, ViewBox::CENTER);
    }

    #[test]
    fn zero_duration_is_immediately_final() {
        let tl = FillTimeline::new(preset(Edge::Left, Direction::In), 0.0);
        assert_eq!(tl.total_duration(), 0.0);
        assert_eq!(tl.sample(0.0), tl.end_frame());
        let neg = FillTimeline::new(preset(Edge::Left, Direction::In), -3.0);
        assert_eq!(neg.duration, 0.0);
    }

    #[test]
    fn player_runs_to_completion_and_fires_once() {
        let fired = Rc::new(Cell::new(0_u32));
        let f = fired.clone();
        let mut player = Player::default();
        player.play(
            FillTimeline::new(preset(Edge::Right, Direction::In), 0.5)
                .on_complete(move || f.set(f.get() + 1)),
        );
        assert!(player.is_animating());
        assert_eq!(player.frame().view_box, ViewBox::hidden(Edge::Right));

        player.tick(0.3);
        assert!(player.is_animating());
        assert_eq!(fired.get(), 0);

        player.tick(0.5);
        assert!(!player.is_animating());
        assert_eq!(fired.get(), 1);
        assert_eq!(player.frame(), Frame::resting(true));

        // Further ticks are idle and do not re-fire.
        player.tick(1.0);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn player_replaces_and_drops_callback() {
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));
        let (a, b) = (first.clone(), second.clone());

        let mut player = Player::default();
        player.play(
            FillTimeline::new(preset(Edge::Up, Direction::In), 1.0).on_complete(move || a.set(true)),
        );
        player.tick(0.2);
        let mid_shape = player.frame().shape;
        assert_ne!(mid_shape, FillShape::SQUARE);

        player.play(
            FillTimeline::new(preset(Edge::Up, Direction::Out), 1.0)
                .on_complete(move || b.set(true)),
        );
        // New morph continues from the shape on screen.
        assert_eq!(player.frame().shape, mid_shape);
        assert_eq!(player.elapsed(), Some(0.0));

        player.tick(2.0);
        assert!(!first.get(), "replaced timeline must not complete");
        assert!(second.get());
        assert_eq!(player.frame(), Frame::resting(false));
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let fired = Rc::new(Cell::new(false));
        let f = fired.clone();
        let mut player = Player::default();
        player.play(
            FillTimeline::new(preset(Edge::Down, Direction::In), 0.0).on_complete(move || f.set(true)),
        );
        player.tick(0.0);
        assert!(fired.get());
        assert!(!player.is_animating());
    }

    #[test]
    fn cancel_stops_in_place() {
        let mut player = Player::default();
        assert!(!player.cancel());
        player.play(FillTimeline::new(preset(Edge::Left, Direction::In), 1.0));
        let shown = player.tick(0.5);
        assert!(player.cancel());
        assert_eq!(player.tick(1.0), shown);
    }
}
