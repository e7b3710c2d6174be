// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Fill: a headless, `no_std` directional fill effect for UI.
//!
//! ## Overview
//!
//! When the pointer enters an element, a colored fill slides in from the side it came from;
//! when it leaves, the fill slides out through the side it left by.
//! Touch taps and keyboard focus drive the same effect.
//!
//! This crate computes everything about the effect except drawing it:
//! which edge was approached ([`edge`]), whether a slide should run at all ([`state`]),
//! what the overlay's SVG `viewBox` and path look like over time ([`preset`], [`timeline`]),
//! and which listeners a host must keep attached ([`listeners`]).
//! Rendering and tweening stay with the host, behind the [`Animator`](crate::timeline::Animator) trait.
//!
//! ## Workflow
//!
//! 1) Build a [`HoverFill`](crate::fill::HoverFill) from a [`FillConfig`](crate::config::FillConfig)
//!    and an animator. [`Player`](crate::timeline::Player) is a small built-in one that samples frames.
//! 2) On mount, attach listeners through a [`ListenerScope`](crate::listeners::ListenerScope) and keep
//!    the element bounds current with [`HoverFill::set_bounds`](crate::fill::HoverFill::set_bounds).
//! 3) Translate host events into [`InputEvent`](crate::adapters::InputEvent)s and pass them to
//!    [`HoverFill::handle_event`](crate::fill::HoverFill::handle_event).
//! 4) Each accepted request hands a [`FillTimeline`](crate::timeline::FillTimeline) to the animator.
//!    Apply its frames to the overlay's `viewBox` and `d` attributes.
//! 5) On unmount, drop the scope; every listener is detached.
//!
//! ## Fill state
//!
//! Each instance owns two flags: filled and locked.
//! Requests that would not change the fill state are ignored, as is everything while locked.
//! Both guards can be skipped per call with [`Bypass`](crate::state::Bypass).
//!
//! ```
//! use understory_fill::edge::{Direction, Edge};
//! use understory_fill::config::FillConfig;
//! use understory_fill::fill::{AnimateOptions, HoverFill};
//! use understory_fill::state::Bypass;
//! use understory_fill::timeline::Player;
//!
//! let mut fill = HoverFill::new(FillConfig::default(), Player::default());
//! fill.lock().animate(Edge::Up, Direction::In, AnimateOptions::default());
//! assert!(!fill.is_filled());
//!
//! fill.animate(Edge::Up, Direction::In, AnimateOptions::bypass(Bypass::IGNORE_LOCK));
//! assert!(fill.is_filled());
//! ```
//!
//! Overlapping requests do not queue: [`Player`](crate::timeline::Player) cancels the running
//! timeline and starts the new one from the outline currently on screen.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod config;
pub mod edge;
pub mod fill;
pub mod listeners;
pub mod preset;
pub mod probe;
pub mod state;
pub mod timeline;
