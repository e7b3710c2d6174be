// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped event-listener registration.
//!
//! ## Overview
//!
//! A fill instance needs a handful of listeners while it is mounted. The host
//! implements [`EventSource`] over its own event system; [`ListenerScope`]
//! attaches exactly the listeners the enabled [`InputSources`] need and detaches
//! every one of them when released or dropped, so early unmounts cannot leak.
//!
//! A window pointer-move listener is always attached: it feeds pending
//! [`PointerCheck`](crate::probe::PointerCheck)s, which work whatever inputs are enabled.
//!
//! ```
//! use understory_fill::config::InputSources;
//! use understory_fill::listeners::{EventKind, EventSource, ListenerScope, ListenerTarget};
//!
//! #[derive(Default)]
//! struct Counting {
//!     live: usize,
//! }
//!
//! impl EventSource for Counting {
//!     type Handle = (ListenerTarget, EventKind);
//!     fn listen(&mut self, target: ListenerTarget, kind: EventKind) -> Self::Handle {
//!         self.live += 1;
//!         (target, kind)
//!     }
//!     fn unlisten(&mut self, _handle: Self::Handle) {
//!         self.live -= 1;
//!     }
//! }
//!
//! let scope = ListenerScope::activate(Counting::default(), InputSources::all());
//! assert_eq!(scope.len(), 6);
//! assert_eq!(scope.source().map(|s| s.live), Some(6));
//! let source = scope.release();
//! assert_eq!(source.live, 0);
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::config::InputSources;

/// Where a listener is attached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// The element the fill decorates.
    Element,
    /// The whole window or document.
    Window,
}

/// Event a listener is attached for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer pressed.
    PointerDown,
    /// Pointer moved.
    PointerMove,
    /// Mouse entered.
    MouseEnter,
    /// Mouse left.
    MouseLeave,
    /// Focus gained.
    Focus,
    /// Focus lost.
    Blur,
}

/// Host event system that listeners can be attached to and removed from.
pub trait EventSource {
    /// Token identifying one attached listener.
    type Handle;
    /// Attach a listener and return its handle.
    fn listen(&mut self, target: ListenerTarget, kind: EventKind) -> Self::Handle;
    /// Remove a previously attached listener.
    fn unlisten(&mut self, handle: Self::Handle);
}

/// The listeners required by `inputs`, in attach order.
///
/// The window pointer-move listener comes first and is present even for empty `inputs`.
pub fn required_listeners(inputs: InputSources) -> Vec<(ListenerTarget, EventKind)> {
    let mut out = vec![(ListenerTarget::Window, EventKind::PointerMove)];
    if inputs.contains(InputSources::TOUCH) {
        out.push((ListenerTarget::Window, EventKind::PointerDown));
    }
    if inputs.contains(InputSources::MOUSE) {
        out.push((ListenerTarget::Element, EventKind::MouseEnter));
        out.push((ListenerTarget::Element, EventKind::MouseLeave));
    }
    if inputs.contains(InputSources::FOCUS) {
        out.push((ListenerTarget::Element, EventKind::Focus));
        out.push((ListenerTarget::Element, EventKind::Blur));
    }
    out
}

/// Listeners attached for the lifetime of a mount.
///
/// Detaches everything on [`ListenerScope::release`] or on drop, whichever comes first.
pub struct ListenerScope<S: EventSource> {
    source: Option<S>,
    handles: Vec<S::Handle>,
}

impl<S: EventSource> core::fmt::Debug for ListenerScope<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListenerScope")
            .field("listeners", &self.handles.len())
            .finish_non_exhaustive()
    }
}

impl<S: EventSource> ListenerScope<S> {
    /// Attach the listeners needed by `inputs` to `source`.
    pub fn activate(mut source: S, inputs: InputSources) -> Self {
        let handles: Vec<_> = required_listeners(inputs)
            .into_iter()
            .map(|(target, kind)| source.listen(target, kind))
            .collect();
        tracing::debug!(count = handles.len(), "fill listeners attached");
        Self {
            source: Some(source),
            handles,
        }
    }

    /// Number of attached listeners.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether no listeners are attached.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// The event source, for hosts that dispatch through it.
    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Detach everything and hand the event source back.
    pub fn release(mut self) -> S {
        self.detach_all();
        match self.source.take() {
            Some(source) => source,
            // `source` is only taken here or in drop, both of which consume the scope.
            None => unreachable!("listener scope released twice"),
        }
    }

    fn detach_all(&mut self) {
        let Some(source) = self.source.as_mut() else {
            return;
        };
        let count = self.handles.len();
        for handle in self.handles.drain(..) {
            source.unlisten(handle);
        }
        if count > 0 {
            tracing::debug!(count, "fill listeners detached");
        }
    }
}

impl<S: EventSource> Drop for ListenerScope<S> {
    fn drop(&mut self) {
        self.detach_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    /// Records attach and detach calls; clones share the log.
    #[derive(Clone, Default)]
    struct Recorder {
        log: Rc<RefCell<Vec<(bool, ListenerTarget, EventKind)>>>,
    }

    impl EventSource for Recorder {
        type Handle = (ListenerTarget, EventKind);
        fn listen(&mut self, target: ListenerTarget, kind: EventKind) -> Self::Handle {
            self.log.borrow_mut().push((true, target, kind));
            (target, kind)
        }
        fn unlisten(&mut self, (target, kind): Self::Handle) {
            self.log.borrow_mut().push((false, target, kind));
        }
    }

    impl Recorder {
        fn live(&self) -> usize {
            let log = self.log.borrow();
            let attached = log.iter().filter(|e| e.0).count();
            attached - (log.len() - attached)
        }
    }

    #[test]
    fn required_listeners_follow_inputs() {
        assert_eq!(
            required_listeners(InputSources::TOUCH),
            vec![
                (ListenerTarget::Window, EventKind::PointerMove),
                (ListenerTarget::Window, EventKind::PointerDown),
            ]
        );
        assert_eq!(
            required_listeners(InputSources::MOUSE | InputSources::FOCUS),
            vec![
                (ListenerTarget::Window, EventKind::PointerMove),
                (ListenerTarget::Element, EventKind::MouseEnter),
                (ListenerTarget::Element, EventKind::MouseLeave),
                (ListenerTarget::Element, EventKind::Focus),
                (ListenerTarget::Element, EventKind::Blur),
            ]
        );
    }

    #[test]
    fn drop_detaches_everything_once() {
        let rec = Recorder::default();
        {
            let scope = ListenerScope::activate(rec.clone(), InputSources::all());
            assert_eq!(scope.len(), 6);
            assert_eq!(rec.live(), 6);
        }
        assert_eq!(rec.live(), 0);
        assert_eq!(rec.log.borrow().len(), 12);
    }

    #[test]
    fn release_detaches_and_returns_source() {
        let rec = Recorder::default();
        let scope = ListenerScope::activate(rec.clone(), InputSources::MOUSE);
        assert_eq!(scope.source().map(Recorder::live), Some(3));
        let back = scope.release();
        assert_eq!(back.live(), 0);
        // Release plus the implicit drop must not detach twice.
        assert_eq!(rec.log.borrow().len(), 6);
    }

    #[test]
    fn empty_inputs_still_track_pointer_moves() {
        let rec = Recorder::default();
        let scope = ListenerScope::activate(rec.clone(), InputSources::empty());
        assert_eq!(scope.len(), 1);
        drop(scope);
        assert_eq!(
            *rec.log.borrow(),
            vec![
                (true, ListenerTarget::Window, EventKind::PointerMove),
                (false, ListenerTarget::Window, EventKind::PointerMove),
            ]
        );
    }
}
