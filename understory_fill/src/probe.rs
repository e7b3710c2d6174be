// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Is the pointer over the element?" queries that resolve on the next pointer move.
//!
//! Hosts often cannot ask for the pointer position directly; they only learn it
//! from the next move event. A [`PointerCheck`] is a future that completes when
//! the owning fill instance handles that event.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, Waker};

#[derive(Debug, Default)]
struct Slot {
    result: Option<bool>,
    waker: Option<Waker>,
}

/// Pending answer to a pointer-containment query.
///
/// Resolves to `true` if the next pointer move lands inside the element bounds
/// (boundaries included), `false` otherwise or if the bounds are unknown.
#[derive(Debug)]
pub struct PointerCheck {
    slot: Rc<RefCell<Slot>>,
}

impl PointerCheck {
    /// The answer, if the query has already resolved.
    pub fn try_result(&self) -> Option<bool> {
        self.slot.borrow().result
    }
}

impl Future for PointerCheck {
    type Output = bool;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        let mut slot = self.slot.borrow_mut();
        match slot.result {
            Some(inside) => Poll::Ready(inside),
            None => {
                slot.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}

/// Queries waiting for the next pointer move.
#[derive(Debug, Default)]
pub(crate) struct PendingChecks {
    slots: Vec<Rc<RefCell<Slot>>>,
}

impl PendingChecks {
    pub(crate) fn push(&mut self) -> PointerCheck {
        let slot = Rc::new(RefCell::new(Slot::default()));
        self.slots.push(Rc::clone(&slot));
        PointerCheck { slot }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Answer every pending query with `inside` and wake their tasks.
    pub(crate) fn resolve(&mut self, inside: bool) {
        for slot in self.slots.drain(..) {
            let waker = {
                let mut slot = slot.borrow_mut();
                slot.result = Some(inside);
                slot.waker.take()
            };
            if let Some(waker) = waker {
                waker.wake();
            }
        }
    }
}
