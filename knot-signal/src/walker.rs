//  Copyright 2024 knot Project Authors
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//  http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.

//! Parked iterators of in-flight emissions.
//!
//! Each step of an emission parks a [`Walker`] on the connection it is about to call. When that connection is
//! disconnected during the call, its walkers are marked deleted, redirected to the connection that followed it and
//! moved onto that connection in one splice. After the call the emission resumes from the walker, so it never steps
//! from a released record.

use std::cell::RefCell;

use knot_intrusive::{Link, Linked, Position, Token};

use crate::signal::{Callback, Inner};

/// Role of walkers in the list of walkers parked on a connection.
pub(crate) enum WalkerTag {}

#[derive(Debug, Linked)]
pub(crate) struct Walker {
    #[linker(tag = WalkerTag)]
    link: Link,
    /// Where the emission resumes if `deleted`, the connection it is parked on otherwise.
    pub(crate) held: Position,
    pub(crate) deleted: bool,
}

impl Walker {
    fn new(held: Token) -> Self {
        Self {
            link: Link::new(),
            held: Position::Item(held),
            deleted: false,
        }
    }
}

/// Guard of a walker parked for one emission step.
///
/// Dropping the guard unparks and releases the walker, on normal return, on error and while unwinding alike.
pub(crate) struct Parked<'a, A: ?Sized, E> {
    inner: &'a RefCell<Inner<A, E>>,
    walker: Token,
}

impl<'a, A: ?Sized, E> Parked<'a, A, E> {
    /// Park a walker on the connection of `token` and return it with the callback to run.
    pub(crate) fn park(inner: &'a RefCell<Inner<A, E>>, token: Token) -> (Self, Callback<A, E>) {
        let mut guard = inner.borrow_mut();
        let Inner { slots, walkers, .. } = &mut *guard;

        let walker = walkers.insert(Walker::new(token));
        let slot = &mut slots[token];
        slot.walkers.push_front(walkers, walker);
        let callback = slot.callback.clone();

        (Self { inner, walker }, callback)
    }

    /// Get the position the emission continues from, then unpark.
    pub(crate) fn resume(self) -> Position {
        let guard = self.inner.borrow();
        let inner = &*guard;
        let walker = &inner.walkers[self.walker];
        match walker.deleted {
            true => walker.held,
            false => inner.connections.next(&inner.slots, walker.held),
        }
    }
}

impl<A: ?Sized, E> Drop for Parked<'_, A, E> {
    fn drop(&mut self) {
        let mut guard = self.inner.borrow_mut();
        let Inner { slots, walkers, .. } = &mut *guard;

        // A deleted walker that reached the end was already unlinked by the disconnect.
        if let Position::Item(token) = walkers[self.walker].held {
            slots[token].walkers.unlink(walkers, self.walker);
        }
        walkers.remove(self.walker);
    }
}
