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

use std::{
    cell::RefCell,
    convert::Infallible,
    fmt::Debug,
    rc::{Rc, Weak},
};

use knot_common::strict_assert;
use knot_intrusive::{Arena, Link, Linked, List, Position, Token};

use crate::{
    config::SignalConfig,
    connection::{Connection, Detach},
    walker::{Parked, Walker, WalkerTag},
};

/// Role of connection records in the list of a signal.
pub(crate) enum ConnectionTag {}

pub(crate) type Callback<A, E> = Rc<dyn Fn(&A) -> Result<(), E>>;

/// The record of a connection, stored in the signal.
#[derive(Linked)]
pub(crate) struct Slot<A: ?Sized, E> {
    #[linker(tag = ConnectionTag)]
    link: Link,
    /// Walkers of the emissions currently running this slot.
    pub(crate) walkers: List<Walker, WalkerTag>,
    pub(crate) callback: Callback<A, E>,
}

pub(crate) struct Inner<A: ?Sized, E> {
    pub(crate) name: String,
    pub(crate) slots: Arena<Slot<A, E>>,
    pub(crate) walkers: Arena<Walker>,
    pub(crate) connections: List<Slot<A, E>, ConnectionTag>,
}

impl<A: ?Sized, E> Drop for Inner<A, E> {
    fn drop(&mut self) {
        // No emission runs when the signal goes away, so no walker is parked on any slot.
        strict_assert!(self.walkers.is_empty());
        self.connections.clear(&mut self.slots);
    }
}

impl<A: ?Sized, E> Detach for RefCell<Inner<A, E>> {
    fn detach(&self, token: Token) {
        let slot = {
            let mut guard = self.borrow_mut();
            let Inner {
                name,
                slots,
                walkers,
                connections,
            } = &mut *guard;

            strict_assert!(slots.contains(token), "connection {token:?} is not stored in signal {name}");
            let successor = connections.unlink(slots, token);
            let mut slot = slots.remove(token);

            let mut parked = 0;
            let mut pos = slot.walkers.begin();
            while let Position::Item(walker) = pos {
                let walker = &mut walkers[walker];
                walker.deleted = true;
                walker.held = successor;
                pos = slot.walkers.next(walkers, pos);
                parked += 1;
            }

            match successor {
                Position::Item(next) => {
                    let first = slot.walkers.begin();
                    let dest = &mut slots[next].walkers;
                    let at = dest.begin();
                    dest.splice(walkers, at, &mut slot.walkers, first, Position::End);
                }
                Position::End => slot.walkers.clear(walkers),
            }

            tracing::trace!(signal = %name, ?token, ?successor, parked, "[signal]: disconnect");
            slot
        };
        // The callback may own handles of this signal, drop it without holding the borrow.
        drop(slot);
    }
}

/// A broadcaster that calls every connected slot on emission.
///
/// Slots are called most recently connected first. A slot may connect, disconnect and emit on the signal that is
/// calling it:
///
/// - disconnecting the running slot, or any slot not yet visited, takes effect for the running emission;
/// - a slot connected during an emission is not visited by it, because new slots are linked at the front, behind the
///   position of every running emission.
///
/// `E` is the error type of fallible slots, see [`Signal::try_connect`] and [`Signal::try_emit`].
pub struct Signal<A: ?Sized, E = Infallible> {
    inner: Rc<RefCell<Inner<A, E>>>,
}

impl<A: ?Sized, E> Debug for Signal<A, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Signal")
            .field("name", &inner.name)
            .field("connections", &inner.slots.len())
            .field("walkers", &inner.walkers.len())
            .finish()
    }
}

impl<A: ?Sized + 'static, E: 'static> Default for Signal<A, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized + 'static, E: 'static> Signal<A, E> {
    /// Create a signal with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SignalConfig::default())
    }

    /// Create a signal with the given configuration.
    pub fn with_config(config: SignalConfig) -> Self {
        let inner = Inner {
            name: config.name,
            slots: Arena::with_capacity(config.connection_capacity),
            walkers: Arena::with_capacity(config.walker_capacity),
            connections: List::new(),
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Connect an infallible slot. It is called before every slot connected earlier.
    pub fn connect<F>(&self, slot: F) -> Connection
    where
        F: Fn(&A) + 'static,
    {
        self.try_connect(move |args: &A| {
            slot(args);
            Ok(())
        })
    }

    /// Connect a fallible slot. It is called before every slot connected earlier.
    ///
    /// An error returned by the slot aborts the emission, see [`Signal::try_emit`].
    pub fn try_connect<F>(&self, slot: F) -> Connection
    where
        F: Fn(&A) -> Result<(), E> + 'static,
    {
        let callback: Callback<A, E> = Rc::new(slot);

        let token = {
            let mut guard = self.inner.borrow_mut();
            let Inner {
                name,
                slots,
                connections,
                ..
            } = &mut *guard;

            let token = slots.insert(Slot {
                link: Link::new(),
                walkers: List::new(),
                callback,
            });
            connections.push_front(slots, token);

            tracing::trace!(signal = %name, ?token, "[signal]: connect");
            token
        };

        let signal = Rc::downgrade(&self.inner) as Weak<RefCell<Inner<A, E>>>;
        Connection::new(signal, token)
    }

    /// Call every connected slot with `args`, and stop at the first slot that returns an error.
    ///
    /// Emitting a signal without slots does nothing. The slots that follow a failed one are not called by this
    /// emission, and the signal stays usable.
    #[cfg_attr(feature = "tracing", fastrace::trace(name = "knot::signal::emit"))]
    pub fn try_emit(&self, args: &A) -> Result<(), E> {
        let mut pos = self.inner.borrow().connections.begin();

        while let Position::Item(token) = pos {
            let (parked, callback) = Parked::park(&self.inner, token);
            let res = callback(args);
            pos = parked.resume();
            // Last owner of the callback if the slot disconnected itself.
            drop(callback);

            if let Err(e) = res {
                tracing::debug!(signal = %self.inner.borrow().name, ?token, "[signal]: emission aborted by slot error");
                return Err(e);
            }
        }

        Ok(())
    }

    /// Check if no slot is connected.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().connections.is_empty()
    }
}

impl<A: ?Sized + 'static> Signal<A, Infallible> {
    /// Call every connected slot with `args`.
    ///
    /// A panicking slot unwinds through `emit`, leaving the signal consistent.
    pub fn emit(&self, args: &A) {
        match self.try_emit(args) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}
