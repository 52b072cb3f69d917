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

use std::{fmt::Debug, rc::Weak};

use knot_intrusive::Token;

/// The signal side of a connection, erased over the argument and error types of the signal.
pub(crate) trait Detach {
    /// Unlink the connection record of `token` and release it.
    fn detach(&self, token: Token);
}

struct Attachment {
    signal: Weak<dyn Detach>,
    token: Token,
}

/// Subscription handle returned by [`Signal::connect`](crate::Signal::connect).
///
/// The slot stays connected as long as the handle lives, or until [`Connection::disconnect`] is called. The handle
/// can be moved freely, the subscription does not depend on where it is stored.
///
/// A default constructed [`Connection`] is not connected to any signal.
#[derive(Default)]
#[must_use = "dropping a `Connection` disconnects its slot"]
pub struct Connection {
    attachment: Option<Attachment>,
}

impl Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("token", &self.attachment.as_ref().map(|a| a.token))
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl Connection {
    pub(crate) fn new(signal: Weak<dyn Detach>, token: Token) -> Self {
        Self {
            attachment: Some(Attachment { signal, token }),
        }
    }

    /// Disconnect the slot from its signal.
    ///
    /// Disconnecting is idempotent. An emission that is running the slot right now goes on with the connection that
    /// followed it.
    pub fn disconnect(&mut self) {
        let Some(Attachment { signal, token }) = self.attachment.take() else {
            return;
        };
        if let Some(signal) = signal.upgrade() {
            signal.detach(token);
        }
    }

    /// Check if the slot is still connected to a live signal.
    pub fn is_connected(&self) -> bool {
        self.attachment
            .as_ref()
            .is_some_and(|attachment| attachment.signal.strong_count() > 0)
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.disconnect();
    }
}
