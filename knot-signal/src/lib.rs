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

//! Reentrant signals and slots.
//!
//! A [`Signal`] calls every connected slot on emission. Slots may connect, disconnect and emit on the very signal that
//! is calling them; each running emission tracks its position with a walker parked on the current connection, so
//! removing any connection, the running one included, never derails it.
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//!
//! use knot_signal::Signal;
//!
//! let signal = Signal::<str>::new();
//! let log = Rc::new(RefCell::new(vec![]));
//!
//! let l = log.clone();
//! let _a = signal.connect(move |s: &str| l.borrow_mut().push(format!("a:{s}")));
//! let l = log.clone();
//! let _b = signal.connect(move |s: &str| l.borrow_mut().push(format!("b:{s}")));
//!
//! signal.emit("x");
//! assert_eq!(*log.borrow(), vec!["b:x", "a:x"]);
//! ```

mod config;
mod connection;
mod signal;
mod walker;

pub use config::SignalConfig;
pub use connection::Connection;
pub use signal::Signal;
