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

//! knot - reentrant signals over intrusive lists.
//!
//! [`Signal`] broadcasts to its slots most recently connected first, and stays consistent while slots connect,
//! disconnect and emit from inside an emission. The intrusive list it is built on is available as [`intrusive`].

pub use knot_intrusive as intrusive;
pub use knot_signal::{Connection, Signal, SignalConfig};

/// The common types of knot.
pub mod prelude {
    pub use crate::{
        intrusive::{Arena, DefaultTag, Link, Linked, List, Position, Token},
        Connection, Signal, SignalConfig,
    };
}
