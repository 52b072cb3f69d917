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

//! Arena-backed intrusive data structures.
//!
//! Elements are stored in an [`Arena`] and addressed by [`Token`]s. An element takes part in a [`List`] through a
//! [`Link`] it embeds for a role tag, see [`Linked`].

/// Element storage addressed by tokens.
pub mod arena;
/// Links, positions and the linkable capability.
pub mod link;
pub mod list;
/// Stable element identity.
pub mod token;

pub use arena::Arena;
pub use knot_intrusive_derive::Linked;
pub use link::{DefaultTag, Link, Linked, Position};
pub use list::List;
pub use token::Token;
