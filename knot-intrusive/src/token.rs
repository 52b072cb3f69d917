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

use std::num::NonZeroUsize;

/// Stable identity of an element stored in an [`Arena`](crate::arena::Arena).
///
/// A token stays valid until the element is removed from its arena, no matter where the owner of the token moves it.
/// `Option<Token>` has the same size as `Token`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(NonZeroUsize);

impl Token {
    const MASK: usize = 1 << (usize::BITS - 1);

    /// Build a token from a raw slab key.
    ///
    /// # Panics
    ///
    /// Panics if the highest bit of `raw` is set.
    pub fn from_raw(raw: usize) -> Self {
        // The highest bit is reserved as the niche.
        assert_eq!(0, raw & Self::MASK, "raw key {raw} overflows token");
        match NonZeroUsize::new(raw | Self::MASK) {
            Some(inner) => Self(inner),
            None => unreachable!(),
        }
    }

    /// Get the raw slab key of the token.
    pub fn to_raw(&self) -> usize {
        self.0.get() & !Self::MASK
    }
}
