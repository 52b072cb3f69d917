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

use std::ops::{Index, IndexMut};

use slab::Slab;

use crate::token::Token;

/// Storage for the elements of intrusive lists.
///
/// Lists only coordinate tokens; the arena owns the elements. One arena may back any number of lists, and one element
/// may be linked into one list per tag at the same time.
#[derive(Debug)]
pub struct Arena<T> {
    slab: Slab<T>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty arena with room for `capacity` elements before it reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slab: Slab::with_capacity(capacity),
        }
    }

    /// Store an element and return its token.
    pub fn insert(&mut self, value: T) -> Token {
        Token::from_raw(self.slab.insert(value))
    }

    /// Remove an element from the arena.
    ///
    /// The element must not be linked into any list anymore, use [`List::remove`](crate::list::List::remove) to
    /// unlink and remove in one go.
    ///
    /// # Panics
    ///
    /// Panics if `token` does not refer to a stored element.
    pub fn remove(&mut self, token: Token) -> T {
        self.slab.remove(token.to_raw())
    }

    /// Get the element of the token, if it is stored.
    pub fn get(&self, token: Token) -> Option<&T> {
        self.slab.get(token.to_raw())
    }

    /// Get the mutable element of the token, if it is stored.
    pub fn get_mut(&mut self, token: Token) -> Option<&mut T> {
        self.slab.get_mut(token.to_raw())
    }

    /// Check if the token refers to a stored element.
    pub fn contains(&self, token: Token) -> bool {
        self.slab.contains(token.to_raw())
    }

    /// Get the count of stored elements.
    pub fn len(&self) -> usize {
        self.slab.len()
    }

    /// Check if the arena stores no element.
    pub fn is_empty(&self) -> bool {
        self.slab.is_empty()
    }

    /// Get the count of elements the arena can store without reallocating.
    pub fn capacity(&self) -> usize {
        self.slab.capacity()
    }
}

impl<T> Index<Token> for Arena<T> {
    type Output = T;

    fn index(&self, token: Token) -> &Self::Output {
        &self.slab[token.to_raw()]
    }
}

impl<T> IndexMut<Token> for Arena<T> {
    fn index_mut(&mut self, token: Token) -> &mut Self::Output {
        &mut self.slab[token.to_raw()]
    }
}
