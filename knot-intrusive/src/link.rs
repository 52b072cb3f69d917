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

use crate::token::Token;

/// The tag used when a type takes part in a single kind of list.
#[derive(Debug)]
pub enum DefaultTag {}

/// A position in an intrusive list.
///
/// [`Position::End`] is the sentinel of the list the position is used with. It sits one past the back and one before
/// the front, which makes every list circular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// The position of a linked element.
    Item(Token),
    /// The sentinel of the list.
    End,
}

impl Position {
    /// Get the token of the position, or `None` on the sentinel.
    pub fn token(self) -> Option<Token> {
        match self {
            Position::Item(token) => Some(token),
            Position::End => None,
        }
    }

    /// Check if the position is the sentinel.
    pub fn is_end(self) -> bool {
        self == Position::End
    }
}

impl From<Token> for Position {
    fn from(token: Token) -> Self {
        Position::Item(token)
    }
}

/// Essential data structure to build an intrusive double linked list.
///
/// An unlinked [`Link`] has neither neighbor. A linked one always has both, and both of them point back at it.
#[derive(Debug, Default)]
pub struct Link {
    pub(crate) prev: Option<Position>,
    pub(crate) next: Option<Position>,
}

impl Link {
    /// Create an unlinked link.
    pub const fn new() -> Self {
        Self { prev: None, next: None }
    }

    /// Check if the link is a member of a list.
    pub fn is_linked(&self) -> bool {
        self.next.is_some()
    }

    /// Get the next position, if linked.
    pub fn next(&self) -> Option<Position> {
        self.next
    }

    /// Get the previous position, if linked.
    pub fn prev(&self) -> Option<Position> {
        self.prev
    }
}

/// Types that embed a [`Link`] for the list role named by `Tag`.
///
/// Implement it once per tag to let one type be linked into several lists at the same time, or derive it with
/// `#[derive(Linked)]`.
///
/// ```
/// use knot_intrusive::{Link, Linked};
///
/// enum ReadyTag {}
/// enum TimerTag {}
///
/// #[derive(Linked)]
/// struct Task {
///     id: u64,
///     #[linker(tag = ReadyTag)]
///     ready: Link,
///     #[linker(tag = TimerTag)]
///     timer: Link,
/// }
/// ```
pub trait Linked<Tag = DefaultTag> {
    /// Get the link of the role.
    fn link(&self) -> &Link;

    /// Get the mutable link of the role.
    fn link_mut(&mut self) -> &mut Link;
}
