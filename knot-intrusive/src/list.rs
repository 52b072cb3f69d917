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

//! Intrusive double linked list over arena-stored elements.
//!
//! A [`List`] only holds its sentinel. Elements live in an [`Arena`] and carry a [`Link`] per list role, so one arena
//! can back many lists and one element can be a member of one list per tag. Every operation except [`List::clear`] is
//! O(1), including [`List::splice`] of an arbitrary range.
//!
//! Unlinking an element only invalidates positions that refer to that element.

use std::{fmt::Debug, marker::PhantomData};

use knot_common::strict_assert;

use crate::{
    arena::Arena,
    link::{DefaultTag, Link, Linked, Position},
    token::Token,
};

/// The sentinel of a list, the only node the list owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Root {
    next: Position,
    prev: Position,
}

impl Default for Root {
    fn default() -> Self {
        Self {
            next: Position::End,
            prev: Position::End,
        }
    }
}

/// Circular, sentinel-rooted intrusive double linked list.
///
/// The list never allocates nor frees its elements, it only rewires their links for the role `Tag`. All operations
/// must be called with the arena that stores the elements of the list.
///
/// A list must be emptied, with [`List::clear`] or by unlinking its elements, before it is dropped. Its elements would
/// otherwise stay marked as linked to a list that no longer exists. Dropping a non-empty list fails a strict assertion.
pub struct List<T, Tag = DefaultTag> {
    root: Root,
    _marker: PhantomData<(fn() -> T, fn() -> Tag)>,
}

impl<T, Tag> Debug for List<T, Tag> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("List")
            .field("front", &self.root.next)
            .field("back", &self.root.prev)
            .finish()
    }
}

impl<T, Tag> Drop for List<T, Tag> {
    fn drop(&mut self) {
        // Do not turn a panic into an abort.
        if !std::thread::panicking() {
            strict_assert!(
                self.root.next == Position::End,
                "list dropped while still linked to {:?}, clear it first",
                self.root.next
            );
        }
    }
}

impl<T, Tag> Default for List<T, Tag>
where
    T: Linked<Tag>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Tag> List<T, Tag>
where
    T: Linked<Tag>,
{
    /// Create an empty list.
    pub const fn new() -> Self {
        Self {
            root: Root {
                next: Position::End,
                prev: Position::End,
            },
            _marker: PhantomData,
        }
    }

    /// Check if the list has no element.
    pub fn is_empty(&self) -> bool {
        self.root.next == Position::End
    }

    /// Get the position of the first element, or the sentinel if the list is empty.
    pub fn begin(&self) -> Position {
        self.root.next
    }

    /// Get the sentinel, one past the last element.
    pub fn end(&self) -> Position {
        Position::End
    }

    /// Get the position after `pos`.
    ///
    /// The position after the last element is the sentinel, and the one after the sentinel is the first element.
    pub fn next(&self, arena: &Arena<T>, pos: Position) -> Position {
        next_of::<T, Tag>(arena, &self.root, pos)
    }

    /// Get the position before `pos`.
    ///
    /// The position before the first element is the sentinel, and the one before the sentinel is the last element.
    pub fn prev(&self, arena: &Arena<T>, pos: Position) -> Position {
        prev_of::<T, Tag>(arena, &self.root, pos)
    }

    /// Get the token of the first element.
    pub fn front_token(&self) -> Option<Token> {
        self.root.next.token()
    }

    /// Get the token of the last element.
    pub fn back_token(&self) -> Option<Token> {
        self.root.prev.token()
    }

    /// Get the reference of the first element.
    pub fn front<'a>(&self, arena: &'a Arena<T>) -> Option<&'a T> {
        self.front_token().map(|token| &arena[token])
    }

    /// Get the reference of the last element.
    pub fn back<'a>(&self, arena: &'a Arena<T>) -> Option<&'a T> {
        self.back_token().map(|token| &arena[token])
    }

    /// Get the mutable reference of the first element.
    pub fn front_mut<'a>(&self, arena: &'a mut Arena<T>) -> Option<&'a mut T> {
        self.front_token().map(|token| &mut arena[token])
    }

    /// Get the mutable reference of the last element.
    pub fn back_mut<'a>(&self, arena: &'a mut Arena<T>) -> Option<&'a mut T> {
        self.back_token().map(|token| &mut arena[token])
    }

    /// Link an element to the first position.
    pub fn push_front(&mut self, arena: &mut Arena<T>, token: Token) {
        self.insert(arena, self.begin(), token);
    }

    /// Link an element to the last position.
    pub fn push_back(&mut self, arena: &mut Arena<T>, token: Token) {
        self.insert(arena, Position::End, token);
    }

    /// Unlink the first element and return its token.
    pub fn pop_front(&mut self, arena: &mut Arena<T>) -> Option<Token> {
        let token = self.front_token()?;
        self.unlink(arena, token);
        Some(token)
    }

    /// Unlink the last element and return its token.
    pub fn pop_back(&mut self, arena: &mut Arena<T>) -> Option<Token> {
        let token = self.back_token()?;
        self.unlink(arena, token);
        Some(token)
    }

    /// Link an unlinked element before `pos` and return its position.
    ///
    /// `pos` must be the sentinel or an element of this list.
    pub fn insert(&mut self, arena: &mut Arena<T>, pos: Position, token: Token) -> Position {
        strict_assert!(!link::<T, Tag>(arena, token).is_linked(), "element {token:?} is already linked");

        let prev = prev_of::<T, Tag>(arena, &self.root, pos);
        let item = Position::Item(token);

        set_next::<T, Tag>(arena, &mut self.root, prev, item);
        set_prev::<T, Tag>(arena, &mut self.root, pos, item);

        let link = link_mut::<T, Tag>(arena, token);
        link.prev = Some(prev);
        link.next = Some(pos);

        item
    }

    /// Unlink the element at `pos` and return the position that followed it.
    pub fn erase(&mut self, arena: &mut Arena<T>, pos: Position) -> Position {
        strict_assert!(!pos.is_end(), "the sentinel cannot be erased");
        match pos {
            Position::Item(token) => self.unlink(arena, token),
            Position::End => self.begin(),
        }
    }

    /// Unlink an element of this list and return the position that followed it.
    ///
    /// Unlinking an element that is not linked is a no-op that returns the sentinel.
    ///
    /// The element must be linked into this list. Unlinking a member of another list of the same tag rewires the
    /// wrong sentinel and corrupts both lists. Only a member at an edge of the other list is caught, by a strict
    /// assertion.
    pub fn unlink(&mut self, arena: &mut Arena<T>, token: Token) -> Position {
        let link = link_mut::<T, Tag>(arena, token);
        let (prev, next) = match (link.prev, link.next) {
            (Some(prev), Some(next)) => (prev, next),
            _ => return Position::End,
        };
        strict_assert!(
            (prev != Position::End || self.root.next == Position::Item(token))
                && (next != Position::End || self.root.prev == Position::Item(token)),
            "element {token:?} is not linked into this list"
        );
        link.prev = None;
        link.next = None;

        set_next::<T, Tag>(arena, &mut self.root, prev, next);
        set_prev::<T, Tag>(arena, &mut self.root, next, prev);

        next
    }

    /// Unlink an element of this list and remove it from the arena.
    pub fn remove(&mut self, arena: &mut Arena<T>, token: Token) -> T {
        self.unlink(arena, token);
        arena.remove(token)
    }

    /// Check if the element is linked for the role of this list.
    pub fn is_linked(&self, arena: &Arena<T>, token: Token) -> bool {
        link::<T, Tag>(arena, token).is_linked()
    }

    /// Unlink all elements. O(n).
    pub fn clear(&mut self, arena: &mut Arena<T>) {
        let mut pos = self.root.next;
        while let Position::Item(token) = pos {
            let link = link_mut::<T, Tag>(arena, token);
            pos = link.next.take().unwrap_or(Position::End);
            link.prev = None;
        }
        self.root = Root::default();
    }

    /// Move the elements in `[first, last)` of `source` before `pos` of this list.
    ///
    /// Only the links around the range are touched, the cost is O(1) whatever the length of the range.
    /// `first` and `last` must belong to `source` with `first` not after `last`.
    pub fn splice(&mut self, arena: &mut Arena<T>, pos: Position, source: &mut Self, first: Position, last: Position) {
        splice_raw::<T, Tag>(arena, &mut self.root, Some(&mut source.root), pos, first, last);
    }

    /// Move the elements in `[first, last)` of this list before `pos` of this list.
    ///
    /// `pos` must not be inside `[first, last)`.
    pub fn splice_within(&mut self, arena: &mut Arena<T>, pos: Position, first: Position, last: Position) {
        splice_raw::<T, Tag>(arena, &mut self.root, None, pos, first, last);
    }

    /// Move all elements of `other` to the back of this list, leaving `other` empty.
    pub fn append(&mut self, arena: &mut Arena<T>, other: &mut Self) {
        let first = other.begin();
        self.splice(arena, Position::End, other, first, Position::End);
    }

    /// Get an iterator over the elements, front to back.
    pub fn iter<'a>(&self, arena: &'a Arena<T>) -> Iter<'a, T, Tag> {
        Iter {
            arena,
            pos: self.root.next,
            _marker: PhantomData,
        }
    }

    /// Get an iterator over the tokens of the elements, front to back.
    pub fn tokens<'a>(&self, arena: &'a Arena<T>) -> Tokens<'a, T, Tag> {
        Tokens {
            arena,
            pos: self.root.next,
            _marker: PhantomData,
        }
    }
}

/// Element reference iterator of the intrusive double linked list.
pub struct Iter<'a, T, Tag = DefaultTag> {
    arena: &'a Arena<T>,
    pos: Position,
    _marker: PhantomData<fn() -> Tag>,
}

impl<'a, T, Tag> Iterator for Iter<'a, T, Tag>
where
    T: Linked<Tag>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.pos.token()?;
        let item = &self.arena[token];
        self.pos = Linked::<Tag>::link(item).next.unwrap_or(Position::End);
        Some(item)
    }
}

/// Element token iterator of the intrusive double linked list.
pub struct Tokens<'a, T, Tag = DefaultTag> {
    arena: &'a Arena<T>,
    pos: Position,
    _marker: PhantomData<fn() -> Tag>,
}

impl<T, Tag> Iterator for Tokens<'_, T, Tag>
where
    T: Linked<Tag>,
{
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.pos.token()?;
        self.pos = link::<T, Tag>(self.arena, token).next.unwrap_or(Position::End);
        Some(token)
    }
}

fn link<T, Tag>(arena: &Arena<T>, token: Token) -> &Link
where
    T: Linked<Tag>,
{
    Linked::<Tag>::link(&arena[token])
}

fn link_mut<T, Tag>(arena: &mut Arena<T>, token: Token) -> &mut Link
where
    T: Linked<Tag>,
{
    Linked::<Tag>::link_mut(&mut arena[token])
}

fn next_of<T, Tag>(arena: &Arena<T>, root: &Root, pos: Position) -> Position
where
    T: Linked<Tag>,
{
    match pos {
        Position::End => root.next,
        Position::Item(token) => {
            let next = link::<T, Tag>(arena, token).next;
            strict_assert!(next.is_some(), "element {token:?} is not linked");
            next.unwrap_or(Position::End)
        }
    }
}

fn prev_of<T, Tag>(arena: &Arena<T>, root: &Root, pos: Position) -> Position
where
    T: Linked<Tag>,
{
    match pos {
        Position::End => root.prev,
        Position::Item(token) => {
            let prev = link::<T, Tag>(arena, token).prev;
            strict_assert!(prev.is_some(), "element {token:?} is not linked");
            prev.unwrap_or(Position::End)
        }
    }
}

fn set_next<T, Tag>(arena: &mut Arena<T>, root: &mut Root, pos: Position, next: Position)
where
    T: Linked<Tag>,
{
    match pos {
        Position::End => root.next = next,
        Position::Item(token) => link_mut::<T, Tag>(arena, token).next = Some(next),
    }
}

fn set_prev<T, Tag>(arena: &mut Arena<T>, root: &mut Root, pos: Position, prev: Position)
where
    T: Linked<Tag>,
{
    match pos {
        Position::End => root.prev = prev,
        Position::Item(token) => link_mut::<T, Tag>(arena, token).prev = Some(prev),
    }
}

/// Move `[first, last)` from the list rooted at `source` (or `dest` if `None`) before `pos` of the list rooted at
/// `dest`.
fn splice_raw<T, Tag>(
    arena: &mut Arena<T>,
    dest: &mut Root,
    source: Option<&mut Root>,
    pos: Position,
    first: Position,
    last: Position,
) where
    T: Linked<Tag>,
{
    if pos == first || first == last {
        return;
    }
    strict_assert!(!first.is_end(), "a non-empty range cannot start at the sentinel");

    // Detach the range from the source list.
    let true_last = {
        let source = match source {
            Some(source) => source,
            None => &mut *dest,
        };
        let before = prev_of::<T, Tag>(arena, source, first);
        let true_last = prev_of::<T, Tag>(arena, source, last);
        set_next::<T, Tag>(arena, source, before, last);
        set_prev::<T, Tag>(arena, source, last, before);
        true_last
    };
    strict_assert!(!true_last.is_end());

    // Attach it before `pos`.
    let prev = prev_of::<T, Tag>(arena, dest, pos);
    set_next::<T, Tag>(arena, dest, prev, first);
    set_prev::<T, Tag>(arena, dest, first, prev);
    set_prev::<T, Tag>(arena, dest, pos, true_last);
    set_next::<T, Tag>(arena, dest, true_last, pos);
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[derive(Debug)]
    struct Item {
        link: Link,
        val: u64,
    }

    impl Item {
        fn new(val: u64) -> Self {
            Self { link: Link::new(), val }
        }
    }

    impl Linked for Item {
        fn link(&self) -> &Link {
            &self.link
        }

        fn link_mut(&mut self) -> &mut Link {
            &mut self.link
        }
    }

    fn values(list: &List<Item>, arena: &Arena<Item>) -> Vec<u64> {
        list.iter(arena).map(|item| item.val).collect_vec()
    }

    fn filled(arena: &mut Arena<Item>, vals: impl IntoIterator<Item = u64>) -> (List<Item>, Vec<Token>) {
        let mut list = List::new();
        let tokens = vals
            .into_iter()
            .map(|val| {
                let token = arena.insert(Item::new(val));
                list.push_back(arena, token);
                token
            })
            .collect_vec();
        (list, tokens)
    }

    #[test]
    fn test_list_simple() {
        let mut arena = Arena::new();
        let mut l = List::<Item>::new();
        assert!(l.is_empty());
        assert_eq!(l.begin(), l.end());

        let t2 = arena.insert(Item::new(2));
        let t1 = arena.insert(Item::new(1));
        let t3 = arena.insert(Item::new(3));

        l.push_back(&mut arena, t2);
        l.push_front(&mut arena, t1);
        l.push_back(&mut arena, t3);

        assert_eq!(values(&l, &arena), vec![1, 2, 3]);
        assert_eq!(l.tokens(&arena).collect_vec(), vec![t1, t2, t3]);
        assert_eq!(l.front(&arena).unwrap().val, 1);
        assert_eq!(l.back(&arena).unwrap().val, 3);

        l.front_mut(&mut arena).unwrap().val = 10;
        l.back_mut(&mut arena).unwrap().val = 30;
        assert_eq!(values(&l, &arena), vec![10, 2, 30]);

        assert_eq!(l.pop_front(&mut arena), Some(t1));
        assert_eq!(l.pop_back(&mut arena), Some(t3));
        assert_eq!(values(&l, &arena), vec![2]);
        assert!(!l.is_linked(&arena, t1));
        assert!(!l.is_linked(&arena, t3));

        assert_eq!(l.remove(&mut arena, t2).val, 2);
        assert!(l.is_empty());
        assert!(l.pop_front(&mut arena).is_none());
        assert!(l.pop_back(&mut arena).is_none());
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_list_circular() {
        let mut arena = Arena::new();
        let (mut l, tokens) = filled(&mut arena, [1, 2, 3]);

        let mut pos = l.end();
        let mut forward = vec![];
        for _ in 0..4 {
            pos = l.next(&arena, pos);
            forward.push(pos);
        }
        assert_eq!(
            forward,
            vec![
                Position::Item(tokens[0]),
                Position::Item(tokens[1]),
                Position::Item(tokens[2]),
                Position::End
            ]
        );

        let mut pos = l.end();
        let mut backward = vec![];
        for _ in 0..4 {
            pos = l.prev(&arena, pos);
            backward.push(pos);
        }
        assert_eq!(
            backward,
            vec![
                Position::Item(tokens[2]),
                Position::Item(tokens[1]),
                Position::Item(tokens[0]),
                Position::End
            ]
        );

        l.clear(&mut arena);
    }

    #[test]
    fn test_list_insert_erase() {
        let mut arena = Arena::new();
        let (mut l, tokens) = filled(&mut arena, [1, 3, 5]);

        let t2 = arena.insert(Item::new(2));
        let pos = l.insert(&mut arena, Position::Item(tokens[1]), t2);
        assert_eq!(pos, Position::Item(t2));
        let t4 = arena.insert(Item::new(4));
        l.insert(&mut arena, Position::Item(tokens[2]), t4);
        assert_eq!(values(&l, &arena), vec![1, 2, 3, 4, 5]);

        // Erasing returns the follower, other positions stay valid.
        let keep = Position::Item(t4);
        let next = l.erase(&mut arena, Position::Item(tokens[1]));
        assert_eq!(next, keep);
        assert_eq!(l.next(&arena, keep), Position::Item(tokens[2]));
        assert_eq!(l.prev(&arena, keep), Position::Item(t2));

        assert_eq!(l.erase(&mut arena, Position::Item(tokens[2])), Position::End);
        assert_eq!(values(&l, &arena), vec![1, 2, 4]);

        // Unlinking twice is a no-op.
        assert_eq!(l.unlink(&mut arena, tokens[2]), Position::End);
        assert_eq!(values(&l, &arena), vec![1, 2, 4]);

        l.clear(&mut arena);
    }

    #[test]
    fn test_list_splice() {
        let mut arena = Arena::new();
        let (mut a, ta) = filled(&mut arena, [1, 2, 3, 4]);
        let (mut b, tb) = filled(&mut arena, [10, 20]);

        // Move [2, 4) before 20.
        b.splice(
            &mut arena,
            Position::Item(tb[1]),
            &mut a,
            Position::Item(ta[1]),
            Position::Item(ta[3]),
        );
        assert_eq!(values(&a, &arena), vec![1, 4]);
        assert_eq!(values(&b, &arena), vec![10, 2, 3, 20]);

        a.clear(&mut arena);
        b.clear(&mut arena);
    }

    #[test]
    fn test_list_splice_whole_and_empty() {
        let mut arena = Arena::new();
        let (mut a, _) = filled(&mut arena, [1, 2]);
        let (mut b, _) = filled(&mut arena, [3, 4]);
        let mut empty = List::new();

        let (first, last) = (empty.begin(), empty.end());
        a.splice(&mut arena, Position::End, &mut empty, first, last);
        assert_eq!(values(&a, &arena), vec![1, 2]);

        let (first, last) = (b.begin(), b.end());
        a.splice(&mut arena, a.begin(), &mut b, first, last);
        assert!(b.is_empty());
        assert_eq!(values(&a, &arena), vec![3, 4, 1, 2]);

        let mut c = List::new();
        c.append(&mut arena, &mut a);
        assert!(a.is_empty());
        assert_eq!(values(&c, &arena), vec![3, 4, 1, 2]);
        assert_eq!(c.back(&arena).unwrap().val, 2);
        assert_eq!(c.prev(&arena, c.begin()), Position::End);

        c.clear(&mut arena);
    }

    #[test]
    fn test_list_splice_within() {
        let mut arena = Arena::new();
        let (mut l, t) = filled(&mut arena, [1, 2, 3, 4, 5]);

        // Move [4, end) to the front.
        l.splice_within(&mut arena, l.begin(), Position::Item(t[3]), Position::End);
        assert_eq!(values(&l, &arena), vec![4, 5, 1, 2, 3]);

        // Move [1, 2] to the back.
        l.splice_within(&mut arena, Position::End, Position::Item(t[0]), Position::Item(t[2]));
        assert_eq!(values(&l, &arena), vec![4, 5, 3, 1, 2]);

        // Splicing a range right before itself changes nothing.
        l.splice_within(&mut arena, Position::Item(t[0]), Position::Item(t[0]), Position::End);
        l.splice_within(&mut arena, Position::End, Position::Item(t[0]), Position::End);
        assert_eq!(values(&l, &arena), vec![4, 5, 3, 1, 2]);

        let forward = l.tokens(&arena).collect_vec();
        let mut pos = l.end();
        let mut rev = vec![];
        loop {
            pos = l.prev(&arena, pos);
            match pos {
                Position::Item(token) => rev.push(token),
                Position::End => break,
            }
        }
        rev.reverse();
        assert_eq!(rev, forward);

        l.clear(&mut arena);
    }

    #[test]
    fn test_list_clear_and_reuse() {
        let mut arena = Arena::new();
        let (mut l, tokens) = filled(&mut arena, 0..8);

        l.clear(&mut arena);
        assert!(l.is_empty());
        assert!(tokens.iter().all(|&token| !l.is_linked(&arena, token)));

        for &token in tokens.iter().rev() {
            l.push_back(&mut arena, token);
        }
        assert_eq!(values(&l, &arena), (0..8).rev().collect_vec());

        l.clear(&mut arena);
    }

    #[test]
    fn test_list_move() {
        let mut arena = Arena::new();
        let (mut l, _) = filled(&mut arena, [1, 2, 3]);

        let mut moved = std::mem::take(&mut l);
        assert!(l.is_empty());
        assert_eq!(values(&moved, &arena), vec![1, 2, 3]);
        assert_eq!(moved.prev(&arena, moved.end()), moved.back_token().map(Position::Item).unwrap());

        moved.clear(&mut arena);
    }

    #[test]
    fn test_list_long_splice() {
        let mut arena = Arena::with_capacity(100_001);
        let (mut long, tokens) = filled(&mut arena, 0..100_000);
        let (mut short, _) = filled(&mut arena, [u64::MAX]);

        // Both the range and the lists are long, splicing only rewires the boundaries.
        let (first, last) = (Position::Item(tokens[1]), Position::Item(tokens[99_999]));
        short.splice(&mut arena, short.begin(), &mut long, first, last);
        assert_eq!(values(&long, &arena), vec![0, 99_999]);
        assert_eq!(short.iter(&arena).count(), 99_999);
        assert_eq!(short.back(&arena).unwrap().val, u64::MAX);
        assert_eq!(short.front(&arena).unwrap().val, 1);

        long.clear(&mut arena);
        short.clear(&mut arena);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "already linked")]
    fn test_list_double_insert() {
        let mut arena = Arena::new();
        let (mut l, tokens) = filled(&mut arena, [1]);
        l.push_back(&mut arena, tokens[0]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "list dropped while still linked")]
    fn test_list_drop_non_empty() {
        let mut arena = Arena::new();
        let (l, _) = filled(&mut arena, [1, 2]);
        drop(l);
    }

    #[test]
    fn test_list_drop_after_clear() {
        let mut arena = Arena::new();
        let token = arena.insert(Item::new(1));
        {
            let mut l = List::<Item>::new();
            l.push_back(&mut arena, token);
            l.clear(&mut arena);
        }
        assert!(!Linked::<DefaultTag>::link(&arena[token]).is_linked());

        let mut l = List::<Item>::new();
        l.push_back(&mut arena, token);
        assert_eq!(values(&l, &arena), vec![1]);
        l.clear(&mut arena);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is not linked into this list")]
    fn test_list_unlink_foreign_element() {
        let mut arena = Arena::new();
        let (_a, ta) = filled(&mut arena, [1, 2]);
        let (mut b, _) = filled(&mut arena, [3]);
        b.unlink(&mut arena, ta[0]);
    }
}
