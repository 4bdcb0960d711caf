//! Forward cursors over a ring buffer.
//!
//! A cursor remembers the slot it points at and how many times it has been advanced since the
//! oldest item. Two cursors are compared by that count rather than by slot, because on a full
//! buffer the oldest slot and the one-past-the-newest slot coincide.

use std::{
    fmt::{self, Debug, Formatter},
    ptr,
};

use crate::{pos::next, RingBuffer};

/// A read-only forward cursor, created by [`RingBuffer::begin`] and [`RingBuffer::end`].
///
/// The cursor borrows its buffer, so the buffer cannot be mutated while the cursor is alive.
pub struct Cursor<'buf, T, const N: usize, const OVERWRITE: bool> {
    source: &'buf RingBuffer<T, N, OVERWRITE>,
    // Invariant: `index == source.tail() + count` (mod `N`)
    index: usize,
    count: usize,
}

impl<'buf, T, const N: usize, const OVERWRITE: bool> Cursor<'buf, T, N, OVERWRITE> {
    pub(crate) fn new(source: &'buf RingBuffer<T, N, OVERWRITE>, index: usize, count: usize) -> Self {
        Self {
            source,
            index,
            count,
        }
    }

    /// Returns the item under the cursor, or `None` once the cursor reached the end.
    pub fn get(&self) -> Option<&'buf T> {
        if self.is_end() {
            None
        } else {
            self.source.slot(self.index)
        }
    }

    /// Moves the cursor to the next newer item.
    pub fn advance(&mut self) -> &mut Self {
        self.index = next::<N>(self.index);
        self.count += 1;
        self
    }

    /// Returns `true` once the cursor has moved past the newest item.
    pub fn is_end(&self) -> bool {
        self.count >= self.source.len()
    }

    /// The physical slot the cursor points at.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// How many items lie between the oldest item and the cursor.
    pub const fn count(&self) -> usize {
        self.count
    }
}

impl<T, const N: usize, const OVERWRITE: bool> Clone for Cursor<'_, T, N, OVERWRITE> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize, const OVERWRITE: bool> Copy for Cursor<'_, T, N, OVERWRITE> {}

/// Cursors are equal when they belong to the same buffer and have been advanced equally far.
///
/// Cursors of two distinct buffers never compare equal, even when both are at their start.
///
/// # Examples
/// ```
/// # use ring_buffer::RingBuffer;
/// let a = RingBuffer::<i32, 3>::new();
/// let b = RingBuffer::<i32, 3>::new();
/// assert!(a.begin() == a.end());
/// assert!(a.begin() != b.begin());
/// ```
impl<T, const N: usize, const OVERWRITE: bool> PartialEq for Cursor<'_, T, N, OVERWRITE> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.source, other.source) && self.count == other.count
    }
}

impl<T, const N: usize, const OVERWRITE: bool> Eq for Cursor<'_, T, N, OVERWRITE> {}

impl<T, const N: usize, const OVERWRITE: bool> Debug for Cursor<'_, T, N, OVERWRITE> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("count", &self.count)
            .finish()
    }
}

/// A forward cursor with mutable access to the items, created by [`RingBuffer::begin_mut`].
///
/// # Examples
/// ```
/// # use ring_buffer::RingBuffer;
/// let mut buf = RingBuffer::<_, 3>::from([1, 2, 3]);
/// buf.push_back(4).unwrap();
///
/// let mut cursor = buf.begin_mut();
/// while let Some(item) = cursor.get_mut() {
///     *item *= 10;
///     cursor.advance();
/// }
/// assert_eq!(buf, [20, 30, 40]);
/// ```
pub struct CursorMut<'buf, T, const N: usize, const OVERWRITE: bool> {
    source: &'buf mut RingBuffer<T, N, OVERWRITE>,
    index: usize,
    count: usize,
}

impl<'buf, T, const N: usize, const OVERWRITE: bool> CursorMut<'buf, T, N, OVERWRITE> {
    pub(crate) fn new(source: &'buf mut RingBuffer<T, N, OVERWRITE>, index: usize) -> Self {
        Self {
            source,
            index,
            count: 0,
        }
    }

    /// Returns the item under the cursor, or `None` once the cursor reached the end.
    pub fn get(&self) -> Option<&T> {
        if self.is_end() {
            None
        } else {
            self.source.slot(self.index)
        }
    }

    /// Returns the item under the cursor mutably, or `None` once the cursor reached the end.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.is_end() {
            None
        } else {
            self.source.slot_mut(self.index)
        }
    }

    /// Moves the cursor to the next newer item.
    pub fn advance(&mut self) -> &mut Self {
        self.index = next::<N>(self.index);
        self.count += 1;
        self
    }

    /// Returns `true` once the cursor has moved past the newest item.
    pub fn is_end(&self) -> bool {
        self.count >= self.source.len()
    }

    /// The physical slot the cursor points at.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// How many items lie between the oldest item and the cursor.
    pub const fn count(&self) -> usize {
        self.count
    }
}

impl<T, const N: usize, const OVERWRITE: bool> Debug for CursorMut<'_, T, N, OVERWRITE> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("count", &self.count)
            .finish()
    }
}
