//! A fixed-capacity ring buffer that stores its items inline and reuses its slots cyclically.
//!
//! ```
//! use ring_buffer::RingBuffer;
//!
//! // Overwriting buffer (the default policy): the oldest item is evicted when full.
//! let mut buf = RingBuffer::<_, 3>::new();
//! buf.extend([1, 2, 3, 4]);
//! assert_eq!(buf, [2, 3, 4]);
//!
//! // Rejecting buffer: pushes into a full buffer hand the item back.
//! let mut buf = RingBuffer::<_, 3, false>::new();
//! buf.extend([1, 2, 3]);
//! assert_eq!(buf.push_back(4).unwrap_err().into_inner(), 4);
//! assert_eq!(buf, [1, 2, 3]);
//! ```

pub mod cursor;
pub mod error;
pub mod iter;
mod pos;

use std::{
    cmp::Ordering,
    fmt::{Debug, Formatter},
    hash::{Hash, Hasher},
    mem::{self, ManuallyDrop, MaybeUninit},
    ops::{Index, IndexMut},
    ptr,
};

use log::trace;

pub use self::{
    cursor::{Cursor, CursorMut},
    error::{BufferFullError, EmptyBufferError, PushError},
    iter::{IntoIter, Iter, IterMut},
};

use self::pos::Pos;

/// Ring buffer that can hold up to `N` items of type `T`.
///
/// When `OVERWRITE` is `true` (the default), pushing into a full buffer evicts the oldest item.
/// Otherwise the push is rejected and the buffer is left untouched.
///
/// `N` must be greater than 0; constructing a zero-capacity buffer fails to compile:
///
/// ```compile_fail
/// # use ring_buffer::RingBuffer;
/// let buf = RingBuffer::<i32, 0>::new();
/// ```
pub struct RingBuffer<T, const N: usize, const OVERWRITE: bool = true> {
    // Invariant: the slots in the live window of `pos` are initialized, all others are not
    buf: [MaybeUninit<T>; N],
    pos: Pos<N>,
}

impl<T, const N: usize, const OVERWRITE: bool> Default for RingBuffer<T, N, OVERWRITE> {
    fn default() -> Self {
        Self::new()
    }
}

/// # Safety
/// Every item in `slice` must be initialized.
#[inline(always)]
unsafe fn slice_assume_init_ref<T>(slice: &[MaybeUninit<T>]) -> &[T] {
    &*(slice as *const [MaybeUninit<T>] as *const [T])
}

/// # Safety
/// Every item in `slice` must be initialized.
#[inline(always)]
unsafe fn slice_assume_init_mut<T>(slice: &mut [MaybeUninit<T>]) -> &mut [T] {
    &mut *(slice as *mut [MaybeUninit<T>] as *mut [T])
}

impl<T, const N: usize, const OVERWRITE: bool> RingBuffer<T, N, OVERWRITE> {
    /// Creates a new empty ring buffer.
    pub const fn new() -> Self {
        const { assert!(N > 0, "ring buffer capacity must be greater than zero") };
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            pos: Pos::zero(),
        }
    }

    /// Returns the number of items in the ring buffer.
    pub const fn len(&self) -> usize {
        self.pos.len()
    }

    /// Returns `true` if the ring buffer is empty.
    pub const fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    /// Returns `true` if the ring buffer is full.
    pub const fn is_full(&self) -> bool {
        self.pos.is_full()
    }

    /// Returns the number of items the ring buffer can hold, `N`.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if pushing into a full buffer evicts the oldest item.
    pub const fn overwrites(&self) -> bool {
        OVERWRITE
    }

    /// Returns the number of items that can be added to the ring buffer before it is full.
    ///
    /// # Examples
    /// ```
    /// # use ring_buffer::RingBuffer;
    /// let mut buf = RingBuffer::<_, 3>::new();
    /// assert_eq!(buf.remaining(), 3);
    /// buf.extend([0, 1]);
    /// assert_eq!(buf.remaining(), 1);
    /// buf.pop_front();
    /// assert_eq!(buf.remaining(), 2);
    /// ```
    pub const fn remaining(&self) -> usize {
        N - self.len()
    }

    /// Returns the slot the next push writes to.
    pub const fn head(&self) -> usize {
        self.pos.head()
    }

    /// Returns the slot holding the oldest item, or where it will be stored if the buffer is empty.
    pub const fn tail(&self) -> usize {
        self.pos.tail()
    }

    /// Returns a reference to the item in the given slot without checking that it is live.
    ///
    /// # Safety
    /// `slot` must be inside the live window.
    #[inline(always)]
    unsafe fn slot_unchecked(&self, slot: usize) -> &T {
        debug_assert!(self.pos.is_live(slot));
        self.buf.get_unchecked(slot).assume_init_ref()
    }

    /// # Safety
    /// `slot` must be inside the live window.
    #[inline(always)]
    unsafe fn slot_unchecked_mut(&mut self, slot: usize) -> &mut T {
        debug_assert!(self.pos.is_live(slot));
        self.buf.get_unchecked_mut(slot).assume_init_mut()
    }

    /// Writes an item to the vacant slot at `head`.
    ///
    /// # Safety
    /// The buffer must not be full.
    #[inline]
    unsafe fn push_unchecked(&mut self, item: T) {
        debug_assert!(!self.is_full());
        self.buf.get_unchecked_mut(self.pos.head()).write(item);
        self.pos.push_back();
    }

    /// Replaces the oldest item with `item`, which becomes the newest. Returns the evicted item.
    ///
    /// # Safety
    /// The buffer must be full.
    #[inline]
    unsafe fn overwrite_unchecked(&mut self, item: T) -> T {
        debug_assert!(self.is_full());
        // full means `head == tail`
        let evicted = mem::replace(
            self.buf.get_unchecked_mut(self.pos.tail()),
            MaybeUninit::new(item),
        );
        self.pos.rotate();
        evicted.assume_init()
    }

    fn rejects_push(&self) -> bool {
        let rejects = !OVERWRITE && self.is_full();
        if rejects {
            trace!("ring buffer full, rejecting item (capacity {})", N);
        }
        rejects
    }

    /// Stores `item`, evicting the oldest item if the buffer is full.
    fn insert(&mut self, item: T) {
        if self.is_full() {
            // SAFETY: buffer is full
            let evicted = unsafe { self.overwrite_unchecked(item) };
            trace!("ring buffer full, evicting oldest item (capacity {})", N);
            // dropped only after the indices are consistent again
            drop(evicted);
        } else {
            // SAFETY: buffer is not full
            unsafe { self.push_unchecked(item) };
        }
    }

    /// Adds an item to the back of the ring buffer.
    ///
    /// If the buffer [is full](Self::is_full), an overwriting buffer drops its oldest item to make room,
    /// while a non-overwriting buffer returns the item inside a [`BufferFullError`] and stays unchanged.
    ///
    /// # Examples
    /// ```
    /// # use ring_buffer::RingBuffer;
    /// let mut buf = RingBuffer::<_, 2>::new();
    /// assert!(buf.push_back(0).is_ok());
    /// assert!(buf.push_back(1).is_ok());
    /// assert!(buf.push_back(2).is_ok());
    /// assert_eq!(buf, [1, 2]);
    ///
    /// let mut buf = RingBuffer::<_, 2, false>::from([0, 1]);
    /// assert_eq!(buf.push_back(2).unwrap_err().into_inner(), 2);
    /// assert_eq!(buf, [0, 1]);
    /// ```
    #[inline]
    pub fn push_back(&mut self, item: T) -> Result<(), BufferFullError<T>> {
        if self.rejects_push() {
            return Err(BufferFullError::new(item));
        }
        self.insert(item);
        Ok(())
    }

    /// Adds an item produced by `f` to the back of the ring buffer.
    ///
    /// `f` runs before any slot is touched, so if it fails (or panics) the buffer is exactly as it was.
    /// If the buffer is full and does not overwrite, `f` is not called at all.
    ///
    /// # Examples
    /// ```
    /// # use ring_buffer::{PushError, RingBuffer};
    /// let mut buf = RingBuffer::<u8, 2, false>::new();
    /// assert!(buf.try_push_back_with(|| "7".parse()).is_ok());
    /// assert!(matches!(
    ///     buf.try_push_back_with(|| "x".parse()),
    ///     Err(PushError::Construct(_))
    /// ));
    /// assert_eq!(buf, [7]);
    ///
    /// buf.push_back(8).unwrap();
    /// let mut called = false;
    /// let res = buf.try_push_back_with(|| {
    ///     called = true;
    ///     "9".parse()
    /// });
    /// assert!(matches!(res, Err(PushError::Full)));
    /// assert!(!called);
    /// ```
    pub fn try_push_back_with<E, F>(&mut self, f: F) -> Result<(), PushError<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if self.rejects_push() {
            return Err(PushError::Full);
        }
        let item = f().map_err(PushError::Construct)?;
        self.insert(item);
        Ok(())
    }

    /// Removes the oldest item and returns it, or `None` if the buffer [is empty](Self::is_empty).
    ///
    /// # Examples
    /// ```
    /// # use ring_buffer::RingBuffer;
    /// let mut buf = RingBuffer::<_, 3>::new();
    /// assert_eq!(buf.pop_front(), None);
    /// buf.extend([0, 1]);
    /// assert_eq!(buf.pop_front(), Some(0));
    /// assert_eq!(buf.pop_front(), Some(1));
    /// assert_eq!(buf.pop_front(), None);
    /// ```
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY: buffer is non-empty, so the slot at `tail` is live; it is released right below
        let item = unsafe { self.buf.get_unchecked(self.pos.tail()).assume_init_read() };
        // SAFETY: buffer is non-empty
        unsafe { self.pos.pop_front() };
        Some(item)
    }

    /// Removes the newest item and returns it, or `None` if the buffer [is empty](Self::is_empty).
    ///
    /// # Examples
    /// ```
    /// # use ring_buffer::RingBuffer;
    /// let mut buf = RingBuffer::<_, 3>::from([0, 1]);
    /// assert_eq!(buf.pop_back(), Some(1));
    /// buf.push_back(2).unwrap();
    /// assert_eq!(buf, [0, 2]);
    /// ```
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY: buffer is non-empty, so the slot before `head` is live; it is released right below
        let item = unsafe { self.buf.get_unchecked(self.pos.back()).assume_init_read() };
        // SAFETY: buffer is non-empty
        unsafe { self.pos.pop_back() };
        Some(item)
    }

    /// Returns a reference to the oldest item, or `None` if the buffer is empty.
    ///
    /// # Examples
    /// ```
    /// # use ring_buffer::RingBuffer;
    /// let mut buf = RingBuffer::<_, 3>::new();
    /// assert_eq!(buf.front(), None);
    /// buf.extend([1, 2, 3, 4]);
    /// assert_eq!(buf.front(), Some(&2));
    /// ```
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a mutable reference to the oldest item, or `None` if the buffer is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a reference to the newest item, or `None` if the buffer is empty.
    ///
    /// # Examples
    /// ```
    /// # use ring_buffer::RingBuffer;
    /// let mut buf = RingBuffer::<_, 3>::new();
    /// assert_eq!(buf.back(), None);
    /// buf.extend([1, 2, 3, 4]);
    /// assert_eq!(buf.back(), Some(&4));
    /// ```
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            // SAFETY: buffer is non-empty, so the slot before `head` is live
            Some(unsafe { self.slot_unchecked(self.pos.back()) })
        }
    }

    /// Returns a mutable reference to the newest item, or `None` if the buffer is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            None
        } else {
            // SAFETY: buffer is non-empty, so the slot before `head` is live
            Some(unsafe { self.slot_unchecked_mut(self.pos.back()) })
        }
    }

    /// Like [`front`](Self::front), but reports an empty buffer as an error.
    pub fn try_front(&self) -> Result<&T, EmptyBufferError> {
        self.front().ok_or(EmptyBufferError)
    }

    /// Like [`back`](Self::back), but reports an empty buffer as an error.
    pub fn try_back(&self) -> Result<&T, EmptyBufferError> {
        self.back().ok_or(EmptyBufferError)
    }

    /// Returns a reference to the item stored in physical slot `slot`, or `None` if that slot holds no item.
    ///
    /// Slots are storage positions, not logical positions: slot numbering shifts as items are pushed and popped.
    /// Use [`get`](Self::get) to access items by age.
    ///
    /// # Examples
    /// ```
    /// # use ring_buffer::RingBuffer;
    /// let mut buf = RingBuffer::<_, 3>::from([0, 1, 2]);
    /// buf.push_back(3).unwrap();
    /// assert_eq!(buf.slot(0), Some(&3));
    /// assert_eq!(buf.slot(1), Some(&1));
    /// buf.pop_front();
    /// assert_eq!(buf.slot(1), None);
    /// ```
    pub fn slot(&self, slot: usize) -> Option<&T> {
        // SAFETY: the slot was just checked to be live
        self.pos
            .is_live(slot)
            .then(|| unsafe { self.slot_unchecked(slot) })
    }

    /// Returns a mutable reference to the item stored in physical slot `slot`, or `None` if that slot holds no item.
    pub fn slot_mut(&mut self, slot: usize) -> Option<&mut T> {
        if self.pos.is_live(slot) {
            // SAFETY: the slot was just checked to be live
            Some(unsafe { self.slot_unchecked_mut(slot) })
        } else {
            None
        }
    }

    /// Returns a reference to the item at the given logical index (0 is the oldest), or `None` if the index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use ring_buffer::RingBuffer;
    /// let buf = RingBuffer::<_, 3>::from([0, 1]);
    /// assert_eq!(buf.get(0), Some(&0));
    /// assert_eq!(buf.get(1), Some(&1));
    /// assert_eq!(buf.get(2), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            None
        } else {
            // SAFETY: `index < len`, so its slot is live
            Some(unsafe { self.slot_unchecked(self.pos.physical(index)) })
        }
    }

    /// Returns a mutable reference to the item at the given logical index, or `None` if the index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use ring_buffer::RingBuffer;
    /// let mut buf = RingBuffer::<_, 3>::from([1, 2]);
    /// *buf.get_mut(0).unwrap() *= 2;
    /// *buf.get_mut(1).unwrap() *= 3;
    /// assert_eq!(buf.get_mut(2), None);
    /// assert_eq!(buf, [2, 6]);
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len() {
            None
        } else {
            // SAFETY: `index < len`, so its slot is live
            Some(unsafe { self.slot_unchecked_mut(self.pos.physical(index)) })
        }
    }

    /// Returns a cursor at the oldest item.
    pub fn begin(&self) -> Cursor<'_, T, N, OVERWRITE> {
        Cursor::new(self, self.pos.tail(), 0)
    }

    /// Returns a cursor one past the newest item.
    ///
    /// # Examples
    /// ```
    /// # use ring_buffer::RingBuffer;
    /// let mut buf = RingBuffer::<_, 4>::from([1, 2, 3, 4]);
    /// buf.pop_front();
    /// buf.pop_front();
    /// buf.extend([5, 6]);
    ///
    /// let mut seen = Vec::new();
    /// let (mut it, end) = (buf.begin(), buf.end());
    /// while it != end {
    ///     seen.push(*it.get().unwrap());
    ///     it.advance();
    /// }
    /// assert_eq!(seen, [3, 4, 5, 6]);
    /// ```
    pub fn end(&self) -> Cursor<'_, T, N, OVERWRITE> {
        Cursor::new(self, self.pos.head(), self.len())
    }

    /// Returns a mutable cursor at the oldest item.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T, N, OVERWRITE> {
        let tail = self.pos.tail();
        CursorMut::new(self, tail)
    }

    /// Returns an iterator over the items in the ring buffer, oldest first.
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter::new(&self.buf, self.pos)
    }

    /// Returns an iterator over mutable references to the items in the ring buffer, oldest first.
    pub fn iter_mut(&mut self) -> IterMut<'_, T, N> {
        IterMut::new(&mut self.buf, self.pos)
    }

    /// Returns the live items as two slices, oldest first.
    ///
    /// If the items wrap around the end of the storage, the second slice holds the wrapped part; otherwise it is empty.
    ///
    /// # Examples
    /// ```
    /// # use ring_buffer::RingBuffer;
    /// let mut buf = RingBuffer::<_, 3>::from([0, 1, 2]);
    /// assert_eq!(buf.as_slices(), (&[0, 1, 2][..], &[][..]));
    /// buf.push_back(3).unwrap();
    /// assert_eq!(buf.as_slices(), (&[1, 2][..], &[3][..]));
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let tail = self.pos.tail();
        // SAFETY: both ranges lie inside the live window, which never extends past `N`
        unsafe {
            let front = self.buf.get_unchecked(tail..tail + self.pos.front_len());
            let back = self.buf.get_unchecked(..self.pos.back_len());
            (slice_assume_init_ref(front), slice_assume_init_ref(back))
        }
    }

    /// Returns the live items as two mutable slices, oldest first.
    ///
    /// # Examples
    /// ```
    /// # use ring_buffer::RingBuffer;
    /// let mut buf = RingBuffer::<_, 3>::from([0, 1, 2]);
    /// buf.push_back(3).unwrap();
    /// let (front, back) = buf.as_mut_slices();
    /// front.copy_from_slice(&[4, 5]);
    /// back.copy_from_slice(&[6]);
    /// assert_eq!(buf, [4, 5, 6]);
    /// ```
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let front_len = self.pos.front_len();
        let back_len = self.pos.back_len();
        let (back, front) = self.buf.split_at_mut(self.pos.tail());
        // SAFETY: the wrapped part never reaches `tail`, and the front part ends at or before `N`
        unsafe {
            (
                slice_assume_init_mut(front.get_unchecked_mut(..front_len)),
                slice_assume_init_mut(back.get_unchecked_mut(..back_len)),
            )
        }
    }

    /// Drops every item, oldest first, and resets the buffer to its freshly constructed state.
    ///
    /// # Examples
    /// ```
    /// # use ring_buffer::RingBuffer;
    /// let mut buf = RingBuffer::<_, 3>::from([1, 2, 3]);
    /// buf.clear();
    /// assert!(buf.is_empty());
    /// assert_eq!((buf.head(), buf.tail()), (0, 0));
    /// ```
    pub fn clear(&mut self) {
        if mem::needs_drop::<T>() {
            while let Some(item) = self.pop_front() {
                drop(item);
            }
        }
        self.pos = Pos::zero();
    }

    /// Moves the contents out into a new buffer, leaving `self` empty.
    ///
    /// # Examples
    /// ```
    /// # use ring_buffer::RingBuffer;
    /// let mut buf = RingBuffer::<_, 3>::from([1, 2, 3]);
    /// buf.push_back(4).unwrap();
    /// let moved = buf.take();
    /// assert_eq!(moved, [2, 3, 4]);
    /// assert!(buf.is_empty());
    /// ```
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchanges the contents of two buffers, including their slot layouts.
    ///
    /// No item is cloned or dropped.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Copies the contents of the ring buffer into a `Vec`, oldest first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Replaces the contents of `self` with a bitwise copy of `source`, keeping the source's slot layout.
    ///
    /// The live window is copied in at most two contiguous ranges.
    ///
    /// # Examples
    /// ```
    /// # use ring_buffer::RingBuffer;
    /// let mut src = RingBuffer::<_, 3>::from([1, 2, 3]);
    /// src.push_back(4).unwrap();
    /// let mut dst = RingBuffer::<_, 3>::from([9]);
    /// dst.copy_from(&src);
    /// assert_eq!(dst, [2, 3, 4]);
    /// assert_eq!((dst.head(), dst.tail()), (src.head(), src.tail()));
    /// ```
    pub fn copy_from(&mut self, source: &Self)
    where
        T: Copy,
    {
        // `T: Copy` has no drop glue, so live slots of `self` can be overwritten in place
        let (front, back) = source.as_slices();
        let dst = self.buf.as_mut_ptr().cast::<T>();
        // SAFETY: `self` and `source` are distinct borrows, and both ranges fit in `N` slots
        unsafe {
            dst.add(source.pos.tail())
                .copy_from_nonoverlapping(front.as_ptr(), front.len());
            dst.copy_from_nonoverlapping(back.as_ptr(), back.len());
        }
        self.pos = source.pos;
    }
}

impl<T, const N: usize> RingBuffer<T, N, true> {
    /// Adds an item to the back of an overwriting ring buffer, dropping the oldest item if the buffer is full.
    ///
    /// Unlike [`push_back`](Self::push_back) this cannot fail, so it is only available when `OVERWRITE` is `true`.
    ///
    /// # Examples
    /// ```
    /// # use ring_buffer::RingBuffer;
    /// let mut buf = RingBuffer::<_, 2>::new();
    /// buf.push(0);
    /// buf.push(1);
    /// buf.push(2);
    /// assert_eq!(buf, [1, 2]);
    /// ```
    ///
    /// ```compile_fail
    /// # use ring_buffer::RingBuffer;
    /// let mut buf = RingBuffer::<i32, 2, false>::new();
    /// buf.push(0);
    /// ```
    #[inline]
    pub fn push(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T: Clone, const N: usize, const OVERWRITE: bool> RingBuffer<T, N, OVERWRITE> {
    /// Clones the items of `source` into `self` so that each lands in the same slot as in `source`.
    ///
    /// `self` must be empty. If a `clone()` panics, every item cloned so far is dropped and `self` is left empty.
    fn clone_window_from(&mut self, source: &Self) {
        debug_assert!(self.is_empty());

        struct Rollback<'a, T, const N: usize, const OVERWRITE: bool>(
            &'a mut RingBuffer<T, N, OVERWRITE>,
        );

        impl<T, const N: usize, const OVERWRITE: bool> Drop for Rollback<'_, T, N, OVERWRITE> {
            fn drop(&mut self) {
                self.0.clear();
            }
        }

        // SAFETY: `source.tail() < N`
        self.pos = unsafe { Pos::empty_at(source.pos.tail()) };

        let rollback = Rollback(self);
        let (front, back) = source.as_slices();
        for item in front.iter().chain(back) {
            // SAFETY: `self` started empty and receives `source.len() <= N` items
            unsafe { rollback.0.push_unchecked(item.clone()) };
        }
        debug_assert_eq!(rollback.0.pos, source.pos);

        // every clone succeeded
        mem::forget(rollback);
    }
}

/// Clones keep the slot layout of the original: `head` and `tail` are copied verbatim.
///
/// # Examples
/// ```
/// # use ring_buffer::RingBuffer;
/// let mut buf = RingBuffer::<_, 3>::new();
/// buf.extend((0..5).map(|i| vec![i]));
/// let copy = buf.clone();
/// assert_eq!(copy, buf);
/// assert_eq!((copy.head(), copy.tail()), (buf.head(), buf.tail()));
/// ```
impl<T: Clone, const N: usize, const OVERWRITE: bool> Clone for RingBuffer<T, N, OVERWRITE> {
    fn clone(&self) -> Self {
        let mut buf = Self::new();
        buf.clone_window_from(self);
        buf
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.clone_window_from(source);
    }
}

impl<T, const N: usize, const OVERWRITE: bool> Drop for RingBuffer<T, N, OVERWRITE> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Exchanges the contents of two ring buffers. Same as [`RingBuffer::swap`].
pub fn swap<T, const N: usize, const OVERWRITE: bool>(
    a: &mut RingBuffer<T, N, OVERWRITE>,
    b: &mut RingBuffer<T, N, OVERWRITE>,
) {
    a.swap(b);
}

/// # Examples
///
/// ```rust
/// # use ring_buffer::RingBuffer;
/// assert!(RingBuffer::<_, 3>::from([0, 1, 2]).iter().eq(&[0, 1, 2]));
/// assert!(RingBuffer::<_, 3>::from([0, 1]).iter().eq(&[0, 1]));
/// ```
///
/// ```compile_fail
/// # use ring_buffer::RingBuffer;
/// RingBuffer::<_, 3>::from([0, 1, 2, 3]);
/// ```
impl<T, const N: usize, const OVERWRITE: bool, const M: usize> From<[T; M]>
    for RingBuffer<T, N, OVERWRITE>
{
    fn from(arr: [T; M]) -> Self {
        const { assert!(M <= N, "array is longer than the ring buffer capacity") };
        let arr = ManuallyDrop::new(arr);
        let mut buf = Self::new();
        // SAFETY: `M <= N`, and ownership of the items moves to `buf` since `arr` is never dropped
        unsafe {
            ptr::copy_nonoverlapping(
                arr.as_ptr().cast::<MaybeUninit<T>>(),
                buf.buf.as_mut_ptr(),
                M,
            );
            buf.pos = Pos::filled(M);
        }
        buf
    }
}

/// Pushes every item of the iterator in turn.
///
/// An overwriting buffer keeps the last `N` items; a non-overwriting buffer keeps the first items that fit and
/// drops the rest.
///
/// # Examples
/// ```
/// # use ring_buffer::RingBuffer;
/// let mut buf = RingBuffer::<_, 3>::new();
/// buf.extend([0, 1]);
/// assert_eq!(buf, [0, 1]);
/// buf.extend([2, 3]);
/// assert_eq!(buf, [1, 2, 3]);
///
/// let mut buf = RingBuffer::<_, 3, false>::new();
/// buf.extend([0, 1, 2, 3]);
/// assert_eq!(buf, [0, 1, 2]);
/// ```
impl<T, const N: usize, const OVERWRITE: bool> Extend<T> for RingBuffer<T, N, OVERWRITE> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            // a rejected item is dropped here
            let _ = self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a, const N: usize, const OVERWRITE: bool> Extend<&'a T>
    for RingBuffer<T, N, OVERWRITE>
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

/// Creates a new ring buffer by pushing every item of the iterator, with the same overflow behaviour as `extend`.
///
/// # Examples
/// ```
/// # use ring_buffer::RingBuffer;
/// assert_eq!(RingBuffer::<_, 3>::from_iter([0, 1]), [0, 1]);
/// assert_eq!((0..5).collect::<RingBuffer<_, 3>>(), [2, 3, 4]);
/// assert_eq!((0..5).collect::<RingBuffer<_, 3, false>>(), [0, 1, 2]);
/// ```
impl<T, const N: usize, const OVERWRITE: bool> FromIterator<T> for RingBuffer<T, N, OVERWRITE> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf = Self::new();
        buf.extend(iter);
        buf
    }
}

/// Accesses the item in a physical slot, see [`RingBuffer::slot`].
///
/// # Panics
/// Panics if the slot holds no item.
impl<T, const N: usize, const OVERWRITE: bool> Index<usize> for RingBuffer<T, N, OVERWRITE> {
    type Output = T;

    #[track_caller]
    fn index(&self, slot: usize) -> &T {
        match self.slot(slot) {
            Some(item) => item,
            None => panic!(
                "slot {slot} holds no item (tail {}, len {})",
                self.tail(),
                self.len()
            ),
        }
    }
}

impl<T, const N: usize, const OVERWRITE: bool> IndexMut<usize> for RingBuffer<T, N, OVERWRITE> {
    #[track_caller]
    fn index_mut(&mut self, slot: usize) -> &mut T {
        let (tail, len) = (self.tail(), self.len());
        match self.slot_mut(slot) {
            Some(item) => item,
            None => panic!("slot {slot} holds no item (tail {tail}, len {len})"),
        }
    }
}

impl<T, U, const N: usize, const M: usize, const OVERWRITE: bool, const OVERWRITE2: bool>
    PartialEq<RingBuffer<U, M, OVERWRITE2>> for RingBuffer<T, N, OVERWRITE>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &RingBuffer<U, M, OVERWRITE2>) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T: Eq, const N: usize, const OVERWRITE: bool> Eq for RingBuffer<T, N, OVERWRITE> {}

impl<T: PartialEq, const N: usize, const OVERWRITE: bool> PartialEq<[T]>
    for RingBuffer<T, N, OVERWRITE>
{
    fn eq(&self, other: &[T]) -> bool {
        self.iter().eq(other)
    }
}

impl<T: PartialEq, const N: usize, const OVERWRITE: bool> PartialEq<&[T]>
    for RingBuffer<T, N, OVERWRITE>
{
    fn eq(&self, other: &&[T]) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, const N: usize, const OVERWRITE: bool, const M: usize> PartialEq<[T; M]>
    for RingBuffer<T, N, OVERWRITE>
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.iter().eq(other)
    }
}

impl<T: PartialEq, const N: usize, const OVERWRITE: bool> PartialEq<Vec<T>>
    for RingBuffer<T, N, OVERWRITE>
{
    fn eq(&self, other: &Vec<T>) -> bool {
        self.iter().eq(other)
    }
}

impl<T: PartialOrd, const N: usize, const OVERWRITE: bool> PartialOrd
    for RingBuffer<T, N, OVERWRITE>
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, const N: usize, const OVERWRITE: bool> Ord for RingBuffer<T, N, OVERWRITE> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, const N: usize, const OVERWRITE: bool> Hash for RingBuffer<T, N, OVERWRITE> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|item| item.hash(state))
    }
}

impl<T: Debug, const N: usize, const OVERWRITE: bool> Debug for RingBuffer<T, N, OVERWRITE> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const N: usize, const OVERWRITE: bool> IntoIterator for RingBuffer<T, N, OVERWRITE> {
    type Item = T;
    type IntoIter = IntoIter<T, N, OVERWRITE>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'buf, T, const N: usize, const OVERWRITE: bool> IntoIterator
    for &'buf RingBuffer<T, N, OVERWRITE>
{
    type Item = &'buf T;
    type IntoIter = Iter<'buf, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'buf, T, const N: usize, const OVERWRITE: bool> IntoIterator
    for &'buf mut RingBuffer<T, N, OVERWRITE>
{
    type Item = &'buf mut T;
    type IntoIter = IterMut<'buf, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
