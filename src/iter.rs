use std::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    marker::PhantomData,
    mem::MaybeUninit,
};

use crate::{Pos, RingBuffer};

macro_rules! iter {
    ($name:ident(*$raw_mut:tt T, {$( $mut_:tt )?})) => {
        pub struct $name<'buf, T, const N: usize> {
            buf: *$raw_mut [MaybeUninit<T>; N],
            // Invariant: the slots in the window of `pos` are initialized and have not been yielded yet
            pos: Pos<N>,
            _marker: PhantomData<&'buf $($mut_)? [T; N]>,
        }

        impl<'buf, T, const N: usize> $name<'buf, T, N> {
            pub(crate) fn new(buf: &'buf $($mut_)? [MaybeUninit<T>; N], pos: Pos<N>) -> Self {
                Self {
                    buf,
                    pos,
                    _marker: PhantomData,
                }
            }

            /// Returns a pointer to the item in the given slot. Does not check that the item is initialized.
            #[inline(always)]
            fn slot_ptr(&self, slot: usize) -> *$raw_mut T {
                self.buf.cast::<T>().wrapping_add(slot)
            }
        }

        impl<'buf, T, const N: usize> Iterator for $name<'buf, T, N> {
            type Item = &'buf $($mut_)? T;

            fn next(&mut self) -> Option<Self::Item> {
                if self.pos.is_empty() {
                    return None;
                }
                let item = self.slot_ptr(self.pos.tail());
                // SAFETY: the window is non-empty
                unsafe { self.pos.pop_front() };
                // SAFETY: the slot was in the window, and leaving the window means it is yielded only once
                Some(unsafe { & $($mut_)? *item })
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                (self.pos.len(), Some(self.pos.len()))
            }

            fn count(self) -> usize {
                self.pos.len()
            }

            fn nth(&mut self, n: usize) -> Option<Self::Item> {
                let skipped = n.min(self.pos.len());
                // SAFETY: `skipped <= self.pos.len()`
                unsafe { self.pos.skip(skipped) };
                self.next()
            }
        }

        impl<T, const N: usize> DoubleEndedIterator for $name<'_, T, N> {
            fn next_back(&mut self) -> Option<Self::Item> {
                if self.pos.is_empty() {
                    return None;
                }
                let item = self.slot_ptr(self.pos.back());
                // SAFETY: the window is non-empty
                unsafe { self.pos.pop_back() };
                // SAFETY: see `next`
                Some(unsafe { & $($mut_)? *item })
            }
        }

        impl<T, const N: usize> FusedIterator for $name<'_, T, N> {}

        impl<T, const N: usize> ExactSizeIterator for $name<'_, T, N> {
            fn len(&self) -> usize {
                self.pos.len()
            }
        }

        impl<T, const N: usize> Debug for $name<'_, T, N> {
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("remaining", &self.pos.len())
                    .finish_non_exhaustive()
            }
        }
    };
}

iter!(Iter(*const T, {/* no mut */}));
iter!(IterMut(*mut T, {mut}));

impl<T, const N: usize> Clone for Iter<'_, T, N> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf,
            pos: self.pos,
            _marker: PhantomData,
        }
    }
}

unsafe impl<T: Sync, const N: usize> Sync for Iter<'_, T, N> {}
unsafe impl<T: Sync, const N: usize> Send for Iter<'_, T, N> {}

unsafe impl<T: Sync, const N: usize> Sync for IterMut<'_, T, N> {}
unsafe impl<T: Send, const N: usize> Send for IterMut<'_, T, N> {}

/// An owning iterator over the items of a ring buffer, oldest first.
///
/// Items not yielded are dropped together with the iterator.
pub struct IntoIter<T, const N: usize, const OVERWRITE: bool> {
    buf: RingBuffer<T, N, OVERWRITE>,
}

impl<T, const N: usize, const OVERWRITE: bool> IntoIter<T, N, OVERWRITE> {
    pub(crate) fn new(buf: RingBuffer<T, N, OVERWRITE>) -> Self {
        Self { buf }
    }

    /// Returns the items not yet yielded as a ring buffer.
    pub fn into_inner(self) -> RingBuffer<T, N, OVERWRITE> {
        self.buf
    }
}

impl<T, const N: usize, const OVERWRITE: bool> Iterator for IntoIter<T, N, OVERWRITE> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.buf.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buf.len(), Some(self.buf.len()))
    }
}

impl<T, const N: usize, const OVERWRITE: bool> DoubleEndedIterator for IntoIter<T, N, OVERWRITE> {
    fn next_back(&mut self) -> Option<T> {
        self.buf.pop_back()
    }
}

impl<T, const N: usize, const OVERWRITE: bool> FusedIterator for IntoIter<T, N, OVERWRITE> {}

impl<T, const N: usize, const OVERWRITE: bool> ExactSizeIterator for IntoIter<T, N, OVERWRITE> {}

impl<T: Clone, const N: usize, const OVERWRITE: bool> Clone for IntoIter<T, N, OVERWRITE> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
        }
    }
}

impl<T: Debug, const N: usize, const OVERWRITE: bool> Debug for IntoIter<T, N, OVERWRITE> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.buf).finish()
    }
}
