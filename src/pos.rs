/// Index bookkeeping for a ring of `CAP` slots.
///
/// The live window is `[tail, tail + len) mod CAP`; `head` is the slot the next push writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pos<const CAP: usize> {
    // Invariant: `head == (tail + len) % CAP`
    head: usize,
    // Invariant: `tail < CAP`
    tail: usize,
    // Invariant: `len <= CAP`
    len: usize,
}

impl<const CAP: usize> Pos<CAP> {
    pub const fn zero() -> Self {
        Self {
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// An empty window whose first push lands on `tail`.
    ///
    /// # Safety
    /// `tail` must be less than `CAP`.
    pub const unsafe fn empty_at(tail: usize) -> Self {
        debug_assert!(tail < CAP);
        Self {
            head: tail,
            tail,
            len: 0,
        }
    }

    /// A window of `len` items starting at slot 0.
    ///
    /// # Safety
    /// `len` must be less than or equal to `CAP`.
    pub const unsafe fn filled(len: usize) -> Self {
        debug_assert!(len <= CAP);
        Self {
            head: len % CAP,
            tail: 0,
            len,
        }
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub const fn head(&self) -> usize {
        self.head
    }

    #[inline(always)]
    pub const fn tail(&self) -> usize {
        self.tail
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.len == CAP
    }

    /// Slot holding the newest item. Only meaningful when the window is non-empty.
    #[inline(always)]
    pub const fn back(&self) -> usize {
        wrap_sub::<CAP>(self.head, 1)
    }

    #[inline(always)]
    pub const fn front_len(&self) -> usize {
        self.len - self.back_len()
    }

    /// Number of live items that wrapped around to the start of the storage.
    #[inline(always)]
    pub const fn back_len(&self) -> usize {
        (self.tail + self.len).saturating_sub(CAP)
    }

    /// Returns the slot corresponding to the given logical index (0 is the oldest item).
    /// The returned slot is in bounds but not necessarily live.
    #[inline(always)]
    pub const fn physical(&self, index: usize) -> usize {
        (self.tail + index) % CAP
    }

    /// Returns `true` if `slot` lies inside the live window.
    #[inline]
    pub const fn is_live(&self, slot: usize) -> bool {
        slot < CAP && wrap_sub::<CAP>(slot, self.tail) < self.len
    }

    /// Claims the slot at `head`.
    ///
    /// # Safety
    /// The window must not be full.
    #[inline(always)]
    pub unsafe fn push_back(&mut self) {
        debug_assert!(!self.is_full());
        self.head = next::<CAP>(self.head);
        self.len += 1;
    }

    /// Releases the slot at `tail`.
    ///
    /// # Safety
    /// The window must not be empty.
    #[inline(always)]
    pub unsafe fn pop_front(&mut self) {
        debug_assert!(!self.is_empty());
        self.tail = next::<CAP>(self.tail);
        self.len -= 1;
    }

    /// Releases the slot just before `head`.
    ///
    /// # Safety
    /// The window must not be empty.
    #[inline(always)]
    pub unsafe fn pop_back(&mut self) {
        debug_assert!(!self.is_empty());
        self.head = self.back();
        self.len -= 1;
    }

    /// Releases the `n` oldest slots.
    ///
    /// # Safety
    /// `n` must be less than or equal to the window length.
    #[inline(always)]
    pub unsafe fn skip(&mut self, n: usize) {
        debug_assert!(n <= self.len);
        self.tail = (self.tail + n) % CAP;
        self.len -= n;
    }

    /// Moves a full window forward by one slot: the oldest slot becomes the newest.
    ///
    /// # Safety
    /// The window must be full.
    #[inline(always)]
    pub unsafe fn rotate(&mut self) {
        debug_assert!(self.is_full());
        self.tail = next::<CAP>(self.tail);
        self.head = self.tail;
    }
}

#[inline(always)]
pub(crate) const fn next<const CAP: usize>(slot: usize) -> usize {
    (slot + 1) % CAP
}

#[inline(always)]
const fn wrap_sub<const CAP: usize>(slot: usize, n: usize) -> usize {
    (slot + CAP - n % CAP) % CAP
}
