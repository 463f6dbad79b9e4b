//! Cyclic index arithmetic and the ring state behind [`CyclicDeque`](crate::CyclicDeque).
//!
//! Slot positions are plain `usize` offsets into the backing extent, which is
//! treated as a cycle of length `capacity`. The functions in this module are
//! the only place where positions wrap around; everything built on top of
//! them, including cursor arithmetic, works with ordinary integers.

use core::marker::PhantomData;

use crate::error::OutOfRange;
use crate::storage::{Capacity, Extent};

/// Wraps `index` from the range `[0, 2 * capacity)` into `[0, capacity)`.
///
/// At most one subtraction is ever performed, so callers must bound the
/// input accordingly.
///
/// # Examples
/// ```
/// use cyclic_deque::ring::wrap_cycle;
/// assert_eq!(wrap_cycle(3, 8), 3);
/// assert_eq!(wrap_cycle(8, 8), 0);
/// assert_eq!(wrap_cycle(13, 8), 5);
/// ```
#[inline]
pub const fn wrap_cycle(index: usize, capacity: usize) -> usize {
    debug_assert!(index == 0 || index / 2 < capacity);
    if index >= capacity {
        index - capacity
    } else {
        index
    }
}

/// Steps `index` one slot forward within the cycle `[0, capacity)`.
///
/// # Examples
/// ```
/// use cyclic_deque::ring::inc_cycle;
/// assert_eq!(inc_cycle(2, 4), 3);
/// assert_eq!(inc_cycle(3, 4), 0);
/// ```
#[inline]
pub const fn inc_cycle(index: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity);
    let next = index + 1;
    if next == capacity {
        0
    } else {
        next
    }
}

/// Steps `index` one slot backward within the cycle `[0, capacity)`.
///
/// # Examples
/// ```
/// use cyclic_deque::ring::dec_cycle;
/// assert_eq!(dec_cycle(2, 4), 1);
/// assert_eq!(dec_cycle(0, 4), 3);
/// ```
#[inline]
pub const fn dec_cycle(index: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity);
    if index == 0 {
        capacity - 1
    } else {
        index - 1
    }
}

/// Moves `base` by an arbitrary signed `delta` within the cycle `[0, capacity)`.
///
/// The delta is first reduced modulo `capacity`, which leaves a non-negative
/// step smaller than the cycle, so the final [`wrap_cycle`] stays within its
/// single-subtraction bound. A zero-capacity cycle has no slots and always
/// yields `0`.
///
/// # Examples
/// ```
/// use cyclic_deque::ring::wrap_delta;
/// assert_eq!(wrap_delta(1, -3, 8), 6);
/// assert_eq!(wrap_delta(6, 5, 8), 3);
/// assert_eq!(wrap_delta(0, -17, 8), 7);
/// ```
#[inline]
pub fn wrap_delta(base: usize, delta: isize, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }

    debug_assert!(base < capacity);
    debug_assert!(capacity <= isize::MAX as usize);
    let step = delta.rem_euclid(capacity as isize) as usize;
    wrap_cycle(base + step, capacity)
}

#[inline(never)]
#[cold]
#[track_caller]
fn occupied_exceeds_capacity(len: usize, capacity: usize) -> ! {
    panic!(
        "occupied length (is {}) exceeds the capacity (is {})",
        len, capacity
    )
}

#[inline(never)]
#[cold]
#[track_caller]
fn capacity_exceeds_offset_range(capacity: usize) -> ! {
    panic!(
        "capacity (is {}) exceeds the range of cursor offsets (max {})",
        capacity,
        isize::MAX
    )
}

/// Rejects extents whose slots cannot all be addressed, either by the index
/// type `I` or by a signed cursor offset.
#[track_caller]
fn check_capacity<I: Capacity>(capacity: usize) {
    I::from_usize(capacity);
    if capacity > isize::MAX as usize {
        capacity_exceeds_offset_range(capacity);
    }
}

#[inline(never)]
#[cold]
#[track_caller]
fn start_out_of_bounds(start: usize, capacity: usize) -> ! {
    panic!(
        "start position (is {}) is out of bounds for a capacity of {}",
        start, capacity
    )
}

#[inline(never)]
#[cold]
#[track_caller]
fn range_exceeds_available(len: usize, available: usize) -> ! {
    panic!(
        "range of length {} does not fit into the {} available slots",
        len, available
    )
}

/// Writes items into `run` front to back, returning how many were written.
fn fill<T, It: Iterator<Item = T>>(run: &mut [T], items: &mut It) -> usize {
    let mut written = 0;
    for (slot, item) in run.iter_mut().zip(items) {
        *slot = item;
        written += 1;
    }
    written
}

/// Bounds of the backing extent plus the cursors and count describing the
/// occupied sub-range.
///
/// `deq_finish` is cyclic: it equals `deq_start` both when the ring is empty
/// and when it is full, and `deq_size` tells the two apart.
pub(crate) struct RingState<T, S: Extent<T>, I: Capacity> {
    buf: S,
    deq_start: I,
    deq_finish: I,
    deq_size: I,
    elem: PhantomData<T>,
}

impl<T, S: Extent<T>, I: Capacity> RingState<T, S, I> {
    /// Attaches to `buf`, treating its first `len` slots as occupied.
    #[track_caller]
    pub(crate) fn with_len(buf: S, len: usize) -> Self {
        let capacity = buf.capacity();
        check_capacity::<I>(capacity);
        if len > capacity {
            occupied_exceeds_capacity(len, capacity);
        }

        RingState {
            buf,
            deq_start: I::from_usize(0),
            deq_finish: I::from_usize(wrap_cycle(len, capacity)),
            deq_size: I::from_usize(len),
            elem: PhantomData,
        }
    }

    #[track_caller]
    pub(crate) fn from_raw_parts(buf: S, start: I, len: I) -> Self {
        let capacity = buf.capacity();
        check_capacity::<I>(capacity);

        let (start, len) = (start.into_usize(), len.into_usize());
        if len > capacity {
            occupied_exceeds_capacity(len, capacity);
        }
        if start >= capacity && !(start == 0 && capacity == 0) {
            start_out_of_bounds(start, capacity);
        }

        RingState {
            buf,
            deq_start: I::from_usize(start),
            deq_finish: I::from_usize(wrap_cycle(start + len, capacity)),
            deq_size: I::from_usize(len),
            elem: PhantomData,
        }
    }

    pub(crate) fn into_raw_parts(self) -> (S, I, I) {
        (self.buf, self.deq_start, self.deq_size)
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.deq_size.into_usize()
    }

    #[inline]
    pub(crate) fn available(&self) -> usize {
        self.capacity() - self.size()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.size() == 0
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.size() == self.capacity()
    }

    #[inline]
    fn inc_cycle(&self, index: usize) -> usize {
        inc_cycle(index, self.capacity())
    }

    #[inline]
    fn dec_cycle(&self, index: usize) -> usize {
        dec_cycle(index, self.capacity())
    }

    /// Maps a logical index in `[0, size)` to its physical slot.
    #[inline]
    pub(crate) fn inner_to_outer(&self, index: usize) -> usize {
        wrap_cycle(self.deq_start.into_usize() + index, self.capacity())
    }

    /// Maps a signed logical offset to its physical slot without consulting
    /// the occupied length.
    #[inline]
    pub(crate) fn translate(&self, offset: isize) -> usize {
        wrap_delta(self.deq_start.into_usize(), offset, self.capacity())
    }

    #[inline]
    pub(crate) fn slot(&self, physical: usize) -> &T {
        &self.buf.slots()[physical]
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, physical: usize) -> &mut T {
        &mut self.buf.slots_mut()[physical]
    }

    pub(crate) fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        if index >= self.size() {
            return Err(OutOfRange::new(index, self.size()));
        }
        Ok(self.slot(self.inner_to_outer(index)))
    }

    pub(crate) fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        if index >= self.size() {
            return Err(OutOfRange::new(index, self.size()));
        }
        let physical = self.inner_to_outer(index);
        Ok(self.slot_mut(physical))
    }

    pub(crate) fn back_slot(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.dec_cycle(self.deq_finish.into_usize()))
        }
    }

    pub(crate) fn try_push_back(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }

        // The element is written before any cursor moves, so a panic while
        // dropping the overwritten value leaves the ring untouched.
        let finish = self.deq_finish.into_usize();
        *self.slot_mut(finish) = value;

        self.deq_finish = I::from_usize(self.inc_cycle(finish));
        self.deq_size = I::from_usize(self.size() + 1);
        Ok(())
    }

    pub(crate) fn try_push_front(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }

        let start = self.dec_cycle(self.deq_start.into_usize());
        *self.slot_mut(start) = value;

        self.deq_start = I::from_usize(start);
        self.deq_size = I::from_usize(self.size() + 1);
        Ok(())
    }

    pub(crate) fn pop_back(&mut self) -> Option<&mut T> {
        let finish = self.back_slot()?;
        self.deq_finish = I::from_usize(finish);
        self.deq_size = I::from_usize(self.size() - 1);
        Some(self.slot_mut(finish))
    }

    pub(crate) fn pop_front(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }

        let start = self.deq_start.into_usize();
        self.deq_start = I::from_usize(self.inc_cycle(start));
        self.deq_size = I::from_usize(self.size() - 1);
        Some(self.slot_mut(start))
    }

    pub(crate) fn clear(&mut self) {
        self.deq_start = I::from_usize(0);
        self.deq_finish = I::from_usize(0);
        self.deq_size = I::from_usize(0);
    }

    #[track_caller]
    pub(crate) fn resize(&mut self, len: usize) {
        let capacity = self.capacity();
        if len > capacity {
            occupied_exceeds_capacity(len, capacity);
        }

        let delta = len as isize - self.size() as isize;
        let finish = wrap_delta(self.deq_finish.into_usize(), delta, capacity);
        self.deq_finish = I::from_usize(finish);
        self.deq_size = I::from_usize(len);
    }

    /// Copies `items` into the free region after `deq_finish`, in at most two
    /// contiguous runs.
    ///
    /// Cursors move only after every item has been written. A panicking
    /// iterator therefore leaves the length unchanged, though some free slots
    /// may already hold new values.
    #[track_caller]
    pub(crate) fn append_range<It>(&mut self, items: It)
    where
        It: IntoIterator<Item = T>,
        It::IntoIter: ExactSizeIterator,
    {
        let mut items = items.into_iter();
        let count = items.len();
        if count > self.available() {
            range_exceeds_available(count, self.available());
        }

        let capacity = self.capacity();
        let finish = self.deq_finish.into_usize();
        // never zero unless the extent is, since `finish` is always in bounds
        let size1 = capacity - finish;

        let slots = self.buf.slots_mut();
        let written = if count <= size1 {
            fill(&mut slots[finish..finish + count], &mut items)
        } else {
            let (wrapped, tail) = slots.split_at_mut(finish);
            let first = fill(tail, &mut items);
            first + fill(&mut wrapped[..count - size1], &mut items)
        };

        self.deq_finish = I::from_usize(wrap_cycle(finish + written, capacity));
        self.deq_size = I::from_usize(self.size() + written);
    }

    /// Copies `items` into the free region before `deq_start`, in at most two
    /// contiguous runs, so that they end up as the first elements in order.
    ///
    /// The range is committed only once all `count` items are written; an
    /// iterator that yields fewer leaves the length unchanged.
    #[track_caller]
    pub(crate) fn prepend_range<It>(&mut self, items: It)
    where
        It: IntoIterator<Item = T>,
        It::IntoIter: ExactSizeIterator,
    {
        let mut items = items.into_iter();
        let count = items.len();
        if count > self.available() {
            range_exceeds_available(count, self.available());
        }
        if count == 0 {
            return;
        }

        let capacity = self.capacity();
        // A start at slot 0 sits at the end of the extent for this purpose,
        // so the free slots in front of it form one run instead of an empty
        // run followed by a full one.
        let start = match self.deq_start.into_usize() {
            0 => capacity,
            start => start,
        };
        let size2 = start;

        let slots = self.buf.slots_mut();
        let (new_start, written) = if count <= size2 {
            let new_start = start - count;
            (new_start, fill(&mut slots[new_start..start], &mut items))
        } else {
            let new_start = capacity - (count - size2);
            let (prefix, rest) = slots.split_at_mut(start);
            let first = fill(&mut rest[new_start - start..], &mut items);
            (new_start, first + fill(prefix, &mut items))
        };

        if written != count {
            return;
        }

        self.deq_start = I::from_usize(new_start);
        self.deq_size = I::from_usize(self.size() + count);
    }

    pub(crate) fn as_slices(&self) -> (&[T], &[T]) {
        let start = self.deq_start.into_usize();
        let len = self.size();
        let capacity = self.capacity();
        let slots = self.buf.slots();

        if start + len <= capacity {
            (&slots[start..start + len], &[])
        } else {
            (&slots[start..], &slots[..start + len - capacity])
        }
    }

    pub(crate) fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let start = self.deq_start.into_usize();
        let len = self.size();
        let capacity = self.capacity();
        let (wrapped, tail) = self.buf.slots_mut().split_at_mut(start);

        if start + len <= capacity {
            (&mut tail[..len], &mut [])
        } else {
            (tail, &mut wrapped[..start + len - capacity])
        }
    }
}

impl<T, S: Extent<T> + Clone, I: Capacity> Clone for RingState<T, S, I> {
    fn clone(&self) -> Self {
        RingState {
            buf: self.buf.clone(),
            deq_start: self.deq_start,
            deq_finish: self.deq_finish,
            deq_size: self.deq_size,
            elem: PhantomData,
        }
    }
}
