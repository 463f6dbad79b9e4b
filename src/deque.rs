//! A fixed-capacity double-ended queue over a ring buffer.
//!
//! The deque has O(1) pushes and pops at both ends and O(1) indexing. Bulk
//! appends and prepends write into the free region of the ring in at most two
//! contiguous runs. Elements never move once written: the deque only moves
//! its two cursors over a backing extent whose bounds are fixed when the
//! deque is constructed.
//!
//! The backing extent can be borrowed from the caller ([`SliceDeque`], or a
//! deque over `&mut [T; N]`), owned inline ([`InlineDeque`]) or, with the
//! `alloc` feature, owned on the heap ([`AllocDeque`]). Every slot always
//! holds a valid `T`, which is why popping hands back a reference to the
//! vacated slot rather than the value itself, and why [`resize`](CyclicDeque::resize)
//! can grow the deque without writing to any slot.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use crate::cursor::{Cursor, CursorMut, Iter, IterMut};
use crate::error::OutOfRange;
use crate::ring::RingState;
use crate::storage::{Capacity, Extent, InlineStorage, SliceStorage};

#[inline(never)]
#[cold]
#[track_caller]
fn deque_is_full() -> ! {
    panic!("deque is already at capacity")
}

/// A fixed-capacity double-ended queue implemented with a ring buffer.
///
/// Generic over the element type `T`, the backing extent `S` and the index
/// type `I` used to store cursors and length.
///
/// The "default" usage of this type as a queue is to use
/// [`push_back`](CyclicDeque::push_back) to add to the queue, and
/// [`pop_front`](CyclicDeque::pop_front) to remove from it.
///
/// See the [module-level documentation](crate::deque) for more.
pub struct CyclicDeque<T, S: Extent<T>, I: Capacity = usize> {
    ring: RingState<T, S, I>,
}

/// A deque using any mutable slice for storage.
///
/// # Examples
/// ```
/// let mut backing_array = ['-'; 32];
/// let (slice1, slice2) = (&mut backing_array[..]).split_at_mut(16);
/// let mut deque1 = cyclic_deque::SliceDeque::<_>::from(slice1);
/// let mut deque2 = cyclic_deque::SliceDeque::<_>::from(slice2);
/// assert_eq!(deque1.capacity(), 16);
/// assert_eq!(deque2.capacity(), 16);
/// ```
pub type SliceDeque<'a, T, I = usize> = CyclicDeque<T, SliceStorage<'a, T>, I>;

/// A deque using an inline array for storage.
///
/// # Examples
/// ```
/// let mut deque = cyclic_deque::InlineDeque::<char, 4>::new();
/// deque.push_front('b');
/// deque.push_front('a');
/// deque.push_back('c');
/// deque.push_back('d');
/// assert_eq!(deque, &['a', 'b', 'c', 'd']);
/// assert_eq!(deque.try_push_back('e'), Err('e'));
/// ```
pub type InlineDeque<T, const C: usize> = CyclicDeque<T, InlineStorage<T, C>, usize>;

/// A deque using an inline array for storage, generic over the index type.
///
/// # Examples
/// ```
/// let mut deque = cyclic_deque::TiInlineDeque::<char, u8, 4>::new();
/// deque.push_front('a');
/// assert_eq!(deque[0u8], 'a');
/// ```
pub type TiInlineDeque<T, I, const C: usize> = CyclicDeque<T, InlineStorage<T, C>, I>;

/// A deque using a heap-allocated slice for storage.
///
/// Note that this still has a fixed capacity, and will never reallocate.
///
/// # Examples
/// ```
/// let mut deque = cyclic_deque::AllocDeque::<char>::with_capacity(4);
/// deque.push_front('b');
/// deque.push_front('a');
/// deque.push_back('c');
/// deque.push_back('d');
/// assert_eq!(deque, &['a', 'b', 'c', 'd']);
/// assert_eq!(deque.try_push_back('e'), Err('e'));
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub type AllocDeque<T, I = usize> = CyclicDeque<T, crate::storage::AllocStorage<T>, I>;

impl<T, S: Extent<T>, I: Capacity> From<S> for CyclicDeque<T, S, I> {
    /// Converts a contiguous block of slots into an empty deque.
    ///
    /// # Panics
    /// Panics if the index type `I` cannot represent `buf.capacity()`.
    #[track_caller]
    fn from(buf: S) -> Self {
        CyclicDeque {
            ring: RingState::with_len(buf, 0),
        }
    }
}

impl<T, S: Extent<T>, I: Capacity> CyclicDeque<T, S, I> {
    /// Converts a contiguous block of slots into a deque whose first `len`
    /// slots are already occupied.
    ///
    /// The occupied slots are taken as they are; nothing is written to them.
    ///
    /// # Panics
    /// Panics if `len` exceeds the capacity of `buf`, or if the index type
    /// `I` cannot represent `buf.capacity()`.
    ///
    /// # Examples
    /// ```
    /// let mut backing = [1, 2, 3, 0, 0];
    /// let deque = cyclic_deque::SliceDeque::<i32>::with_len(&mut backing[..], 3);
    /// assert_eq!(deque.len(), 3);
    /// assert_eq!(deque.available(), 2);
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    #[track_caller]
    pub fn with_len(buf: S, len: I) -> Self {
        CyclicDeque {
            ring: RingState::with_len(buf, len.into_usize()),
        }
    }

    /// Decomposes a `CyclicDeque<T, S, I>` into its raw parts.
    ///
    /// Returns the backing storage, the physical position of the front
    /// element and the length of the deque in elements. These are the same
    /// arguments in the same order as the arguments to
    /// [`from_raw_parts`](CyclicDeque::from_raw_parts).
    ///
    /// # Examples
    /// ```
    /// let mut backing = [0; 3];
    /// let mut deque = cyclic_deque::SliceDeque::<i32>::from(&mut backing[..]);
    /// deque.push_front(1);
    /// deque.push_back(2);
    /// let (buf, front, len) = deque.into_raw_parts();
    /// assert_eq!(buf, [2, 0, 1]);
    /// assert_eq!((front, len), (2, 2));
    /// ```
    pub fn into_raw_parts(self) -> (S, I, I) {
        self.ring.into_raw_parts()
    }

    /// Creates a `CyclicDeque<T, S, I>` directly from its raw parts.
    ///
    /// The `length` slots starting at physical position `front`, wrapping
    /// around the end of `buf`, are taken as the occupied range.
    ///
    /// # Panics
    /// Panics if `length` exceeds the capacity of `buf`, or if `front` is not
    /// a valid position within it.
    ///
    /// # Examples
    /// ```
    /// let mut backing = [0; 3];
    /// let mut deque = cyclic_deque::SliceDeque::<i32>::from(&mut backing[..]);
    /// deque.push_front(1);
    /// deque.push_back(2);
    ///
    /// let (buf, front, len) = deque.into_raw_parts();
    /// let deque = cyclic_deque::SliceDeque::from_raw_parts(buf, front, len);
    /// assert_eq!(deque, &[1, 2]);
    /// ```
    #[track_caller]
    pub fn from_raw_parts(buf: S, front: I, length: I) -> Self {
        CyclicDeque {
            ring: RingState::from_raw_parts(buf, front, length),
        }
    }

    /// Returns the number of elements the deque can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Returns the number of elements currently in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.size()
    }

    /// Returns the number of elements that can be added before the deque is
    /// full, i.e. `capacity() - len()`.
    #[inline]
    pub fn available(&self) -> usize {
        self.ring.available()
    }

    /// Returns `true` exactly when the deque contains zero elements.
    ///
    /// A deque with zero capacity is both empty and full.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns `true` exactly when the deque contains the maximum number of elements.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Returns `true` if the deque contains an element equal to the given value.
    ///
    /// # Examples
    /// ```
    /// let mut backing = [0; 3];
    /// let mut deque = cyclic_deque::SliceDeque::<i32>::from(&mut backing[..]);
    /// deque.push_back(0);
    /// deque.push_back(1);
    /// assert_eq!(deque.contains(&1), true);
    /// assert_eq!(deque.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Returns a reference to the element at the given index, or an
    /// [`OutOfRange`] error if the index is not smaller than the length.
    ///
    /// The element at index 0 is the front of the queue.
    ///
    /// # Examples
    /// ```
    /// let mut backing = [0; 2];
    /// let mut deque = cyclic_deque::SliceDeque::<i32>::from(&mut backing[..]);
    /// deque.push_back(5);
    /// assert_eq!(deque.at(0), Ok(&5));
    /// assert!(deque.at(1).is_err());
    /// ```
    #[inline]
    pub fn at(&self, index: I) -> Result<&T, OutOfRange> {
        self.ring.at(index.into_usize())
    }

    /// Returns a mutable reference to the element at the given index, or an
    /// [`OutOfRange`] error if the index is not smaller than the length.
    #[inline]
    pub fn at_mut(&mut self, index: I) -> Result<&mut T, OutOfRange> {
        self.ring.at_mut(index.into_usize())
    }

    /// Returns a reference to the element at the given index, or [`None`] if
    /// the index is out of bounds.
    ///
    /// The element at index 0 is the front of the queue.
    #[inline]
    pub fn get(&self, index: I) -> Option<&T> {
        self.ring.at(index.into_usize()).ok()
    }

    /// Returns a mutable reference to the element at the given index, or
    /// [`None`] if the index is out of bounds.
    ///
    /// The element at index 0 is the front of the queue.
    #[inline]
    pub fn get_mut(&mut self, index: I) -> Option<&mut T> {
        self.ring.at_mut(index.into_usize()).ok()
    }

    /// Returns a reference to the front element, or [`None`] if the deque is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.ring.at(0).ok()
    }

    /// Returns a mutable reference to the front element, or [`None`] if the deque is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.ring.at_mut(0).ok()
    }

    /// Returns a reference to the back element, or [`None`] if the deque is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        let back = self.ring.back_slot()?;
        Some(self.ring.slot(back))
    }

    /// Returns a mutable reference to the back element, or [`None`] if the deque is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let back = self.ring.back_slot()?;
        Some(self.ring.slot_mut(back))
    }

    /// Appends an element to the back of the deque, returning `Err(value)`
    /// if it is already full.
    ///
    /// The value is written into its slot before the deque's cursors move,
    /// so if dropping the slot's previous value panics, the deque's length
    /// and every other slot are left exactly as they were.
    ///
    /// # Examples
    /// ```
    /// let mut backing = [0; 3];
    /// let mut deque = cyclic_deque::SliceDeque::<i32>::from(&mut backing[..]);
    /// assert!(deque.try_push_back(1).is_ok());
    /// assert!(deque.try_push_back(2).is_ok());
    /// assert!(deque.try_push_back(3).is_ok());
    /// assert_eq!(deque.try_push_back(4), Err(4));
    /// ```
    #[inline]
    pub fn try_push_back(&mut self, value: T) -> Result<(), T> {
        self.ring.try_push_back(value)
    }

    /// Appends an element to the back of the deque.
    ///
    /// # Panics
    /// Panics if the deque is already at capacity. See
    /// [`try_push_back`](CyclicDeque::try_push_back) for a checked variant
    /// that never panics.
    #[track_caller]
    pub fn push_back(&mut self, value: T) {
        if self.try_push_back(value).is_err() {
            deque_is_full();
        }
    }

    /// Prepends an element to the front of the deque, returning `Err(value)`
    /// if it is already full.
    ///
    /// Offers the same guarantee as [`try_push_back`](CyclicDeque::try_push_back)
    /// when dropping the overwritten value panics.
    ///
    /// # Examples
    /// ```
    /// let mut backing = [0; 3];
    /// let mut deque = cyclic_deque::SliceDeque::<i32>::from(&mut backing[..]);
    /// assert!(deque.try_push_front(1).is_ok());
    /// assert!(deque.try_push_front(2).is_ok());
    /// assert!(deque.try_push_front(3).is_ok());
    /// assert_eq!(deque.try_push_front(4), Err(4));
    /// assert_eq!(deque, [3, 2, 1]);
    /// ```
    #[inline]
    pub fn try_push_front(&mut self, value: T) -> Result<(), T> {
        self.ring.try_push_front(value)
    }

    /// Prepends an element to the front of the deque.
    ///
    /// # Panics
    /// Panics if the deque is already at capacity. See
    /// [`try_push_front`](CyclicDeque::try_push_front) for a checked variant
    /// that never panics.
    #[track_caller]
    pub fn push_front(&mut self, value: T) {
        if self.try_push_front(value).is_err() {
            deque_is_full();
        }
    }

    /// Removes the last element, returning a reference to the slot it
    /// occupied, or [`None`] if the deque is empty.
    ///
    /// The value stays in its slot until the slot is reused, so it can be
    /// inspected, cloned or taken out with [`core::mem::take`].
    ///
    /// # Examples
    /// ```
    /// let mut backing = [0; 3];
    /// let mut deque = cyclic_deque::SliceDeque::<i32>::from(&mut backing[..]);
    /// deque.push_back(1);
    /// deque.push_back(3);
    /// assert_eq!(deque.pop_back().copied(), Some(3));
    /// assert_eq!(deque.pop_back().copied(), Some(1));
    /// assert_eq!(deque.pop_back(), None);
    /// ```
    #[inline]
    pub fn pop_back(&mut self) -> Option<&mut T> {
        self.ring.pop_back()
    }

    /// Removes the first element, returning a reference to the slot it
    /// occupied, or [`None`] if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// let mut backing = [String::new(), String::new(), String::new()];
    /// let mut deque = cyclic_deque::SliceDeque::<String>::from(&mut backing[..]);
    /// deque.push_back("one".to_string());
    /// deque.push_back("two".to_string());
    /// assert_eq!(deque.pop_front().map(core::mem::take).as_deref(), Some("one"));
    /// assert_eq!(deque.front().map(String::as_str), Some("two"));
    /// ```
    #[inline]
    pub fn pop_front(&mut self) -> Option<&mut T> {
        self.ring.pop_front()
    }

    /// Appends the elements of `items` to the back of the deque.
    ///
    /// The items are written into the free region after the back element,
    /// wrapping around the end of the backing extent where necessary. The
    /// length grows only after every item has been written, so a panic in
    /// the iterator leaves the length unchanged; some free slots may already
    /// hold new values in that case.
    ///
    /// # Panics
    /// Panics if `items` reports more elements than are [`available`](CyclicDeque::available).
    ///
    /// # Examples
    /// ```
    /// let mut backing = [42; 16];
    /// let mut deque = cyclic_deque::SliceDeque::<usize>::from(&mut backing[..]);
    /// for _ in 0..14 {
    ///     deque.push_back(0);
    /// }
    /// for _ in 0..10 {
    ///     deque.pop_front();
    /// }
    ///
    /// deque.append_range(1..9);
    /// assert_eq!(deque.len(), 12);
    /// assert!(deque.iter().skip(4).copied().eq(1..9));
    /// ```
    #[track_caller]
    pub fn append_range<It>(&mut self, items: It)
    where
        It: IntoIterator<Item = T>,
        It::IntoIter: ExactSizeIterator,
    {
        self.ring.append_range(items);
    }

    /// Prepends the elements of `items` to the front of the deque, keeping
    /// their order, so that the first item becomes the new front element.
    ///
    /// The items are written into the free region before the front element,
    /// wrapping around the start of the backing extent where necessary. The
    /// new elements become part of the deque only after all of them have been
    /// written.
    ///
    /// # Panics
    /// Panics if `items` reports more elements than are [`available`](CyclicDeque::available).
    ///
    /// # Examples
    /// ```
    /// let mut backing = [0; 6];
    /// let mut deque = cyclic_deque::SliceDeque::<u8>::from(&mut backing[..]);
    /// deque.push_back(4);
    /// deque.prepend_range([1, 2, 3]);
    /// assert_eq!(deque, [1, 2, 3, 4]);
    /// ```
    #[track_caller]
    pub fn prepend_range<It>(&mut self, items: It)
    where
        It: IntoIterator<Item = T>,
        It::IntoIter: ExactSizeIterator,
    {
        self.ring.prepend_range(items);
    }

    /// Appends clones of all elements in `other` to the back of the deque.
    ///
    /// # Panics
    /// Panics if `other` is longer than the number of [`available`](CyclicDeque::available) slots.
    ///
    /// # Examples
    /// ```
    /// let mut backing = [0; 4];
    /// let mut deque = cyclic_deque::SliceDeque::<i32>::from(&mut backing[..]);
    /// deque.extend_from_slice(&[1, 2]);
    /// deque.extend_from_slice(&[3]);
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    #[track_caller]
    pub fn extend_from_slice(&mut self, other: &[T])
    where
        T: Clone,
    {
        self.ring.append_range(other.iter().cloned());
    }

    /// Prepends clones of all elements in `other` to the front of the deque,
    /// keeping their order.
    ///
    /// # Panics
    /// Panics if `other` is longer than the number of [`available`](CyclicDeque::available) slots.
    ///
    /// # Examples
    /// ```
    /// let mut backing = [0; 4];
    /// let mut deque = cyclic_deque::SliceDeque::<i32>::from(&mut backing[..]);
    /// deque.prepend_from_slice(&[3]);
    /// deque.prepend_from_slice(&[1, 2]);
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    #[track_caller]
    pub fn prepend_from_slice(&mut self, other: &[T])
    where
        T: Clone,
    {
        self.ring.prepend_range(other.iter().cloned());
    }

    /// Empties the deque and moves both cursors back to the start of the
    /// backing extent. No element is dropped or written.
    #[inline]
    pub fn clear(&mut self) {
        self.ring.clear();
    }

    /// Changes the length of the deque by moving its back cursor.
    ///
    /// Shrinking gives the slots at the back up without touching them;
    /// growing takes over the slots after the back element with whatever
    /// values they currently hold.
    ///
    /// # Panics
    /// Panics if `len` exceeds the capacity.
    ///
    /// # Examples
    /// ```
    /// let mut backing = [1, 2, 3, 4];
    /// let mut deque = cyclic_deque::SliceDeque::<i32>::with_len(&mut backing[..], 4);
    /// deque.resize(2);
    /// assert_eq!(deque, [1, 2]);
    /// deque.resize(3);
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    #[track_caller]
    pub fn resize(&mut self, len: I) {
        self.ring.resize(len.into_usize());
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// deque.
    ///
    /// # Examples
    /// ```
    /// let mut backing = [0; 4];
    /// let mut deque = cyclic_deque::SliceDeque::<i32>::from(&mut backing[..]);
    /// deque.push_back(2);
    /// deque.push_back(1);
    /// deque.push_front(3);
    /// assert_eq!(deque.as_slices(), (&[3][..], &[2, 1][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        self.ring.as_slices()
    }

    /// Returns a pair of mutable slices which contain, in order, the contents
    /// of the deque.
    ///
    /// # Examples
    /// ```
    /// let mut backing = [0; 4];
    /// let mut deque = cyclic_deque::SliceDeque::<i32>::from(&mut backing[..]);
    /// deque.push_back(2);
    /// deque.push_back(1);
    /// deque.push_front(3);
    /// deque.as_mut_slices().0[0] = 1;
    /// deque.as_mut_slices().1[1] = 3;
    /// assert_eq!(deque.as_slices(), (&[1][..], &[2, 3][..]));
    /// ```
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        self.ring.as_mut_slices()
    }

    /// Returns a front-to-back iterator. Use [`rev`](Iterator::rev) on it to
    /// iterate back to front.
    ///
    /// # Examples
    /// ```
    /// let mut backing = [0; 4];
    /// let mut deque = cyclic_deque::SliceDeque::<i32>::from(&mut backing[..]);
    /// deque.push_back(5);
    /// deque.push_back(3);
    /// deque.push_front(4);
    ///
    /// let mut it = deque.iter();
    /// assert_eq!(it.next(), Some(&4));
    /// assert_eq!(it.next(), Some(&5));
    /// assert_eq!(it.next(), Some(&3));
    /// assert!(it.next().is_none());
    ///
    /// assert!(deque.iter().rev().eq(&[3, 5, 4]));
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, S, I> {
        self.begin().until(self.end())
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    /// ```
    /// let mut backing = [0; 4];
    /// let mut deque = cyclic_deque::SliceDeque::<i32>::from(&mut backing[..]);
    /// deque.push_back(5);
    /// deque.push_back(3);
    /// deque.push_back(4);
    /// for num in deque.iter_mut() {
    ///     *num = *num - 2;
    /// }
    /// assert_eq!(deque, &[3, 1, 2]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.ring.as_mut_slices())
    }

    /// Returns a cursor at the front element.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T, S, I> {
        Cursor::new(&self.ring, 0)
    }

    /// Returns a cursor one past the back element.
    ///
    /// The cursor's offset is fixed to the length at the time of the call; it
    /// does not follow later changes to the deque.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T, S, I> {
        Cursor::new(&self.ring, self.len() as isize)
    }

    /// Returns a cursor at the given logical offset from the front.
    ///
    /// The offset is not checked against the length: any offset in
    /// `[-capacity, 2 * capacity)` addresses a slot of the backing extent,
    /// wrapping around as needed. An offset obtained from an earlier cursor
    /// thus keeps addressing a slot after the deque has changed, though not
    /// necessarily an occupied one.
    ///
    /// # Examples
    /// ```
    /// let mut backing = [0; 4];
    /// let mut deque = cyclic_deque::SliceDeque::<i32>::from(&mut backing[..]);
    /// deque.extend([1, 2]);
    /// let old_end = deque.end().offset();
    /// deque.push_back(3);
    /// assert_eq!(*deque.cursor(old_end), 3);
    /// assert_eq!(*deque.cursor(-1), 0);
    /// ```
    #[inline]
    pub fn cursor(&self, offset: isize) -> Cursor<'_, T, S, I> {
        Cursor::new(&self.ring, offset)
    }

    /// Returns a mutable cursor at the front element.
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T, S, I> {
        CursorMut::new(&mut self.ring, 0)
    }

    /// Returns a mutable cursor one past the back element.
    #[inline]
    pub fn end_mut(&mut self) -> CursorMut<'_, T, S, I> {
        let end = self.len() as isize;
        CursorMut::new(&mut self.ring, end)
    }

    /// Returns a mutable cursor at the given logical offset from the front.
    ///
    /// See [`cursor`](CyclicDeque::cursor) for how the offset is interpreted.
    #[inline]
    pub fn cursor_mut(&mut self, offset: isize) -> CursorMut<'_, T, S, I> {
        CursorMut::new(&mut self.ring, offset)
    }
}

impl<T, S: Extent<T>, I: Capacity> Index<I> for CyclicDeque<T, S, I> {
    type Output = T;

    /// Returns the element at `index` without checking it against the length
    /// in release builds.
    ///
    /// An index past the back element addresses a stale slot of the ring;
    /// one past the capacity panics.
    #[inline]
    fn index(&self, index: I) -> &T {
        let index = index.into_usize();
        debug_assert!(index < self.len(), "index out of bounds");
        self.ring.slot(self.ring.inner_to_outer(index))
    }
}

impl<T, S: Extent<T>, I: Capacity> IndexMut<I> for CyclicDeque<T, S, I> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut T {
        let index = index.into_usize();
        debug_assert!(index < self.len(), "index out of bounds");
        let physical = self.ring.inner_to_outer(index);
        self.ring.slot_mut(physical)
    }
}

impl<T: Debug, S: Extent<T>, I: Capacity> Debug for CyclicDeque<T, S, I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (front, back) = self.as_slices();
        f.debug_list().entries(front).entries(back).finish()
    }
}

impl<T: Hash, S: Extent<T>, I: Capacity> Hash for CyclicDeque<T, S, I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        self.iter().for_each(|x| x.hash(state));
    }
}

impl<AT, AS, AI, BT, BS, BI> PartialEq<CyclicDeque<BT, BS, BI>> for CyclicDeque<AT, AS, AI>
where
    AT: PartialEq<BT>,
    AS: Extent<AT>,
    BS: Extent<BT>,
    AI: Capacity,
    BI: Capacity,
{
    fn eq(&self, other: &CyclicDeque<BT, BS, BI>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq, S: Extent<T>, I: Capacity> Eq for CyclicDeque<T, S, I> {}

impl<T: PartialEq, S: Extent<T>, I: Capacity, R: AsRef<[T]>> PartialEq<R> for CyclicDeque<T, S, I> {
    fn eq(&self, other: &R) -> bool {
        let other = other.as_ref();
        if self.len() != other.len() {
            return false;
        }

        let (front, back) = self.as_slices();
        let mid = front.len();
        front == &other[..mid] && back == &other[mid..]
    }
}

impl<T, AS, AI, BS, BI> PartialOrd<CyclicDeque<T, BS, BI>> for CyclicDeque<T, AS, AI>
where
    T: PartialOrd,
    AS: Extent<T>,
    BS: Extent<T>,
    AI: Capacity,
    BI: Capacity,
{
    fn partial_cmp(&self, other: &CyclicDeque<T, BS, BI>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, S: Extent<T>, I: Capacity> Ord for CyclicDeque<T, S, I> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T, S: Extent<T> + Clone, I: Capacity> Clone for CyclicDeque<T, S, I> {
    /// Clones the whole backing extent, so the clone has the same capacity
    /// and the same physical layout as the original.
    fn clone(&self) -> Self {
        CyclicDeque {
            ring: self.ring.clone(),
        }
    }
}

impl<T, S: Extent<T>, I: Capacity> Extend<T> for CyclicDeque<T, S, I> {
    /// Pushes every item to the back of the deque.
    ///
    /// # Panics
    /// Panics if the deque runs out of capacity.
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Clone, S: Extent<T>, I: Capacity> Extend<&'a T> for CyclicDeque<T, S, I> {
    fn extend<It: IntoIterator<Item = &'a T>>(&mut self, iter: It) {
        iter.into_iter().for_each(|item| self.push_back(item.clone()));
    }
}

impl<'a, T, S: Extent<T>, I: Capacity> IntoIterator for &'a CyclicDeque<T, S, I> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, S, I>;

    fn into_iter(self) -> Iter<'a, T, S, I> {
        self.iter()
    }
}

impl<'a, T, S: Extent<T>, I: Capacity> IntoIterator for &'a mut CyclicDeque<T, S, I> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: Default, I: Capacity, const C: usize> CyclicDeque<T, InlineStorage<T, C>, I> {
    /// Constructs a new, empty deque backed by an inline array of
    /// default-constructed slots.
    ///
    /// # Panics
    /// Panics if `C` cannot be represented as a value of type `I`.
    ///
    /// # Examples
    /// ```
    /// let deque = cyclic_deque::InlineDeque::<u32, 7>::new();
    /// assert_eq!(deque.len(), 0);
    /// assert_eq!(deque.capacity(), 7);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::from(core::array::from_fn(|_| T::default()))
    }
}

impl<T: Default, I: Capacity, const C: usize> Default for CyclicDeque<T, InlineStorage<T, C>, I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "alloc")]
#[inline(never)]
#[cold]
#[track_caller]
fn too_many_items(capacity: usize) -> ! {
    panic!("iterator yielded more than {} items", capacity)
}

#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
impl<T: Default, I: Capacity> AllocDeque<T, I> {
    /// Creates an empty `AllocDeque` with the specified capacity, filling
    /// every slot with `T::default()`.
    ///
    /// # Panics
    /// Panics if `capacity` cannot be represented by the index type `I`.
    ///
    /// # Examples
    /// ```
    /// let deque = cyclic_deque::AllocDeque::<u8>::with_capacity(16);
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.available(), 16);
    /// ```
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_len(capacity, I::from_usize(0))
    }

    /// Creates an `AllocDeque` with the specified capacity whose first `len`
    /// slots are occupied by `T::default()`.
    ///
    /// # Panics
    /// Panics if `len` exceeds `capacity`, or if `capacity` cannot be
    /// represented by the index type `I`.
    ///
    /// # Examples
    /// ```
    /// let deque = cyclic_deque::AllocDeque::<u8>::with_capacity_and_len(4, 2);
    /// assert_eq!(deque, [0, 0]);
    /// assert_eq!(deque.capacity(), 4);
    /// ```
    #[track_caller]
    pub fn with_capacity_and_len(capacity: usize, len: I) -> Self {
        let buf: crate::storage::AllocStorage<T> = (0..capacity).map(|_| T::default()).collect();
        Self::with_len(buf, len)
    }

    /// Creates an `AllocDeque` with the specified capacity, occupied by the
    /// items of `iter`. Slots past the last item hold `T::default()`.
    ///
    /// # Panics
    /// Panics if `iter` yields more than `capacity` items, or if `capacity`
    /// cannot be represented by the index type `I`.
    ///
    /// # Examples
    /// ```
    /// let mut deque = cyclic_deque::AllocDeque::<u8>::from_iter_with_capacity(1..=3, 5);
    /// assert_eq!(deque, [1, 2, 3]);
    /// deque.push_front(0);
    /// deque.push_back(4);
    /// assert!(deque.is_full());
    /// ```
    #[track_caller]
    pub fn from_iter_with_capacity<It: IntoIterator<Item = T>>(iter: It, capacity: usize) -> Self {
        let mut iter = iter.into_iter();
        let mut slots = alloc::vec::Vec::with_capacity(capacity);
        slots.extend(iter.by_ref().take(capacity));
        if iter.next().is_some() {
            too_many_items(capacity);
        }

        let len = slots.len();
        slots.resize_with(capacity, T::default);
        Self::with_len(slots.into_boxed_slice(), I::from_usize(len))
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
impl<T, I: Capacity> core::iter::FromIterator<T> for AllocDeque<T, I> {
    /// Collects the items into a full deque whose capacity equals the number
    /// of items.
    ///
    /// # Examples
    /// ```
    /// let deque: cyclic_deque::AllocDeque<i32> = (1..=4).collect();
    /// assert!(deque.is_full());
    /// assert_eq!(deque, [1, 2, 3, 4]);
    /// ```
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let buf: crate::storage::AllocStorage<T> = iter.into_iter().collect();
        let len = buf.len();
        Self::with_len(buf, I::from_usize(len))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::vec::Vec;

    #[test]
    fn sizes_of_instantiated_types() {
        use core::mem::size_of;

        assert_eq!(size_of::<SliceDeque<u64, usize>>(), 5 * size_of::<usize>());
        assert_eq!(size_of::<InlineDeque<u8, 8>>(), 3 * size_of::<usize>() + 8);
        assert_eq!(size_of::<TiInlineDeque<u8, u8, 61>>(), 64);

        #[cfg(feature = "alloc")]
        assert_eq!(size_of::<AllocDeque<u64, usize>>(), 5 * size_of::<usize>());
    }

    #[test]
    #[should_panic]
    fn from_panics_for_too_large_inputs() {
        let mut backing_array = ['-'; 300];
        let _ret = SliceDeque::<char, u8>::from(&mut backing_array[..]);
    }

    #[test]
    fn zero_capacity_is_empty_and_full() {
        let mut backing: [u64; 0] = [];
        let mut deque = SliceDeque::<u64>::from(&mut backing[..]);
        assert_eq!(deque.capacity(), 0);
        assert_eq!(deque.len(), 0);
        assert_eq!(deque.available(), 0);
        assert!(deque.is_empty());
        assert!(deque.is_full());
        assert_eq!(deque.at(0), Err(OutOfRange::new(0, 0)));
        assert_eq!(deque.try_push_back(1), Err(1));
        assert_eq!(deque.try_push_front(2), Err(2));
        assert!(deque.pop_back().is_none());
        assert!(deque.pop_front().is_none());
        assert_eq!(deque.begin(), deque.end());

        deque.resize(0);
        deque.append_range(core::iter::empty());
        deque.prepend_range(core::iter::empty());
        deque.clear();
        assert!(deque.is_empty() && deque.is_full());
    }

    #[test]
    fn seeded_length_then_clear() {
        let mut backing = [0usize; 10];
        let deque = SliceDeque::<usize>::with_len(&mut backing[..], 4);
        assert_eq!(deque.capacity(), 10);
        assert_eq!(deque.len(), 4);
        assert_eq!(deque.available(), 6);
        assert!(!deque.is_empty());
        assert!(!deque.is_full());

        let mut backing = [0usize; 8];
        let mut deque = SliceDeque::<usize>::with_len(&mut backing[..], 8);
        assert!(deque.is_full());
        deque.clear();
        assert!(deque.is_empty());
        assert_eq!(deque.begin(), deque.end());
    }

    #[test]
    fn lifo_at_the_back() {
        let mut backing = [0usize; 3];
        let mut deque = SliceDeque::<usize>::from(&mut backing[..]);

        for i in 0..deque.capacity() {
            deque.push_back(i + 1);
            assert_eq!(deque.back(), Some(&(i + 1)));
        }
        assert_eq!(deque.len(), 3);
        assert!(deque.is_full());
        assert_eq!(deque.front(), Some(&1));
        for i in 0..3 {
            assert_eq!(deque[i], i + 1);
        }

        for _ in 0..3 {
            assert!(deque.pop_back().is_some());
        }
        assert!(deque.is_empty());
        assert!(!deque.is_full());
    }

    #[test]
    fn lifo_at_the_front() {
        let mut backing = [0usize; 3];
        let mut deque = SliceDeque::<usize>::from(&mut backing[..]);

        for i in 0..deque.capacity() {
            deque.push_front(i + 1);
            assert_eq!(deque.front(), Some(&(i + 1)));
        }
        assert!(deque.is_full());
        assert_eq!(deque.back(), Some(&1));
        for i in 0..3 {
            assert_eq!(deque[3 - i - 1], i + 1);
        }

        for _ in 0..3 {
            assert!(deque.pop_front().is_some());
        }
        assert!(deque.is_empty());
    }

    #[test]
    fn fifo_through_the_back() {
        let mut backing = [0usize; 3];
        let mut deque = SliceDeque::<usize>::from(&mut backing[..]);
        for i in 0..3 {
            deque.push_back(i + 1);
        }
        deque.pop_front();
        deque.push_back(4);

        for i in 0..3 {
            assert_eq!(deque[i], i + 2);
        }
        assert!(deque.is_full());
    }

    #[test]
    fn fifo_through_the_front() {
        let mut backing = [0usize; 3];
        let mut deque = SliceDeque::<usize>::from(&mut backing[..]);
        for i in 0..3 {
            deque.push_front(i + 1);
        }
        deque.pop_back();
        deque.push_front(4);

        for i in 0..3 {
            assert_eq!(deque[3 - i - 1], i + 2);
        }
        assert!(deque.is_full());
    }

    #[test]
    #[should_panic(expected = "deque is already at capacity")]
    fn push_back_panics_when_full() {
        let mut deque = InlineDeque::<u8, 1>::new();
        deque.push_back(1);
        deque.push_back(2);
    }

    #[test]
    fn checked_access_reports_out_of_range() {
        let mut deque = InlineDeque::<i32, 4>::new();
        deque.extend([1, 2]);

        assert_eq!(deque.at(1), Ok(&2));
        let err = deque.at(2).unwrap_err();
        assert_eq!((err.index(), err.len()), (2, 2));
        assert_eq!(deque.get(5), None);

        *deque.at_mut(0).unwrap() = 10;
        *deque.get_mut(1).unwrap() += 10;
        *deque.front_mut().unwrap() += 1;
        *deque.back_mut().unwrap() += 1;
        assert_eq!(deque, [11, 13]);
    }

    #[test]
    fn append_range_splits_at_the_end_of_the_extent() {
        let mut backing = [42usize; 16];
        let mut deque = SliceDeque::<usize>::from(&mut backing[..]);
        let range = [2, 3, 4, 5, 6, 7, 8, 9];

        deque.push_back(0);
        deque.push_back(1);
        deque.append_range(range.iter().copied());
        assert_eq!(deque.len(), range.len() + 2);
        for i in 0..deque.len() {
            assert_eq!(deque[i], i);
        }

        for _ in 0..4 {
            deque.pop_front();
        }
        assert_eq!(deque.len(), range.len() - 2);

        deque.append_range(range.iter().copied());
        for i in 0..6 {
            assert_eq!(deque[i], i + 4);
        }
        for i in 6..range.len() + 6 {
            assert_eq!(deque[i], i - 4);
        }
        assert_eq!(deque.len(), range.len() * 2 - 2);
        assert_eq!(deque.as_slices().0.len(), 12);
    }

    #[test]
    fn append_range_straddling_the_end_from_fourteen_elements() {
        let mut backing = [0u32; 16];
        let mut deque = SliceDeque::<u32>::from(&mut backing[..]);
        for x in 0..14 {
            deque.push_back(x);
        }
        deque.pop_front();
        deque.pop_front();

        let old_len = deque.len();
        deque.append_range(100..104);
        let tail: Vec<u32> = (old_len..deque.len()).map(|i| deque[i]).collect();
        assert_eq!(tail, [100, 101, 102, 103]);
        assert_eq!(deque.as_slices(), (&[2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 100, 101][..], &[102, 103][..]));
    }

    #[test]
    fn prepend_range_splits_at_the_start_of_the_extent() {
        let mut backing = [42usize; 16];
        let mut deque = SliceDeque::<usize>::from(&mut backing[..]);
        let range = [0, 1, 2, 3, 4, 5, 6, 7];

        deque.push_front(9);
        deque.push_front(8);
        deque.prepend_range(range.iter().copied());
        assert_eq!(deque.len(), range.len() + 2);
        for i in 0..deque.len() {
            assert_eq!(deque[i], i);
        }

        for _ in 0..4 {
            deque.pop_back();
        }
        assert_eq!(deque.len(), range.len() - 2);

        deque.prepend_range(range.iter().copied());
        for i in 0..range.len() {
            assert_eq!(deque[i], i);
        }
        for i in range.len()..range.len() + 6 {
            assert_eq!(deque[i], i - range.len());
        }
        assert_eq!(deque.len(), range.len() * 2 - 2);
    }

    #[test]
    fn prepend_range_onto_a_front_at_the_first_slot() {
        let mut backing = [0i32; 6];
        let mut deque = SliceDeque::<i32>::from(&mut backing[..]);
        deque.extend([4, 5]);
        deque.prepend_range([1, 2, 3]);
        assert_eq!(deque.as_slices(), (&[1, 2, 3][..], &[4, 5][..]));

        let (buf, front, len) = deque.into_raw_parts();
        assert_eq!((front, len), (3, 5));
        assert_eq!(buf, [4, 5, 0, 1, 2, 3]);
    }

    #[test]
    fn prepend_range_wrapping_into_the_end() {
        let mut backing = [0i32; 6];
        let mut deque = SliceDeque::<i32>::from(&mut backing[..]);
        deque.extend([9, 9, 4, 5]);
        deque.pop_front();
        deque.pop_front();

        deque.prepend_range([0, 1, 2, 3]);
        assert_eq!(deque, [0, 1, 2, 3, 4, 5]);
        assert_eq!(deque.as_slices(), (&[0, 1][..], &[2, 3, 4, 5][..]));
        assert!(deque.is_full());

        let mut backing = [0i32; 6];
        let mut deque = SliceDeque::<i32>::from(&mut backing[..]);
        deque.extend([9, 9, 9, 4]);
        for _ in 0..3 {
            deque.pop_front();
        }
        deque.prepend_range([0, 1, 2, 3]);
        assert_eq!(deque, [0, 1, 2, 3, 4]);
        assert_eq!(deque.as_slices(), (&[0][..], &[1, 2, 3, 4][..]));
    }

    #[test]
    #[should_panic]
    fn append_range_beyond_available_panics() {
        let mut deque = InlineDeque::<u8, 4>::new();
        deque.push_back(1);
        deque.append_range([2, 3, 4, 5]);
    }

    #[test]
    fn strong_guarantee_when_overwritten_value_panics_on_drop() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        struct Slot {
            value: u32,
            explode: bool,
        }

        impl Drop for Slot {
            fn drop(&mut self) {
                if self.explode {
                    self.explode = false;
                    panic!("slot refused to be overwritten");
                }
            }
        }

        fn slot(value: u32, explode: bool) -> Slot {
            Slot { value, explode }
        }

        fn addresses(deque: &SliceDeque<'_, Slot>) -> Vec<usize> {
            deque.iter().map(|s| s as *const Slot as usize).collect()
        }

        fn values(deque: &SliceDeque<'_, Slot>) -> Vec<u32> {
            deque.iter().map(|s| s.value).collect()
        }

        let mut backing = [slot(1, false), slot(2, false), slot(0, true), slot(0, true)];
        let mut deque = SliceDeque::<Slot>::with_len(&mut backing[..], 2);
        let before = addresses(&deque);

        let result = catch_unwind(AssertUnwindSafe(|| deque.push_back(slot(3, false))));
        assert!(result.is_err());
        assert_eq!(deque.len(), 2);
        assert_eq!(addresses(&deque), before);
        assert_eq!(values(&deque), [1, 2]);

        let result = catch_unwind(AssertUnwindSafe(|| deque.push_front(slot(0, false))));
        assert!(result.is_err());
        assert_eq!(deque.len(), 2);
        assert_eq!(addresses(&deque), before);
        assert_eq!(values(&deque), [1, 2]);
    }

    #[test]
    fn only_overwritten_slots_are_dropped() {
        use core::cell::Cell;

        #[derive(Clone)]
        struct DropCounter<'a> {
            drops: &'a Cell<usize>,
        }

        impl Drop for DropCounter<'_> {
            fn drop(&mut self) {
                self.drops.set(self.drops.get() + 1);
            }
        }

        let drops = Cell::new(0);
        let counter = DropCounter { drops: &drops };
        let mut backing = [counter.clone(), counter.clone(), counter.clone()];
        let mut deque = SliceDeque::<DropCounter<'_>>::from(&mut backing[..]);

        deque.push_back(counter.clone());
        deque.push_front(counter.clone());
        assert_eq!(drops.get(), 2);

        deque.pop_back();
        deque.pop_front();
        deque.resize(3);
        deque.resize(1);
        deque.clear();
        assert_eq!(drops.get(), 2);

        deque.append_range([counter.clone(), counter.clone()]);
        deque.prepend_range([counter.clone()]);
        assert_eq!(drops.get(), 5);
        assert!(deque.is_full());

        drop(deque);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn resize_exposes_and_hides_slots() {
        let mut backing = [1, 2, 3, 4, 5];
        let mut deque = SliceDeque::<i32>::with_len(&mut backing[..], 2);
        deque.pop_front();
        deque.push_front(0);

        deque.resize(5);
        assert_eq!(deque, [0, 2, 3, 4, 5]);
        deque.resize(1);
        assert_eq!(deque, [0]);
        assert_eq!(deque.available(), 4);
    }

    #[test]
    #[should_panic]
    fn resize_beyond_capacity_panics() {
        let mut deque = InlineDeque::<u8, 2>::new();
        deque.resize(3);
    }

    #[test]
    fn raw_parts_round_trip_through_a_wrapped_layout() {
        let mut backing = [0u16; 4];
        let mut deque = SliceDeque::<u16, u8>::from(&mut backing[..]);
        deque.extend([1, 2, 3]);
        deque.pop_front();
        deque.pop_front();
        deque.extend([4, 5]);

        let (buf, front, len) = deque.into_raw_parts();
        assert_eq!((front, len), (2u8, 3u8));
        let deque = SliceDeque::<u16, u8>::from_raw_parts(buf, front, len);
        assert_eq!(deque, [3, 4, 5]);
    }

    #[test]
    #[should_panic]
    fn from_raw_parts_rejects_start_out_of_bounds() {
        let mut backing = [0u8; 4];
        let _deque = SliceDeque::<u8>::from_raw_parts(&mut backing[..], 4, 0);
    }

    #[test]
    fn borrowed_array_and_inline_storage() {
        let mut backing = [-1i32; 4];
        {
            let mut ring = CyclicDeque::<i32, &mut [i32; 4]>::from(&mut backing);
            ring.push_back(41);
            ring.push_front(42);
            assert_eq!(ring, [42, 41]);
        }
        assert_eq!(backing, [41, -1, -1, 42]);

        let inline = CyclicDeque::<i32, [i32; 4]>::with_len(backing, 1);
        assert_eq!(inline, [41]);
        let copy = inline.clone();
        assert_eq!(copy.into_raw_parts().0, [41, -1, -1, 42]);
    }

    #[test]
    fn equality_ordering_and_hashing() {
        use core::hash::BuildHasher;
        use std::collections::hash_map::RandomState;

        let mut a = InlineDeque::<u8, 4>::new();
        a.extend([3, 4]);
        a.push_front(2);

        let mut backing = [0u8; 8];
        let mut b = SliceDeque::<u8, u16>::from(&mut backing[..]);
        b.extend(&[2, 3, 4]);

        assert_eq!(a, b);
        assert_eq!(a, [2, 3, 4]);
        assert_ne!(a, [2, 3]);

        b.pop_front();
        assert!(a < b);
        let mut c = a.clone();
        c.push_back(0);
        assert!(a < c);

        let hasher = RandomState::new();
        let mut d = InlineDeque::<u8, 4>::new();
        d.extend([2, 3, 4]);
        assert_eq!(hasher.hash_one(&a), hasher.hash_one(&d));
        assert_eq!(std::format!("{:?}", a), "[2, 3, 4]");
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn owned_heap_constructors() {
        let mut deque = AllocDeque::<u32>::with_capacity(3);
        assert_eq!(deque.capacity(), 3);
        assert!(deque.is_empty());
        deque.extend([1, 2, 3]);
        assert!(deque.is_full());

        let seeded = AllocDeque::<u32, u8>::with_capacity_and_len(5, 2);
        assert_eq!(seeded, [0, 0]);

        let partial = AllocDeque::<u32>::from_iter_with_capacity([7, 8], 4);
        assert_eq!(partial, [7, 8]);
        assert_eq!(partial.available(), 2);

        let full: AllocDeque<u32> = (0..6).collect();
        assert_eq!(full.capacity(), 6);
        assert!(full.is_full());
        let copy = full.clone();
        assert_eq!(copy, full);
    }

    #[cfg(feature = "alloc")]
    #[test]
    #[should_panic(expected = "iterator yielded more than 2 items")]
    fn from_iter_with_capacity_rejects_long_inputs() {
        let _ = AllocDeque::<u32>::from_iter_with_capacity(0..3, 2);
    }

    #[test]
    fn randomized_against_std_vec_deque() {
        use rand::{rngs::SmallRng, Rng, SeedableRng};
        use std::collections::VecDeque;

        let mut rng = SmallRng::seed_from_u64(0x5432_1012_3454_3210);

        for capacity in [1usize, 2, 3, 7, 16] {
            let mut backing = [0u64; 16];
            let mut deque = SliceDeque::<u64>::from(&mut backing[..capacity]);
            let mut model = VecDeque::new();

            for step in 0..2000u64 {
                match rng.gen_range(0..8) {
                    0 => {
                        let pushed = deque.try_push_back(step).is_ok();
                        assert_eq!(pushed, model.len() < capacity);
                        if pushed {
                            model.push_back(step);
                        }
                    }
                    1 => {
                        let pushed = deque.try_push_front(step).is_ok();
                        assert_eq!(pushed, model.len() < capacity);
                        if pushed {
                            model.push_front(step);
                        }
                    }
                    2 => assert_eq!(deque.pop_back().copied(), model.pop_back()),
                    3 => assert_eq!(deque.pop_front().copied(), model.pop_front()),
                    4 => {
                        let n = rng.gen_range(0..=deque.available());
                        deque.append_range((0..n).map(|x| step * 100 + x as u64));
                        model.extend((0..n).map(|x| step * 100 + x as u64));
                    }
                    5 => {
                        let n = rng.gen_range(0..=deque.available());
                        deque.prepend_range((0..n).map(|x| step * 100 + x as u64));
                        for x in (0..n).rev() {
                            model.push_front(step * 100 + x as u64);
                        }
                    }
                    6 => {
                        let n = rng.gen_range(0..=model.len());
                        deque.resize(n);
                        model.truncate(n);
                    }
                    _ => {
                        if rng.gen_bool(0.1) {
                            deque.clear();
                            model.clear();
                        }
                    }
                }

                assert_eq!(deque.len(), model.len());
                assert_eq!(deque.len() + deque.available(), capacity);
                assert_eq!(deque.front(), model.front());
                assert_eq!(deque.back(), model.back());
                assert!(deque.iter().eq(model.iter()));
                assert!(deque.iter().rev().eq(model.iter().rev()));
                assert_eq!(deque.end() - deque.begin(), model.len() as isize);

                let begin = deque.begin();
                for (i, x) in model.iter().enumerate() {
                    assert_eq!(&begin[i as isize], x);
                    assert_eq!(deque.at(i), Ok(x));
                }
            }
        }
    }
}
