//! Random-access cursors and iterators over a [`CyclicDeque`](crate::CyclicDeque).
//!
//! A cursor is a reference to the deque's ring state plus a signed logical
//! offset. Moving a cursor is plain integer arithmetic on that offset; the
//! offset is translated to a physical slot, wrapping around the end of the
//! backing extent, only when the cursor is dereferenced.
//!
//! Because translation happens at dereference time and ignores the occupied
//! length, any offset in `[-capacity, 2 * capacity)` refers to *some* slot.
//! Offsets outside `[0, len)` simply refer to slots that are not currently
//! occupied.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Formatter};
use core::iter::FusedIterator;
use core::ops::{Add, AddAssign, Deref, DerefMut, Index, Sub, SubAssign};

use crate::ring::RingState;
use crate::storage::{Capacity, Extent};

/// A read-only random-access cursor into a deque.
///
/// This `struct` is created by the [`begin`](crate::CyclicDeque::begin),
/// [`end`](crate::CyclicDeque::end) and [`cursor`](crate::CyclicDeque::cursor)
/// methods on [`CyclicDeque`](crate::CyclicDeque). Comparing or subtracting
/// cursors into two different deques is a logic error.
///
/// # Examples
/// ```
/// let mut backing = [0i32; 4];
/// let mut deque = cyclic_deque::SliceDeque::<i32>::from(&mut backing[..]);
/// deque.extend([39, 40, 41, 42]);
/// deque.pop_front();
/// deque.pop_front();
/// deque.extend([43, 44]);
///
/// let begin = deque.begin();
/// let end = deque.end();
/// assert_eq!(end - begin, 4);
/// assert_eq!(*(begin + 2), 43);
/// assert_eq!(begin[3], 44);
/// assert_eq!((end - 1)[-3], 41);
/// assert!(begin < end);
/// ```
pub struct Cursor<'a, T, S: Extent<T>, I: Capacity> {
    ring: &'a RingState<T, S, I>,
    index: isize,
}

impl<'a, T, S: Extent<T>, I: Capacity> Cursor<'a, T, S, I> {
    #[inline]
    pub(crate) fn new(ring: &'a RingState<T, S, I>, index: isize) -> Self {
        Cursor { ring, index }
    }

    /// Returns the logical offset of the cursor from the front of the deque.
    #[inline]
    pub fn offset(&self) -> isize {
        self.index
    }

    /// Returns a reference to the element the cursor points at.
    ///
    /// # Panics
    /// Panics if the deque has zero capacity.
    #[inline]
    pub fn get(&self) -> &'a T {
        self.get_at(0)
    }

    /// Returns a reference to the element `n` positions away from the cursor.
    ///
    /// Equivalent to `(cursor + n).get()`.
    ///
    /// # Panics
    /// Panics if the deque has zero capacity.
    #[inline]
    pub fn get_at(&self, n: isize) -> &'a T {
        let ring = self.ring;
        ring.slot(ring.translate(self.index + n))
    }

    /// Moves the cursor one position towards the back.
    #[inline]
    pub fn move_next(&mut self) {
        self.index += 1;
    }

    /// Moves the cursor one position towards the front.
    #[inline]
    pub fn move_prev(&mut self) {
        self.index -= 1;
    }

    /// Returns an iterator over the elements from this cursor up to, but not
    /// including, `end`.
    ///
    /// # Examples
    /// ```
    /// let mut backing = [0u8; 5];
    /// let mut deque = cyclic_deque::SliceDeque::<u8>::from(&mut backing[..]);
    /// deque.extend(1..=5);
    ///
    /// let middle: Vec<u8> = (deque.begin() + 1).until(deque.end() - 1).copied().collect();
    /// assert_eq!(middle, [2, 3, 4]);
    /// ```
    #[inline]
    pub fn until(self, end: Cursor<'a, T, S, I>) -> Iter<'a, T, S, I> {
        debug_assert!(self.same_ring(&end));
        Iter {
            ring: self.ring,
            front: self.index,
            back: end.index.max(self.index),
        }
    }

    #[inline]
    fn same_ring(&self, other: &Self) -> bool {
        core::ptr::eq(self.ring, other.ring)
    }
}

impl<T, S: Extent<T>, I: Capacity> Clone for Cursor<'_, T, S, I> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, S: Extent<T>, I: Capacity> Copy for Cursor<'_, T, S, I> {}

impl<T, S: Extent<T>, I: Capacity> Debug for Cursor<'_, T, S, I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.index).finish()
    }
}

impl<T, S: Extent<T>, I: Capacity> Deref for Cursor<'_, T, S, I> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T, S: Extent<T>, I: Capacity> Index<isize> for Cursor<'_, T, S, I> {
    type Output = T;

    #[inline]
    fn index(&self, n: isize) -> &T {
        self.get_at(n)
    }
}

impl<T, S: Extent<T>, I: Capacity> AddAssign<isize> for Cursor<'_, T, S, I> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.index += n;
    }
}

impl<T, S: Extent<T>, I: Capacity> SubAssign<isize> for Cursor<'_, T, S, I> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.index -= n;
    }
}

impl<'a, T, S: Extent<T>, I: Capacity> Add<isize> for Cursor<'a, T, S, I> {
    type Output = Cursor<'a, T, S, I>;

    #[inline]
    fn add(mut self, n: isize) -> Self::Output {
        self += n;
        self
    }
}

impl<'a, T, S: Extent<T>, I: Capacity> Add<Cursor<'a, T, S, I>> for isize {
    type Output = Cursor<'a, T, S, I>;

    #[inline]
    fn add(self, cursor: Cursor<'a, T, S, I>) -> Self::Output {
        cursor + self
    }
}

impl<'a, T, S: Extent<T>, I: Capacity> Sub<isize> for Cursor<'a, T, S, I> {
    type Output = Cursor<'a, T, S, I>;

    #[inline]
    fn sub(mut self, n: isize) -> Self::Output {
        self -= n;
        self
    }
}

impl<'a, T, S: Extent<T>, I: Capacity> Sub for Cursor<'a, T, S, I> {
    type Output = isize;

    #[inline]
    fn sub(self, other: Self) -> isize {
        debug_assert!(self.same_ring(&other));
        self.index - other.index
    }
}

impl<T, S: Extent<T>, I: Capacity> PartialEq for Cursor<'_, T, S, I> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(self.same_ring(other));
        self.index == other.index
    }
}

impl<T, S: Extent<T>, I: Capacity> Eq for Cursor<'_, T, S, I> {}

impl<T, S: Extent<T>, I: Capacity> PartialOrd for Cursor<'_, T, S, I> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, S: Extent<T>, I: Capacity> Ord for Cursor<'_, T, S, I> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        debug_assert!(self.same_ring(other));
        self.index.cmp(&other.index)
    }
}

/// A random-access cursor into a deque that allows mutating the element it
/// points at.
///
/// This `struct` is created by the [`begin_mut`](crate::CyclicDeque::begin_mut),
/// [`end_mut`](crate::CyclicDeque::end_mut) and
/// [`cursor_mut`](crate::CyclicDeque::cursor_mut) methods on
/// [`CyclicDeque`](crate::CyclicDeque). It converts into a read-only
/// [`Cursor`] at the same offset, but not the other way around.
///
/// # Examples
/// ```
/// use cyclic_deque::Cursor;
///
/// let mut backing = [0u32; 3];
/// let mut deque = cyclic_deque::SliceDeque::<u32>::from(&mut backing[..]);
/// deque.extend([1, 2, 3]);
///
/// let mut cursor = deque.begin_mut();
/// cursor += 1;
/// *cursor.get_mut() = 20;
/// cursor.move_next();
/// *cursor.get_mut() *= 10;
///
/// let read_only: Cursor<'_, _, _, _> = cursor.into();
/// assert_eq!(read_only.offset(), 2);
/// assert_eq!(read_only[-1], 20);
/// assert_eq!(deque, [1, 20, 30]);
/// ```
pub struct CursorMut<'a, T, S: Extent<T>, I: Capacity> {
    ring: &'a mut RingState<T, S, I>,
    index: isize,
}

impl<'a, T, S: Extent<T>, I: Capacity> CursorMut<'a, T, S, I> {
    #[inline]
    pub(crate) fn new(ring: &'a mut RingState<T, S, I>, index: isize) -> Self {
        CursorMut { ring, index }
    }

    /// Returns the logical offset of the cursor from the front of the deque.
    #[inline]
    pub fn offset(&self) -> isize {
        self.index
    }

    /// Returns a reference to the element the cursor points at.
    ///
    /// # Panics
    /// Panics if the deque has zero capacity.
    #[inline]
    pub fn get(&self) -> &T {
        self.ring.slot(self.ring.translate(self.index))
    }

    /// Returns a mutable reference to the element the cursor points at.
    ///
    /// # Panics
    /// Panics if the deque has zero capacity.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        let physical = self.ring.translate(self.index);
        self.ring.slot_mut(physical)
    }

    /// Converts the cursor into a mutable reference to the element it points
    /// at, with the lifetime of the original borrow.
    ///
    /// # Panics
    /// Panics if the deque has zero capacity.
    #[inline]
    pub fn into_mut(self) -> &'a mut T {
        let physical = self.ring.translate(self.index);
        self.ring.slot_mut(physical)
    }

    /// Moves the cursor one position towards the back.
    #[inline]
    pub fn move_next(&mut self) {
        self.index += 1;
    }

    /// Moves the cursor one position towards the front.
    #[inline]
    pub fn move_prev(&mut self) {
        self.index -= 1;
    }

    /// Returns a read-only cursor at the same offset, borrowing from this one.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T, S, I> {
        Cursor::new(self.ring, self.index)
    }
}

impl<'a, T, S: Extent<T>, I: Capacity> From<CursorMut<'a, T, S, I>> for Cursor<'a, T, S, I> {
    #[inline]
    fn from(cursor: CursorMut<'a, T, S, I>) -> Self {
        Cursor::new(cursor.ring, cursor.index)
    }
}

impl<T, S: Extent<T>, I: Capacity> Debug for CursorMut<'_, T, S, I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.index).finish()
    }
}

impl<T, S: Extent<T>, I: Capacity> Deref for CursorMut<'_, T, S, I> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T, S: Extent<T>, I: Capacity> DerefMut for CursorMut<'_, T, S, I> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<T, S: Extent<T>, I: Capacity> AddAssign<isize> for CursorMut<'_, T, S, I> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.index += n;
    }
}

impl<T, S: Extent<T>, I: Capacity> SubAssign<isize> for CursorMut<'_, T, S, I> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.index -= n;
    }
}

/// An iterator over the elements of a deque.
///
/// This `struct` is created by the [`iter`](crate::CyclicDeque::iter) method
/// on [`CyclicDeque`](crate::CyclicDeque) and by [`Cursor::until`]. Iterating
/// it in reverse with [`rev`](Iterator::rev) visits the elements back to front.
pub struct Iter<'a, T, S: Extent<T>, I: Capacity> {
    ring: &'a RingState<T, S, I>,
    front: isize,
    back: isize,
}

impl<'a, T, S: Extent<T>, I: Capacity> Iter<'a, T, S, I> {
    /// Returns cursors at the current front and back of the iterator.
    #[inline]
    pub fn as_cursors(&self) -> (Cursor<'a, T, S, I>, Cursor<'a, T, S, I>) {
        (
            Cursor::new(self.ring, self.front),
            Cursor::new(self.ring, self.back),
        )
    }
}

impl<T, S: Extent<T>, I: Capacity> Clone for Iter<'_, T, S, I> {
    fn clone(&self) -> Self {
        Iter {
            ring: self.ring,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T: Debug, S: Extent<T>, I: Capacity> Debug for Iter<'_, T, S, I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T, S: Extent<T>, I: Capacity> Iterator for Iter<'a, T, S, I> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }

        let ring = self.ring;
        let result = ring.slot(ring.translate(self.front));
        self.front += 1;
        Some(result)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.back - self.front) as usize;
        (len, Some(len))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        let remaining = (self.back - self.front) as usize;
        if n >= remaining {
            self.front = self.back;
            return None;
        }

        self.front += n as isize;
        self.next()
    }
}

impl<'a, T, S: Extent<T>, I: Capacity> DoubleEndedIterator for Iter<'a, T, S, I> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        let ring = self.ring;
        Some(ring.slot(ring.translate(self.back)))
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a T> {
        let remaining = (self.back - self.front) as usize;
        if n >= remaining {
            self.back = self.front;
            return None;
        }

        self.back -= n as isize;
        self.next_back()
    }
}

impl<T, S: Extent<T>, I: Capacity> ExactSizeIterator for Iter<'_, T, S, I> {}
impl<T, S: Extent<T>, I: Capacity> FusedIterator for Iter<'_, T, S, I> {}

/// A mutable iterator over the elements of a deque.
///
/// This `struct` is created by the [`iter_mut`](crate::CyclicDeque::iter_mut)
/// method on [`CyclicDeque`](crate::CyclicDeque). See its documentation for more.
pub struct IterMut<'a, T> {
    front: core::slice::IterMut<'a, T>,
    back: core::slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    #[inline]
    pub(crate) fn new((front, back): (&'a mut [T], &'a mut [T])) -> Self {
        IterMut {
            front: front.iter_mut(),
            back: back.iter_mut(),
        }
    }
}

impl<T: Debug> Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut")
            .field(&self.front.as_slice())
            .field(&self.back.as_slice())
            .finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.front.next().or_else(|| self.back.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}
