//! The error reported by bounds-checked element access.

use core::fmt::{self, Display, Formatter};

/// The error returned by [`CyclicDeque::at`](crate::CyclicDeque::at) and
/// [`CyclicDeque::at_mut`](crate::CyclicDeque::at_mut) when the requested
/// index is not smaller than the deque's length.
///
/// # Examples
/// ```
/// let mut backing = [0u8; 4];
/// let mut deque = cyclic_deque::SliceDeque::<u8>::from(&mut backing[..]);
/// deque.push_back(1);
///
/// let err = deque.at(3).unwrap_err();
/// assert_eq!(err.index(), 3);
/// assert_eq!(err.len(), 1);
/// assert_eq!(
///     format!("{}", err),
///     "index out of range: the index is 3 but the length is 1"
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct OutOfRange {
    index: usize,
    len: usize,
}

impl OutOfRange {
    pub(crate) fn new(index: usize, len: usize) -> Self {
        OutOfRange { index, len }
    }

    /// Returns the index that was requested.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the length of the deque at the time of the request.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }
}

impl Display for OutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index out of range: the index is {} but the length is {}",
            self.index, self.len
        )
    }
}

impl core::error::Error for OutOfRange {}
