//! Traits providing genericity over backing extents and index types.
//!
//! A [`CyclicDeque`](crate::CyclicDeque) never allocates after construction.
//! It works on top of an [`Extent`], which is either borrowed from the caller
//! (`&mut [T]`, `&mut [T; N]`) or owned by the deque (`[T; N]`, and with the
//! `alloc` feature, `Box<[T]>`). Unlike the uninitialized buffers used by
//! most fixed-capacity containers, every slot of an extent always holds a
//! valid `T`; the deque only moves its cursors over them.

/// Two-way conversion between `Self` and `usize`.
///
/// The ring cursors and the element count of a deque are stored as values of
/// this type, so a smaller type such as `u8` or `u16` shrinks the deque's
/// bookkeeping at the cost of limiting its capacity.
///
/// # Safety
/// Implementors must ensure the conversion functions are each other's inverse,
/// i.e. `Capacity::from_usize(i).into_usize()` must either evaluate to `i`, or
/// panic for all `usize` values.
///
/// Using [`index_type!`] should be preferred over implementing this manually.
pub unsafe trait Capacity: Copy {
    /// Convert a `usize` into `Self`.
    fn from_usize(i: usize) -> Self;
    /// Convert `self` into `usize`.
    fn into_usize(&self) -> usize;
}

#[inline(never)]
#[cold]
#[track_caller]
fn from_value_out_of_range(i: usize) -> ! {
    panic!("called `from_usize` with value out of range (is {})", i)
}

#[inline(never)]
#[cold]
#[track_caller]
fn into_value_out_of_range() -> ! {
    panic!("called `into_usize` with value out of range")
}

macro_rules! narrow_capacity {
    ($repr:ty, widen) => {
        narrow_capacity!($repr, |x: $repr| -> usize { x.into() });
    };
    ($repr:ty, checked) => {
        narrow_capacity!($repr, |x: $repr| -> usize {
            match x.try_into() {
                Ok(t) => t,
                Err(_) => into_value_out_of_range(),
            }
        });
    };
    ($repr:ty, $into:expr) => {
        unsafe impl Capacity for $repr {
            #[inline]
            #[track_caller]
            fn from_usize(i: usize) -> Self {
                match i.try_into() {
                    Ok(t) => t,
                    Err(_) => from_value_out_of_range(i),
                }
            }

            #[inline]
            #[track_caller]
            fn into_usize(&self) -> usize {
                ($into)(*self)
            }
        }
    };
}

narrow_capacity!(u8, widen);
narrow_capacity!(u16, widen);
narrow_capacity!(u32, checked);
narrow_capacity!(u64, checked);

unsafe impl Capacity for usize {
    #[inline]
    fn from_usize(i: usize) -> Self {
        i
    }

    #[inline]
    fn into_usize(&self) -> usize {
        *self
    }
}

/// Generates a newtype wrapping an implementor of [`Capacity`].
///
/// This can help in avoiding use of the wrong index with a
/// [`CyclicDeque`](crate::CyclicDeque).
///
/// # Examples
/// ```
/// use cyclic_deque::{index_type, CyclicDeque};
///
/// index_type! { pub SlotIndex: u8 };
///
/// let mut backing = [0u32; 20];
/// let mut deque = CyclicDeque::<_, _, SlotIndex>::from(&mut backing[..]);
/// deque.push_back(7);
/// assert_eq!(deque.front(), Some(&7));
/// ```
#[macro_export]
macro_rules! index_type {
    ($v:vis $name:ident: $repr:ty) => {
        #[derive(
            core::marker::Copy,
            core::clone::Clone,
            core::default::Default,
            core::fmt::Debug,
            core::hash::Hash,
            core::cmp::PartialEq,
            core::cmp::Eq,
            core::cmp::PartialOrd,
            core::cmp::Ord)]
        $v struct $name($repr);

        unsafe impl $crate::storage::Capacity for $name {
            #[inline]
            #[track_caller]
            fn from_usize(i: usize) -> Self {
                Self(<$repr as $crate::storage::Capacity>::from_usize(i))
            }

            #[inline]
            #[track_caller]
            fn into_usize(&self) -> usize {
                <$repr as $crate::storage::Capacity>::into_usize(&self.0)
            }
        }
    }
}

/// A contiguous, fully initialized block of slots backing a deque.
///
/// The block is established once, when the deque is constructed, and is
/// never grown, shrunk or reallocated afterwards.
///
/// # Safety
/// Implementors must ensure the length of the slices returned by
/// [`slots`](Extent::slots) and [`slots_mut`](Extent::slots_mut) never
/// changes, and that both refer to the same memory. The ring arithmetic
/// relies on this to keep its cursors within bounds.
///
/// Cursor offsets are signed, so a deque rejects extents with more than
/// `isize::MAX` slots at construction. Only zero-sized `T` can reach that
/// length.
pub unsafe trait Extent<T>: Sized {
    /// Extracts a slice over the entire block.
    fn slots(&self) -> &[T];
    /// Extracts a mutable slice over the entire block.
    fn slots_mut(&mut self) -> &mut [T];

    /// Returns the size of the block in units of `T`.
    #[inline]
    fn capacity(&self) -> usize {
        self.slots().len()
    }
}

/// Shorthand for `&'a mut [T]`, storage borrowed from the caller.
pub type SliceStorage<'a, T> = &'a mut [T];

unsafe impl<T> Extent<T> for SliceStorage<'_, T> {
    #[inline]
    fn slots(&self) -> &[T] {
        self
    }
    #[inline]
    fn slots_mut(&mut self) -> &mut [T] {
        self
    }
}

unsafe impl<T, const C: usize> Extent<T> for &mut [T; C] {
    #[inline]
    fn slots(&self) -> &[T] {
        &self[..]
    }
    #[inline]
    fn slots_mut(&mut self) -> &mut [T] {
        &mut self[..]
    }
    #[inline]
    fn capacity(&self) -> usize {
        C
    }
}

/// Shorthand for `[T; C]`, storage owned inline by the deque.
pub type InlineStorage<T, const C: usize> = [T; C];

unsafe impl<T, const C: usize> Extent<T> for InlineStorage<T, C> {
    #[inline]
    fn slots(&self) -> &[T] {
        &self[..]
    }
    #[inline]
    fn slots_mut(&mut self) -> &mut [T] {
        &mut self[..]
    }
    #[inline]
    fn capacity(&self) -> usize {
        C
    }
}

/// Shorthand for [`alloc::boxed::Box<[T]>`](alloc::boxed::Box), storage owned
/// by the deque and allocated exactly once.
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub type AllocStorage<T> = alloc::boxed::Box<[T]>;

#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
unsafe impl<T> Extent<T> for AllocStorage<T> {
    #[inline]
    fn slots(&self) -> &[T] {
        self
    }
    #[inline]
    fn slots_mut(&mut self) -> &mut [T] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_index_types_round_trip() {
        assert_eq!(u8::from_usize(255).into_usize(), 255);
        assert_eq!(u16::from_usize(1000).into_usize(), 1000);
        assert_eq!(u32::from_usize(70_000).into_usize(), 70_000);
        assert_eq!(usize::from_usize(usize::MAX).into_usize(), usize::MAX);
    }

    #[test]
    #[should_panic]
    fn from_usize_panics_when_out_of_range() {
        let _ = u8::from_usize(256);
    }

    #[test]
    fn extents_report_their_length() {
        let mut array = [0u16; 5];
        assert_eq!(Extent::<u16>::capacity(&array), 5);

        let by_ref: &mut [u16; 5] = &mut array;
        assert_eq!(Extent::<u16>::capacity(&by_ref), 5);

        let slice: SliceStorage<'_, u16> = &mut array[1..];
        assert_eq!(slice.capacity(), 4);
        assert_eq!(slice.slots().len(), 4);
    }

    #[test]
    fn generated_index_type_converts() {
        index_type! { Slot: u16 };
        let slot = Slot::from_usize(12);
        assert_eq!(slot, Slot(12));
        assert_eq!(slot.into_usize(), 12);
    }
}
