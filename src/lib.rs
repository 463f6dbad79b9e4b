#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/cyclic-deque/0.1.0")]

//! A fixed-capacity double-ended queue over a ring buffer.
//!
//! [`CyclicDeque`] attaches to a contiguous block of slots, either borrowed
//! from the caller or owned by the deque, and never reallocates. Elements are
//! addressed through two cursors that wrap around the block, which gives
//! constant-time pushes and pops at both ends, constant-time indexing, and
//! bulk insertion at either end in at most two contiguous runs.
//!
//! ```
//! use cyclic_deque::SliceDeque;
//!
//! let mut backing = [0u32; 4];
//! let mut deque = SliceDeque::<u32>::from(&mut backing[..]);
//! deque.push_back(2);
//! deque.push_front(1);
//! deque.append_range([3, 4]);
//! assert!(deque.is_full());
//!
//! assert_eq!(deque.pop_front().copied(), Some(1));
//! assert_eq!(deque, [2, 3, 4]);
//! ```
//!
//! # Crate Features
//!
//! - `alloc` (enabled by default): adds [`AllocDeque`], a deque owning a
//!   heap-allocated block that is allocated once at construction.
//! - `unstable`: builds the benchmarks, which require a nightly compiler.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod cursor;
pub mod deque;
pub mod error;
pub mod ring;
pub mod storage;

pub use crate::cursor::{Cursor, CursorMut, Iter, IterMut};
pub use crate::deque::{CyclicDeque, InlineDeque, SliceDeque, TiInlineDeque};
pub use crate::error::OutOfRange;

#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub use crate::deque::AllocDeque;
