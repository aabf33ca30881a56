//! This crate provides a singly-linked list with owned nodes and a reference to
//! its last node.
//!
//! The [`List`] allows appending and prepending elements in constant time, and
//! inserting, removing, reading or replacing elements at any index in time
//! proportional to that index.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use tailed_list::{List, ListError};
//!
//! let mut list = List::new();
//! list.append(1);
//! list.append(2);
//! list.prepend(0);
//! assert_eq!(list.to_string(), "List(0,1,2)");
//!
//! assert_eq!(list.remove(1), Ok(1));
//! list.insert(1, 9)?;
//! assert_eq!(list.to_string(), "List(0,9,2)");
//!
//! assert_eq!(
//!     list.get(5),
//!     Err(ListError::InvalidIndex { index: 5, len: 3 })
//! );
//! # Ok::<(), ListError>(())
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!    ╔═══════════╗           ╔═══════════╗                        ╔═══════════╗
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ ║   next    ║ ──→ None
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ╟───────────╢
//!    ║ payload T ║           ║ payload T ║                        ║ payload T ║
//!    ╚═══════════╝           ╚═══════════╝                        ╚═══════════╝
//!      Node 0  ↑                                                 Node n-1  ↑
//!              │                                                           │
//! ╔═══════════╗│                                                           │
//! ║   first   ║┘                                                           │
//! ╟───────────╢                                                            │
//! ║   last    ║ ───────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a pointer `first` to the first node, which owns the whole chain;
//! - a pointer `last` to the last node, which only observes it and is used to
//!   append in constant time;
//! - a length field `len`, so that `len()` is constant time.
//!
//! In an empty list, both `first` and `last` are `None` and `len` is 0.
//!
//! Each node of the list `List<T>` is allocated on heap, and contains the `next`
//! pointer to the following node (`None` for the last node) and the payload `T`.
//!
//! # Errors
//!
//! Indexed operations return [`ListError::InvalidIndex`] when the index is out
//! of range, and leave the list untouched. Indexing with `list[i]` panics
//! instead, like slices do.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These
//! are forward-only and fused. [`Iter`] additionally offers an explicit
//! [`has_next`]/[`try_next`] protocol, where advancing past the end is a
//! [`ListError::ExhaustedSequence`] error.
//!
//! ## Examples
//!
//! ```
//! use tailed_list::{List, ListError};
//!
//! let mut list = List::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.try_next(), Ok(&2));
//! assert!(iter.has_next());
//! assert_eq!(iter.next(), Some(&3));
//! assert!(!iter.has_next());
//! assert_eq!(iter.try_next(), Err(ListError::ExhaustedSequence));
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Features
//!
//! - `tracing` (enabled by default): emits `trace`-level events on the
//!   structural paths of the list, through the [`tracing`] crate.
//!
//! [`has_next`]: crate::Iter::has_next
//! [`try_next`]: crate::Iter::try_next
//! [`tracing`]: https://docs.rs/tracing

macro_rules! trace_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    }};
}

#[doc(inline)]
pub use error::{ListError, Result};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod error;
pub mod list;
