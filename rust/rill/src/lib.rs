//! Eager, in-memory sequence pipelines.
//!
//! A [`Stream`] wraps an ordered `Vec` and offers chainable transformations
//! (filter, map, reverse, sort, dedupe, skip/limit, concat) and terminal
//! operations (reduce, search, quantifiers, keyed collection). Each step runs to
//! completion and materializes its result; nothing is lazy and nothing runs in
//! parallel.
//!
//! Operations that may have no answer (`find_first`, `max`, `reduce`, ...)
//! return an [`Optional`]. Type-changing and keyed operations also exist as free
//! functions in [`ops`].
//!
//! ```
//! use rill::stream;
//!
//! let words = stream!["apple", "bob", "avocado", "cherry"];
//! let groups = words.grouping_by_string(|w| w[..1].to_string(), &mut []);
//! assert_eq!(groups["a"], ["apple", "avocado"]);
//! ```

pub mod key;
pub mod ops;
pub mod optional;
pub mod stream;

#[cfg(test)]
mod tests;

pub use key::{GroupKey, Groups, KeyedMap};
pub use optional::Optional;
pub use stream::Stream;

/// Builds a [`Stream`] from a list of values, in the given order.
///
/// ```
/// let s = rill::stream![1, 2, 3];
/// assert_eq!(s.to_slice(), &[1, 2, 3]);
/// ```
#[macro_export]
macro_rules! stream {
    () => {
        $crate::Stream::empty()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Stream::from_vec(vec![$($item),+])
    };
}
