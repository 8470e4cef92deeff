//! The eager sequence pipeline.

use std::{cmp::Ordering, hash::Hash};

use ahash::AHashSet;
use rill_common::{Error, verify_arg};

use crate::{
    key::{Groups, KeyedMap},
    ops,
    optional::Optional,
};

/// An ordered, finite, in-memory sequence with chainable transformations and
/// terminal operations.
///
/// Every intermediate step is evaluated immediately and materializes its result.
/// Transformations take the stream by value and return a new one, reusing the
/// backing `Vec` where they can. A stream built with [`Stream::from_vec`] adopts
/// the vector without copying it.
///
/// Escape hatches that expose the backing storage mutably: [`Stream::peek`],
/// [`Stream::find_first_mut`], [`Stream::find_last_mut`] and
/// [`Stream::as_mut_slice`]. Clone the stream first if isolation is needed.
///
/// # Examples
///
/// ```
/// use rill::stream;
///
/// let total = stream![5, 1, 4, 1, 3]
///     .distinct()
///     .filter(|v| *v > 1)
///     .sorted(|a, b| a < b)
///     .reduce(|a, b| a + b);
/// assert_eq!(total.get(), Some(&12));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Stream<T> {
    source: Vec<T>,
}

impl<T> Stream<T> {
    /// Creates an empty stream. Does not allocate.
    pub const fn empty() -> Stream<T> {
        Stream { source: Vec::new() }
    }

    /// Creates a stream over `source`, taking ownership without copying.
    #[inline]
    pub fn from_vec(source: Vec<T>) -> Stream<T> {
        Stream { source }
    }

    /// Creates a stream whose elements are the given values, in order.
    ///
    /// See also the [`stream!`](crate::stream!) macro.
    pub fn of(values: impl IntoIterator<Item = T>) -> Stream<T> {
        values.into_iter().collect()
    }

    /// Inverts the element order.
    pub fn reverse(self) -> Stream<T> {
        let mut source = self.source;
        source.reverse();
        Stream::from_vec(source)
    }

    /// Keeps the elements for which `predicate` holds, in their original order.
    pub fn filter(self, mut predicate: impl FnMut(&T) -> bool) -> Stream<T> {
        let mut source = self.source;
        source.retain(|item| predicate(item));
        Stream::from_vec(source)
    }

    /// Drops the first `n` elements.
    ///
    /// A zero or negative `n` returns the stream unchanged; an `n` at or beyond
    /// the length yields an empty stream.
    pub fn skip(self, n: isize) -> Stream<T> {
        if n <= 0 {
            return self;
        }
        let n = n as usize;
        if n >= self.source.len() {
            return Stream::empty();
        }
        let mut source = self.source;
        source.drain(..n);
        Stream::from_vec(source)
    }

    /// Keeps at most the first `max_size` elements.
    ///
    /// A negative `max_size` yields an empty stream; one beyond the length keeps
    /// everything. An empty stream is returned as is.
    pub fn limit(self, max_size: isize) -> Stream<T> {
        if self.source.is_empty() {
            return self;
        }
        if max_size < 0 {
            return Stream::empty();
        }
        let mut source = self.source;
        source.truncate(max_size as usize);
        Stream::from_vec(source)
    }

    /// Appends the elements of `others` after this stream's elements, in
    /// argument order.
    ///
    /// With no other streams the receiver is returned unchanged.
    pub fn concat(self, others: impl IntoIterator<Item = Stream<T>>) -> Stream<T> {
        let mut others = others.into_iter().peekable();
        if others.peek().is_none() {
            return self;
        }
        let mut source = self.source;
        for other in others {
            source.extend(other.source);
        }
        Stream::from_vec(source)
    }

    /// Keeps the first element for every distinct key produced by `key_fn`.
    pub fn distinct_by<K>(self, mut key_fn: impl FnMut(&T) -> K) -> Stream<T>
    where
        K: Eq + Hash,
    {
        let mut seen = AHashSet::with_capacity(self.source.len());
        let mut source = self.source;
        source.retain(|item| seen.insert(key_fn(item)));
        Stream::from_vec(source)
    }

    /// Orders the elements by a strict weak ordering: `less(a, b)` is true when
    /// `a` must come before `b`.
    ///
    /// The sort is not stable; elements that compare equal may be reordered.
    pub fn sorted(self, mut less: impl FnMut(&T, &T) -> bool) -> Stream<T> {
        self.sorted_by(|a, b| {
            if less(a, b) {
                Ordering::Less
            } else if less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
    }

    /// Orders the elements by `compare`. Not stable.
    pub fn sorted_by(self, compare: impl FnMut(&T, &T) -> Ordering) -> Stream<T> {
        let mut source = self.source;
        source.sort_unstable_by(compare);
        Stream::from_vec(source)
    }

    /// Orders the elements by the key extracted with `key_fn`. Not stable.
    pub fn sorted_by_key<K: Ord>(self, key_fn: impl FnMut(&T) -> K) -> Stream<T> {
        let mut source = self.source;
        source.sort_unstable_by_key(key_fn);
        Stream::from_vec(source)
    }

    /// Calls `consumer` with a mutable reference to each element, in place.
    ///
    /// Changes made by the consumer are part of the returned stream.
    pub fn peek(mut self, consumer: impl FnMut(&mut T)) -> Stream<T> {
        self.source.iter_mut().for_each(consumer);
        self
    }

    /// Calls `consumer` with a clone of each element.
    ///
    /// The consumer works on its own copy; the stream is returned untouched.
    pub fn peek_cloned(self, consumer: impl FnMut(T)) -> Stream<T>
    where
        T: Clone,
    {
        self.source.iter().cloned().for_each(consumer);
        self
    }

    /// Applies `mapper` to every element. See [`ops::map`].
    pub fn map<R>(self, mapper: impl FnMut(T) -> R) -> Stream<R> {
        ops::map(self, mapper)
    }

    /// Maps every element to a sub-stream and concatenates them. See
    /// [`ops::flat_map`].
    pub fn flat_map<R>(self, mapper: impl FnMut(T) -> Stream<R>) -> Stream<R> {
        ops::flat_map(self, mapper)
    }

    /// Visits every element by value, in order.
    pub fn for_each(self, action: impl FnMut(T)) {
        self.source.into_iter().for_each(action);
    }

    /// Folds the elements left to right, starting from the first element.
    ///
    /// Returns an empty `Optional` for an empty stream.
    pub fn reduce(self, accumulator: impl FnMut(T, T) -> T) -> Optional<T> {
        self.source.into_iter().reduce(accumulator).into()
    }

    /// Returns `true` if any element satisfies `predicate`; `false` when empty.
    pub fn any_match(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.source.iter().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`; `true` when empty.
    pub fn all_match(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.source.iter().all(predicate)
    }

    /// Returns `true` if no element satisfies `predicate`; `true` when empty.
    pub fn none_match(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        !self.any_match(predicate)
    }

    /// Returns the first element, borrowed from the stream's storage.
    pub fn find_first(&self) -> Optional<&T> {
        self.source.first().into()
    }

    /// Returns the last element, borrowed from the stream's storage.
    pub fn find_last(&self) -> Optional<&T> {
        self.source.last().into()
    }

    /// Returns a mutable handle to the first element; writes through it land in
    /// the stream.
    pub fn find_first_mut(&mut self) -> Optional<&mut T> {
        self.source.first_mut().into()
    }

    /// Returns a mutable handle to the last element; writes through it land in
    /// the stream.
    pub fn find_last_mut(&mut self) -> Optional<&mut T> {
        self.source.last_mut().into()
    }

    /// Returns the element at `index`, if any.
    pub fn get(&self, index: usize) -> Optional<&T> {
        self.source.get(index).into()
    }

    /// Scans once, replacing the running maximum whenever
    /// `comparator(candidate, current)` holds.
    ///
    /// The scan starts from the first element, so with a strict comparator ties
    /// keep the earliest element.
    pub fn max(&self, comparator: impl FnMut(&T, &T) -> bool) -> Optional<&T> {
        self.extreme(comparator)
    }

    /// Scans once, replacing the running minimum whenever
    /// `comparator(candidate, current)` holds.
    pub fn min(&self, comparator: impl FnMut(&T, &T) -> bool) -> Optional<&T> {
        self.extreme(comparator)
    }

    fn extreme(&self, mut replaces: impl FnMut(&T, &T) -> bool) -> Optional<&T> {
        let mut iter = self.source.iter();
        let Some(mut current) = iter.next() else {
            return Optional::none();
        };
        for candidate in iter {
            if replaces(candidate, current) {
                current = candidate;
            }
        }
        Optional::of(current)
    }

    /// Number of elements in the stream.
    #[inline]
    pub fn count(&self) -> usize {
        self.source.len()
    }

    /// Returns `true` if the stream has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Borrowing iterator over the elements, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.source.iter()
    }

    /// Returns the backing storage itself, not a copy.
    #[inline]
    pub fn to_slice(&self) -> &[T] {
        &self.source
    }

    /// Returns the backing storage mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.source
    }

    /// Consumes the stream and returns its backing `Vec`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.source
    }

    /// Returns the only element of a single-element stream.
    ///
    /// Fails with `ErrorKind::NotExactlyOne` for any other length.
    pub fn one(self) -> rill_common::Result<T> {
        let len = self.source.len();
        let mut iter = self.source.into_iter();
        match (iter.next(), iter.next()) {
            (Some(item), None) => Ok(item),
            _ => Err(Error::not_exactly_one(len)),
        }
    }

    /// Splits the stream into consecutive sub-streams of `size` elements.
    ///
    /// The last chunk holds the remainder and may be shorter. `size` must be
    /// positive.
    pub fn chunks(self, size: usize) -> rill_common::Result<Stream<Stream<T>>> {
        verify_arg!(size, size > 0);
        let mut chunks: Vec<Stream<T>> = Vec::with_capacity(self.source.len().div_ceil(size));
        let mut iter = self.source.into_iter().peekable();
        while iter.peek().is_some() {
            chunks.push(iter.by_ref().take(size).collect());
        }
        Ok(Stream::from_vec(chunks))
    }
}

impl<T: Eq + Hash> Stream<T> {
    /// Keeps the first occurrence of every distinct element.
    pub fn distinct(self) -> Stream<T> {
        let keep = {
            let mut seen = AHashSet::with_capacity(self.source.len());
            self.source
                .iter()
                .map(|item| seen.insert(item))
                .collect::<Vec<_>>()
        };
        self.source
            .into_iter()
            .zip(keep)
            .filter_map(|(item, keep)| keep.then_some(item))
            .collect()
    }
}

macro_rules! typed_mappers {
    ($(($map:ident, $flat_map:ident, $ty:ty)),* $(,)?) => {
        impl<T> Stream<T> {
            $(
                #[doc = concat!("Maps every element to `", stringify!($ty), "`.")]
                pub fn $map(self, mapper: impl FnMut(T) -> $ty) -> Stream<$ty> {
                    ops::map(self, mapper)
                }

                #[doc = concat!("Flat-maps every element to a stream of `", stringify!($ty), "`.")]
                pub fn $flat_map(self, mapper: impl FnMut(T) -> Stream<$ty>) -> Stream<$ty> {
                    ops::flat_map(self, mapper)
                }
            )*
        }
    };
}

typed_mappers!(
    (map_to_string, flat_map_to_string, String),
    (map_to_int, flat_map_to_int, isize),
    (map_to_i32, flat_map_to_i32, i32),
    (map_to_i64, flat_map_to_i64, i64),
    (map_to_f32, flat_map_to_f32, f32),
    (map_to_f64, flat_map_to_f64, f64),
);

// Keyed collectors over the element itself, one pair per supported key kind.
macro_rules! keyed_collectors {
    ($(($to_map:ident, $grouping_by:ident, $key:ty)),* $(,)?) => {
        impl<T> Stream<T> {
            $(
                #[doc = concat!("Collects the elements into a map keyed by `", stringify!($key), "`.")]
                ///
                /// Collisions are resolved as in [`ops::to_map`].
                pub fn $to_map(
                    self,
                    key_mapper: impl FnMut(&T) -> $key,
                    merge_fns: &mut [&mut dyn FnMut(T, T) -> T],
                ) -> KeyedMap<$key, T>
                where
                    T: Clone,
                {
                    ops::to_map(self, key_mapper, |item| item, merge_fns)
                }

                #[doc = concat!("Groups the elements by a `", stringify!($key), "` key.")]
                ///
                /// Post-processors run as in [`ops::grouping_by`].
                pub fn $grouping_by(
                    self,
                    key_mapper: impl FnMut(&T) -> $key,
                    post_processors: &mut [&mut dyn FnMut(&mut Vec<T>)],
                ) -> Groups<$key, T> {
                    ops::grouping_by(self, key_mapper, |item| item, post_processors)
                }
            )*
        }
    };
}

keyed_collectors!(
    (to_map_string, grouping_by_string, String),
    (to_map_int, grouping_by_int, isize),
    (to_map_i32, grouping_by_i32, i32),
    (to_map_i64, grouping_by_i64, i64),
);

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Stream::empty()
    }
}

impl<T> From<Vec<T>> for Stream<T> {
    fn from(source: Vec<T>) -> Self {
        Stream::from_vec(source)
    }
}

impl<T> From<Stream<T>> for Vec<T> {
    fn from(stream: Stream<T>) -> Self {
        stream.source
    }
}

impl<T> AsRef<[T]> for Stream<T> {
    fn as_ref(&self) -> &[T] {
        &self.source
    }
}

impl<T> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stream::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Stream<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.source.extend(iter);
    }
}

impl<T> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.source.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stream<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.source.iter()
    }
}
