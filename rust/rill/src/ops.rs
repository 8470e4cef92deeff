//! Type-changing and keyed operations over a [`Stream`].
//!
//! These are the free-function forms; the same-named `Stream` methods delegate here.

use std::collections::hash_map::Entry;

use crate::{
    key::{GroupKey, Groups, KeyedMap},
    stream::Stream,
};

/// Applies `mapper` to every element, producing a stream of the mapped type in
/// source order.
pub fn map<T, R>(stream: Stream<T>, mapper: impl FnMut(T) -> R) -> Stream<R> {
    Stream::from_vec(stream.into_vec().into_iter().map(mapper).collect())
}

/// Like [`map`], but stops at the first error returned by `mapper`.
pub fn try_map<T, R, E>(
    stream: Stream<T>,
    mapper: impl FnMut(T) -> Result<R, E>,
) -> Result<Stream<R>, E> {
    stream
        .into_vec()
        .into_iter()
        .map(mapper)
        .collect::<Result<Vec<_>, _>>()
        .map(Stream::from_vec)
}

/// Maps every element to a sub-stream and concatenates the sub-streams in
/// source order.
///
/// All sub-streams are materialized first; the output is then allocated once.
pub fn flat_map<T, R>(stream: Stream<T>, mapper: impl FnMut(T) -> Stream<R>) -> Stream<R> {
    let parts = stream.into_vec().into_iter().map(mapper).collect::<Vec<_>>();
    let total = parts.iter().map(Stream::count).sum();
    let mut source = Vec::with_capacity(total);
    for part in parts {
        source.extend(part.into_vec());
    }
    Stream::from_vec(source)
}

/// Appends `others` after the elements of `stream`, in argument order.
pub fn concat<T>(stream: Stream<T>, others: impl IntoIterator<Item = Stream<T>>) -> Stream<T> {
    stream.concat(others)
}

/// Partitions the stream into groups keyed by `key_mapper`.
///
/// Each element contributes `value_mapper(element)` to the group of its key,
/// so values inside a group keep their source order. Once all elements are
/// placed, every entry of `post_processors` runs on every group, in the order
/// given. A processor receives the whole group and may reorder, dedupe or
/// truncate it.
///
/// # Examples
///
/// ```
/// use rill::{ops, stream};
///
/// let groups = ops::grouping_by(
///     stream![("a", 3), ("b", 2), ("a", 1)],
///     |(k, _)| k.to_string(),
///     |(_, v)| v,
///     &mut [&mut |g: &mut Vec<i32>| g.sort()],
/// );
/// assert_eq!(groups["a"], [1, 3]);
/// assert_eq!(groups["b"], [2]);
/// ```
pub fn grouping_by<T, K, R>(
    stream: Stream<T>,
    mut key_mapper: impl FnMut(&T) -> K,
    mut value_mapper: impl FnMut(T) -> R,
    post_processors: &mut [&mut dyn FnMut(&mut Vec<R>)],
) -> Groups<K, R>
where
    K: GroupKey,
{
    let count = stream.count();
    let mut groups = Groups::<K, R>::default();
    for item in stream {
        let key = key_mapper(&item);
        groups.entry(key).or_default().push(value_mapper(item));
    }

    for values in groups.values_mut() {
        for process in post_processors.iter_mut() {
            process(values);
        }
    }

    log::trace!(
        "grouping_by: {count} elements into {} groups, {} post-processors",
        groups.len(),
        post_processors.len()
    );
    groups
}

/// Collects the stream into a map keyed by `key_mapper`, with values from
/// `value_mapper`.
///
/// The first element with a given key stores its value directly. Every later
/// element with the same key runs each of `merge_fns` in order as
/// `merge(existing, new)`, where `existing` is always the value stored before
/// this element. Only the result of the **last** merge function is stored;
/// results of the earlier ones are discarded rather than chained. With no
/// merge functions the first value for each key is kept.
///
/// Values are cloned only to feed the merge functions before the last one. Use
/// [`to_map_with`] for values that are not `Clone`.
pub fn to_map<T, K, R>(
    stream: Stream<T>,
    key_mapper: impl FnMut(&T) -> K,
    value_mapper: impl FnMut(T) -> R,
    merge_fns: &mut [&mut dyn FnMut(R, R) -> R],
) -> KeyedMap<K, R>
where
    K: GroupKey,
    R: Clone,
{
    match merge_fns.split_last_mut() {
        None => to_map_with(stream, key_mapper, value_mapper, |existing, _| existing),
        Some((last, rest)) => to_map_with(stream, key_mapper, value_mapper, |existing, value| {
            for merge in rest.iter_mut() {
                merge(existing.clone(), value.clone());
            }
            last(existing, value)
        }),
    }
}

/// Collects the stream into a map keyed by `key_mapper`, resolving every
/// collision with `merge(existing, new)`.
///
/// The merge result replaces the stored value. No bound is placed on the value
/// type.
///
/// # Examples
///
/// ```
/// use rill::{ops, stream};
///
/// let map = ops::to_map_with(
///     stream![("a", 1), ("b", 2), ("a", 3)],
///     |(k, _)| k.to_string(),
///     |(_, v)| vec![v],
///     |mut existing, new| {
///         existing.extend(new);
///         existing
///     },
/// );
/// assert_eq!(map["a"], [1, 3]);
/// ```
pub fn to_map_with<T, K, R>(
    stream: Stream<T>,
    mut key_mapper: impl FnMut(&T) -> K,
    mut value_mapper: impl FnMut(T) -> R,
    mut merge: impl FnMut(R, R) -> R,
) -> KeyedMap<K, R>
where
    K: GroupKey,
{
    let count = stream.count();
    let mut res = KeyedMap::<K, R>::default();
    let mut collisions = 0usize;
    for item in stream {
        let key = key_mapper(&item);
        let value = value_mapper(item);
        let (key, existing) = match res.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value);
                continue;
            }
            Entry::Occupied(slot) => slot.remove_entry(),
        };
        collisions += 1;
        res.insert(key, merge(existing, value));
    }

    log::trace!(
        "to_map: {count} elements into {} keys, {collisions} collisions",
        res.len()
    );
    res
}
