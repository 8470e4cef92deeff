use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// Key kinds accepted by the keyed collectors ([`grouping_by`](crate::ops::grouping_by)
/// and [`to_map`](crate::ops::to_map)).
///
/// The set is closed: `String`, `i32`, `i64` and `isize`. Compound keys are
/// not accepted; derive a string or integer key instead.
pub trait GroupKey: Eq + Hash + Clone + sealed::Sealed {}

macro_rules! impl_group_key {
    ($($T:ty),*) => {
        $(
            impl sealed::Sealed for $T {}
            impl GroupKey for $T {}
        )*
    };
}

impl_group_key!(String, i32, i64, isize);

/// Result of a grouping: key to the mapped values of every element with that key,
/// in source order.
///
/// Enumeration order of the keys is unspecified.
pub type Groups<K, R> = ahash::HashMap<K, Vec<R>>;

/// Result of a merge-map collection: key to a single (possibly merged) value.
pub type KeyedMap<K, R> = ahash::HashMap<K, R>;
