//! A zero-or-one value container returned by terminal operations that may have no answer.

/// Holds exactly one value or nothing.
///
/// Presence is always reported explicitly: [`Optional::get`] returns an `Option`,
/// and [`Optional::get_or_default`] returns a `(value, present)` pair, so a
/// legitimate zero-valued `T` is never confused with absence.
///
/// An `Optional` is immutable once built. Terminal operations that hand out a
/// position inside a stream (`find_first`, `find_last`) return `Optional<&T>` or
/// `Optional<&mut T>`; use [`Optional::cloned`] to detach the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    /// Creates an empty `Optional`.
    #[inline]
    pub const fn none() -> Optional<T> {
        Optional(None)
    }

    /// Creates an `Optional` holding `value`.
    #[inline]
    pub const fn of(value: T) -> Optional<T> {
        Optional(Some(value))
    }

    /// Returns a reference to the contained value, or `None` if empty.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Returns the contained value and `true`, or `T::default()` and `false`
    /// when empty.
    ///
    /// The default value in the empty case carries no meaning.
    pub fn get_or_default(self) -> (T, bool)
    where
        T: Default,
    {
        match self.0 {
            Some(v) => (v, true),
            None => (T::default(), false),
        }
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Invokes `action` with the contained value if one is present.
    pub fn if_present(self, action: impl FnOnce(T)) {
        if let Some(v) = self.0 {
            action(v);
        }
    }

    /// Consumes the `Optional`, returning the underlying `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T: Clone> Optional<&T> {
    /// Detaches a borrowed value by cloning it.
    pub fn cloned(self) -> Optional<T> {
        Optional(self.0.cloned())
    }
}

impl<T: Copy> Optional<&T> {
    /// Detaches a borrowed value by copying it.
    pub fn copied(self) -> Optional<T> {
        Optional(self.0.copied())
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::none()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_and_absent() {
        let some = Optional::of(5);
        assert!(some.is_present());
        assert_eq!(some.get(), Some(&5));

        let none = Optional::<i32>::none();
        assert!(!none.is_present());
        assert_eq!(none.get(), None);
        assert_eq!(none, Optional::default());
    }

    #[test]
    fn test_zero_value_is_not_absence() {
        let (v, present) = Optional::of(0).get_or_default();
        assert_eq!(v, 0);
        assert!(present);

        let (v, present) = Optional::<i32>::none().get_or_default();
        assert_eq!(v, 0);
        assert!(!present);

        let (s, present) = Optional::of(String::new()).get_or_default();
        assert!(s.is_empty());
        assert!(present);
    }

    #[test]
    fn test_if_present() {
        let mut seen = Vec::new();
        Optional::of("a").if_present(|v| seen.push(v));
        Optional::<&str>::none().if_present(|v| seen.push(v));
        assert_eq!(seen, ["a"]);
    }

    #[test]
    fn test_detach_borrowed() {
        let names = vec!["x".to_string(), "y".to_string()];
        let first: Optional<&String> = names.first().into();
        assert_eq!(first.cloned(), Optional::of("x".to_string()));

        let nums = [3u64, 4];
        let last: Optional<&u64> = nums.last().into();
        assert_eq!(last.copied().into_option(), Some(4));
    }

    #[test]
    fn test_option_conversions() {
        let opt: Optional<u8> = Some(7).into();
        let back: Option<u8> = opt.into();
        assert_eq!(back, Some(7));
        assert_eq!(Optional::<u8>::from(None).into_option(), None);
    }
}
