pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns early with `ErrorKind::InvalidArgument` when `$cond` is false.
///
/// The argument name and the failed condition are captured verbatim in the error.
/// Works in any function whose error type converts from [`Error`](crate::Error).
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $cond:expr) => {
        if !$cond {
            return Err($crate::result::argument_error(stringify!($name), stringify!($cond)).into());
        }
    };
}

#[doc(hidden)]
#[cold]
pub fn argument_error(name: &str, condition: &str) -> crate::error::Error {
    crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use crate::ErrorKind;

    fn check_size(size: usize) -> crate::Result<usize> {
        verify_arg!(size, size > 0);
        Ok(size * 2)
    }

    #[derive(Debug)]
    struct Wrapped(crate::Error);

    impl From<crate::Error> for Wrapped {
        fn from(e: crate::Error) -> Self {
            Wrapped(e)
        }
    }

    fn check_in_other_error(len: usize) -> Result<(), Wrapped> {
        verify_arg!(len, len % 2 == 0);
        Ok(())
    }

    #[test]
    fn test_verify_arg() {
        assert_eq!(check_size(4).unwrap(), 8);
        let err = check_size(0).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::InvalidArgument {
                name: "size".to_string(),
                message: "size > 0".to_string(),
            }
        );
    }

    #[test]
    fn test_verify_arg_converts_error() {
        assert!(check_in_other_error(2).is_ok());
        let Wrapped(err) = check_in_other_error(3).unwrap_err();
        assert_eq!(
            err.into_kind(),
            ErrorKind::InvalidArgument {
                name: "len".to_string(),
                message: "len % 2 == 0".to_string(),
            }
        );
    }
}
