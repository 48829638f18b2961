//! Small structural helpers.

/// Run `f` forever. For firmware main loops and idle tasks.
#[inline]
pub fn forever(mut f: impl FnMut()) -> ! {
    loop {
        f();
    }
}

/// Number of elements in a fixed-size array.
///
/// Takes `&[T; N]`, so passing a slice or pointer is a type error rather
/// than a silently wrong count.
#[inline]
pub const fn array_len<T, const N: usize>(_array: &[T; N]) -> usize { N }

/// Final component of a `/`-separated path. Returns `path` unchanged when it
/// has no separator.
pub const fn basename(path: &str) -> &str {
    let bytes = path.as_bytes();
    let mut i = bytes.len();
    while i > 0 {
        if bytes[i - 1] == b'/' || bytes[i - 1] == b'\\' {
            let (_, tail) = bytes.split_at(i);
            // Split right after an ASCII separator, so `tail` is valid UTF-8.
            return match core::str::from_utf8(tail) {
                Ok(s) => s,
                Err(_) => path,
            };
        }
        i -= 1;
    }
    path
}

/// Name of the current source file without its directory, for log prefixes.
///
/// ```ignore
/// // in src/motor/pwm.rs
/// assert_eq!(ucutil::file_name!(), "pwm.rs");
/// ```
#[macro_export]
macro_rules! file_name {
    () => {
        $crate::util::basename(::core::file!())
    };
}
