use std::hint;

pub(crate) trait OptionExtension<T> {
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts like [`Option::unwrap`] but with [`unreachable!`] in the none branch for dev builds
    /// and [`unreachable_unchecked`](hint::unreachable_unchecked) for release builds.
    ///
    /// This method can panic when misused, but carries no panic annotations: invoking it asserts
    /// that the [`None`] case is impossible. The same reasoning applies to safety docs.
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: It is the responsibility of the caller to ensure that None is impossible
            // when invoking this method.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
