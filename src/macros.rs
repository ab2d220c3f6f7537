/*!
Macro helpers for the document model and parser.

The unchecked macros perform their checked counterparts in debug test builds
or when the `checked` cfg is enabled, so a broken invariant panics instead of causing UB.
*/

macro_rules! from_utf8_unchecked {
    ($str:expr) => {{
        #[cfg(any(all(test, debug), checked))]
        {
            std::str::from_utf8($str).expect("invalid utf8")
        }

        #[cfg(not(any(all(test, debug), checked)))]
        {
            // SAFETY: the input must always be valid UTF8
            #[allow(unused_unsafe)]
            unsafe {
                std::str::from_utf8_unchecked($str)
            }
        }
    }};
}

macro_rules! owned_from_utf8_unchecked {
    ($str:expr) => {{
        #[cfg(any(all(test, debug), checked))]
        {
            String::from_utf8($str).expect("invalid utf8")
        }

        #[cfg(not(any(all(test, debug), checked)))]
        {
            // SAFETY: the input must always be valid UTF8
            #[allow(unused_unsafe)]
            unsafe {
                String::from_utf8_unchecked($str)
            }
        }
    }};
}

/**
Mark a match arm for a value kind the caller has already ruled out.

The document handle only calls the unchecked accessors on `Value` after checking its kind,
so reaching one of these arms is a bug in the handle, not in the caller's input.
*/
macro_rules! kind_unreachable {
    ($expected:expr, $found:expr) => {{
        #[cfg(any(all(test, debug), checked))]
        {
            unreachable!(
                "unchecked access to a {} value that is a {}",
                $expected, $found
            )
        }

        #[cfg(not(any(all(test, debug), checked)))]
        {
            let _ = ($expected, $found);

            // SAFETY: callers must check the kind of the value before accessing it
            #[allow(unused_unsafe)]
            unsafe {
                std::hint::unreachable_unchecked()
            }
        }
    }};
}

macro_rules! test_assert {
    ($($tokens:tt)*) => {{
        #[cfg(test)]
        {
            debug_assert!($($tokens)*);
        }
    }};
}

macro_rules! test_assert_eq {
    ($($tokens:tt)*) => {{
        #[cfg(test)]
        {
            debug_assert_eq!($($tokens)*);
        }
    }};
}
