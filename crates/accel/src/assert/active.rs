//! Checked assertions, compiled when `debug_assertions` is on.

/// Check a condition in debug builds; report and trap when it is false.
///
/// ```no_run
/// let ready = false;
/// accel::accel_assert!(ready);
/// ```
#[macro_export]
macro_rules! accel_assert {
    ($cond:expr $(,)?) => {{
        if !$cond {
            $crate::assert::report(&$crate::assert::Diagnostic {
                expression: ::core::stringify!($cond),
                file: ::core::file!(),
                routine: $crate::routine_name!(),
                line: ::core::line!(),
            });
            $crate::debug_trap();
        }
    }};
}

/// Compile the enclosed statements in debug builds only.
#[macro_export]
macro_rules! accel_debug_only {
    ($($body:tt)*) => {{
        $($body)*
    }};
}

/// Compile the enclosed items (functions, statics, impls, ...) in debug builds only.
///
/// ```
/// accel::accel_debug_items! {
///     fn dump_state(v: &[u32]) -> usize {
///         v.len()
///     }
/// }
///
/// accel::accel_debug_only! {
///     assert_eq!(dump_state(&[1, 2]), 2);
/// }
/// ```
#[macro_export]
macro_rules! accel_debug_items {
    ($($item:item)*) => {
        $($item)*
    };
}
