//! Assertions compiled out, used when `debug_assertions` is off.

/// Check a condition in debug builds. In this build the condition is never
/// evaluated.
#[macro_export]
macro_rules! accel_assert {
    ($cond:expr $(,)?) => {{
        if false {
            let _: bool = $cond;
        }
    }};
}

/// Compile the enclosed statements in debug builds only. Empty in this build.
#[macro_export]
macro_rules! accel_debug_only {
    ($($body:tt)*) => {{}};
}

/// Compile the enclosed items in debug builds only. Empty in this build.
#[macro_export]
macro_rules! accel_debug_items {
    ($($item:item)*) => {};
}
