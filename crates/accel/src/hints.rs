//! Code-generation hints.
//!
//! Each macro has the same spelling on every target; rustc's attributes do
//! the work the C toolchains spell differently.

/// Declare statics with one independent instance per thread.
///
/// No synchronisation is provided; each thread only ever sees its own value.
///
/// ```
/// use std::cell::Cell;
///
/// accel::accel_thread_local! {
///     static DEPTH: Cell<u32> = Cell::new(0);
/// }
/// DEPTH.with(|d| d.set(d.get() + 1));
/// ```
#[macro_export]
macro_rules! accel_thread_local {
    ($($body:tt)*) => {
        ::std::thread_local! { $($body)* }
    };
}

/// Define a type aligned to an `N`-byte boundary.
///
/// `N` must be a power of two; anything else fails the build.
///
/// ```
/// accel::accel_align!(64, pub struct CacheLine([u8; 64]););
/// assert_eq!(core::mem::align_of::<CacheLine>(), 64);
/// ```
///
/// ```compile_fail
/// accel::accel_align!(48, struct Odd(u8););
/// ```
#[macro_export]
macro_rules! accel_align {
    ($align:tt, $(#[$meta:meta])* $vis:vis struct $name:ident $($rest:tt)*) => {
        const _: () = ::core::assert!(
            ($align as usize).is_power_of_two(),
            ::core::concat!(
                "accel: align-hint(",
                ::core::stringify!($align),
                ") is not a power of two"
            )
        );
        $(#[$meta])*
        #[repr(align($align))]
        $vis struct $name $($rest)*
    };
}

/// Force a function to be inlined at every call site.
///
/// ```
/// accel::accel_force_inline! {
///     fn square(x: u32) -> u32 {
///         x * x
///     }
/// }
/// assert_eq!(square(7), 49);
/// ```
#[macro_export]
macro_rules! accel_force_inline {
    ($($item:tt)*) => {
        #[inline(always)]
        $($item)*
    };
}

/// Mark values as intentionally unread. Has no runtime effect.
#[macro_export]
macro_rules! accel_unused {
    ($($value:expr),+ $(,)?) => {{
        $( let _ = &$value; )+
    }};
}
