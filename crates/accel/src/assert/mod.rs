//! Debug-only assertions.
//!
//! Exactly one of two implementations is compiled, chosen by
//! `debug_assertions`:
//!
//! - **active**: [`accel_assert!`](crate::accel_assert) evaluates its condition once. On
//!   failure it writes a [`Diagnostic`] to stderr and then executes
//!   [`debug_trap`](crate::debug_trap) in the caller's frame.
//! - **inert**: the condition sits in a statically dead branch. It is type
//!   checked but never evaluated, so side effects inside it do not happen.
//!
//! Both forms of `accel_assert!` and `accel_debug_only!` expand to one block
//! expression of type `()`. Debug-only declarations go through
//! [`accel_debug_items!`](crate::accel_debug_items), which expands to the items
//! themselves or to nothing.

use std::fmt;
use std::io::Write;

#[cfg(debug_assertions)]
mod active;
#[cfg(not(debug_assertions))]
mod inert;

/// Whether assertions are checked in this build.
pub const ACTIVE: bool = cfg!(debug_assertions);

/// What a failed assertion reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    /// Source text of the condition.
    pub expression: &'static str,
    pub file: &'static str,
    /// Path of the enclosing function.
    pub routine: &'static str,
    pub line: u32,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Failed assertion: {}", self.expression)?;
        writeln!(f, "Location: {}@{}():{}", self.file, self.routine, self.line)
    }
}

/// Write a diagnostic to stderr and flush it, so it is visible even if the
/// trap that follows ends the process.
#[cold]
#[inline(never)]
pub fn report(diagnostic: &Diagnostic) {
    let mut stderr = std::io::stderr().lock();
    // The trap fires regardless; a closed stderr leaves nothing to report to.
    let _ = write!(stderr, "{diagnostic}");
    let _ = stderr.flush();
}

#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Strip the marker function and closure segments from a marker's type name,
/// leaving the path of the enclosing function.
#[doc(hidden)]
pub fn routine_from_marker(marker: &'static str) -> &'static str {
    let mut name = marker.strip_suffix("::__accel_here").unwrap_or(marker);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Path of the enclosing function, e.g. `my_crate::module::function`.
#[macro_export]
macro_rules! routine_name {
    () => {{
        fn __accel_here() {}
        $crate::assert::routine_from_marker($crate::assert::type_name_of(__accel_here))
    }};
}
