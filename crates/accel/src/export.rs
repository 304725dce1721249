//! Symbol export control.
//!
//! Linkage is chosen with the `static-build` and `building-library` cargo
//! features. Without either, this crate assumes it is consuming the library,
//! which imports rather than exports on explicit-marker targets.

use accel_targets::export::resolve_export;
use accel_targets::{ExportAnnotation, ExportModel, LinkageMode};

/// Linkage selected by the `static-build` and `building-library` features.
pub const LINKAGE: LinkageMode = LinkageMode::from_signals(
    cfg!(feature = "static-build"),
    cfg!(feature = "building-library"),
);

/// Export model of the target being compiled.
pub const EXPORT_MODEL: ExportModel = accel_targets::host::EXPORT_MODEL;

/// Annotation applied by [`accel_export!`](crate::accel_export).
pub const EXPORT: ExportAnnotation = resolve_export(LINKAGE, EXPORT_MODEL);

/// Whether [`accel_export!`](crate::accel_export) gives functions an unmangled, exported symbol.
///
/// `accel_exports` is set by the build script and mirrors `EXPORT.exports_symbols()`.
pub const SYMBOLS_EXPORTED: bool = cfg!(accel_exports);

/// Declare `extern "C"` functions carrying the resolved export annotation.
///
/// When the annotation exports symbols, the function keeps its unmangled name
/// in the binary's symbol table. Otherwise it is an ordinary `extern "C"`
/// function and nothing leaks out of the consumer.
///
/// ```
/// accel::accel_export! {
///     pub fn accel_doc_add(a: i32, b: i32) -> i32 {
///         a + b
///     }
/// }
/// assert_eq!(accel_doc_add(1, 2), 3);
/// ```
#[cfg(accel_exports)]
#[macro_export]
macro_rules! accel_export {
    ($(#[$meta:meta])* $vis:vis fn $name:ident $($rest:tt)*) => {
        $(#[$meta])*
        #[no_mangle]
        $vis extern "C" fn $name $($rest)*
    };
}

/// Declare `extern "C"` functions carrying the resolved export annotation.
///
/// This build does not export, so the functions stay ordinary `extern "C"`.
#[cfg(not(accel_exports))]
#[macro_export]
macro_rules! accel_export {
    ($(#[$meta:meta])* $vis:vis fn $name:ident $($rest:tt)*) => {
        $(#[$meta])*
        $vis extern "C" fn $name $($rest)*
    };
}
