//! Platform tags, debug assertions and code-generation hints with one
//! spelling on every target.
//!
//! ## Modules
//!
//! - [`trap`]: Debugger trap as a single inline instruction
//! - [`assert`]: Debug-only assertions ([`accel_assert!`], [`accel_debug_only!`], [`accel_debug_items!`])
//! - [`hints`]: Thread-local, alignment, forced-inline and unused-value hints
//! - [`export`]: Symbol export control ([`accel_export!`])
//!
//! The platform, architecture and toolchain of the target being compiled are
//! exposed as constants, so consumers branch with ordinary `const` matches:
//!
//! ```
//! use accel::PlatformTag;
//!
//! const PATH_SEPARATOR: char = match accel::PLATFORM {
//!     PlatformTag::Windows => '\\',
//!     _ => '/',
//! };
//! # let _ = PATH_SEPARATOR;
//! ```

pub mod assert;
pub mod export;
pub mod hints;
pub mod trap;

pub use accel_targets::{
    ArchTag, BuildMode, ExportAnnotation, ExportModel, LinkageMode, PlatformTag, Toolchain,
};
pub use trap::debug_trap;

/// Toolchain family of the target being compiled.
pub const TOOLCHAIN: Toolchain = accel_targets::host::TOOLCHAIN;

/// The one platform tag of the target being compiled.
pub const PLATFORM: PlatformTag = accel_targets::host::PLATFORM;

/// Architecture tag of the target being compiled; may be [`ArchTag::Unspecified`].
pub const ARCH: ArchTag = accel_targets::host::ARCH;

/// Build mode this crate was compiled in. Selects the assertion implementation.
pub const BUILD_MODE: BuildMode = BuildMode::from_debug_assertions(cfg!(debug_assertions));
