//! Toolchain, platform and architecture resolution for the accel abstraction layer.
//!
//! Every decision is a `const fn` over a small set of boolean target signals:
//! - **Toolchain:** which compiler family spells the capability hints
//! - **Platform:** exactly one OS family tag, Apple resolved in two levels
//! - **Architecture:** zero or one instruction-set tag
//! - **Export control:** import/export/default visibility per linkage mode
//!
//! The [`host`] module evaluates those functions against the target being
//! compiled, so an unsupported platform is a build error. The same functions
//! run over signals parsed from a target triple ([`signals`]) when describing
//! some other target.

pub mod arch;
pub mod error;
pub mod export;
pub mod header;
pub mod host;
pub mod matrix;
pub mod parse;
pub mod platform;
pub mod profile;
pub mod signals;
pub mod toolchain;

pub use arch::{ArchSignals, ArchTag};
pub use error::{ClassifyError, Result, TargetError};
pub use export::{ExportAnnotation, ExportModel, LinkageMode};
pub use platform::{OsSignals, PlatformTag};
pub use profile::{BuildMode, BuildProfile};
pub use signals::TargetSignals;
pub use toolchain::{Capabilities, Facility, Toolchain};
