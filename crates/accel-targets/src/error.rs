//! Error types for target resolution.

use std::path::PathBuf;

use crate::toolchain::{Facility, Toolchain};

/// Why a set of OS signals did not produce a platform tag.
///
/// Kept free of owned data so the classifier can stay a `const fn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// No platform family matched the OS signals.
    #[error("unsupported platform")]
    UnsupportedPlatform,

    /// The Apple family matched but neither the mobile nor the desktop indicator did.
    #[error("unsupported Apple platform")]
    UnsupportedApplePlatform,
}

/// Errors that can occur during target resolution.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading/writing profile files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Profile file not found.
    #[error("profile file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// A target triple could not be split into its components.
    #[error("invalid target triple '{triple}': {detail}")]
    InvalidTriple { triple: String, detail: String },

    /// The triple's OS signals match no recognised platform.
    #[error("{source} for target '{triple}'")]
    UnsupportedPlatform {
        triple: String,
        #[source]
        source: ClassifyError,
    },

    /// A capability hint was requested from a toolchain that cannot spell it.
    #[error("toolchain {toolchain} does not define the {facility} facility")]
    UnsupportedToolchain {
        toolchain: Toolchain,
        facility: Facility,
    },

    /// Alignment hints must be non-zero powers of two.
    #[error("alignment {value} is not a power of two")]
    InvalidAlignment { value: u64 },

    /// Validation error in a build profile.
    #[error("validation error: {detail}")]
    Validation {
        /// Description of the validation failure.
        detail: String,
    },
}

/// Result type for target operations.
pub type Result<T> = std::result::Result<T, TargetError>;
