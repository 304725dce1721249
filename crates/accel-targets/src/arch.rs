//! CPU architecture classification.
//!
//! Architecture-specific code is optional, so an unmatched architecture
//! resolves to [`ArchTag::Unspecified`] instead of failing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Instruction-set family of the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArchTag {
    X86,
    #[serde(rename = "x86_64")]
    X86_64,
    Arm64,
    Arm,
    Unspecified,
}

/// Architecture signals of a target, one flag per recognised family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchSignals {
    pub x86: bool,
    pub x86_64: bool,
    pub aarch64: bool,
    pub arm: bool,
}

impl ArchSignals {
    /// Derive signals from the architecture component of a target triple.
    pub fn from_arch_name(arch: &str) -> Self {
        let arch = arch.to_ascii_lowercase();
        let mut signals = Self::default();
        match arch.as_str() {
            "i386" | "i486" | "i586" | "i686" | "x86" => signals.x86 = true,
            "x86_64" | "x86_64h" | "amd64" => signals.x86_64 = true,
            "aarch64" | "aarch64_be" | "arm64" | "arm64e" | "arm64_32" => signals.aarch64 = true,
            other if other.starts_with("arm") || other.starts_with("thumb") => signals.arm = true,
            _ => {}
        }
        signals
    }
}

/// Classify architecture signals, most specific family first.
pub const fn classify_arch(signals: &ArchSignals) -> ArchTag {
    if signals.x86 {
        ArchTag::X86
    } else if signals.x86_64 {
        ArchTag::X86_64
    } else if signals.aarch64 {
        ArchTag::Arm64
    } else if signals.arm {
        ArchTag::Arm
    } else {
        ArchTag::Unspecified
    }
}

impl ArchTag {
    /// Identifier defined for this tag in generated C headers, if any.
    pub fn define_name(self) -> Option<&'static str> {
        match self {
            ArchTag::X86 => Some("ARCHITECTURE_X86"),
            ArchTag::X86_64 => Some("ARCHITECTURE_X86_64"),
            ArchTag::Arm64 => Some("ARCHITECTURE_ARM64"),
            ArchTag::Arm => Some("ARCHITECTURE_ARM"),
            ArchTag::Unspecified => None,
        }
    }

    /// The instruction `accel::debug_trap` emits for this family.
    pub fn trap_instruction(self) -> Option<&'static str> {
        match self {
            ArchTag::X86 | ArchTag::X86_64 => Some("int3"),
            ArchTag::Arm64 => Some("brk #0xf000"),
            ArchTag::Arm => Some("udf #0xfe"),
            ArchTag::Unspecified => None,
        }
    }

    /// Whether a tag was resolved at all.
    pub const fn is_specified(self) -> bool {
        !matches!(self, ArchTag::Unspecified)
    }
}

impl fmt::Display for ArchTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArchTag::X86 => "x86",
            ArchTag::X86_64 => "x86_64",
            ArchTag::Arm64 => "arm64",
            ArchTag::Arm => "arm",
            ArchTag::Unspecified => "unspecified",
        };
        f.write_str(name)
    }
}
