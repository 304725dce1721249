//! Toolchain capability model.
//!
//! Maps a compiler family to the concrete spelling of each capability hint.
//! A toolchain that cannot spell a facility is an error, never a silent no-op.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TargetError};

/// Compiler family whose spellings are used for the capability hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Toolchain {
    /// GCC, Clang and everything else speaking GNU attributes (MinGW included).
    GccFamily,
    Msvc,
    /// A compiler known only to conform to C11.
    #[serde(rename = "c11")]
    GenericC11,
}

/// A capability hint the toolchain is asked to spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Facility {
    DebugTrap,
    ThreadLocal,
    AlignHint,
    ForceInline,
    ExportControl,
}

impl Facility {
    /// All facilities, in the order they are reported.
    pub const ALL: [Facility; 5] = [
        Facility::DebugTrap,
        Facility::ThreadLocal,
        Facility::AlignHint,
        Facility::ForceInline,
        Facility::ExportControl,
    ];
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Facility::DebugTrap => "debug-trap",
            Facility::ThreadLocal => "thread-local",
            Facility::AlignHint => "align-hint",
            Facility::ForceInline => "force-inline",
            Facility::ExportControl => "export-control",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The C spellings of every capability hint for one toolchain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Capabilities {
    /// Statement halting under a debugger.
    pub debug_trap: &'static str,
    /// Storage qualifier giving one instance per thread.
    pub thread_local: &'static str,
    /// Alignment attribute with `x` standing for the byte count.
    pub align_hint: &'static str,
    /// Forced-inline qualifier.
    pub force_inline: &'static str,
}

impl Toolchain {
    /// Short lowercase name, also accepted by [`Toolchain::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Toolchain::GccFamily => "gcc-family",
            Toolchain::Msvc => "msvc",
            Toolchain::GenericC11 => "c11",
        }
    }

    /// Look up a toolchain by name. Accepts common aliases (`gcc`, `clang`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "gcc-family" | "gcc" | "clang" | "gnu" => Some(Toolchain::GccFamily),
            "msvc" => Some(Toolchain::Msvc),
            "c11" | "generic-c11" => Some(Toolchain::GenericC11),
            _ => None,
        }
    }

    /// Toolchain identity derived from a target environment (`msvc`, `gnu`, ...).
    pub const fn from_target_env(is_msvc: bool) -> Self {
        if is_msvc {
            Toolchain::Msvc
        } else {
            Toolchain::GccFamily
        }
    }

    /// Spelling of a single facility.
    ///
    /// Export control is resolved through [`crate::export::ExportAnnotation::spelling`],
    /// since it depends on linkage as well; here it only reports support.
    pub fn spelling(self, facility: Facility) -> Result<&'static str> {
        let spelled = match (self, facility) {
            (Toolchain::GccFamily, Facility::DebugTrap) => Some("__builtin_trap()"),
            (Toolchain::GccFamily, Facility::ThreadLocal) => Some("__thread"),
            (Toolchain::GccFamily, Facility::AlignHint) => Some("__attribute__((aligned(x)))"),
            (Toolchain::GccFamily, Facility::ForceInline) => {
                Some("__attribute__((always_inline))")
            }
            (Toolchain::GccFamily, Facility::ExportControl) => {
                Some("__attribute__((visibility(\"default\")))")
            }
            (Toolchain::Msvc, Facility::DebugTrap) => Some("__debugbreak()"),
            (Toolchain::Msvc, Facility::ThreadLocal) => Some("__declspec(thread)"),
            (Toolchain::Msvc, Facility::AlignHint) => Some("__declspec(align(x))"),
            (Toolchain::Msvc, Facility::ForceInline) => Some("__forceinline"),
            (Toolchain::Msvc, Facility::ExportControl) => Some("__declspec(dllexport)"),
            (Toolchain::GenericC11, Facility::ThreadLocal) => Some("_Thread_local"),
            (Toolchain::GenericC11, _) => None,
        };
        spelled.ok_or(TargetError::UnsupportedToolchain {
            toolchain: self,
            facility,
        })
    }

    /// Whether the toolchain can spell a facility.
    pub fn supports(self, facility: Facility) -> bool {
        self.spelling(facility).is_ok()
    }

    /// Resolve the full capability table, failing on the first missing facility.
    pub fn capabilities(self) -> Result<Capabilities> {
        Ok(Capabilities {
            debug_trap: self.spelling(Facility::DebugTrap)?,
            thread_local: self.spelling(Facility::ThreadLocal)?,
            align_hint: self.spelling(Facility::AlignHint)?,
            force_inline: self.spelling(Facility::ForceInline)?,
        })
    }

    /// Alignment attribute for `bytes`, which must be a non-zero power of two.
    pub fn align_hint(self, bytes: u64) -> Result<String> {
        if !bytes.is_power_of_two() {
            return Err(TargetError::InvalidAlignment { value: bytes });
        }
        let template = self.spelling(Facility::AlignHint)?;
        Ok(template.replace("(x)", &format!("({bytes})")))
    }
}
