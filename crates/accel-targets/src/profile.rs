//! Complete build profile.
//!
//! Composes toolchain + platform + architecture + build mode + linkage into
//! the resolved tuple every facility is derived from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::arch::ArchTag;
use crate::error::Result;
use crate::export::{resolve_export, ExportAnnotation, ExportModel, LinkageMode};
use crate::host;
use crate::platform::PlatformTag;
use crate::signals::TargetSignals;
use crate::toolchain::{Capabilities, Toolchain};

/// Whether the debug-only facilities are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// Build mode from the standard debug indicator.
    pub const fn from_debug_assertions(enabled: bool) -> Self {
        if enabled {
            BuildMode::Debug
        } else {
            BuildMode::Release
        }
    }

    pub const fn is_debug(self) -> bool {
        matches!(self, BuildMode::Debug)
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BuildMode::Debug => "debug",
            BuildMode::Release => "release",
        })
    }
}

/// A fully resolved configuration tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildProfile {
    /// Target triple the profile was resolved for (e.g., "x86_64-pc-windows-msvc").
    pub triple: String,
    pub toolchain: Toolchain,
    pub platform: PlatformTag,
    pub arch: ArchTag,
    pub build_mode: BuildMode,
    pub linkage: LinkageMode,
}

impl BuildProfile {
    /// Resolve a profile for a target triple.
    ///
    /// The toolchain is implied by the triple's environment component.
    pub fn resolve(triple: &str, build_mode: BuildMode, linkage: LinkageMode) -> Result<Self> {
        let signals = TargetSignals::parse(triple)?;
        Self::from_signals(&signals, signals.toolchain(), build_mode, linkage)
    }

    /// Resolve a profile with an explicit toolchain, e.g. to render headers for
    /// a compiler other than the one the triple implies.
    pub fn from_signals(
        signals: &TargetSignals,
        toolchain: Toolchain,
        build_mode: BuildMode,
        linkage: LinkageMode,
    ) -> Result<Self> {
        let platform = signals.platform()?;
        let arch = signals.arch();
        log::debug!(
            "resolved '{}': toolchain={} platform={} arch={} mode={} linkage={}",
            signals.triple,
            toolchain,
            platform,
            arch,
            build_mode,
            linkage
        );
        Ok(Self {
            triple: signals.triple.clone(),
            toolchain,
            platform,
            arch,
            build_mode,
            linkage,
        })
    }

    /// The profile of the target this crate was compiled for.
    pub fn host(linkage: LinkageMode) -> Self {
        Self {
            triple: host::TRIPLE.to_string(),
            toolchain: host::TOOLCHAIN,
            platform: host::PLATFORM,
            arch: host::ARCH,
            build_mode: BuildMode::from_debug_assertions(cfg!(debug_assertions)),
            linkage,
        }
    }

    pub fn export_model(&self) -> ExportModel {
        ExportModel::for_target(self.toolchain, self.platform)
    }

    pub fn export_annotation(&self) -> ExportAnnotation {
        resolve_export(self.linkage, self.export_model())
    }

    /// Capability spellings, failing if the toolchain lacks one.
    pub fn capabilities(&self) -> Result<Capabilities> {
        self.toolchain.capabilities()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_windows_dll() {
        let p = BuildProfile::resolve(
            "x86_64-pc-windows-msvc",
            BuildMode::Debug,
            LinkageMode::BuildingLibrary,
        )
        .unwrap();
        assert_eq!(p.toolchain, Toolchain::Msvc);
        assert_eq!(p.platform, PlatformTag::Windows);
        assert_eq!(p.arch, ArchTag::X86_64);
        assert_eq!(p.export_annotation(), ExportAnnotation::Export);
    }

    #[test]
    fn resolve_linux_consumer() {
        let p = BuildProfile::resolve(
            "aarch64-unknown-linux-gnu",
            BuildMode::Release,
            LinkageMode::ConsumingLibrary,
        )
        .unwrap();
        assert_eq!(p.toolchain, Toolchain::GccFamily);
        assert_eq!(p.export_annotation(), ExportAnnotation::DefaultVisibility);
        assert!(!p.build_mode.is_debug());
    }

    #[test]
    fn explicit_toolchain_override() {
        let signals = TargetSignals::parse("x86_64-unknown-linux-gnu").unwrap();
        let p = BuildProfile::from_signals(
            &signals,
            Toolchain::GenericC11,
            BuildMode::Debug,
            LinkageMode::Static,
        )
        .unwrap();
        assert_eq!(p.toolchain, Toolchain::GenericC11);
        assert!(p.capabilities().is_err());
    }

    #[test]
    fn host_profile_uses_compile_time_resolution() {
        let p = BuildProfile::host(LinkageMode::Static);
        assert_eq!(p.platform, host::PLATFORM);
        assert_eq!(p.arch, host::ARCH);
        assert_eq!(p.build_mode.is_debug(), cfg!(debug_assertions));
        assert_eq!(p.export_annotation(), ExportAnnotation::None);
    }

    #[test]
    fn host_profile_passes_validation() {
        for linkage in [
            LinkageMode::Static,
            LinkageMode::BuildingLibrary,
            LinkageMode::ConsumingLibrary,
        ] {
            let p = BuildProfile::host(linkage);
            assert_eq!(p.triple, host::TRIPLE);
            assert!(crate::parse::validate_profile(&p).is_ok(), "{p:?}");
            let reparsed = BuildProfile::resolve(&p.triple, p.build_mode, linkage).unwrap();
            assert_eq!(reparsed, p);
        }
    }

    #[test]
    fn serialized_tag_names() {
        let p = BuildProfile::resolve(
            "x86_64-apple-darwin",
            BuildMode::Debug,
            LinkageMode::BuildingLibrary,
        )
        .unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["platform"], "macos");
        assert_eq!(json["arch"], "x86_64");
        assert_eq!(json["toolchain"], "gcc-family");
        assert_eq!(json["build-mode"], "debug");
        assert_eq!(json["linkage"], "building-library");
    }
}
