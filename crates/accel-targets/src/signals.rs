//! Target signals parsed from a target triple.
//!
//! A triple is `arch-vendor-os[-env]`. Some well-known triples omit the
//! vendor (`aarch64-linux-android`); those are recognised by their OS
//! component sitting in the vendor position.

use serde::{Deserialize, Serialize};

use crate::arch::{classify_arch, ArchSignals, ArchTag};
use crate::error::{Result, TargetError};
use crate::export::ExportModel;
use crate::platform::{classify_platform, OsSignals, PlatformTag};
use crate::toolchain::Toolchain;

/// OS names that may appear right after the architecture when the vendor is omitted.
const VENDORLESS_OS: &[&str] = &["linux", "windows", "android", "none"];

/// The components of a target triple, normalised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TargetSignals {
    /// The triple as given.
    pub triple: String,
    pub arch: String,
    pub vendor: String,
    pub os: String,
    /// Environment / ABI component (`gnu`, `msvc`, `android`, `sim`, ...).
    pub env: Option<String>,
}

impl TargetSignals {
    /// Split a target triple into its components.
    pub fn parse(triple: &str) -> Result<Self> {
        let trimmed = triple.trim();
        let parts: Vec<&str> = trimmed.split('-').collect();
        if parts.len() < 2 || parts.iter().any(|p| p.is_empty()) {
            return Err(TargetError::InvalidTriple {
                triple: triple.to_string(),
                detail: "expected arch-vendor-os[-env]".into(),
            });
        }

        let arch = parts[0].to_ascii_lowercase();
        let (vendor, os, env) = match parts.len() {
            2 => ("unknown".to_string(), parts[1].to_string(), None),
            3 if VENDORLESS_OS.contains(&parts[1]) => (
                "unknown".to_string(),
                parts[1].to_string(),
                Some(parts[2].to_string()),
            ),
            3 => (parts[1].to_string(), parts[2].to_string(), None),
            _ => (
                parts[1].to_string(),
                parts[2].to_string(),
                Some(parts[3..].join("-")),
            ),
        };

        let mut os = os.to_ascii_lowercase();
        if os == "darwin" {
            os = "macos".into();
        }
        if env.as_deref().is_some_and(|e| e.starts_with("android")) {
            os = "android".into();
        }

        let signals = Self {
            triple: trimmed.to_string(),
            arch,
            vendor: vendor.to_ascii_lowercase(),
            os,
            env,
        };
        log::debug!(
            "parsed target '{}': arch={} vendor={} os={} env={:?}",
            signals.triple,
            signals.arch,
            signals.vendor,
            signals.os,
            signals.env
        );
        Ok(signals)
    }

    /// OS signals for the platform classifier.
    pub fn os_signals(&self) -> OsSignals {
        let os = self.os.as_str();
        OsSignals {
            windows: matches!(os, "windows" | "cygwin"),
            web: os == "emscripten" || (self.arch.starts_with("wasm") && os == "unknown"),
            android: os == "android",
            linux: os == "linux",
            apple: self.vendor == "apple",
            apple_mobile: matches!(os, "ios" | "tvos" | "watchos" | "visionos"),
            apple_desktop: os == "macos",
        }
    }

    /// Architecture signals for the architecture classifier.
    pub fn arch_signals(&self) -> ArchSignals {
        ArchSignals::from_arch_name(&self.arch)
    }

    /// Toolchain implied by the environment component.
    pub fn toolchain(&self) -> Toolchain {
        Toolchain::from_target_env(self.env.as_deref() == Some("msvc"))
    }

    /// Classify the platform; unmatched OS signals are an error naming the triple.
    pub fn platform(&self) -> Result<PlatformTag> {
        classify_platform(&self.os_signals()).map_err(|source| TargetError::UnsupportedPlatform {
            triple: self.triple.clone(),
            source,
        })
    }

    /// Classify the architecture; never fails.
    pub fn arch(&self) -> ArchTag {
        classify_arch(&self.arch_signals())
    }

    /// Export model for this target under its implied toolchain.
    pub fn export_model(&self) -> Result<ExportModel> {
        Ok(ExportModel::for_target(self.toolchain(), self.platform()?))
    }
}

impl std::str::FromStr for TargetSignals {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClassifyError;

    fn platform_of(triple: &str) -> Result<PlatformTag> {
        TargetSignals::parse(triple)?.platform()
    }

    #[test]
    fn parse_full_triple() {
        let t = TargetSignals::parse("x86_64-pc-windows-msvc").unwrap();
        assert_eq!(t.arch, "x86_64");
        assert_eq!(t.vendor, "pc");
        assert_eq!(t.os, "windows");
        assert_eq!(t.env.as_deref(), Some("msvc"));
        assert_eq!(t.toolchain(), Toolchain::Msvc);
    }

    #[test]
    fn parse_vendorless_android() {
        let t = TargetSignals::parse("aarch64-linux-android").unwrap();
        assert_eq!(t.vendor, "unknown");
        assert_eq!(t.os, "android");
        assert_eq!(t.platform().unwrap(), PlatformTag::Android);

        let t = TargetSignals::parse("armv7-linux-androideabi").unwrap();
        assert_eq!(t.os, "android");
        assert_eq!(t.arch(), ArchTag::Arm);
    }

    #[test]
    fn parse_darwin_alias() {
        let t = TargetSignals::parse("x86_64-apple-darwin").unwrap();
        assert_eq!(t.os, "macos");
        assert_eq!(t.platform().unwrap(), PlatformTag::MacOs);
    }

    #[test]
    fn apple_simulator_and_catalyst_are_ios() {
        assert_eq!(platform_of("aarch64-apple-ios-sim").unwrap(), PlatformTag::Ios);
        assert_eq!(platform_of("aarch64-apple-ios-macabi").unwrap(), PlatformTag::Ios);
        assert_eq!(platform_of("aarch64-apple-tvos").unwrap(), PlatformTag::Ios);
    }

    #[test]
    fn web_targets() {
        assert_eq!(platform_of("wasm32-unknown-emscripten").unwrap(), PlatformTag::Web);
        assert_eq!(platform_of("wasm32-unknown-unknown").unwrap(), PlatformTag::Web);
    }

    #[test]
    fn mingw_is_gcc_family_on_windows() {
        let t = TargetSignals::parse("x86_64-pc-windows-gnu").unwrap();
        assert_eq!(t.toolchain(), Toolchain::GccFamily);
        assert_eq!(t.platform().unwrap(), PlatformTag::Windows);
        assert_eq!(t.export_model().unwrap(), ExportModel::ExplicitMarkers);
    }

    #[test]
    fn cygwin_is_windows_with_markers() {
        let t = TargetSignals::parse("x86_64-pc-cygwin").unwrap();
        assert_eq!(t.os, "cygwin");
        assert_eq!(t.platform().unwrap(), PlatformTag::Windows);
        assert_eq!(t.toolchain(), Toolchain::GccFamily);
        assert_eq!(t.export_model().unwrap(), ExportModel::ExplicitMarkers);
    }

    #[test]
    fn unsupported_os_fails() {
        for triple in ["x86_64-unknown-freebsd", "wasm32-wasip1", "thumbv7em-none-eabihf"] {
            match platform_of(triple) {
                Err(TargetError::UnsupportedPlatform { source, .. }) => {
                    assert_eq!(source, ClassifyError::UnsupportedPlatform, "{triple}");
                }
                other => panic!("{triple}: expected unsupported platform, got {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_apple_os_fails() {
        let err = platform_of("aarch64-apple-none").unwrap_err();
        assert!(matches!(
            err,
            TargetError::UnsupportedPlatform {
                source: ClassifyError::UnsupportedApplePlatform,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "unsupported Apple platform for target 'aarch64-apple-none'"
        );
    }

    #[test]
    fn malformed_triples() {
        for bad in ["", "x86_64", "x86_64--linux", "-linux"] {
            assert!(
                matches!(TargetSignals::parse(bad), Err(TargetError::InvalidTriple { .. })),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn from_str_parses() {
        let t: TargetSignals = "aarch64-unknown-linux-gnu".parse().unwrap();
        assert_eq!(t.arch(), ArchTag::Arm64);
        assert_eq!(t.platform().unwrap(), PlatformTag::Linux);
    }
}
