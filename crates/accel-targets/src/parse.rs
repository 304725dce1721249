//! TOML parsing, serialization, validation, and discovery for build profiles.
//!
//! Build profiles are stored as `.profile.toml` files in the `profiles/`
//! directory of a project. This module provides functions to load, validate,
//! serialize, and discover these files.

use std::path::{Path, PathBuf};

use crate::error::{Result, TargetError};
use crate::export::LinkageMode;
use crate::platform::PlatformTag;
use crate::profile::{BuildMode, BuildProfile};
use crate::signals::TargetSignals;
use crate::toolchain::{Facility, Toolchain};

/// A validation issue found in a build profile.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity: "error" or "warning".
    pub severity: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Load a profile from a `.profile.toml` file.
pub fn load_profile_toml(path: &Path) -> Result<BuildProfile> {
    if !path.exists() {
        return Err(TargetError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_profile_toml(&content)
}

/// Parse a profile from a TOML string.
pub fn parse_profile_toml(toml_str: &str) -> Result<BuildProfile> {
    let profile: BuildProfile = toml::from_str(toml_str)?;
    Ok(profile)
}

/// Serialize a profile to pretty TOML.
pub fn profile_to_toml(profile: &BuildProfile) -> Result<String> {
    let toml_str = toml::to_string_pretty(profile)?;
    Ok(toml_str)
}

/// Validate a build profile for internal consistency.
///
/// Returns `Ok(())` if valid, or `Err(issues)` with a list of problems.
pub fn validate_profile(profile: &BuildProfile) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    // 1. The triple resolves to the recorded platform and architecture
    match TargetSignals::parse(&profile.triple) {
        Ok(signals) => {
            match signals.platform() {
                Ok(platform) if platform != profile.platform => issues.push(ValidationIssue {
                    severity: "error",
                    message: format!(
                        "triple '{}' resolves to platform {platform}, profile says {}",
                        profile.triple, profile.platform
                    ),
                }),
                Ok(_) => {}
                Err(e) => issues.push(ValidationIssue {
                    severity: "error",
                    message: e.to_string(),
                }),
            }
            let arch = signals.arch();
            if arch != profile.arch {
                issues.push(ValidationIssue {
                    severity: "error",
                    message: format!(
                        "triple '{}' resolves to architecture {arch}, profile says {}",
                        profile.triple, profile.arch
                    ),
                });
            }
        }
        Err(e) => issues.push(ValidationIssue {
            severity: "error",
            message: e.to_string(),
        }),
    }

    // 2. MSVC only targets Windows
    if profile.toolchain == Toolchain::Msvc && profile.platform != PlatformTag::Windows {
        issues.push(ValidationIssue {
            severity: "error",
            message: format!("toolchain msvc cannot target platform {}", profile.platform),
        });
    }

    // 3. Every capability hint is spelled by the toolchain
    for facility in Facility::ALL {
        if facility == Facility::ExportControl {
            continue;
        }
        if let Err(e) = profile.toolchain.spelling(facility) {
            issues.push(ValidationIssue {
                severity: "error",
                message: e.to_string(),
            });
        }
    }

    // 4. The export annotation is spelled by the toolchain
    let annotation = profile.export_annotation();
    if let Err(e) = annotation.spelling(profile.toolchain) {
        issues.push(ValidationIssue {
            severity: "error",
            message: format!("export annotation {annotation}: {e}"),
        });
    }

    // 5. Unspecified architecture disables architecture-specific paths
    if !profile.arch.is_specified() {
        issues.push(ValidationIssue {
            severity: "warning",
            message: format!(
                "triple '{}' has no architecture tag; architecture-specific code is disabled",
                profile.triple
            ),
        });
    }

    for issue in issues.iter().filter(|i| i.severity == "warning") {
        log::warn!("{}", issue.message);
    }

    if issues.iter().any(|i| i.severity == "error") {
        Err(issues)
    } else {
        Ok(())
    }
}

/// Like [`validate_profile`], but folds the errors into one [`TargetError::Validation`].
///
/// Warnings alone do not fail.
pub fn ensure_valid(profile: &BuildProfile) -> Result<()> {
    validate_profile(profile).map_err(|issues| TargetError::Validation {
        detail: issues
            .iter()
            .filter(|i| i.severity == "error")
            .map(|i| i.message.as_str())
            .collect::<Vec<_>>()
            .join("; "),
    })
}

/// Generate a template `.profile.toml` for a target triple.
///
/// Seeds a debug, consuming-library profile.
pub fn generate_template(triple: &str) -> Result<String> {
    let profile = BuildProfile::resolve(triple, BuildMode::Debug, LinkageMode::ConsumingLibrary)?;
    profile_to_toml(&profile)
}

/// Discover all `.profile.toml` files in a project's `profiles/` directory.
///
/// Returns a list of (profile_name, file_path) pairs.
pub fn discover_profiles(project_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let profiles_dir = project_dir.join("profiles");
    if !profiles_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut profiles = Vec::new();
    for entry in std::fs::read_dir(&profiles_dir)? {
        let path = entry?.path();
        if let Some(name) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(".profile.toml"))
        {
            profiles.push((name.to_string(), path.clone()));
        }
    }
    profiles.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::ArchTag;

    #[test]
    fn round_trip_windows() {
        let original = BuildProfile::resolve(
            "x86_64-pc-windows-msvc",
            BuildMode::Release,
            LinkageMode::BuildingLibrary,
        )
        .unwrap();
        let toml_str = profile_to_toml(&original).unwrap();
        let parsed = parse_profile_toml(&toml_str).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn parse_handwritten_profile() {
        let toml_str = r#"
triple = "aarch64-apple-ios"
toolchain = "gcc-family"
platform = "ios"
arch = "arm64"
build-mode = "debug"
linkage = "static"
"#;
        let profile = parse_profile_toml(toml_str).unwrap();
        assert_eq!(profile.platform, PlatformTag::Ios);
        assert_eq!(profile.arch, ArchTag::Arm64);
        assert_eq!(profile.linkage, LinkageMode::Static);
        assert!(validate_profile(&profile).is_ok());
    }

    #[test]
    fn parse_rejects_unknown_platform() {
        let toml_str = r#"
triple = "x86_64-unknown-freebsd"
toolchain = "gcc-family"
platform = "freebsd"
arch = "x86_64"
build-mode = "debug"
linkage = "static"
"#;
        assert!(matches!(
            parse_profile_toml(toml_str),
            Err(TargetError::Toml(_))
        ));
    }

    #[test]
    fn validate_detects_mismatched_platform() {
        let mut profile = BuildProfile::resolve(
            "x86_64-unknown-linux-gnu",
            BuildMode::Debug,
            LinkageMode::Static,
        )
        .unwrap();
        profile.platform = PlatformTag::MacOs;
        let issues = validate_profile(&profile).unwrap_err();
        assert!(issues.iter().any(|i| i.message.contains("resolves to platform linux")));
    }

    #[test]
    fn validate_detects_msvc_off_windows() {
        let mut profile = BuildProfile::resolve(
            "x86_64-unknown-linux-gnu",
            BuildMode::Debug,
            LinkageMode::ConsumingLibrary,
        )
        .unwrap();
        profile.toolchain = Toolchain::Msvc;
        let issues = validate_profile(&profile).unwrap_err();
        assert!(issues.iter().any(|i| i.message.contains("msvc cannot target")));
    }

    #[test]
    fn validate_names_missing_c11_facilities() {
        let mut profile = BuildProfile::resolve(
            "x86_64-unknown-linux-gnu",
            BuildMode::Debug,
            LinkageMode::Static,
        )
        .unwrap();
        profile.toolchain = Toolchain::GenericC11;
        let issues = validate_profile(&profile).unwrap_err();
        for facility in ["debug-trap", "align-hint", "force-inline"] {
            assert!(
                issues.iter().any(|i| i.message.contains(facility)),
                "missing issue for {facility}"
            );
        }
    }

    #[test]
    fn unspecified_arch_is_only_a_warning() {
        let profile = BuildProfile::resolve(
            "riscv64gc-unknown-linux-gnu",
            BuildMode::Debug,
            LinkageMode::Static,
        )
        .unwrap();
        assert!(validate_profile(&profile).is_ok());
    }

    #[test]
    fn ensure_valid_folds_errors() {
        let mut profile = BuildProfile::resolve(
            "aarch64-apple-darwin",
            BuildMode::Debug,
            LinkageMode::Static,
        )
        .unwrap();
        assert!(ensure_valid(&profile).is_ok());

        profile.toolchain = Toolchain::Msvc;
        profile.arch = ArchTag::X86;
        match ensure_valid(&profile) {
            Err(TargetError::Validation { detail }) => {
                assert!(detail.contains("msvc cannot target"), "{detail}");
                assert!(detail.contains("; "), "{detail}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn template_is_valid() {
        let toml_str = generate_template("aarch64-linux-android").unwrap();
        let profile = parse_profile_toml(&toml_str).unwrap();
        assert_eq!(profile.platform, PlatformTag::Android);
        assert!(validate_profile(&profile).is_ok());
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_profile_toml(&dir.path().join("nope.profile.toml"));
        assert!(matches!(result, Err(TargetError::NotFound { .. })));
    }

    #[test]
    fn discover_sorted_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let profiles_dir = dir.path().join("profiles");
        std::fs::create_dir_all(&profiles_dir).unwrap();
        for triple in ["x86_64-apple-darwin", "aarch64-linux-android"] {
            let name = triple.split('-').next().unwrap();
            std::fs::write(
                profiles_dir.join(format!("{name}.profile.toml")),
                generate_template(triple).unwrap(),
            )
            .unwrap();
        }
        std::fs::write(profiles_dir.join("notes.txt"), "ignored").unwrap();

        let found = discover_profiles(dir.path()).unwrap();
        let names: Vec<_> = found.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["aarch64", "x86_64"]);
        let loaded = load_profile_toml(&found[1].1).unwrap();
        assert_eq!(loaded.platform, PlatformTag::MacOs);
    }

    #[test]
    fn discover_without_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_profiles(dir.path()).unwrap().is_empty());
    }
}
