//! CLI command implementations.

pub mod classify;
pub mod describe;
pub mod header;
pub mod init;
pub mod matrix;
pub mod profile;

use accel_targets::signals::TargetSignals;
use accel_targets::{BuildMode, BuildProfile, LinkageMode, Toolchain};
use anyhow::{bail, Context, Result};

use crate::manifest::AccelManifest;

/// Options shared by the commands that resolve a single profile.
#[derive(Debug, Default, Clone)]
pub struct ResolveOptions<'a> {
    pub target: Option<&'a str>,
    pub toolchain: Option<&'a str>,
    pub linkage: Option<&'a str>,
    pub release: bool,
}

/// Resolve a profile from command-line options, falling back to the manifest
/// and finally to the target this tool was built for.
pub fn resolve_profile(
    manifest: Option<&AccelManifest>,
    opts: &ResolveOptions<'_>,
) -> Result<BuildProfile> {
    let build_mode = if opts.release {
        BuildMode::Release
    } else {
        BuildMode::Debug
    };
    let linkage = match opts.linkage {
        Some(name) => parse_linkage(name)?,
        None => manifest
            .map(AccelManifest::linkage)
            .unwrap_or(LinkageMode::ConsumingLibrary),
    };
    let toolchain = match opts.toolchain {
        Some(name) => Some(parse_toolchain(name)?),
        None => match manifest {
            Some(m) => m.toolchain()?,
            None => None,
        },
    };

    let triple = opts.target.or_else(|| manifest.and_then(|m| m.default_target()));
    let profile = match triple {
        Some(triple) => {
            let signals = TargetSignals::parse(triple)?;
            let toolchain = toolchain.unwrap_or_else(|| signals.toolchain());
            BuildProfile::from_signals(&signals, toolchain, build_mode, linkage)
                .with_context(|| format!("resolving target '{triple}'"))?
        }
        None => {
            let mut profile = BuildProfile::host(linkage);
            profile.build_mode = build_mode;
            if let Some(toolchain) = toolchain {
                profile.toolchain = toolchain;
            }
            profile
        }
    };
    Ok(profile)
}

pub fn parse_linkage(name: &str) -> Result<LinkageMode> {
    match name {
        "static" => Ok(LinkageMode::Static),
        "building-library" | "building" => Ok(LinkageMode::BuildingLibrary),
        "consuming-library" | "consuming" => Ok(LinkageMode::ConsumingLibrary),
        _ => bail!(
            "unknown linkage '{name}' (expected static, building-library or consuming-library)"
        ),
    }
}

pub fn parse_toolchain(name: &str) -> Result<Toolchain> {
    match Toolchain::from_name(name) {
        Some(t) => Ok(t),
        None => bail!("unknown toolchain '{name}' (expected gcc-family, msvc or c11)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accel_targets::{ArchTag, PlatformTag};

    #[test]
    fn explicit_target_wins_over_manifest() {
        let manifest = AccelManifest::from_str(
            "[library]\nname = \"m\"\n\n[targets]\ndefault = \"aarch64-apple-darwin\"\n",
        )
        .unwrap();
        let opts = ResolveOptions {
            target: Some("x86_64-pc-windows-msvc"),
            ..Default::default()
        };
        let profile = resolve_profile(Some(&manifest), &opts).unwrap();
        assert_eq!(profile.platform, PlatformTag::Windows);
        assert_eq!(profile.toolchain, Toolchain::Msvc);
        assert_eq!(profile.build_mode, BuildMode::Debug);
    }

    #[test]
    fn manifest_supplies_defaults() {
        let manifest = AccelManifest::from_str(
            r#"
[library]
name = "m"
static-build = true

[targets]
default = "aarch64-apple-darwin"
toolchain = "c11"
"#,
        )
        .unwrap();
        let profile = resolve_profile(Some(&manifest), &ResolveOptions::default()).unwrap();
        assert_eq!(profile.platform, PlatformTag::MacOs);
        assert_eq!(profile.arch, ArchTag::Arm64);
        assert_eq!(profile.toolchain, Toolchain::GenericC11);
        assert_eq!(profile.linkage, LinkageMode::Static);
    }

    #[test]
    fn host_fallback_honours_release() {
        let opts = ResolveOptions {
            release: true,
            linkage: Some("static"),
            ..Default::default()
        };
        let profile = resolve_profile(None, &opts).unwrap();
        assert_eq!(profile.platform, accel_targets::host::PLATFORM);
        assert_eq!(profile.build_mode, BuildMode::Release);
        assert_eq!(profile.linkage, LinkageMode::Static);
    }

    #[test]
    fn unsupported_target_carries_context() {
        let opts = ResolveOptions {
            target: Some("x86_64-unknown-freebsd"),
            ..Default::default()
        };
        let err = resolve_profile(None, &opts).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("x86_64-unknown-freebsd"), "{msg}");
    }

    #[test]
    fn bad_option_names() {
        assert!(parse_linkage("dynamic").is_err());
        assert!(parse_toolchain("borland").is_err());
        assert_eq!(parse_toolchain("clang").unwrap(), Toolchain::GccFamily);
    }
}
