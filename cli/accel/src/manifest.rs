//! `accel.toml` manifest parsing and project configuration.

use std::path::{Path, PathBuf};

use accel_targets::header::sanitize_guard;
use accel_targets::{LinkageMode, Toolchain};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const MANIFEST_FILE: &str = "accel.toml";

const DEFAULT_HEADER_OUTPUT: &str = "include/accel_config.h";

/// The top-level manifest of a project using the accel facilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccelManifest {
    /// Library metadata and linkage (required).
    pub library: LibraryConfig,
    #[serde(default)]
    pub targets: Option<TargetsConfig>,
    #[serde(default)]
    pub header: Option<HeaderConfig>,
}

/// Library section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LibraryConfig {
    pub name: String,
    /// Everything linked into one binary; wins over `building-library`.
    #[serde(default)]
    pub static_build: bool,
    /// This project defines the shared library's symbols.
    #[serde(default)]
    pub building_library: bool,
}

/// Targets section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsConfig {
    /// Target triple used when `--target` is not given.
    #[serde(default)]
    pub default: Option<String>,
    /// Toolchain override, by name (`gcc`, `msvc`, `c11`, ...).
    #[serde(default)]
    pub toolchain: Option<String>,
}

/// Header generation section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Output path, relative to the project directory.
    #[serde(default)]
    pub output: Option<String>,
    /// Include guard; derived from the library name if absent.
    #[serde(default)]
    pub guard: Option<String>,
}

impl AccelManifest {
    /// Search upward from `start_dir` for an `accel.toml` file, parse and return it
    /// along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: AccelManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                log::debug!("loaded manifest from {}", candidate.display());
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing accel.toml")
    }

    pub fn linkage(&self) -> LinkageMode {
        LinkageMode::from_signals(self.library.static_build, self.library.building_library)
    }

    pub fn default_target(&self) -> Option<&str> {
        self.targets.as_ref().and_then(|t| t.default.as_deref())
    }

    /// The configured toolchain override, if any.
    pub fn toolchain(&self) -> Result<Option<Toolchain>> {
        match self.targets.as_ref().and_then(|t| t.toolchain.as_deref()) {
            None => Ok(None),
            Some(name) => Toolchain::from_name(name)
                .map(Some)
                .with_context(|| format!("unknown toolchain '{name}' in {MANIFEST_FILE}")),
        }
    }

    pub fn header_output(&self) -> &str {
        self.header
            .as_ref()
            .and_then(|h| h.output.as_deref())
            .unwrap_or(DEFAULT_HEADER_OUTPUT)
    }

    pub fn header_guard(&self) -> String {
        match self.header.as_ref().and_then(|h| h.guard.as_deref()) {
            Some(guard) => guard.to_string(),
            None => sanitize_guard(&format!("{}_accel_config", self.library.name)),
        }
    }

    /// Generate a starting manifest for a library.
    pub fn template(name: &str, default_target: &str) -> String {
        format!(
            r#"[library]
name = "{name}"
static-build = false
building-library = true

[targets]
default = "{default_target}"

[header]
output = "{DEFAULT_HEADER_OUTPUT}"
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let toml_str = r#"
[library]
name = "mylib"
static-build = false
building-library = true

[targets]
default = "x86_64-pc-windows-msvc"
toolchain = "msvc"

[header]
output = "include/mylib_config.h"
guard = "MYLIB_CONFIG_H"
"#;
        let manifest = AccelManifest::from_str(toml_str).unwrap();
        assert_eq!(manifest.library.name, "mylib");
        assert_eq!(manifest.linkage(), LinkageMode::BuildingLibrary);
        assert_eq!(manifest.default_target(), Some("x86_64-pc-windows-msvc"));
        assert_eq!(manifest.toolchain().unwrap(), Some(Toolchain::Msvc));
        assert_eq!(manifest.header_output(), "include/mylib_config.h");
        assert_eq!(manifest.header_guard(), "MYLIB_CONFIG_H");
    }

    #[test]
    fn parse_minimal_manifest() {
        let manifest = AccelManifest::from_str("[library]\nname = \"tiny\"\n").unwrap();
        assert_eq!(manifest.linkage(), LinkageMode::ConsumingLibrary);
        assert!(manifest.default_target().is_none());
        assert_eq!(manifest.toolchain().unwrap(), None);
        assert_eq!(manifest.header_output(), DEFAULT_HEADER_OUTPUT);
        assert_eq!(manifest.header_guard(), "TINY_ACCEL_CONFIG_H");
    }

    #[test]
    fn static_build_wins() {
        let manifest = AccelManifest::from_str(
            "[library]\nname = \"s\"\nstatic-build = true\nbuilding-library = true\n",
        )
        .unwrap();
        assert_eq!(manifest.linkage(), LinkageMode::Static);
    }

    #[test]
    fn unknown_toolchain_is_an_error() {
        let manifest = AccelManifest::from_str(
            "[library]\nname = \"x\"\n\n[targets]\ntoolchain = \"borland\"\n",
        )
        .unwrap();
        let err = manifest.toolchain().unwrap_err();
        assert!(err.to_string().contains("borland"));
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(AccelManifest::from_str("[library\nname =").is_err());
        assert!(AccelManifest::from_str("[targets]\ndefault = \"x\"\n").is_err());
    }

    #[test]
    fn template_is_valid_toml() {
        let template = AccelManifest::template("demo", "aarch64-apple-darwin");
        let manifest = AccelManifest::from_str(&template).unwrap();
        assert_eq!(manifest.library.name, "demo");
        assert_eq!(manifest.linkage(), LinkageMode::BuildingLibrary);
        assert_eq!(manifest.default_target(), Some("aarch64-apple-darwin"));
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            "[library]\nname = \"parent\"\n",
        )
        .unwrap();
        let nested = dir.path().join("src").join("deep");
        std::fs::create_dir_all(&nested).unwrap();

        let (manifest, found_dir) = AccelManifest::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(manifest.library.name, "parent");
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "not = [valid").unwrap();
        let err = AccelManifest::find_and_load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }
}
