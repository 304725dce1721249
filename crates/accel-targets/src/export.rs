//! Symbol export control.
//!
//! Decides whether a public symbol is exported, imported, or left with
//! default visibility, from the linkage mode and the toolchain's export model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TargetError};
use crate::platform::PlatformTag;
use crate::toolchain::{Facility, Toolchain};

/// How the code being compiled relates to the shared library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkageMode {
    /// Everything ends up in one binary.
    Static,
    /// This unit defines the shared library's symbols.
    BuildingLibrary,
    /// This unit links against the shared library.
    ConsumingLibrary,
}

/// How a toolchain expresses cross-library symbol visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportModel {
    /// Definitions and references need distinct export/import markers (PE/COFF).
    ExplicitMarkers,
    /// A single visibility attribute serves both sides.
    Visibility,
}

/// Annotation applied to an exported declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportAnnotation {
    None,
    Export,
    Import,
    DefaultVisibility,
}

impl LinkageMode {
    /// Linkage from the static-build and building-the-library signals.
    ///
    /// Static wins over everything. A consumer that never sets the
    /// building flag is treated as consuming.
    pub const fn from_signals(static_build: bool, building_library: bool) -> Self {
        if static_build {
            LinkageMode::Static
        } else if building_library {
            LinkageMode::BuildingLibrary
        } else {
            LinkageMode::ConsumingLibrary
        }
    }
}

impl ExportModel {
    /// MSVC and any toolchain targeting Windows (MinGW) need explicit markers.
    pub const fn for_target(toolchain: Toolchain, platform: PlatformTag) -> Self {
        match (toolchain, platform) {
            (Toolchain::Msvc, _) | (_, PlatformTag::Windows) => ExportModel::ExplicitMarkers,
            _ => ExportModel::Visibility,
        }
    }
}

/// Resolve the annotation for a linkage mode under an export model.
pub const fn resolve_export(linkage: LinkageMode, model: ExportModel) -> ExportAnnotation {
    match (linkage, model) {
        (LinkageMode::Static, _) => ExportAnnotation::None,
        (LinkageMode::BuildingLibrary, ExportModel::ExplicitMarkers) => ExportAnnotation::Export,
        (LinkageMode::ConsumingLibrary, ExportModel::ExplicitMarkers) => ExportAnnotation::Import,
        (_, ExportModel::Visibility) => ExportAnnotation::DefaultVisibility,
    }
}

impl ExportAnnotation {
    /// Whether a definition carrying this annotation is visible outside its binary.
    pub const fn exports_symbols(self) -> bool {
        matches!(
            self,
            ExportAnnotation::Export | ExportAnnotation::DefaultVisibility
        )
    }

    /// C spelling of the annotation for a toolchain.
    pub fn spelling(self, toolchain: Toolchain) -> Result<&'static str> {
        let unsupported = || TargetError::UnsupportedToolchain {
            toolchain,
            facility: Facility::ExportControl,
        };
        match (self, toolchain) {
            (ExportAnnotation::None, _) => Ok(""),
            (ExportAnnotation::Export, Toolchain::GenericC11)
            | (ExportAnnotation::Import, Toolchain::GenericC11)
            | (ExportAnnotation::DefaultVisibility, Toolchain::GenericC11) => Err(unsupported()),
            (ExportAnnotation::Export, _) => Ok("__declspec(dllexport)"),
            (ExportAnnotation::Import, _) => Ok("__declspec(dllimport)"),
            (ExportAnnotation::DefaultVisibility, Toolchain::GccFamily) => {
                Ok("__attribute__((visibility(\"default\")))")
            }
            (ExportAnnotation::DefaultVisibility, Toolchain::Msvc) => Err(unsupported()),
        }
    }
}

impl fmt::Display for ExportAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportAnnotation::None => "none",
            ExportAnnotation::Export => "export",
            ExportAnnotation::Import => "import",
            ExportAnnotation::DefaultVisibility => "default-visibility",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ExportModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportModel::ExplicitMarkers => "explicit-markers",
            ExportModel::Visibility => "visibility",
        })
    }
}

impl fmt::Display for LinkageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinkageMode::Static => "static",
            LinkageMode::BuildingLibrary => "building-library",
            LinkageMode::ConsumingLibrary => "consuming-library",
        };
        f.write_str(name)
    }
}
