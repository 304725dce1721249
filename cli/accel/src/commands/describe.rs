//! `accel describe`: resolved profile and capability spellings.

use accel_targets::{BuildProfile, ExportAnnotation, ExportModel, Facility};
use anyhow::{bail, Result};
use serde::Serialize;

/// Machine-readable form of a description.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct Description<'a> {
    #[serde(flatten)]
    profile: &'a BuildProfile,
    export_model: ExportModel,
    export: ExportAnnotation,
    spellings: Vec<Spelling>,
}

#[derive(Debug, Serialize)]
struct Spelling {
    facility: Facility,
    /// Absent when the toolchain cannot express the facility.
    #[serde(skip_serializing_if = "Option::is_none")]
    spelling: Option<String>,
}

fn spellings(profile: &BuildProfile) -> Vec<Spelling> {
    Facility::ALL
        .iter()
        .map(|&facility| {
            let spelling = match facility {
                Facility::ExportControl => profile.export_annotation().spelling(profile.toolchain),
                other => profile.toolchain.spelling(other),
            };
            Spelling {
                facility,
                spelling: spelling.ok().map(str::to_string),
            }
        })
        .collect()
}

/// Render a profile as text, TOML or JSON.
pub fn render(profile: &BuildProfile, format: Option<&str>) -> Result<String> {
    let description = Description {
        profile,
        export_model: profile.export_model(),
        export: profile.export_annotation(),
        spellings: spellings(profile),
    };
    match format {
        None | Some("text") => Ok(render_text(&description)),
        Some("toml") => Ok(toml::to_string_pretty(&description)?),
        Some("json") => Ok(serde_json::to_string_pretty(&description)? + "\n"),
        Some(other) => bail!("unknown format '{other}' (expected text, toml or json)"),
    }
}

fn render_text(d: &Description<'_>) -> String {
    let p = d.profile;
    let mut out = String::new();
    out.push_str(&format!("=== Target: {} ===\n", p.triple));
    out.push_str(&format!(
        "  Platform:     {} ({})\n",
        p.platform,
        p.platform.define_name()
    ));
    match p.arch.define_name() {
        Some(define) => out.push_str(&format!("  Architecture: {} ({define})\n", p.arch)),
        None => out.push_str("  Architecture: unspecified (no tag)\n"),
    }
    out.push_str(&format!("  Toolchain:    {}\n", p.toolchain));
    out.push_str(&format!("  Build mode:   {}\n", p.build_mode));
    out.push_str(&format!("  Linkage:      {}\n", p.linkage));
    out.push_str(&format!("  Export model: {}\n", d.export_model));
    out.push_str(&format!("  Export:       {}\n", d.export));
    out.push('\n');

    out.push_str("--- Capabilities ---\n");
    for s in &d.spellings {
        let spelling = match s.spelling.as_deref() {
            Some("") => "(empty)",
            Some(text) => text,
            None => "unsupported",
        };
        out.push_str(&format!("  {:<15} {spelling}\n", s.facility.to_string()));
    }
    if let Some(instruction) = p.arch.trap_instruction() {
        out.push_str(&format!("  {:<15} {instruction}\n", "trap-insn"));
    }
    out
}

pub fn run(profile: &BuildProfile, format: Option<&str>) -> Result<()> {
    print!("{}", render(profile, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use accel_targets::{BuildMode, LinkageMode, TargetSignals, Toolchain};

    fn profile(triple: &str, linkage: LinkageMode) -> BuildProfile {
        BuildProfile::resolve(triple, BuildMode::Debug, linkage).unwrap()
    }

    #[test]
    fn text_output_for_windows_dll() {
        let text = render(
            &profile("x86_64-pc-windows-msvc", LinkageMode::BuildingLibrary),
            None,
        )
        .unwrap();
        assert!(text.contains("=== Target: x86_64-pc-windows-msvc ==="));
        assert!(text.contains("windows (PLATFORM_WINDOWS)"));
        assert!(text.contains("x86_64 (ARCHITECTURE_X86_64)"));
        assert!(text.contains("Export model: explicit-markers"));
        assert!(text.contains("__declspec(dllexport)"));
        assert!(text.contains("__debugbreak()"));
        assert!(text.contains("trap-insn"));
        assert!(text.contains("int3"));
    }

    #[test]
    fn text_output_marks_unsupported_facilities() {
        let signals = TargetSignals::parse("x86_64-unknown-linux-gnu").unwrap();
        let p = BuildProfile::from_signals(
            &signals,
            Toolchain::GenericC11,
            BuildMode::Release,
            LinkageMode::ConsumingLibrary,
        )
        .unwrap();
        let text = render(&p, Some("text")).unwrap();
        assert!(text.contains("_Thread_local"));
        assert!(text.contains("debug-trap      unsupported"));
        assert!(text.contains("export-control  unsupported"));
    }

    #[test]
    fn unspecified_arch_reports_no_tag() {
        let text = render(
            &profile("riscv64gc-unknown-linux-gnu", LinkageMode::Static),
            None,
        )
        .unwrap();
        assert!(text.contains("Architecture: unspecified (no tag)"));
        assert!(text.contains("export-control  (empty)"));
    }

    #[test]
    fn json_output_is_structured() {
        let json = render(
            &profile("aarch64-apple-ios", LinkageMode::ConsumingLibrary),
            Some("json"),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["platform"], "ios");
        assert_eq!(value["arch"], "arm64");
        assert_eq!(value["export"], "default-visibility");
        assert_eq!(value["spellings"].as_array().unwrap().len(), Facility::ALL.len());
    }

    #[test]
    fn toml_output_parses_back() {
        let text = render(
            &profile("x86_64-unknown-linux-gnu", LinkageMode::Static),
            Some("toml"),
        )
        .unwrap();
        let value: toml::Value = toml::from_str(&text).unwrap();
        assert_eq!(value["triple"].as_str(), Some("x86_64-unknown-linux-gnu"));
        assert_eq!(value["linkage"].as_str(), Some("static"));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let p = profile("x86_64-unknown-linux-gnu", LinkageMode::Static);
        assert!(render(&p, Some("yaml")).is_err());
    }
}
