//! `accel header`: render a resolved profile as a C configuration header.

use std::path::{Path, PathBuf};

use accel_targets::header::generate_c_header;
use accel_targets::parse::ensure_valid;
use accel_targets::BuildProfile;
use anyhow::{Context, Result};

/// Write the header for `profile` to `output` (relative to `project_dir`).
///
/// The profile must validate first. An output of `-` prints the header
/// instead. Returns the written path.
pub fn run(
    project_dir: &Path,
    profile: &BuildProfile,
    guard: &str,
    output: &str,
) -> Result<Option<PathBuf>> {
    ensure_valid(profile).with_context(|| format!("profile for '{}'", profile.triple))?;
    let header = generate_c_header(profile, guard)
        .with_context(|| format!("generating header for '{}'", profile.triple))?;

    if output == "-" {
        print!("{header}");
        return Ok(None);
    }

    let output_path = project_dir.join(output);
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&output_path, &header)
        .with_context(|| format!("writing {}", output_path.display()))?;

    println!(
        "Generated {} ({}, {}, {})",
        output_path.display(),
        profile.platform,
        profile.toolchain,
        profile.build_mode
    );
    Ok(Some(output_path))
}
