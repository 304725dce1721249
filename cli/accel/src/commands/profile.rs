//! `accel profile`: saved build profiles under `profiles/`.

use std::path::{Path, PathBuf};

use accel_targets::parse::{
    discover_profiles, generate_template, load_profile_toml, validate_profile,
};
use anyhow::{bail, Context, Result};

/// List the project's `*.profile.toml` files.
pub fn list(project_dir: &Path) -> Result<()> {
    let profiles = discover_profiles(project_dir)?;
    if profiles.is_empty() {
        println!("No profiles in {}", project_dir.join("profiles").display());
        return Ok(());
    }
    println!("Profiles:");
    for (name, path) in profiles {
        match load_profile_toml(&path) {
            Ok(p) => println!(
                "  {name:<20} {:<32} {} {} {}",
                p.triple, p.toolchain, p.build_mode, p.linkage
            ),
            Err(e) => println!("  {name:<20} error: {e}"),
        }
    }
    Ok(())
}

/// Write `profiles/<name>.profile.toml` seeded from a triple.
pub fn new(project_dir: &Path, name: &str, triple: &str) -> Result<PathBuf> {
    let dir = project_dir.join("profiles");
    let path = dir.join(format!("{name}.profile.toml"));
    if path.exists() {
        bail!("profile '{name}' already exists at {}", path.display());
    }
    let content = generate_template(triple)?;
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(path)
}

/// Validate one named profile, or all of them.
pub fn check(project_dir: &Path, name: Option<&str>) -> Result<()> {
    let profiles: Vec<(String, PathBuf)> = discover_profiles(project_dir)?
        .into_iter()
        .filter(|(n, _)| name.map_or(true, |wanted| n == wanted))
        .collect();
    if profiles.is_empty() {
        match name {
            Some(name) => bail!("no profile named '{name}'"),
            None => bail!("no profiles to check"),
        }
    }

    let mut failed = Vec::new();
    for (name, path) in &profiles {
        let profile = load_profile_toml(path)
            .with_context(|| format!("loading profile '{name}'"))?;
        match validate_profile(&profile) {
            Ok(()) => println!("  {name}: ok"),
            Err(issues) => {
                for issue in &issues {
                    println!("  {name}: {}: {}", issue.severity, issue.message);
                }
                failed.push(name.as_str());
            }
        }
    }
    if !failed.is_empty() {
        bail!("invalid profiles: {}", failed.join(", "));
    }
    Ok(())
}
