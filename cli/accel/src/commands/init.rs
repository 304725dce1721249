//! `accel init`: write a starting `accel.toml`.

use std::path::{Path, PathBuf};

use accel_targets::matrix;
use anyhow::{bail, Context, Result};

use crate::manifest::{AccelManifest, MANIFEST_FILE};

/// Create `accel.toml` in `project_dir` for library `name`.
pub fn run(project_dir: &Path, name: &str, target: &str) -> Result<PathBuf> {
    let path = project_dir.join(MANIFEST_FILE);
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    // Resolve once so a typo fails here rather than on the first build.
    super::classify::classify(target).with_context(|| format!("checking target '{target}'"))?;
    if matrix::describe(target).is_none() {
        log::warn!("target '{target}' is not in the support matrix");
    }

    std::fs::write(&path, AccelManifest::template(name, target))
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(path)
}
