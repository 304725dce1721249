//! `accel matrix`: the supported target matrix.

use accel_targets::matrix::SUPPORT_MATRIX;
use anyhow::Result;

use super::classify::classify;

/// One rendered line per matrix entry.
pub fn render() -> Result<Vec<String>> {
    SUPPORT_MATRIX
        .iter()
        .map(|(triple, description)| {
            let c = classify(triple)?;
            Ok(format!(
                "  {triple:<32} {:<8} {:<12} {description}",
                c.platform.to_string(),
                c.arch.to_string()
            ))
        })
        .collect()
}

pub fn run() -> Result<()> {
    println!("Supported targets:");
    println!();
    for line in render()? {
        println!("{line}");
    }
    println!();
    println!("Use 'accel describe --target <triple>' for details.");
    Ok(())
}
