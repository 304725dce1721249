//! `accel classify`: platform and architecture tags for target triples.

use accel_targets::{ArchTag, PlatformTag, TargetSignals, Toolchain};
use anyhow::{bail, Result};

/// Outcome of classifying one triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub triple: String,
    pub platform: PlatformTag,
    pub arch: ArchTag,
    pub toolchain: Toolchain,
}

pub fn classify(triple: &str) -> accel_targets::Result<Classification> {
    let signals = TargetSignals::parse(triple)?;
    Ok(Classification {
        triple: signals.triple.clone(),
        platform: signals.platform()?,
        arch: signals.arch(),
        toolchain: signals.toolchain(),
    })
}

/// Classify every triple, printing one line each. Fails if any triple did.
pub fn run(triples: &[String]) -> Result<()> {
    if triples.is_empty() {
        bail!("no target triples given");
    }
    let mut failures = 0usize;
    for triple in triples {
        match classify(triple) {
            Ok(c) => println!(
                "{:<32} {:<8} {:<12} {}",
                c.triple,
                c.platform.to_string(),
                c.arch.to_string(),
                c.toolchain
            ),
            Err(e) => {
                failures += 1;
                println!("{triple:<32} error: {e}");
            }
        }
    }
    if failures > 0 {
        bail!("{failures} of {} triples failed to classify", triples.len());
    }
    Ok(())
}
