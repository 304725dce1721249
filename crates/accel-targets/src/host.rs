//! Resolution for the target this crate is being compiled for.
//!
//! Every item here is a `const`, evaluated by the compiler. A target whose
//! OS matches no platform family fails the build during const evaluation.

use crate::arch::{classify_arch, ArchSignals, ArchTag};
use crate::error::ClassifyError;
use crate::export::ExportModel;
use crate::platform::{classify_platform, OsSignals, PlatformTag};
use crate::toolchain::Toolchain;

/// Full target triple, as cargo passed it to the build script.
pub const TRIPLE: &str = env!("ACCEL_TARGET");

pub const TOOLCHAIN: Toolchain = Toolchain::from_target_env(cfg!(target_env = "msvc"));

pub const OS_SIGNALS: OsSignals = OsSignals {
    windows: cfg!(any(target_os = "windows", target_os = "cygwin")),
    web: cfg!(any(
        target_os = "emscripten",
        all(target_family = "wasm", target_os = "unknown")
    )),
    android: cfg!(target_os = "android"),
    linux: cfg!(target_os = "linux"),
    apple: cfg!(target_vendor = "apple"),
    apple_mobile: cfg!(any(
        target_os = "ios",
        target_os = "tvos",
        target_os = "watchos",
        target_os = "visionos"
    )),
    apple_desktop: cfg!(target_os = "macos"),
};

pub const ARCH_SIGNALS: ArchSignals = ArchSignals {
    x86: cfg!(target_arch = "x86"),
    x86_64: cfg!(target_arch = "x86_64"),
    aarch64: cfg!(target_arch = "aarch64"),
    arm: cfg!(target_arch = "arm"),
};

pub const PLATFORM: PlatformTag = match classify_platform(&OS_SIGNALS) {
    Ok(tag) => tag,
    Err(ClassifyError::UnsupportedApplePlatform) => {
        panic!("accel: unsupported Apple platform (neither iOS-family nor macOS)")
    }
    Err(ClassifyError::UnsupportedPlatform) => {
        panic!("accel: unsupported platform (expected Windows, Web, Android, Linux, iOS or macOS)")
    }
};

pub const ARCH: ArchTag = classify_arch(&ARCH_SIGNALS);

pub const EXPORT_MODEL: ExportModel = ExportModel::for_target(TOOLCHAIN, PLATFORM);

// Force evaluation even when nothing downstream reads PLATFORM.
const _: PlatformTag = PLATFORM;
