//! Platform classification.
//!
//! OS signals are checked against an explicit priority list, most specific
//! family first. The Apple family is resolved in a second level from its
//! target-environment indicator. Anything unmatched is an error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;

/// Operating system / environment family of the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformTag {
    Windows,
    /// Sandboxed VM targets (Emscripten, browser wasm).
    Web,
    Android,
    Linux,
    #[serde(rename = "ios")]
    Ios,
    #[serde(rename = "macos")]
    MacOs,
}

/// OS signals of a target. Several may be set at once; the priority list
/// decides which one wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OsSignals {
    pub windows: bool,
    pub web: bool,
    pub android: bool,
    pub linux: bool,
    /// Apple vendor, any OS.
    pub apple: bool,
    /// iOS, tvOS, watchOS, visionOS (including simulators and Catalyst).
    pub apple_mobile: bool,
    /// macOS.
    pub apple_desktop: bool,
}

/// A platform family, in the order families are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Windows,
    Web,
    Android,
    Linux,
    Apple,
}

/// Android is checked before Linux because an Android target is also a Linux kernel.
const FAMILY_PRIORITY: [Family; 5] = [
    Family::Windows,
    Family::Web,
    Family::Android,
    Family::Linux,
    Family::Apple,
];

impl OsSignals {
    const fn matches(&self, family: Family) -> bool {
        match family {
            Family::Windows => self.windows,
            Family::Web => self.web,
            Family::Android => self.android,
            Family::Linux => self.linux,
            Family::Apple => self.apple,
        }
    }
}

/// Classify OS signals into exactly one platform tag.
pub const fn classify_platform(signals: &OsSignals) -> Result<PlatformTag, ClassifyError> {
    let mut i = 0;
    while i < FAMILY_PRIORITY.len() {
        let family = FAMILY_PRIORITY[i];
        if signals.matches(family) {
            return match family {
                Family::Windows => Ok(PlatformTag::Windows),
                Family::Web => Ok(PlatformTag::Web),
                Family::Android => Ok(PlatformTag::Android),
                Family::Linux => Ok(PlatformTag::Linux),
                Family::Apple => classify_apple(signals),
            };
        }
        i += 1;
    }
    Err(ClassifyError::UnsupportedPlatform)
}

/// Second level of the Apple family: mobile before desktop.
const fn classify_apple(signals: &OsSignals) -> Result<PlatformTag, ClassifyError> {
    if signals.apple_mobile {
        Ok(PlatformTag::Ios)
    } else if signals.apple_desktop {
        Ok(PlatformTag::MacOs)
    } else {
        Err(ClassifyError::UnsupportedApplePlatform)
    }
}

impl PlatformTag {
    /// Every platform tag.
    pub const ALL: [PlatformTag; 6] = [
        PlatformTag::Windows,
        PlatformTag::Web,
        PlatformTag::Android,
        PlatformTag::Linux,
        PlatformTag::Ios,
        PlatformTag::MacOs,
    ];

    /// Identifier defined for this tag in generated C headers.
    pub fn define_name(self) -> &'static str {
        match self {
            PlatformTag::Windows => "PLATFORM_WINDOWS",
            PlatformTag::Web => "PLATFORM_WEB",
            PlatformTag::Android => "PLATFORM_ANDROID",
            PlatformTag::Linux => "PLATFORM_LINUX",
            PlatformTag::Ios => "PLATFORM_IOS",
            PlatformTag::MacOs => "PLATFORM_MACOS",
        }
    }

    pub const fn is_apple(self) -> bool {
        matches!(self, PlatformTag::Ios | PlatformTag::MacOs)
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlatformTag::Windows => "windows",
            PlatformTag::Web => "web",
            PlatformTag::Android => "android",
            PlatformTag::Linux => "linux",
            PlatformTag::Ios => "ios",
            PlatformTag::MacOs => "macos",
        };
        f.write_str(name)
    }
}
