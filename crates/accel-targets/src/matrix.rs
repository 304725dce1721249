//! The supported target matrix.

/// Target triples known to resolve, with a short description each.
pub const SUPPORT_MATRIX: &[(&str, &str)] = &[
    ("x86_64-pc-windows-msvc", "Windows x64, MSVC"),
    ("i686-pc-windows-msvc", "Windows x86, MSVC"),
    ("aarch64-pc-windows-msvc", "Windows ARM64, MSVC"),
    ("x86_64-pc-windows-gnu", "Windows x64, MinGW"),
    ("x86_64-pc-cygwin", "Windows x64, Cygwin"),
    ("wasm32-unknown-emscripten", "Web, Emscripten"),
    ("wasm32-unknown-unknown", "Web, bare wasm32"),
    ("aarch64-linux-android", "Android ARM64"),
    ("armv7-linux-androideabi", "Android ARMv7"),
    ("x86_64-linux-android", "Android x64 (emulator)"),
    ("i686-linux-android", "Android x86 (emulator)"),
    ("x86_64-unknown-linux-gnu", "Linux x64, glibc"),
    ("x86_64-unknown-linux-musl", "Linux x64, musl"),
    ("i686-unknown-linux-gnu", "Linux x86, glibc"),
    ("aarch64-unknown-linux-gnu", "Linux ARM64, glibc"),
    ("armv7-unknown-linux-gnueabihf", "Linux ARMv7 hard-float"),
    ("riscv64gc-unknown-linux-gnu", "Linux RISC-V 64 (no architecture tag)"),
    ("aarch64-apple-ios", "iOS ARM64"),
    ("aarch64-apple-ios-sim", "iOS simulator ARM64"),
    ("x86_64-apple-ios", "iOS simulator x64"),
    ("aarch64-apple-darwin", "macOS Apple silicon"),
    ("x86_64-apple-darwin", "macOS Intel"),
];

/// Look up the description of a matrix entry.
pub fn describe(triple: &str) -> Option<&'static str> {
    SUPPORT_MATRIX
        .iter()
        .find(|(t, _)| *t == triple)
        .map(|(_, d)| *d)
}
