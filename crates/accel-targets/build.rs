fn main() {
    // The full triple keeps vendor and environment, which std::env::consts drops.
    let target = std::env::var("TARGET").unwrap_or_default();
    println!("cargo:rustc-env=ACCEL_TARGET={target}");
    println!("cargo:rerun-if-changed=build.rs");
}
