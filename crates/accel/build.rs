fn main() {
    cfg_aliases::cfg_aliases! {
        // Same rule as `ExportModel::for_target` on the host.
        explicit_markers: { any(target_env = "msvc", target_os = "windows", target_os = "cygwin") },
        // Mirrors `EXPORT.exports_symbols()`: not static, and either building
        // the library or on a target without explicit markers.
        accel_exports: {
            all(
                not(feature = "static-build"),
                any(feature = "building-library", not(explicit_markers))
            )
        },
    }
}
