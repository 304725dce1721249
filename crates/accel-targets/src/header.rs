//! C header generation from a resolved build profile.
//!
//! Renders the profile's decisions as preprocessor definitions so C and C++
//! translation units built alongside the Rust code see the same platform tag,
//! architecture tag and capability spellings.

use crate::error::Result;
use crate::profile::BuildProfile;
use crate::toolchain::Facility;

/// Generate a C header for `profile`, guarded by `guard_name`.
///
/// Fails with [`crate::TargetError::UnsupportedToolchain`] naming the first
/// facility the profile's toolchain cannot spell.
pub fn generate_c_header(profile: &BuildProfile, guard_name: &str) -> Result<String> {
    let toolchain = profile.toolchain;
    let caps = profile.capabilities()?;
    let align = toolchain.spelling(Facility::AlignHint)?.replace("(x)", "(x_)");
    let export = profile.export_annotation();
    let export_spelling = export.spelling(toolchain)?;
    let guard = sanitize_guard(guard_name);

    log::debug!(
        "generating header {guard} for '{}' ({toolchain}, {}, {})",
        profile.triple,
        profile.platform,
        profile.build_mode
    );

    let mut out = String::new();
    out.push_str(&format!(
        "/* Generated by accel for {} ({toolchain}, {}, {}). */\n",
        profile.triple, profile.build_mode, profile.linkage
    ));
    out.push_str(&format!("#ifndef {guard}\n"));
    out.push_str(&format!("#define {guard}\n"));
    out.push('\n');
    out.push_str("#include <stdio.h>\n\n");

    out.push_str("/* Platform and architecture */\n");
    out.push_str(&format!("#define {}\n", profile.platform.define_name()));
    match profile.arch.define_name() {
        Some(name) => out.push_str(&format!("#define {name}\n")),
        None => out.push_str("/* architecture unspecified */\n"),
    }
    out.push('\n');

    out.push_str("/* Debug trap */\n");
    out.push_str(&format!("#define ACC_BREAK {}\n", caps.debug_trap));
    out.push('\n');

    out.push_str("/* Debug-only code and assertions */\n");
    if profile.build_mode.is_debug() {
        out.push_str("#define ACC_DEBUG_ONLY(x) x\n");
        out.push_str(concat!(
            "#define ACC_ASSERT(expr) \\\n",
            "    do { \\\n",
            "        if (!(expr)) { \\\n",
            "            fprintf(stderr, \"Failed assertion: %s\\n\", #expr); \\\n",
            "            fprintf(stderr, \"Location: %s@%s():%d\\n\", __FILE__, __func__, __LINE__); \\\n",
            "            fflush(stderr); \\\n",
            "            ACC_BREAK; \\\n",
            "        } \\\n",
            "    } while (0)\n",
        ));
    } else {
        out.push_str("#define ACC_DEBUG_ONLY(x)\n");
        out.push_str("#define ACC_ASSERT(expr) do { } while (0)\n");
    }
    out.push('\n');

    out.push_str("/* Hints */\n");
    out.push_str("#define ACC_UNUSED(x) (void)(x)\n");
    out.push_str(&format!("#define ACC_THREAD_LOCAL {}\n", caps.thread_local));
    out.push_str(&format!("#define ACC_ALIGN_HINT(x_) {align}\n"));
    out.push_str(&format!("#define ACC_INLINE_HINT {}\n", caps.force_inline));
    out.push('\n');

    out.push_str("/* Symbol export */\n");
    if export_spelling.is_empty() {
        out.push_str("#define ACC_EXPORT\n");
    } else {
        out.push_str(&format!("#define ACC_EXPORT {export_spelling}\n"));
    }
    out.push('\n');

    out.push_str(&format!("#endif /* {guard} */\n"));
    Ok(out)
}

/// Turn a file stem like `accel-config` into a guard like `ACCEL_CONFIG_H`.
pub fn sanitize_guard(name: &str) -> String {
    let mut guard: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    if guard.starts_with(|c: char| c.is_ascii_digit()) || guard.is_empty() {
        guard.insert(0, '_');
    }
    if !guard.ends_with("_H") {
        guard.push_str("_H");
    }
    guard
}
