//! Debugger trap.
//!
//! [`debug_trap`] is always inlined into its caller and expands to a single
//! breakpoint instruction, so a debugger stops in the caller's frame and can
//! resume past it. Without a debugger attached the OS delivers a trap signal.

#[cfg(not(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "arm",
    target_arch = "riscv32",
    target_arch = "riscv64",
    target_arch = "wasm32"
)))]
compile_error!("accel: the debug-trap facility is not defined for this target architecture");

/// Halt under a debugger, or raise a trap signal when none is attached.
#[inline(always)]
pub fn debug_trap() {
    // SAFETY: breakpoint instructions read and write no memory and leave
    // the stack untouched; execution continues after them when resumed.
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    unsafe {
        core::arch::asm!("int3", options(nomem, nostack));
    }
    #[cfg(target_arch = "aarch64")]
    unsafe {
        core::arch::asm!("brk #0xf000", options(nomem, nostack));
    }
    #[cfg(target_arch = "arm")]
    unsafe {
        core::arch::asm!("udf #0xfe", options(nomem, nostack));
    }
    #[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
    unsafe {
        core::arch::asm!("ebreak", options(nomem, nostack));
    }
    #[cfg(target_arch = "wasm32")]
    core::arch::wasm32::unreachable();
}
