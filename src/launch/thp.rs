// SPDX-License-Identifier: MIT

//! Transparent huge page control for the current process.
//!
//! Linux exposes this through `prctl(PR_SET_THP_DISABLE)`.  The flag is
//! stored on the process's memory descriptor, so it is inherited across
//! `fork` and kept across `execve`.  Other platforms have no such flag and
//! these functions do nothing there.

/// Ask the kernel to exclude this process from transparent huge pages.
///
/// Best effort.  Kernels before 3.15, or built without THP, reject the
/// request; the outcome is only traced.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn disable_transparent_huge_pages() {
    match request_disable() {
        Ok(()) => log::debug!("transparent huge pages disabled"),
        Err(e) => log::debug!("could not disable transparent huge pages: {e}"),
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn request_disable() -> nix::Result<()> {
    nix::sys::prctl::set_thp_disable(true)
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub fn disable_transparent_huge_pages() {
    log::debug!("transparent huge page control not available on this platform");
}

/// Current state of the disable flag, or `None` if it can't be read.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn transparent_huge_pages_disabled() -> Option<bool> {
    nix::sys::prctl::get_thp_disable().ok()
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub fn transparent_huge_pages_disabled() -> Option<bool> {
    None
}
