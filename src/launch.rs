// SPDX-License-Identifier: MIT

//! Launches the target program in place of the current process.
//!
//! The `run` function is the main entry point.  It takes the raw argument
//! list of the wrapper, validates it, asks the kernel to exclude the process
//! from transparent huge page promotion, then replaces the process image
//! with the target program.  The huge page flag survives the exec, so the
//! target runs with it set.
//!
//! On success `run` never returns.  When it does return, the value is the
//! reason the target could not be started.

use std::{convert::Infallible, ffi::OsString};

pub mod error;
pub mod thp;

#[cfg(unix)]
pub mod exec;
#[cfg(unix)]
pub mod invocation;

use error::LaunchError;
#[cfg(unix)]
use invocation::Invocation;

#[cfg(unix)]
pub fn run<I: IntoIterator<Item = OsString>>(args: I) -> Result<Infallible, LaunchError> {
    let invocation = Invocation::from_args(args)?;
    // Fails open: the target still runs if the kernel refuses the flag.
    thp::disable_transparent_huge_pages();
    exec::replace_image(&invocation)
}
