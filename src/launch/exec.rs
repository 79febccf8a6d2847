// SPDX-License-Identifier: MIT

//! Replace the current process image with the target program.

use std::convert::Infallible;

use crate::launch::{error::LaunchError, invocation::Invocation};

/// Run the target in place of this process.
///
/// The target is looked up through `PATH` unless its name holds a slash, and
/// it inherits the environment, open file descriptors and process
/// attributes unchanged.  Returning at all means the exec failed; the errno
/// is mapped into a `LaunchError`.
pub fn replace_image(invocation: &Invocation) -> Result<Infallible, LaunchError> {
    log::debug!("exec {:?}", invocation.program());
    let err = match nix::unistd::execvp(invocation.program(), invocation.argv()) {
        Ok(never) => match never {},
        Err(e) => e,
    };
    log::debug!("exec {:?} failed: {err}", invocation.program());
    Err(err.into())
}
