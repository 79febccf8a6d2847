// SPDX-License-Identifier: MIT

//! The wrapper's own argument vector, turned into the one the target gets.

use std::{
    ffi::{CStr, CString, OsString},
    os::unix::ffi::OsStrExt as _,
};

use crate::launch::error::LaunchError;

/// The forwarded argument vector.
///
/// Element 0 is the target program name, the rest are its arguments.  The
/// NULL terminator required by exec is appended when the vector is handed
/// to the exec call, not stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    argv: Vec<CString>,
}

impl Invocation {
    /// Build the forwarded vector from the wrapper's full argument list,
    /// including its own program name at index 0.
    pub fn from_args<I: IntoIterator<Item = OsString>>(args: I) -> Result<Self, LaunchError> {
        let mut args = args.into_iter();
        // The wrapper's own name is never forwarded.
        let _ = args.next();

        let mut argv = Vec::new();
        for arg in args {
            argv.push(CString::new(arg.as_os_str().as_bytes())?);
        }
        if argv.is_empty() {
            log::debug!("no target program given");
            return Err(LaunchError::Usage);
        }
        log::trace!("forwarding {} argument(s) to {:?}", argv.len() - 1, argv[0]);
        Ok(Invocation { argv })
    }

    /// The target program name, resolved through the search path at exec time.
    pub fn program(&self) -> &CStr {
        self.argv[0].as_c_str()
    }

    /// The full forwarded vector, target name first.
    pub fn argv(&self) -> &[CString] {
        &self.argv
    }
}
