// SPDX-License-Identifier: MIT

//! Launcher error type.
//!
//! Every variant is terminal.  The `Display` text is the exact line the
//! wrapper writes to stderr.

use std::{ffi::NulError, fmt::Display};

/// Exit status for every reported failure; the byte form of `-1`.
pub const FAILURE_EXIT_CODE: u8 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchError {
    /// No target program was given.
    Usage,
    /// The target could not be located on the search path.
    NotFound,
    /// The target exists but may not be executed by the caller.
    PermissionDenied,
    /// Any other exec failure, carrying the raw errno value.
    Other(i32),
    /// The exec call returned without setting errno.
    NoErrno,
}

impl LaunchError {
    /// Process exit status matching this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NoErrno => 0,
            _ => FAILURE_EXIT_CODE,
        }
    }

    /// Whether a message is written to stderr for this error.
    pub fn is_reported(&self) -> bool {
        !matches!(self, Self::NoErrno)
    }
}

impl Display for LaunchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage => f.write_str("ERROR: expecting at least 1 argument!"),
            Self::NotFound => f.write_str("ERROR: file not found"),
            Self::PermissionDenied => f.write_str("ERROR: can not run file"),
            Self::Other(code) => write!(f, "ERROR: {code} errno while attempting to run file"),
            Self::NoErrno => Ok(()),
        }
    }
}

impl std::error::Error for LaunchError {}

#[cfg(unix)]
impl From<nix::errno::Errno> for LaunchError {
    fn from(e: nix::errno::Errno) -> Self {
        use nix::errno::Errno;
        match e {
            Errno::ENOENT => Self::NotFound,
            Errno::EACCES => Self::PermissionDenied,
            Errno::UnknownErrno => Self::NoErrno,
            other => Self::Other(other as i32),
        }
    }
}

/// An argument with an interior NUL cannot be passed to exec.
/// The OS never hands one over, so only hand-built argument lists hit this.
#[cfg(unix)]
impl From<NulError> for LaunchError {
    fn from(_: NulError) -> Self {
        Self::Other(nix::errno::Errno::EINVAL as i32)
    }
}

#[cfg(not(unix))]
impl From<NulError> for LaunchError {
    fn from(_: NulError) -> Self {
        Self::Other(22)
    }
}

impl Into<std::io::Error> for LaunchError {
    fn into(self) -> std::io::Error {
        match self {
            Self::Usage => std::io::Error::new(std::io::ErrorKind::InvalidInput, self),
            Self::NotFound => std::io::Error::new(std::io::ErrorKind::NotFound, self),
            Self::PermissionDenied => {
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, self)
            }
            Self::Other(code) => std::io::Error::from_raw_os_error(code),
            Self::NoErrno => std::io::Error::new(std::io::ErrorKind::Other, "exec returned"),
        }
    }
}
