//! Describes dependency injection errors

use std::fmt::{Display, Formatter};

/// Errors raised by the container, injection points and installers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A required dependency has no registered instance
    NotRegistered(&'static str),

    /// A registered instance could not be downcast to the requested type
    ResolveFailed(&'static str),

    /// A type could not be constructed
    ConstructFailed(&'static str),

    /// An installer failed to populate the container
    InstallFailed(&'static str),

    /// Any other failure, described by a static message
    Other(&'static str),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotRegistered(type_name) => write!(f, "Services Error: service not registered: {type_name}"),
            Error::ResolveFailed(type_name) => write!(f, "Services Error: unable to resolve the service: {type_name}"),
            Error::ConstructFailed(type_name) => write!(f, "Services Error: unable to construct: {type_name}"),
            Error::InstallFailed(installer) => write!(f, "Services Error: installer failed: {installer}"),
            Error::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}
