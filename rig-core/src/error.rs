use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RigError {
    Io(#[from] std::io::Error),
    Command { command: String, code: Option<i32> },
    Dependency(String),
    Network(String),
    Filesystem(String),
    Serialization(String),
    Internal(String),
    Other(#[from] anyhow::Error),
}

impl Display for RigError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RigError::Io(e) => write!(f, "I/O error: {}", e),
            RigError::Command { command, code } => match code {
                Some(code) => write!(f, "Command failed with exit code {}: {}", code, command),
                None => write!(f, "Command terminated without an exit code: {}", command),
            },
            RigError::Dependency(s) => write!(f, "Dependency not found: {}", s),
            RigError::Network(s) => write!(f, "Network error: {}", s),
            RigError::Filesystem(s) => write!(f, "Filesystem error: {}", s),
            RigError::Serialization(s) => write!(f, "Serialization error: {}", s),
            RigError::Internal(s) => write!(f, "Internal error: {}", s),
            RigError::Other(e) => write!(f, "Other error: {}", e),
        }
    }
}

impl RigError {
    /// Exit code carried by a failed command, if any.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            RigError::Command { code, .. } => *code,
            _ => None,
        }
    }
}

impl From<serde_yaml_ng::Error> for RigError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        RigError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for RigError {
    fn from(err: serde_json::Error) -> Self {
        RigError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RigError>;
