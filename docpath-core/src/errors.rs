use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

pub type PathResult<T> = Result<T, PathError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PathError {
    pub fn code(&self) -> Code {
        match self {
            PathError::InvalidArgument(_) => Code::InvalidArgument,
            PathError::Internal(_) => Code::Internal,
        }
    }

    /// Human-readable message without the code prefix
    pub fn message(&self) -> &str {
        match self {
            PathError::InvalidArgument(msg) | PathError::Internal(msg) => msg,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Code {
    InvalidArgument,
    Internal,
}
