use std::path::PathBuf;
use thiserror::Error;
use crate::core::types::EntityKind;

/// Fieldless tag for matching on an [`Error`] without destructuring it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownRecordType,
    RecordTypeMismatch,
    UnknownField,
    MissingFile,
    Parse,
    Io,
    Config,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("no field schema is declared for record type `{0}`")]
    UnknownRecordType(String),

    #[error("{expected} does not match the record type of the provided collection ({found})")]
    RecordTypeMismatch { expected: EntityKind, found: EntityKind },

    #[error("`{field}` is not a searchable field of {kind}")]
    UnknownField { kind: EntityKind, field: String },

    #[error("data file {} not found", .path.display())]
    MissingFile { path: PathBuf },

    #[error("failed to parse {kind}s in {}: {source}", .path.display())]
    Parse {
        kind: EntityKind,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownRecordType(_) => ErrorKind::UnknownRecordType,
            Error::RecordTypeMismatch { .. } => ErrorKind::RecordTypeMismatch,
            Error::UnknownField { .. } => ErrorKind::UnknownField,
            Error::MissingFile { .. } => ErrorKind::MissingFile,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::Io(_) => ErrorKind::Io,
            Error::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
