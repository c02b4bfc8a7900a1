use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::api::PresenceFlags;

pub type ChartStyleResult<T> = Result<T, ChartStyleError>;

/// Stage of a save/restore cycle at which a fatal error surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorStage {
    Open,
    Write,
    VariantSelect,
    Parse,
}

impl fmt::Display for ErrorStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "open",
            Self::Write => "write",
            Self::VariantSelect => "variant-select",
            Self::Parse => "parse",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ChartStyleError {
    #[error("cannot open configuration `{}`: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write configuration `{}`: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported chart layout: {flags}")]
    UnsupportedLayout { flags: PresenceFlags },

    #[error("invalid number `{token}` for entry `{entry}` in field `{field}`")]
    InvalidNumber {
        field: String,
        entry: String,
        token: String,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ChartStyleError {
    #[must_use]
    pub fn stage(&self) -> ErrorStage {
        match self {
            Self::Open { .. } => ErrorStage::Open,
            Self::Write { .. } => ErrorStage::Write,
            Self::UnsupportedLayout { .. } => ErrorStage::VariantSelect,
            Self::InvalidNumber { .. } | Self::InvalidData(_) => ErrorStage::Parse,
        }
    }
}
