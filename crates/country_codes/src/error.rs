use thiserror::Error;

/// Broad classification shared by every error in the workspace.
///
/// `Validation` means the input was malformed; `NotFound` means it was
/// well-formed but matched no record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    NotFound,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CodeError {
    #[error("malformed country code `{code}` (expected {expected})")]
    Malformed { code: String, expected: &'static str },

    #[error("numeric country code {0} is out of range (max 999)")]
    NumericOutOfRange(i64),

    #[error("unknown country code `{code}`")]
    Unknown { code: String },
}

impl CodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Malformed { .. } | Self::NumericOutOfRange(_) => ErrorKind::Validation,
            Self::Unknown { .. } => ErrorKind::NotFound,
        }
    }

    pub(crate) fn malformed(code: impl Into<String>, expected: &'static str) -> Self {
        Self::Malformed {
            code: code.into(),
            expected,
        }
    }

    pub(crate) fn unknown(code: impl Into<String>) -> Self {
        Self::Unknown { code: code.into() }
    }
}
