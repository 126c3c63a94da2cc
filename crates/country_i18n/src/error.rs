use country_codes::{CodeError, ErrorKind};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    #[error(transparent)]
    Code(#[from] CodeError),

    #[error("locale tag must not be empty")]
    EmptyLocale,

    #[error("no country names given for locale `{0}`")]
    EmptyPayload(String),

    #[error("invalid country key `{key}` in locale `{locale}` (expected an alpha-2 code)")]
    InvalidCountryKey { locale: String, key: String },

    #[error("empty name for `{alpha2}` in locale `{locale}`")]
    EmptyName { locale: String, alpha2: String },

    #[error("name for `{alpha2}` in locale `{locale}` is too long (max {max} bytes)")]
    NameTooLong {
        locale: String,
        alpha2: String,
        max: usize,
    },

    #[error("too many entries for locale `{locale}` (max {max})")]
    TooManyEntries { locale: String, max: usize },

    #[error("locale data error: {0}")]
    Parse(String),

    #[error("unknown name selection `{0}` (expected `official`, `all` or `alias`)")]
    InvalidSelect(String),

    #[error("unknown locale `{0}`")]
    UnknownLocale(String),

    #[error("no name for `{alpha2}` in locale `{locale}`")]
    MissingName { locale: String, alpha2: String },

    #[error("no country named `{name}` in locale `{locale}`")]
    NameNotFound { name: String, locale: String },
}

impl I18nError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Code(e) => e.kind(),
            Self::EmptyLocale
            | Self::EmptyPayload(_)
            | Self::InvalidCountryKey { .. }
            | Self::EmptyName { .. }
            | Self::NameTooLong { .. }
            | Self::TooManyEntries { .. }
            | Self::Parse(_)
            | Self::InvalidSelect(_) => ErrorKind::Validation,
            Self::UnknownLocale(_) | Self::MissingName { .. } | Self::NameNotFound { .. } => {
                ErrorKind::NotFound
            }
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
