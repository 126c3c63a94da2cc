use std::borrow::Cow;
use std::fmt;

use crate::error::CodeError;

/// A country code as handed in by a caller: text in any of the three forms,
/// or a bare integer for numeric codes (`4` means `"004"`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodeInput<'a> {
    Text(Cow<'a, str>),
    Number(i64),
}

impl<'a> From<&'a str> for CodeInput<'a> {
    fn from(v: &'a str) -> Self {
        Self::Text(Cow::Borrowed(v))
    }
}

impl<'a> From<&'a String> for CodeInput<'a> {
    fn from(v: &'a String) -> Self {
        Self::Text(Cow::Borrowed(v.as_str()))
    }
}

impl From<String> for CodeInput<'static> {
    fn from(v: String) -> Self {
        Self::Text(Cow::Owned(v))
    }
}

impl From<u8> for CodeInput<'static> {
    fn from(v: u8) -> Self {
        Self::Number(v as i64)
    }
}

impl From<u16> for CodeInput<'static> {
    fn from(v: u16) -> Self {
        Self::Number(v as i64)
    }
}

impl From<u32> for CodeInput<'static> {
    fn from(v: u32) -> Self {
        Self::Number(v as i64)
    }
}

impl From<i32> for CodeInput<'static> {
    fn from(v: i32) -> Self {
        Self::Number(v as i64)
    }
}

impl From<i64> for CodeInput<'static> {
    fn from(v: i64) -> Self {
        Self::Number(v)
    }
}

// Values past `i64::MAX` saturate; they are out of range either way.
impl From<u64> for CodeInput<'static> {
    fn from(v: u64) -> Self {
        Self::Number(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<usize> for CodeInput<'static> {
    fn from(v: usize) -> Self {
        Self::Number(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for CodeInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// The shape of a country code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodeForm {
    Alpha2,
    Alpha3,
    Numeric,
}

impl CodeForm {
    pub fn describe(self) -> &'static str {
        match self {
            Self::Alpha2 => "an alpha-2 code",
            Self::Alpha3 => "an alpha-3 code",
            Self::Numeric => "a numeric code",
        }
    }
}

/// A code whose shape has been detected, in canonical spelling:
/// uppercase letters, or three zero-padded digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DetectedCode {
    pub form: CodeForm,
    pub code: String,
}

const ANY_FORM: &str = "an alpha-2, alpha-3 or numeric code";

/// Detect the form of a code by its shape.
///
/// - 2 ASCII letters -> alpha-2
/// - 3 ASCII letters -> alpha-3
/// - 1 to 3 ASCII digits (or an integer in `0..=999`) -> numeric
///
/// The input is not trimmed; anything else is [`CodeError::Malformed`].
pub fn detect<'a>(code: impl Into<CodeInput<'a>>) -> Result<DetectedCode, CodeError> {
    let input: CodeInput<'a> = code.into();
    match input {
        CodeInput::Number(n) => {
            if !(0..=999).contains(&n) {
                return Err(CodeError::NumericOutOfRange(n));
            }
            Ok(DetectedCode {
                form: CodeForm::Numeric,
                code: format!("{n:03}"),
            })
        }
        CodeInput::Text(s) => detect_str(&s),
    }
}

fn detect_str(s: &str) -> Result<DetectedCode, CodeError> {
    if s.bytes().all(|b| b.is_ascii_alphabetic()) {
        let form = match s.len() {
            2 => CodeForm::Alpha2,
            3 => CodeForm::Alpha3,
            _ => return Err(CodeError::malformed(s, ANY_FORM)),
        };
        return Ok(DetectedCode {
            form,
            code: s.to_ascii_uppercase(),
        });
    }

    if !s.is_empty() && s.len() <= 3 && s.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(DetectedCode {
            form: CodeForm::Numeric,
            code: format!("{s:0>3}"),
        });
    }

    Err(CodeError::malformed(s, ANY_FORM))
}

/// Detect a code and require a specific form.
pub(crate) fn expect_form<'a>(
    code: impl Into<CodeInput<'a>>,
    form: CodeForm,
) -> Result<String, CodeError> {
    let input: CodeInput<'a> = code.into();
    let shown = input.to_string();
    match detect(input) {
        Ok(d) if d.form == form => Ok(d.code),
        Ok(_) | Err(CodeError::Malformed { .. }) => {
            Err(CodeError::malformed(shown, form.describe()))
        }
        Err(e) => Err(e),
    }
}
