use std::collections::BTreeMap;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::data::COUNTRIES;
use crate::error::CodeError;
use crate::input::{detect, expect_form, CodeForm, CodeInput};

/// One ISO 3166-1 entry in all three forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Country {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub numeric: &'static str,
}

impl Country {
    fn from_row(&(alpha2, alpha3, numeric): &(&'static str, &'static str, &'static str)) -> Self {
        Self {
            alpha2,
            alpha3,
            numeric,
        }
    }

    fn code(&self, form: CodeForm) -> &'static str {
        match form {
            CodeForm::Alpha2 => self.alpha2,
            CodeForm::Alpha3 => self.alpha3,
            CodeForm::Numeric => self.numeric,
        }
    }
}

/// Row indices keyed by each code form. Built once, never mutated.
struct CodeTables {
    by_alpha2: FxHashMap<&'static str, usize>,
    by_alpha3: FxHashMap<&'static str, usize>,
    by_numeric: FxHashMap<&'static str, usize>,
}

static TABLES: OnceLock<CodeTables> = OnceLock::new();

impl CodeTables {
    fn get() -> &'static CodeTables {
        TABLES.get_or_init(Self::build)
    }

    fn build() -> Self {
        let n = COUNTRIES.len();
        let mut tables = CodeTables {
            by_alpha2: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            by_alpha3: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            by_numeric: FxHashMap::with_capacity_and_hasher(n, Default::default()),
        };
        for (idx, &(alpha2, alpha3, numeric)) in COUNTRIES.iter().enumerate() {
            tables.by_alpha2.insert(alpha2, idx);
            tables.by_alpha3.insert(alpha3, idx);
            tables.by_numeric.insert(numeric, idx);
        }
        tables
    }

    fn find(&self, form: CodeForm, code: &str) -> Option<Country> {
        let index = match form {
            CodeForm::Alpha2 => &self.by_alpha2,
            CodeForm::Alpha3 => &self.by_alpha3,
            CodeForm::Numeric => &self.by_numeric,
        };
        index.get(code).map(|&idx| Country::from_row(&COUNTRIES[idx]))
    }
}

fn find_as(code: String, form: CodeForm) -> Result<Country, CodeError> {
    CodeTables::get()
        .find(form, &code)
        .ok_or_else(|| CodeError::unknown(code))
}

fn convert<'a>(
    code: impl Into<CodeInput<'a>>,
    from: CodeForm,
    to: CodeForm,
) -> Result<&'static str, CodeError> {
    let code = expect_form(code, from)?;
    Ok(find_as(code, from)?.code(to))
}

/// Look up a country by any code form, detected by shape.
pub fn lookup<'a>(code: impl Into<CodeInput<'a>>) -> Result<Country, CodeError> {
    let detected = detect(code)?;
    find_as(detected.code, detected.form)
}

pub fn alpha2_to_alpha3<'a>(code: impl Into<CodeInput<'a>>) -> Result<&'static str, CodeError> {
    convert(code, CodeForm::Alpha2, CodeForm::Alpha3)
}

pub fn alpha2_to_numeric<'a>(code: impl Into<CodeInput<'a>>) -> Result<&'static str, CodeError> {
    convert(code, CodeForm::Alpha2, CodeForm::Numeric)
}

pub fn alpha3_to_alpha2<'a>(code: impl Into<CodeInput<'a>>) -> Result<&'static str, CodeError> {
    convert(code, CodeForm::Alpha3, CodeForm::Alpha2)
}

pub fn alpha3_to_numeric<'a>(code: impl Into<CodeInput<'a>>) -> Result<&'static str, CodeError> {
    convert(code, CodeForm::Alpha3, CodeForm::Numeric)
}

pub fn numeric_to_alpha2<'a>(code: impl Into<CodeInput<'a>>) -> Result<&'static str, CodeError> {
    convert(code, CodeForm::Numeric, CodeForm::Alpha2)
}

pub fn numeric_to_alpha3<'a>(code: impl Into<CodeInput<'a>>) -> Result<&'static str, CodeError> {
    convert(code, CodeForm::Numeric, CodeForm::Alpha3)
}

/// Normalize any code form to alpha-2.
pub fn to_alpha2<'a>(code: impl Into<CodeInput<'a>>) -> Result<&'static str, CodeError> {
    Ok(lookup(code)?.alpha2)
}

/// Normalize any code form to alpha-3.
pub fn to_alpha3<'a>(code: impl Into<CodeInput<'a>>) -> Result<&'static str, CodeError> {
    Ok(lookup(code)?.alpha3)
}

/// Normalize any code form to the zero-padded numeric code.
pub fn to_numeric<'a>(code: impl Into<CodeInput<'a>>) -> Result<&'static str, CodeError> {
    Ok(lookup(code)?.numeric)
}

/// Whether `code` (any form) names a known country. Never fails.
pub fn is_valid<'a>(code: impl Into<CodeInput<'a>>) -> bool {
    lookup(code).is_ok()
}

/// All known countries, in table order.
pub fn countries() -> impl ExactSizeIterator<Item = Country> {
    COUNTRIES.iter().map(Country::from_row)
}

/// alpha-2 -> alpha-3 for every country.
pub fn alpha2_codes() -> BTreeMap<&'static str, &'static str> {
    countries().map(|c| (c.alpha2, c.alpha3)).collect()
}

/// alpha-3 -> alpha-2 for every country.
pub fn alpha3_codes() -> BTreeMap<&'static str, &'static str> {
    countries().map(|c| (c.alpha3, c.alpha2)).collect()
}

/// numeric -> alpha-2 for every country.
pub fn numeric_codes() -> BTreeMap<&'static str, &'static str> {
    countries().map(|c| (c.numeric, c.alpha2)).collect()
}
