//! Localized country names.
//!
//! Goals:
//! - Country code (alpha-2, alpha-3 or numeric) to localized name(s)
//! - Localized, possibly misspelled name back to a code
//! - Runtime registration of name tables that extend or override the
//!   bundled ones
//!
//! Name tables live in a [`LocaleStore`]. Create one per use site, or use
//! the free functions below, which share [`LocaleStore::global`].
//!
//! ```rust
//! use country_i18n::{get_alpha2_code, get_name, register_locale, LocaleData, Select};
//!
//! assert_eq!(get_name("DE", "en", Select::Official).unwrap().to_string(), "Germany");
//! assert_eq!(get_alpha2_code("cote d'ivoire", "en").unwrap(), "CI");
//!
//! register_locale(LocaleData::new("xx").country("US", "Testland")).unwrap();
//! assert_eq!(get_name("USA", "xx", Select::Official).unwrap().to_string(), "Testland");
//! ```

mod bundled;
mod entry;
mod error;
mod format;
mod locale;
mod resolve;
mod store;

use std::collections::BTreeMap;

pub use bundled::bundled_locales;
pub use entry::{LocaleData, NameEntry};
pub use error::I18nError;
pub use format::{CountryName, Select};
pub use locale::{locale_fallback_chain, normalize_locale};
pub use resolve::normalize_name;
pub use store::LocaleStore;

pub use country_codes::{
    alpha2_codes, alpha2_to_alpha3, alpha2_to_numeric, alpha3_codes, alpha3_to_alpha2,
    alpha3_to_numeric, countries, is_valid, numeric_codes, numeric_to_alpha2, numeric_to_alpha3,
    to_alpha2, to_alpha3, to_numeric, CodeError, CodeInput, Country, ErrorKind,
};

/// Register a name table with the global store.
pub fn register_locale(data: LocaleData) -> Result<(), I18nError> {
    LocaleStore::global().register_locale(data)
}

/// Name(s) of a country from the global store.
pub fn get_name<'a>(
    code: impl Into<CodeInput<'a>>,
    lang: &str,
    select: Select,
) -> Result<CountryName, I18nError> {
    LocaleStore::global().get_name(code, lang, select)
}

/// Names of every country in a locale from the global store.
pub fn get_names(lang: &str, select: Select) -> Result<BTreeMap<String, CountryName>, I18nError> {
    LocaleStore::global().get_names(lang, select)
}

pub fn get_alpha2_code(name: &str, lang: &str) -> Result<String, I18nError> {
    LocaleStore::global().get_alpha2_code(name, lang)
}

pub fn get_simple_alpha2_code(name: &str, lang: &str) -> Result<String, I18nError> {
    LocaleStore::global().get_simple_alpha2_code(name, lang)
}

pub fn get_alpha3_code(name: &str, lang: &str) -> Result<String, I18nError> {
    LocaleStore::global().get_alpha3_code(name, lang)
}

pub fn get_simple_alpha3_code(name: &str, lang: &str) -> Result<String, I18nError> {
    LocaleStore::global().get_simple_alpha3_code(name, lang)
}

/// Locale tags registered with the global store.
pub fn langs() -> Vec<String> {
    LocaleStore::global().langs()
}
