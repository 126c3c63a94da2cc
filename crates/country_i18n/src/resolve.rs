use country_codes::alpha2_to_alpha3;
use tracing::trace;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::store::{CountryNames, LocaleStore};
use crate::I18nError;

/// Fold a country name to its comparison key.
///
/// Fixed rule set, applied in order:
/// 1. Unicode canonical decomposition (NFD)
/// 2. drop combining marks
/// 3. lowercase
/// 4. keep alphanumeric characters only
///
/// `"Côte d'Ivoire"` and `"cote divoire"` both fold to `"cotedivoire"`.
pub fn normalize_name(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MatchStage {
    Exact,
    CaseInsensitive,
    Normalized,
}

/// First alpha-2 (ascending) with a name matching `name` at the earliest
/// stage. Inside an entry the official name is tried before aliases.
fn find_alpha2<'t>(
    table: &'t CountryNames,
    name: &str,
    fuzzy: bool,
) -> Option<(&'t str, MatchStage)> {
    let first_match = |matches: &dyn Fn(&str) -> bool| {
        table
            .iter()
            .find(|(_, entry)| entry.names().any(|n| matches(n)))
            .map(|(alpha2, _)| alpha2.as_str())
    };

    if let Some(alpha2) = first_match(&|n: &str| n == name) {
        return Some((alpha2, MatchStage::Exact));
    }

    let lower = name.to_lowercase();
    if let Some(alpha2) = first_match(&|n: &str| n.to_lowercase() == lower) {
        return Some((alpha2, MatchStage::CaseInsensitive));
    }

    if !fuzzy {
        return None;
    }
    let key = normalize_name(name);
    if key.is_empty() {
        return None;
    }
    first_match(&|n: &str| normalize_name(n) == key)
        .map(|alpha2| (alpha2, MatchStage::Normalized))
}

impl LocaleStore {
    fn resolve_alpha2(&self, name: &str, lang: &str, fuzzy: bool) -> Result<String, I18nError> {
        self.with_locale(lang, |tag, table| match find_alpha2(table, name, fuzzy) {
            Some((alpha2, stage)) => {
                trace!(query = name, locale = tag, alpha2, ?stage, "resolved country name");
                Ok(alpha2.to_string())
            }
            None => Err(I18nError::NameNotFound {
                name: name.to_string(),
                locale: tag.to_string(),
            }),
        })?
    }

    fn resolve_alpha3(&self, name: &str, lang: &str, fuzzy: bool) -> Result<String, I18nError> {
        let alpha2 = self.resolve_alpha2(name, lang, fuzzy)?;
        Ok(alpha2_to_alpha3(&alpha2)?.to_string())
    }

    /// Resolve a country name to its alpha-2 code: exact, then
    /// case-insensitive, then diacritic/punctuation-insensitive.
    pub fn get_alpha2_code(&self, name: &str, lang: &str) -> Result<String, I18nError> {
        self.resolve_alpha2(name, lang, true)
    }

    /// Like [`LocaleStore::get_alpha2_code`] without the normalized stage.
    pub fn get_simple_alpha2_code(&self, name: &str, lang: &str) -> Result<String, I18nError> {
        self.resolve_alpha2(name, lang, false)
    }

    pub fn get_alpha3_code(&self, name: &str, lang: &str) -> Result<String, I18nError> {
        self.resolve_alpha3(name, lang, true)
    }

    pub fn get_simple_alpha3_code(&self, name: &str, lang: &str) -> Result<String, I18nError> {
        self.resolve_alpha3(name, lang, false)
    }
}
