use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::I18nError;
use crate::locale::normalize_locale;

const MAX_COUNTRY_ENTRIES: usize = 10_000;
const MAX_NAME_BYTES: usize = 1024;

/// The names of one country in one locale.
///
/// A list holds the official name first, followed by aliases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameEntry {
    Single(String),
    List(Vec<String>),
}

impl NameEntry {
    pub fn official(&self) -> &str {
        match self {
            Self::Single(s) => s,
            Self::List(v) => v.first().map(String::as_str).unwrap_or_default(),
        }
    }

    pub fn aliases(&self) -> &[String] {
        match self {
            Self::Single(_) => &[],
            Self::List(v) => v.get(1..).unwrap_or_default(),
        }
    }

    /// Official name, then aliases in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let (first, rest): (&str, &[String]) = match self {
            Self::Single(s) => (s.as_str(), &[]),
            Self::List(v) => match v.split_first() {
                Some((first, rest)) => (first.as_str(), rest),
                None => ("", &[]),
            },
        };
        // A hand-built `List(vec![])` never went through registration.
        std::iter::once(first)
            .chain(rest.iter().map(String::as_str))
            .filter(|s| !s.is_empty())
    }

    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::Single(s) => vec![s.clone()],
            Self::List(v) => v.clone(),
        }
    }

    fn check(&self, locale: &str, alpha2: &str) -> Result<(), I18nError> {
        let names: &[String] = match self {
            Self::Single(s) => std::slice::from_ref(s),
            Self::List(v) => v,
        };
        if names.is_empty() || names.iter().any(|s| s.trim().is_empty()) {
            return Err(I18nError::EmptyName {
                locale: locale.to_string(),
                alpha2: alpha2.to_string(),
            });
        }
        if names.iter().any(|s| s.len() > MAX_NAME_BYTES) {
            return Err(I18nError::NameTooLong {
                locale: locale.to_string(),
                alpha2: alpha2.to_string(),
                max: MAX_NAME_BYTES,
            });
        }
        Ok(())
    }
}

impl From<&str> for NameEntry {
    fn from(v: &str) -> Self {
        Self::Single(v.to_string())
    }
}

impl From<String> for NameEntry {
    fn from(v: String) -> Self {
        Self::Single(v)
    }
}

impl From<Vec<String>> for NameEntry {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

impl From<Vec<&str>> for NameEntry {
    fn from(v: Vec<&str>) -> Self {
        Self::List(v.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for NameEntry {
    fn from(v: [&str; N]) -> Self {
        Self::List(v.iter().map(|s| s.to_string()).collect())
    }
}

/// A locale name table as registered by callers or loaded from a document:
///
/// ```yaml
/// locale: en
/// countries:
///   DE: Germany
///   US: [United States, United States of America, USA]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleData {
    pub locale: String,
    pub countries: BTreeMap<String, NameEntry>,
}

impl LocaleData {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            countries: BTreeMap::new(),
        }
    }

    pub fn country(mut self, alpha2: impl Into<String>, names: impl Into<NameEntry>) -> Self {
        self.countries.insert(alpha2.into(), names.into());
        self
    }

    /// Parse a YAML locale document.
    pub fn from_yaml(src: &str) -> Result<Self, I18nError> {
        serde_yaml::from_str(src).map_err(|e| I18nError::Parse(format!("yaml parse error: {e}")))
    }

    /// Parse a JSON locale document (`{"locale": "..", "countries": {..}}`).
    pub fn from_json(src: &str) -> Result<Self, I18nError> {
        serde_json::from_str(src).map_err(|e| I18nError::Parse(format!("json parse error: {e}")))
    }

    /// Check the whole document and normalize its keys.
    ///
    /// Nothing is returned unless every entry is acceptable, so a rejected
    /// document never reaches the store half-applied.
    pub(crate) fn validate(self) -> Result<ValidatedLocale, I18nError> {
        let locale = normalize_locale(&self.locale);
        if locale.is_empty() {
            return Err(I18nError::EmptyLocale);
        }
        if self.countries.is_empty() {
            return Err(I18nError::EmptyPayload(locale));
        }
        if self.countries.len() > MAX_COUNTRY_ENTRIES {
            return Err(I18nError::TooManyEntries {
                locale,
                max: MAX_COUNTRY_ENTRIES,
            });
        }

        let mut entries = Vec::with_capacity(self.countries.len());
        for (key, entry) in self.countries {
            if !is_alpha2_key(&key) {
                return Err(I18nError::InvalidCountryKey { locale, key });
            }
            let alpha2 = key.to_ascii_uppercase();
            entry.check(&locale, &alpha2)?;
            entries.push((alpha2, entry));
        }

        Ok(ValidatedLocale { locale, entries })
    }
}

fn is_alpha2_key(key: &str) -> bool {
    key.len() == 2 && key.bytes().all(|b| b.is_ascii_alphabetic())
}

/// A [`LocaleData`] that passed validation: normalized tag, uppercase keys.
#[derive(Debug)]
pub(crate) struct ValidatedLocale {
    pub(crate) locale: String,
    pub(crate) entries: Vec<(String, NameEntry)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_yaml_scalars_and_lists() {
        let src = r#"
locale: en
countries:
  DE: Germany
  US:
    - United States
    - USA
"#;
        let data = LocaleData::from_yaml(src).unwrap();
        assert_eq!(data.locale, "en");
        assert_eq!(data.countries["DE"], NameEntry::Single("Germany".to_string()));
        assert_eq!(data.countries["US"], NameEntry::from(["United States", "USA"]));
    }

    #[test]
    fn parse_json_locale_file() {
        let src = r#"{"locale": "xx", "countries": {"US": "Testland", "FR": ["Frankland", "FL"]}}"#;
        let data = LocaleData::from_json(src).unwrap();
        assert_eq!(data.countries.len(), 2);
        assert_eq!(data.countries["FR"].aliases(), ["FL".to_string()]);
    }

    #[test]
    fn yaml_requires_string_names() {
        let src = r#"
locale: en
countries:
  DE: 123
"#;
        let err = LocaleData::from_yaml(src).unwrap_err();
        assert!(matches!(err, I18nError::Parse(_)));
    }

    #[test]
    fn entry_accessors() {
        let single = NameEntry::from("Germany");
        assert_eq!(single.official(), "Germany");
        assert!(single.aliases().is_empty());
        assert_eq!(single.names().collect::<Vec<_>>(), vec!["Germany"]);

        let list = NameEntry::from(["United States", "USA", "US"]);
        assert_eq!(list.official(), "United States");
        assert_eq!(list.aliases(), ["USA".to_string(), "US".to_string()]);
        assert_eq!(list.to_vec().len(), 3);

        let unregistered = NameEntry::List(Vec::new());
        assert_eq!(unregistered.official(), "");
        assert_eq!(unregistered.names().count(), 0);
    }

    #[test]
    fn validation_normalizes_keys_and_locale() {
        let v = LocaleData::new(" PT_br ")
            .country("br", "Brasil")
            .validate()
            .unwrap();
        assert_eq!(v.locale, "pt-br");
        assert_eq!(v.entries[0].0, "BR");
    }

    #[test]
    fn validation_rejects_malformed_payloads() {
        assert_eq!(
            LocaleData::new("  ").country("US", "x").validate().unwrap_err(),
            I18nError::EmptyLocale
        );
        assert_eq!(
            LocaleData::new("xx").validate().unwrap_err(),
            I18nError::EmptyPayload("xx".to_string())
        );
        assert!(matches!(
            LocaleData::new("xx").country("USA", "x").validate(),
            Err(I18nError::InvalidCountryKey { .. })
        ));
        assert!(matches!(
            LocaleData::new("xx").country("US", Vec::<String>::new()).validate(),
            Err(I18nError::EmptyName { .. })
        ));
        assert!(matches!(
            LocaleData::new("xx").country("US", "").validate(),
            Err(I18nError::EmptyName { .. })
        ));
    }

    #[test]
    fn overlong_name_is_reported_as_too_long() {
        let long = "a".repeat(MAX_NAME_BYTES + 1);
        let err = LocaleData::new("xx")
            .country("US", ["Testland", long.as_str()])
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            I18nError::NameTooLong {
                locale: "xx".to_string(),
                alpha2: "US".to_string(),
                max: MAX_NAME_BYTES,
            }
        );
        assert!(err.is_validation());

        let at_limit = LocaleData::new("xx").country("US", "a".repeat(MAX_NAME_BYTES));
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn entry_count_is_capped() {
        let mut data = LocaleData::new("xx");
        for i in 0..=MAX_COUNTRY_ENTRIES {
            data.countries.insert(format!("K{i}"), NameEntry::from("x"));
        }
        let err = data.validate().unwrap_err();
        assert_eq!(
            err,
            I18nError::TooManyEntries {
                locale: "xx".to_string(),
                max: MAX_COUNTRY_ENTRIES,
            }
        );
        assert!(err.is_validation());
    }
}
