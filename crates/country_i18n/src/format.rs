use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use country_codes::{to_alpha2, CodeInput};

use crate::entry::NameEntry;
use crate::store::LocaleStore;
use crate::I18nError;

/// Which names of a country to return.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Select {
    /// The official name only.
    #[default]
    Official,
    /// Official name followed by all aliases.
    All,
    /// Aliases only.
    Alias,
}

impl Select {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::All => "all",
            Self::Alias => "alias",
        }
    }
}

impl FromStr for Select {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "official" => Ok(Self::Official),
            "all" => Ok(Self::All),
            "alias" => Ok(Self::Alias),
            _ => Err(I18nError::InvalidSelect(s.to_string())),
        }
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A country name shaped by a [`Select`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CountryName {
    Official(String),
    All(Vec<String>),
    Alias(Vec<String>),
}

impl CountryName {
    pub(crate) fn shape(entry: &NameEntry, select: Select) -> Self {
        match select {
            Select::Official => Self::Official(entry.official().to_string()),
            Select::All => Self::All(entry.to_vec()),
            Select::Alias => Self::Alias(entry.aliases().to_vec()),
        }
    }

    pub fn select(&self) -> Select {
        match self {
            Self::Official(_) => Select::Official,
            Self::All(_) => Select::All,
            Self::Alias(_) => Select::Alias,
        }
    }

    /// The official name, if this is an [`CountryName::Official`].
    pub fn as_official(&self) -> Option<&str> {
        match self {
            Self::Official(s) => Some(s),
            _ => None,
        }
    }

    /// The names as a list; an official name becomes a one-element list.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Official(s) => vec![s],
            Self::All(v) | Self::Alias(v) => v,
        }
    }
}

impl fmt::Display for CountryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Official(s) => f.write_str(s),
            Self::All(v) | Self::Alias(v) => f.write_str(&v.join(", ")),
        }
    }
}

impl LocaleStore {
    fn with_entry<'a, R>(
        &self,
        code: impl Into<CodeInput<'a>>,
        lang: &str,
        f: impl FnOnce(&NameEntry) -> R,
    ) -> Result<R, I18nError> {
        let alpha2 = to_alpha2(code)?;
        self.with_locale(lang, |tag, table| match table.get(alpha2) {
            Some(entry) => Ok(f(entry)),
            None => Err(I18nError::MissingName {
                locale: tag.to_string(),
                alpha2: alpha2.to_string(),
            }),
        })?
    }

    /// Name(s) of the country `code` (any code form) in `lang`.
    pub fn get_name<'a>(
        &self,
        code: impl Into<CodeInput<'a>>,
        lang: &str,
        select: Select,
    ) -> Result<CountryName, I18nError> {
        self.with_entry(code, lang, |entry| CountryName::shape(entry, select))
    }

    pub fn official_name<'a>(
        &self,
        code: impl Into<CodeInput<'a>>,
        lang: &str,
    ) -> Result<String, I18nError> {
        self.with_entry(code, lang, |entry| entry.official().to_string())
    }

    pub fn all_names<'a>(
        &self,
        code: impl Into<CodeInput<'a>>,
        lang: &str,
    ) -> Result<Vec<String>, I18nError> {
        self.with_entry(code, lang, NameEntry::to_vec)
    }

    pub fn aliases<'a>(
        &self,
        code: impl Into<CodeInput<'a>>,
        lang: &str,
    ) -> Result<Vec<String>, I18nError> {
        self.with_entry(code, lang, |entry| entry.aliases().to_vec())
    }

    /// Shaped names of every country in the locale `lang` resolves to.
    pub fn get_names(
        &self,
        lang: &str,
        select: Select,
    ) -> Result<BTreeMap<String, CountryName>, I18nError> {
        self.with_locale(lang, |_, table| {
            table
                .iter()
                .map(|(alpha2, entry)| (alpha2.clone(), CountryName::shape(entry, select)))
                .collect()
        })
    }
}
