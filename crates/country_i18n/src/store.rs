use std::collections::{BTreeMap, HashMap};
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::bundled;
use crate::entry::{LocaleData, NameEntry};
use crate::locale::{locale_fallback_chain, normalize_locale};
use crate::I18nError;

/// alpha-2 -> names, iterated in ascending alpha-2 order.
pub(crate) type CountryNames = BTreeMap<String, NameEntry>;

/// Process-wide store behind the free-function API.
static GLOBAL_STORE: OnceLock<LocaleStore> = OnceLock::new();

/// Country name tables keyed by normalized locale tag.
///
/// Lookups take the read lock; registration takes the write lock, so a
/// registered locale is visible to every lookup that starts afterwards.
#[derive(Debug, Default)]
pub struct LocaleStore {
    locales: RwLock<HashMap<String, CountryNames>>,
}

impl LocaleStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with the bundled name tables (feature `bundled`).
    pub fn with_bundled() -> Self {
        let store = Self::new();
        bundled::seed(&store);
        store
    }

    /// The process-wide store, seeded with the bundled tables on first use.
    pub fn global() -> &'static LocaleStore {
        GLOBAL_STORE.get_or_init(Self::with_bundled)
    }

    /// Merge a locale name table into the store.
    ///
    /// New alpha-2 keys are added; existing keys are replaced wholesale.
    /// Entries for codes not in `data` are kept. On error nothing changes.
    pub fn register_locale(&self, data: LocaleData) -> Result<(), I18nError> {
        let validated = data.validate()?;
        let added = validated.entries.len();

        let mut locales = self.write();
        let table = locales.entry(validated.locale.clone()).or_default();
        let mut replaced = 0usize;
        for (alpha2, entry) in validated.entries {
            if table.insert(alpha2, entry).is_some() {
                replaced += 1;
            }
        }
        debug!(
            locale = %validated.locale,
            entries = added,
            replaced,
            total = table.len(),
            "LocaleStore::register_locale"
        );
        Ok(())
    }

    /// Parse and register a YAML locale document.
    pub fn register_locale_yaml(&self, src: &str) -> Result<(), I18nError> {
        self.register_locale(LocaleData::from_yaml(src)?)
    }

    /// Parse and register a JSON locale document.
    pub fn register_locale_json(&self, src: &str) -> Result<(), I18nError> {
        self.register_locale(LocaleData::from_json(src)?)
    }

    /// Sorted list of registered locale tags.
    pub fn langs(&self) -> Vec<String> {
        let mut langs: Vec<String> = self.read().keys().cloned().collect();
        langs.sort_unstable();
        langs
    }

    /// Whether `lang` (or its base language) has a name table.
    pub fn has_locale(&self, lang: &str) -> bool {
        self.with_locale(lang, |_, _| ()).is_ok()
    }

    /// Run `f` against the name table `lang` resolves to, following the
    /// fallback chain (exact tag, then base language).
    pub(crate) fn with_locale<R>(
        &self,
        lang: &str,
        f: impl FnOnce(&str, &CountryNames) -> R,
    ) -> Result<R, I18nError> {
        let requested = normalize_locale(lang);
        let locales = self.read();
        for tag in locale_fallback_chain(&requested) {
            if let Some(table) = locales.get(&tag) {
                if tag != requested {
                    debug!(requested = %lang, resolved = %tag, "locale fallback");
                }
                return Ok(f(&tag, table));
            }
        }
        Err(I18nError::UnknownLocale(lang.to_string()))
    }

    // The maps are only mutated through single inserts, so a panic while a
    // guard is held cannot leave them inconsistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CountryNames>> {
        self.locales.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CountryNames>> {
        self.locales.write().unwrap_or_else(PoisonError::into_inner)
    }
}
