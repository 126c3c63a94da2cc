//! Name tables shipped with the crate (`data/*.yaml`).

use tracing::error;

use crate::store::LocaleStore;

#[cfg(feature = "bundled")]
const BUNDLED: &[(&str, &str)] = &[
    ("de", include_str!("../data/de.yaml")),
    ("en", include_str!("../data/en.yaml")),
    ("fr", include_str!("../data/fr.yaml")),
];

#[cfg(not(feature = "bundled"))]
const BUNDLED: &[(&str, &str)] = &[];

/// Locale tags of the bundled name tables.
pub fn bundled_locales() -> impl Iterator<Item = &'static str> {
    BUNDLED.iter().map(|&(locale, _)| locale)
}

pub(crate) fn seed(store: &LocaleStore) {
    for &(locale, src) in BUNDLED {
        if let Err(e) = store.register_locale_yaml(src) {
            error!(locale, error = %e, "failed to load bundled country names");
        }
    }
}
