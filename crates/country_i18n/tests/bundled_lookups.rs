//! Lookups against the bundled name tables through the public API.
#![cfg(feature = "bundled")]

use country_i18n::{
    countries, get_alpha2_code, get_alpha3_code, get_name, get_names, get_simple_alpha2_code,
    get_simple_alpha3_code, langs, normalize_name, register_locale, CountryName, ErrorKind,
    LocaleData, LocaleStore, Select,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn official_all_and_alias_names() {
    assert_eq!(
        get_name("US", "en", Select::Official).unwrap(),
        CountryName::Official("United States".to_string())
    );

    let all = get_name("US", "en", Select::All).unwrap().into_vec();
    assert_eq!(all[0], "United States");
    assert!(all.contains(&"United States of America".to_string()));

    let aliases = get_name("US", "en", Select::Alias).unwrap().into_vec();
    assert!(!aliases.contains(&"United States".to_string()));
    assert_eq!(aliases.len(), all.len() - 1);
}

#[test]
fn any_code_form_and_case() {
    let store = LocaleStore::with_bundled();
    assert_eq!(store.official_name("us", "EN").unwrap(), "United States");
    assert_eq!(store.official_name("deu", "de").unwrap(), "Deutschland");
    assert_eq!(store.official_name(250, "fr").unwrap(), "France");
    assert_eq!(store.official_name("036", "en").unwrap(), "Australia");
    assert_eq!(store.official_name("DE", "en-GB").unwrap(), "Germany");
}

#[test]
fn name_to_code() {
    assert_eq!(get_alpha2_code("United States", "en").unwrap(), "US");
    assert_eq!(get_alpha2_code("united states", "en").unwrap(), "US");
    assert_eq!(get_simple_alpha2_code("united states", "en").unwrap(), "US");
    assert_eq!(get_alpha3_code("Deutschland", "de").unwrap(), "DEU");
    assert_eq!(get_simple_alpha3_code("Allemagne", "fr").unwrap(), "DEU");
}

#[test]
fn mangled_names_need_the_fuzzy_variant() {
    assert_eq!(get_alpha2_code("Cote d Ivoire", "en").unwrap(), "CI");
    assert_eq!(get_alpha3_code("oesterreich", "de").unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(get_alpha3_code("Osterreich", "de").unwrap(), "AUT");
    assert_eq!(get_alpha2_code("etats unis", "fr").unwrap(), "US");

    let err = get_simple_alpha2_code("Cote d Ivoire", "en").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    let err = get_simple_alpha3_code("etats unis", "fr").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn every_official_name_resolves_back() {
    let store = LocaleStore::with_bundled();
    for lang in store.langs() {
        for c in countries() {
            let name = store.official_name(c.alpha2, &lang).unwrap();
            assert_eq!(store.get_simple_alpha2_code(&name, &lang).unwrap(), c.alpha2);
            assert_eq!(store.get_alpha3_code(&name, &lang).unwrap(), c.alpha3);
        }
    }
}

#[test]
fn registered_locale_is_visible_and_merged() {
    register_locale(LocaleData::new("xx-it").country("US", "Testland")).unwrap();
    assert_eq!(get_name("US", "xx-it", Select::Official).unwrap().to_string(), "Testland");
    assert!(langs().contains(&"xx-it".to_string()));

    register_locale(LocaleData::new("xx-it").country("FR", "Frankland")).unwrap();
    assert_eq!(get_name("US", "xx-it", Select::Official).unwrap().to_string(), "Testland");
    assert_eq!(get_alpha2_code("frankland", "xx-it").unwrap(), "FR");

    let names = get_names("xx-it", Select::All).unwrap();
    assert_eq!(names.keys().collect::<Vec<_>>(), vec!["FR", "US"]);
}

#[test]
fn registration_overrides_a_bundled_entry_only() {
    let store = LocaleStore::with_bundled();
    store
        .register_locale_json(r#"{"locale": "en", "countries": {"DE": ["Germany (override)"]}}"#)
        .unwrap();
    assert_eq!(store.official_name("DE", "en").unwrap(), "Germany (override)");
    assert_eq!(store.official_name("FR", "en").unwrap(), "France");
    assert_eq!(store.get_names("en", Select::Official).unwrap().len(), countries().len());
}

#[test]
fn registration_errors_are_validation_errors() {
    let store = LocaleStore::with_bundled();
    let err = store
        .register_locale(LocaleData::new("").country("US", "x"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = store
        .register_locale_yaml("locale: en\ncountries:\n  US: []\n")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(store.official_name("US", "en").unwrap(), "United States");
}

#[test]
fn unknown_locale_and_code() {
    let kind = |code: &str, lang: &str| get_name(code, lang, Select::Official).unwrap_err().kind();
    assert_eq!(kind("US", "tlh"), ErrorKind::NotFound);
    assert_eq!(kind("QQ", "en"), ErrorKind::NotFound);
    assert_eq!(kind("QQQQQ", "en"), ErrorKind::Validation);
    assert_eq!(get_names("tlh", Select::Official).unwrap_err().kind(), ErrorKind::NotFound);
}

proptest! {
    #[test]
    fn normalize_name_is_idempotent(s in "\\PC{0,24}") {
        let once = normalize_name(&s);
        prop_assert_eq!(normalize_name(&once), once);
    }

    #[test]
    fn resolution_never_panics(s in "\\PC{0,24}") {
        let store = LocaleStore::global();
        let simple = store.get_simple_alpha2_code(&s, "en");
        let fuzzy = store.get_alpha2_code(&s, "en");
        if let Ok(code) = simple {
            prop_assert_eq!(fuzzy.unwrap(), code);
        }
    }
}
