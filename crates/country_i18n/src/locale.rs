/// Normalize locale tags to the form used as store keys.
///
/// - Trims whitespace.
/// - Converts `_` to `-` (`en_US` -> `en-us`).
/// - Lowercases.
pub fn normalize_locale(s: &str) -> String {
    s.trim().replace('_', "-").to_lowercase()
}

/// Create the lookup chain for a locale tag.
///
/// Example:
/// - `en-US` -> `["en-us", "en"]`
/// - `de` -> `["de"]`
///
/// There is no hard fallback language; an empty tag gives an empty chain.
pub fn locale_fallback_chain(locale: &str) -> Vec<String> {
    let l = normalize_locale(locale);
    let mut chain = Vec::new();

    if !l.is_empty() {
        chain.push(l.clone());
        if let Some(lang) = l.split('-').next() {
            if !lang.is_empty() && lang != l {
                chain.push(lang.to_string());
            }
        }
    }
    chain
}
