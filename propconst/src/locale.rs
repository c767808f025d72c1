//! Resource-bundle locale markers.
//!
//! Localized variants of a bundle share a base name and differ by a trailing
//! marker such as `_de`, `_de_DE`, `_de_Latn_DE` or `_de_DE_POSIX`. All of
//! them must map to the same generated type.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // language, optional script, optional country, variant only after a country
    static ref LOCALE_SUFFIX_REGEX: Regex =
        Regex::new(r"_[a-z]{2}(?:_[A-Z][a-z]{3})?(?:_[A-Z]{2}(?:_\w+)?)?$").unwrap();
}

/// Removes a trailing locale marker from `basename`.
///
/// The longest matching marker is removed once. A name that would become
/// empty is returned unchanged.
///
/// ```rust
/// use propconst::locale::strip_locale_suffix;
///
/// assert_eq!(strip_locale_suffix("msgs_en_US"), "msgs");
/// assert_eq!(strip_locale_suffix("msgs"), "msgs");
/// ```
pub fn strip_locale_suffix(basename: &str) -> &str {
    match LOCALE_SUFFIX_REGEX.find(basename) {
        Some(marker) if marker.start() > 0 => &basename[..marker.start()],
        _ => basename,
    }
}
