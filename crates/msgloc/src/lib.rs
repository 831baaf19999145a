//! Localized validation-message resolution.
//!
//! A [`LanguageManager`] owns one [`TranslationSet`] per locale code plus a
//! fallback set, and resolves message keys through the chain
//! specific locale -> neutral locale -> fallback. Missing translations resolve
//! to an empty string rather than an error.

pub mod builtin;
pub mod manager;
pub mod parser;
pub mod types;

pub use manager::{
    LanguageError, LanguageManager, LegacyProviderError, LegacyResourceProvider, LoadError,
    SharedLanguageManager, remap_legacy_key,
};
pub use parser::ParseError;
pub use types::{Locale, TranslationSet};

/// Creates a [`TranslationSet`] from a locale code and key-text pairs.
///
/// # Example
///
/// ```
/// use msgloc::translations;
///
/// let french = translations!("fr"; "notnull_error" => "ne doit pas être nul");
/// assert_eq!(french.code(), "fr");
/// assert_eq!(french.get("notnull_error"), Some("ne doit pas être nul"));
/// ```
#[macro_export]
macro_rules! translations {
    ($code:expr) => {
        $crate::TranslationSet::new($code)
    };
    ($code:expr; $($key:expr => $text:expr),+ $(,)?) => {
        {
            let mut set = $crate::TranslationSet::new($code);
            $(
                set.insert($key, $text);
            )+
            set
        }
    };
}
