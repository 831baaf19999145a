use std::fmt;
use std::str::FromStr;

use icu_locale_core::{LanguageIdentifier, langid};
use serde::{Deserialize, Serialize};

use crate::manager::LanguageError;

/// A culture identifier such as `en`, `fr-FR`, or `zh-Hant-TW`.
///
/// Codes are canonicalized on parse (`pt_br` becomes `pt-BR`). A locale is
/// *neutral* when it carries only a language subtag; every other locale has a
/// neutral parent obtained by dropping script, region, and variants.
///
/// # Example
///
/// ```
/// use msgloc::Locale;
///
/// let locale = Locale::parse("pt_BR").unwrap();
/// assert_eq!(locale.code(), "pt-BR");
/// assert!(!locale.is_neutral());
/// assert_eq!(locale.parent_code(), "pt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    id: LanguageIdentifier,
    code: String,
}

impl Locale {
    /// Parse a locale identifier.
    ///
    /// Accepts `-` or `_` separators and ignores POSIX codeset and modifier
    /// suffixes, so `de_DE.UTF-8@euro` parses as `de-DE`.
    pub fn parse(input: &str) -> Result<Self, LanguageError> {
        let bare = input.trim().split(['.', '@']).next().unwrap_or_default();
        if bare.is_empty() {
            return Err(LanguageError::InvalidLocale {
                input: input.to_string(),
                reason: "locale identifier is empty".to_string(),
            });
        }

        let id = LanguageIdentifier::try_from_str(&bare.replace('_', "-")).map_err(|e| {
            LanguageError::InvalidLocale {
                input: input.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self::from_identifier(id))
    }

    /// The built-in default locale, `en`.
    pub fn english() -> Self {
        Self::from_identifier(langid!("en"))
    }

    /// Wrap an already-parsed ICU language identifier.
    pub fn from_identifier(id: LanguageIdentifier) -> Self {
        let code = id.to_string();
        Self { id, code }
    }

    /// The canonical locale code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// True when the locale has no script, region, or variant subtag.
    pub fn is_neutral(&self) -> bool {
        self.id.script.is_none() && self.id.region.is_none() && self.id.variants.is_empty()
    }

    /// The neutral parent code (`pt-BR` -> `pt`). A neutral locale is its own parent.
    ///
    /// Script and variant subtags are dropped along with the region, so
    /// `zh-Hant-TW` yields `zh` rather than `zh-Hant`. Resolution only takes
    /// this single hop before the fallback set.
    pub fn parent_code(&self) -> &str {
        if self.is_neutral() {
            &self.code
        } else {
            self.id.language.as_str()
        }
    }

    /// The underlying ICU identifier.
    pub fn identifier(&self) -> &LanguageIdentifier {
        &self.id
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl FromStr for Locale {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LanguageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.code
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
