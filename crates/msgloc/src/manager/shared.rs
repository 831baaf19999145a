//! Thread-safe handle for reconfiguring a registry while it is being read.

use std::sync::{Arc, PoisonError, RwLock};

use crate::manager::{LanguageError, LanguageManager};
use crate::types::{Locale, TranslationSet};

/// A cloneable, lock-protected [`LanguageManager`].
///
/// Every clone refers to the same registry. Reads take a shared lock and
/// writes an exclusive one, so a reconfiguration is never observed half-done.
///
/// # Example
///
/// ```
/// use msgloc::{LanguageManager, Locale, SharedLanguageManager, translations};
///
/// let shared = SharedLanguageManager::new(LanguageManager::new());
/// let reader = shared.clone();
///
/// shared
///     .add_language(translations!("eo"; "NotNullValidator" => "ne estu malplena"))
///     .unwrap();
///
/// let esperanto = Locale::parse("eo").unwrap();
/// assert_eq!(reader.resolve("NotNullValidator", Some(&esperanto)), "ne estu malplena");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedLanguageManager {
    inner: Arc<RwLock<LanguageManager>>,
}

impl SharedLanguageManager {
    pub fn new(manager: LanguageManager) -> Self {
        Self {
            inner: Arc::new(RwLock::new(manager)),
        }
    }

    /// Provides read access to the registry.
    ///
    /// A writer that panicked cannot leave the registry half-updated, since
    /// each mutation is a single assignment, so a poisoned lock is still read.
    pub fn with_manager<T>(&self, f: impl FnOnce(&LanguageManager) -> T) -> T {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Provides write access to the registry.
    pub fn with_manager_mut<T>(&self, f: impl FnOnce(&mut LanguageManager) -> T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn resolve(&self, key: &str, locale: Option<&Locale>) -> String {
        self.with_manager(|manager| manager.resolve(key, locale))
    }

    pub fn supported_languages(&self) -> Vec<Arc<TranslationSet>> {
        self.with_manager(LanguageManager::supported_languages)
    }

    pub fn add_language(&self, language: TranslationSet) -> Result<(), LanguageError> {
        self.with_manager_mut(|manager| manager.add_language(language))
    }

    pub fn clear(&self) {
        self.with_manager_mut(LanguageManager::clear);
    }

    pub fn set_fallback_language(&self, language: TranslationSet) -> Result<(), LanguageError> {
        self.with_manager_mut(|manager| manager.set_fallback_language(language))
    }

    pub fn set_fallback_locale(&self, locale: &Locale) -> Result<(), LanguageError> {
        self.with_manager_mut(|manager| manager.set_fallback_locale(locale))
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.with_manager_mut(|manager| manager.set_enabled(enabled));
    }
}

impl From<LanguageManager> for SharedLanguageManager {
    fn from(manager: LanguageManager) -> Self {
        Self::new(manager)
    }
}
