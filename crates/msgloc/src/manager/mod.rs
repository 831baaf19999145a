//! The translation registry and its resolution algorithm.
//!
//! [`LanguageManager`] owns the locale -> [`TranslationSet`](crate::TranslationSet)
//! map and the fallback set. [`SharedLanguageManager`] wraps it for hosts that
//! reconfigure while other threads resolve.

mod error;
mod language_manager;
mod legacy;
mod shared;

pub use error::{LanguageError, LoadError};
pub use language_manager::{LanguageManager, LanguageManagerBuilder};
pub use legacy::{LegacyProviderError, LegacyResourceProvider, remap_legacy_key};
pub use shared::SharedLanguageManager;
