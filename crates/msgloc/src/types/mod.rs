mod locale;
mod translation_set;

pub use locale::Locale;
pub use translation_set::TranslationSet;
