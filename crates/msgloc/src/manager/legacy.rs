//! Compatibility with the deprecated resource-provider extension point.
//!
//! Older hosts supplied message text through a provider object keyed by the
//! historical `*_error` resource names. When such a provider is configured,
//! resolution consults it first using [`remap_legacy_key`] and falls through
//! to normal resolution when it has nothing or fails.

use thiserror::Error;

/// An opaque failure reported by a legacy resource provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("legacy resource provider failed: {message}")]
pub struct LegacyProviderError {
    message: String,
}

impl LegacyProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A pluggable override consulted before locale resolution.
///
/// `Ok(Some(text))` wins outright. `Ok(None)` and any `Err` fall through to
/// the regular fallback chain; errors are never surfaced to the caller.
///
/// Closures with the matching signature implement this trait:
///
/// ```
/// use std::sync::Arc;
/// use msgloc::{LanguageManager, LegacyProviderError, LegacyResourceProvider};
///
/// let provider = |name: &str| -> Result<Option<String>, LegacyProviderError> {
///     Ok((name == "notnull_error").then(|| "required".to_string()))
/// };
/// let manager = LanguageManager::builder()
///     .legacy_provider(Arc::new(provider) as Arc<dyn LegacyResourceProvider>)
///     .build();
///
/// assert_eq!(manager.resolve("NotNullValidator", None), "required");
/// ```
pub trait LegacyResourceProvider: Send + Sync {
    /// Look up a resource by its historical name.
    fn resource(&self, name: &str) -> Result<Option<String>, LegacyProviderError>;
}

impl<F> LegacyResourceProvider for F
where
    F: Fn(&str) -> Result<Option<String>, LegacyProviderError> + Send + Sync,
{
    fn resource(&self, name: &str) -> Result<Option<String>, LegacyProviderError> {
        self(name)
    }
}

/// Map a validator identifier to its historical resource name.
///
/// Several validators shared one message and therefore collapse onto the same
/// name (`LengthValidator`, `MinimumLengthValidator` and
/// `MaximumLengthValidator` all become `length_error`). Unknown names are
/// returned unchanged.
pub fn remap_legacy_key(name: &str) -> &str {
    match name {
        "EmailValidator" => "email_error",
        "GreaterThanOrEqualValidator" => "greaterthanorequal_error",
        "GreaterThanValidator" => "greaterthan_error",
        "LengthValidator" | "MinimumLengthValidator" | "MaximumLengthValidator" => "length_error",
        "LessThanOrEqualValidator" => "lessthanorequal_error",
        "LessThanValidator" => "lessthan_error",
        "NotEmptyValidator" => "notempty_error",
        "NotEqualValidator" => "notequal_error",
        "NotNullValidator" => "notnull_error",
        "PredicateValidator" | "AsyncPredicateValidator" => "predicate_error",
        "RegularExpressionValidator" => "regex_error",
        "EqualValidator" => "equal_error",
        "ExactLengthValidator" => "exact_length_error",
        "InclusiveBetweenValidator" => "inclusivebetween_error",
        "ExclusiveBetweenValidator" => "exclusivebetween_error",
        "CreditCardValidator" => "CreditCardError",
        "ScalePrecisionValidator" => "scale_precision_error",
        "EmptyValidator" => "empty_error",
        "NullValidator" => "null_error",
        "EnumValidator" => "enum_error",
        other => other,
    }
}
