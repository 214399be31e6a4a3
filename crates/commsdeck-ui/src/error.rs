//! Error types for the UI layer.
use thiserror::Error;

/// Localization loading errors.
#[derive(Error, Debug)]
pub enum I18nError {
    /// Requested language tag could not be parsed.
    #[error("invalid language tag: {0}")]
    InvalidLanguage(String),

    /// No embedded resource exists for the language.
    #[error("no locale resource for language: {0}")]
    MissingResource(String),
}
