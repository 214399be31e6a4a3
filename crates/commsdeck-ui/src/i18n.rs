//! Fluent-based localization.
//!
//! Locale catalogs are `.ftl` files embedded at build time. The manager
//! negotiates the requested language against the embedded catalogs and
//! falls back to English; a missing key falls back to the raw key so the
//! UI never loses a control to a translation gap.

use fluent::{FluentArgs, FluentBundle, FluentResource};
use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

use commsdeck_core::Localize;

use crate::error::I18nError;

#[derive(RustEmbed)]
#[folder = "assets/locales"]
struct Locales;

/// Locale catalog for the running application.
pub struct LocaleManager {
    bundle: FluentBundle<FluentResource>,
    language: LanguageIdentifier,
}

impl LocaleManager {
    /// Create a manager for the requested language tag.
    ///
    /// Never fails: an unparsable tag, a failed negotiation, or a broken
    /// resource all degrade to English (or an empty catalog in the worst
    /// case, at which point lookups echo their keys).
    pub fn new(requested: &str) -> Self {
        let fallback: LanguageIdentifier = "en".parse().expect("static tag");

        let requested_id = match requested.parse::<LanguageIdentifier>() {
            Ok(id) => id,
            Err(_) => {
                tracing::warn!(requested, "invalid language tag, using fallback");
                fallback.clone()
            }
        };

        let available = Self::available_locales();
        let language = negotiate_languages(
            &[requested_id],
            &available,
            Some(&fallback),
            NegotiationStrategy::Filtering,
        )
        .first()
        .map(|id| (*id).clone())
        .unwrap_or_else(|| fallback.clone());

        match Self::from_language(&language.to_string()) {
            Ok(manager) => manager,
            Err(e) => {
                tracing::warn!(error = %e, %language, "failed to load locale, using empty catalog");
                Self {
                    bundle: Self::empty_bundle(language.clone()),
                    language,
                }
            }
        }
    }

    /// Strictly load the catalog for an exact language tag.
    pub fn from_language(lang: &str) -> Result<Self, I18nError> {
        let language: LanguageIdentifier = lang
            .parse()
            .map_err(|_| I18nError::InvalidLanguage(lang.to_string()))?;

        let file_name = format!("{language}.ftl");
        let file = Locales::get(&file_name)
            .ok_or_else(|| I18nError::MissingResource(lang.to_string()))?;
        let source = String::from_utf8_lossy(&file.data).into_owned();

        let resource = match FluentResource::try_new(source) {
            Ok(res) => res,
            Err((res, errors)) => {
                // Keep whatever parsed; a broken entry should not take the
                // whole catalog down.
                tracing::warn!(%file_name, ?errors, "locale resource parsed with errors");
                res
            }
        };

        let mut bundle = Self::empty_bundle(language.clone());
        if let Err(errors) = bundle.add_resource(resource) {
            tracing::warn!(%file_name, ?errors, "overriding entries skipped in locale resource");
        }

        Ok(Self { bundle, language })
    }

    fn empty_bundle(language: LanguageIdentifier) -> FluentBundle<FluentResource> {
        let mut bundle = FluentBundle::new(vec![language]);
        // Keep formatted output free of Unicode isolation marks; the console
        // only interpolates preformatted plain strings.
        bundle.set_use_isolating(false);
        bundle
    }

    /// Language tag the manager resolved to.
    pub fn language(&self) -> String {
        self.language.to_string()
    }

    /// Language tags with an embedded catalog.
    pub fn available_locales() -> Vec<LanguageIdentifier> {
        Locales::iter()
            .filter_map(|path| {
                path.as_ref()
                    .strip_suffix(".ftl")
                    .and_then(|tag| tag.parse().ok())
            })
            .collect()
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let message = self.bundle.get_message(key)?;
        let pattern = message.value()?;
        let mut errors = Vec::new();
        let text = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::debug!(key, ?errors, "fluent formatting errors");
        }
        Some(text.into_owned())
    }
}

impl Localize for LocaleManager {
    fn t(&self, key: &str) -> String {
        self.format(key, None).unwrap_or_else(|| {
            tracing::debug!(key, "missing translation");
            key.to_string()
        })
    }

    fn try_t(&self, key: &str) -> Option<String> {
        self.format(key, None)
    }

    fn t_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_catalog_resolves_console_keys() {
        let i18n = LocaleManager::new("en");
        assert_eq!(i18n.language(), "en");
        assert_eq!(i18n.t("console-call-shuttle"), "Call shuttle");
        assert_eq!(i18n.t("console-recall-shuttle"), "Recall shuttle");
        assert_eq!(i18n.try_t("alert-level-green").as_deref(), Some("Green"));
    }

    #[test]
    fn missing_key_falls_back_to_raw_key() {
        let i18n = LocaleManager::new("en");
        assert_eq!(i18n.t("alert-level-omega"), "alert-level-omega");
        assert_eq!(i18n.try_t("alert-level-omega"), None);
    }

    #[test]
    fn time_remaining_substitutes_argument() {
        let i18n = LocaleManager::new("en");
        let text = i18n.t_args("console-time-remaining", &[("time", "00:01:30")]);
        assert!(text.contains("00:01:30"), "got: {text}");
    }

    #[test]
    fn unknown_language_negotiates_to_english() {
        let i18n = LocaleManager::new("xx-YY");
        assert_eq!(i18n.language(), "en");
        assert_eq!(i18n.t("console-call-shuttle"), "Call shuttle");
    }

    #[test]
    fn german_catalog_is_available() {
        let i18n = LocaleManager::new("de");
        assert_eq!(i18n.language(), "de");
        assert_ne!(i18n.t("console-call-shuttle"), "console-call-shuttle");
    }

    #[test]
    fn regional_variant_negotiates_to_base_language() {
        let i18n = LocaleManager::new("de-AT");
        assert_eq!(i18n.language(), "de");
    }

    #[test]
    fn available_locales_lists_embedded_catalogs() {
        let tags: Vec<String> = LocaleManager::available_locales()
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert!(tags.contains(&"en".to_string()));
        assert!(tags.contains(&"de".to_string()));
    }

    #[test]
    fn strict_load_rejects_unknown_language() {
        assert!(matches!(
            LocaleManager::from_language("tlh"),
            Err(I18nError::MissingResource(_))
        ));
    }

    #[test]
    fn strict_load_rejects_invalid_tag() {
        assert!(matches!(
            LocaleManager::from_language("not a tag"),
            Err(I18nError::InvalidLanguage(_))
        ));
    }
}
