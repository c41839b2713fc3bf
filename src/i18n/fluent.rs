// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const FALLBACK_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Builds the bundle set from the embedded `.ftl` files and picks the
    /// starting locale (CLI override > config file > OS locale > fallback).
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                let res =
                    FluentResource::try_new(source).expect("embedded FTL file failed to parse");
                let mut bundle = FluentBundle::new(vec![locale.clone()]);
                bundle
                    .add_resource(res)
                    .expect("embedded FTL resource failed to load");
                bundles.insert(locale.clone(), bundle);
                available_locales.push(locale);
            }
        }

        let fallback: LanguageIdentifier = FALLBACK_LOCALE.parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(fallback);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Looks up a message by key in the current locale's bundle.
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, None, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {key}")
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.language.clone(),
        sys_locale::get_locale(),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en_us() -> LanguageIdentifier {
        "en-US".parse().unwrap()
    }

    #[test]
    fn cli_language_wins_over_config() {
        let config = Config {
            language: Some("fr".to_string()),
            ..Config::default()
        };
        let available = vec![en_us(), "fr".parse().unwrap()];
        let resolved = resolve_locale(Some("en-US".to_string()), &config, &available);
        assert_eq!(resolved, Some(en_us()));
    }

    #[test]
    fn config_language_used_when_no_cli_override() {
        let config = Config {
            language: Some("en-US".to_string()),
            ..Config::default()
        };
        let available = vec![en_us()];
        let resolved = resolve_locale(None, &config, &available);
        assert_eq!(resolved, Some(en_us()));
    }

    #[test]
    fn unavailable_language_is_skipped() {
        let config = Config {
            language: Some("xx-XX".to_string()),
            ..Config::default()
        };
        let available = vec![en_us()];
        // Resolution may still land on the OS locale if it happens to be
        // available; it must never land on the unavailable config value.
        let resolved = resolve_locale(None, &config, &available);
        assert_ne!(resolved, Some("xx-XX".parse().unwrap()));
    }

    #[test]
    fn embedded_bundle_translates_known_keys() {
        let i18n = I18n::default();
        assert_eq!(i18n.current_locale().to_string(), "en-US");
        let title = i18n.tr("app-window-title");
        assert!(!title.starts_with("MISSING:"));
    }

    #[test]
    fn missing_key_is_flagged() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }
}
