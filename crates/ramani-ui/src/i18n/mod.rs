//! Lightweight JSON-backed translations with per-locale bundles.

use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Supported locale codes for the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// Arabic.
    Ar,
    /// English.
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
    /// Swahili.
    Sw,
}

impl LocaleCode {
    /// All supported locales in display order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::Ar, Self::En, Self::Es, Self::Fr, Self::Sw]
    }

    /// RFC 5646 primary subtag for the locale.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::Sw => "sw",
        }
    }

    /// Native-language label for selector controls.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ar => "العربية",
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::Sw => "Kiswahili",
        }
    }

    /// Map an arbitrary browser language tag to a supported locale.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.to_ascii_lowercase();
        let base = lowered.split('-').next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
    rtl: bool,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale.
    ///
    /// The bundle gracefully degrades to English strings when a key is
    /// missing from the locale's catalog.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let raw = raw_locale(locale);
        let tree: Value = serde_json::from_str(raw).unwrap_or(Value::Null);
        let rtl = tree
            .get("meta")
            .and_then(|meta| meta.get("rtl"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        Self { locale, tree, rtl }
    }

    /// Resolve a dotted path (`section.key`) with English fallback and
    /// caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&EN_FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }

    /// Resolve a translation key, yielding the key itself when no catalog
    /// carries it. This is the contract metadata synchronization relies on.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.text(key, key)
    }

    /// Whether the locale prefers RTL layout.
    #[must_use]
    pub const fn rtl(&self) -> bool {
        self.rtl
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::Ar => include_str!("../../i18n/ar.json"),
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Es => include_str!("../../i18n/es.json"),
        LocaleCode::Fr => include_str!("../../i18n/fr.json"),
        LocaleCode::Sw => include_str!("../../i18n/sw.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::Fr);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn translate_echoes_unknown_keys() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(bundle.translate("no.such.key"), "no.such.key");
    }

    #[test]
    fn rtl_flag_respects_meta() {
        assert!(TranslationBundle::new(LocaleCode::Ar).rtl());
        assert!(!TranslationBundle::new(LocaleCode::En).rtl());
    }

    #[test]
    fn bundles_load_all_locales() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            assert_eq!(bundle.locale, locale);
            assert!(!bundle.text("nav.feed", "Feed").is_empty());
        }
    }

    #[test]
    fn lang_tags_map_to_base_locale() {
        assert_eq!(LocaleCode::from_lang_tag("fr-CA"), Some(LocaleCode::Fr));
        assert_eq!(LocaleCode::from_lang_tag("AR"), Some(LocaleCode::Ar));
        assert_eq!(LocaleCode::from_lang_tag("pt-BR"), None);
    }
}
