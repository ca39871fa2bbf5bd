//! Persistence and environment helpers for the app shell.

use crate::config::DEPLOYMENT_ID;
use crate::core::session::{LANGUAGE_KEY, ONBOARDING_DONE_KEY, OnboardingState, SessionNamespace};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

pub(crate) fn namespace() -> SessionNamespace {
    SessionNamespace::new(DEPLOYMENT_ID)
}

pub(crate) fn raw_onboarding(namespace: &SessionNamespace) -> Option<String> {
    raw_get(&namespace.key(ONBOARDING_DONE_KEY))
}

pub(crate) fn persist_onboarding(namespace: &SessionNamespace, state: OnboardingState) {
    let key = namespace.key(ONBOARDING_DONE_KEY);
    if let Err(err) = LocalStorage::set(&key, state.is_done()) {
        log_storage_error("set", &key, &err.to_string());
    }
}

pub(crate) fn load_locale(namespace: &SessionNamespace) -> LocaleCode {
    if let Some(tag) = raw_get(&namespace.key(LANGUAGE_KEY)) {
        if let Some(locale) = LocaleCode::from_lang_tag(&tag) {
            return locale;
        }
    }
    if let Some(tag) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&tag) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(namespace: &SessionNamespace, locale: LocaleCode) {
    let key = namespace.key(LANGUAGE_KEY);
    // Stored as the bare language tag, not a JSON string, so other
    // deployments' tooling can read it as-is.
    if let Err(err) = LocalStorage::raw().set_item(&key, locale.code()) {
        log_storage_error("set", &key, &format!("{err:?}"));
    }
}

fn raw_get(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key.to_string(), detail.to_string());
}
