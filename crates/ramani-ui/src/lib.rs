#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Ramani web client root shell.
//! This crate holds the Yew front-end entrypoint plus the route metadata,
//! session bootstrap and locale machinery it is built on.

pub mod config;
pub mod core;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::meta::{RouteMeta, TagStore, plan_route_meta};
    use crate::core::session::{OnboardingState, SessionNamespace};
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn translation_fallbacks_work() {
        let bundle = TranslationBundle::new(LocaleCode::Fr);
        assert_eq!(bundle.text("nav.feed", "Feed"), "Fil");
        assert_eq!(bundle.text("nav.missing_key", "Default"), "Default");
    }

    #[test]
    fn rtl_flag_honours_locale_metadata() {
        assert!(TranslationBundle::new(LocaleCode::Ar).rtl());
        assert!(!TranslationBundle::new(LocaleCode::En).rtl());
    }

    #[test]
    fn bare_route_still_yields_card_and_url() {
        let plan = plan_route_meta(&RouteMeta::default(), "https://ramani.example/feed", |k| {
            k.to_string()
        });
        let mut store = TagStore::new();
        store.apply(&plan);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn onboarding_flag_round_trips_through_namespace() {
        let ns = SessionNamespace::new("ramani");
        assert_eq!(ns.key("is_onboarding_done"), "ramani_is_onboarding_done");
        assert!(OnboardingState::from_stored(Some("true")).is_done());
    }
}
