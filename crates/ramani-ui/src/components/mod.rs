//! Presentational components for the client shell.
pub(crate) mod language_menu;
pub(crate) mod loader;
pub(crate) mod onboarding;
pub(crate) mod shell;
