//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shell-shared flags in one store so feature views reach them
//!   through a dispatch rather than prop drilling.
//! - Bus signals land here through a single reducer, keeping the adapter
//!   logic testable off-wasm.

use crate::core::session::OnboardingState;
use ramani_events::Signal;
use yewdux::store::Store;

/// Shared client shell state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct ShellStore {
    /// Whether the global loader overlay is visible.
    pub busy: bool,
    /// Whether the active view asked for inner-page layout.
    pub inner_page: bool,
    /// Onboarding completion state, restored from storage at bootstrap.
    pub onboarding: OnboardingState,
}

impl ShellStore {
    /// Mark a blocking load in flight; the shell shows the loader overlay
    /// while set.
    pub fn begin_load(&mut self) {
        self.busy = true;
    }

    /// Mark the in-flight load finished or abandoned.
    pub fn finish_load(&mut self) {
        self.busy = false;
    }
}

/// Fold a bus signal into shell state. Fire-and-forget: unknown payload
/// shapes cannot occur because the signal enum is closed.
pub fn apply_signal(store: &mut ShellStore, signal: &Signal) {
    match signal {
        Signal::InnerPageMode { inner } => store.inner_page = *inner,
        Signal::OnboardingReset => store.onboarding.reset(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_quiet() {
        let store = ShellStore::default();
        assert!(!store.busy);
        assert!(!store.inner_page);
        assert!(!store.onboarding.is_done());
    }

    #[test]
    fn inner_page_signal_sets_and_clears_flag() {
        let mut store = ShellStore::default();
        apply_signal(&mut store, &Signal::InnerPageMode { inner: true });
        assert!(store.inner_page);
        apply_signal(&mut store, &Signal::InnerPageMode { inner: false });
        assert!(!store.inner_page);
    }

    #[test]
    fn reset_signal_forces_onboarding_pending() {
        let mut store = ShellStore::default();
        store.onboarding.complete();
        apply_signal(&mut store, &Signal::OnboardingReset);
        assert!(!store.onboarding.is_done());
    }

    #[test]
    fn load_lifecycle_drives_busy_flag() {
        let mut store = ShellStore::default();
        store.begin_load();
        assert!(store.busy);
        store.finish_load();
        assert!(!store.busy);
        // Abandoning a load clears the flag the same way completion does.
        store.begin_load();
        store.finish_load();
        assert!(!store.busy);
    }

    #[test]
    fn signals_leave_unrelated_slices_alone() {
        let mut store = ShellStore {
            busy: true,
            ..ShellStore::default()
        };
        apply_signal(&mut store, &Signal::OnboardingReset);
        assert!(store.busy);
        apply_signal(&mut store, &Signal::InnerPageMode { inner: true });
        assert!(store.busy);
    }
}
