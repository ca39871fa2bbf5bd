//! Persisted session state: storage key namespacing, the onboarding state
//! machine, and direction change detection.

/// Storage key suffix for the onboarding-completion flag.
pub const ONBOARDING_DONE_KEY: &str = "is_onboarding_done";
/// Storage key suffix for the selected language tag.
pub const LANGUAGE_KEY: &str = "language";

/// Maps bare storage key names into a deployment-scoped namespace so several
/// deployments can share one origin without clobbering each other's state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionNamespace {
    prefix: String,
}

impl SessionNamespace {
    /// Namespace for the given deployment identifier.
    #[must_use]
    pub fn new(deployment: &str) -> Self {
        Self {
            prefix: deployment.to_string(),
        }
    }

    /// Fully-qualified storage key for a bare name.
    #[must_use]
    pub fn key(&self, name: &str) -> String {
        format!("{}_{name}", self.prefix)
    }
}

/// Parse a stored boolean flag. Absent or unparsable values are `false`,
/// never an error; only a valid JSON boolean counts.
#[must_use]
pub fn parse_stored_flag(raw: Option<&str>) -> bool {
    raw.and_then(|value| serde_json::from_str::<bool>(value).ok())
        .unwrap_or(false)
}

/// Onboarding completion state.
///
/// Restored from storage at bootstrap. `Pending → Done` happens when the
/// onboarding flow completes; `Done → Pending` only through the reset
/// signal, which deliberately leaves the persisted value untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnboardingState {
    /// Onboarding has not been completed this deployment.
    #[default]
    Pending,
    /// Onboarding was completed and persisted.
    Done,
}

impl OnboardingState {
    /// Restore from the raw stored flag value.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        if parse_stored_flag(raw) {
            Self::Done
        } else {
            Self::Pending
        }
    }

    /// Whether onboarding has been completed.
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }

    /// Force the flow to run again (in-memory only).
    pub fn reset(&mut self) {
        *self = Self::Pending;
    }

    /// Mark the flow completed.
    pub fn complete(&mut self) {
        *self = Self::Done;
    }
}

/// State a fresh shell carries into its first frame: the restored onboarding
/// flag plus the direction to apply, when one is due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionBootstrap {
    /// Restored onboarding completion state.
    pub onboarding: OnboardingState,
    /// Direction to apply immediately, `None` when nothing is due.
    pub apply_rtl: Option<bool>,
}

/// Resolve bootstrap state from the stored flag and the active locale's
/// direction. Runs before the first frame is committed, so in-memory state
/// never disagrees with persisted state across a paint.
pub fn bootstrap_session(
    stored_flag: Option<&str>,
    rtl: bool,
    direction: &mut DirectionState,
) -> SessionBootstrap {
    SessionBootstrap {
        onboarding: OnboardingState::from_stored(stored_flag),
        apply_rtl: direction.observe(rtl),
    }
}

/// Tracks the last applied text direction so repeated emissions of the same
/// value skip the document write entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionState {
    current: Option<bool>,
}

impl DirectionState {
    /// Unobserved state; the first emission always applies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an emission from the direction stream. Returns the value to
    /// apply when it differs from the current one, `None` otherwise.
    pub fn observe(&mut self, rtl: bool) -> Option<bool> {
        if self.current == Some(rtl) {
            return None;
        }
        self.current = Some(rtl);
        Some(rtl)
    }

    /// Last applied direction, if any emission was observed.
    #[must_use]
    pub const fn current(self) -> Option<bool> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_prefixes_keys() {
        let namespace = SessionNamespace::new("ramani");
        assert_eq!(namespace.key(ONBOARDING_DONE_KEY), "ramani_is_onboarding_done");
        assert_eq!(namespace.key(LANGUAGE_KEY), "ramani_language");
    }

    #[test]
    fn stored_flag_parses_json_booleans_only() {
        assert!(parse_stored_flag(Some("true")));
        assert!(!parse_stored_flag(Some("false")));
        assert!(!parse_stored_flag(None));
        assert!(!parse_stored_flag(Some("")));
        assert!(!parse_stored_flag(Some("yes")));
        assert!(!parse_stored_flag(Some("{broken")));
    }

    #[test]
    fn onboarding_restores_from_storage() {
        assert_eq!(OnboardingState::from_stored(Some("true")), OnboardingState::Done);
        assert_eq!(OnboardingState::from_stored(None), OnboardingState::Pending);
        assert_eq!(
            OnboardingState::from_stored(Some("not-json")),
            OnboardingState::Pending
        );
    }

    #[test]
    fn onboarding_transitions() {
        let mut state = OnboardingState::Pending;
        state.complete();
        assert!(state.is_done());
        state.reset();
        assert_eq!(state, OnboardingState::Pending);
        // Reset from Pending stays Pending.
        state.reset();
        assert_eq!(state, OnboardingState::Pending);
    }

    #[test]
    fn bootstrap_restores_flag_and_first_direction() {
        let mut direction = DirectionState::new();
        let boot = bootstrap_session(Some("true"), true, &mut direction);
        assert!(boot.onboarding.is_done());
        assert_eq!(boot.apply_rtl, Some(true));
        // A returning profile must never start from the defaults.
        assert_ne!(boot.onboarding, OnboardingState::default());
    }

    #[test]
    fn bootstrap_of_fresh_profile_defaults_pending_ltr() {
        let mut direction = DirectionState::new();
        let boot = bootstrap_session(None, false, &mut direction);
        assert!(!boot.onboarding.is_done());
        assert_eq!(boot.apply_rtl, Some(false));
    }

    #[test]
    fn direction_skips_unchanged_emissions() {
        let mut direction = DirectionState::new();
        assert_eq!(direction.observe(false), Some(false));
        assert_eq!(direction.observe(true), Some(true));
        assert_eq!(direction.observe(true), None);
        assert_eq!(direction.observe(false), Some(false));
        assert_eq!(direction.current(), Some(false));
    }
}
