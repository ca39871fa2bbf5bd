//! Language selector ordering.

use crate::i18n::LocaleCode;

/// Stably move the entry matching `initial` to the front, keeping the
/// relative order of every other entry.
pub fn prioritize_initial(languages: &mut Vec<LocaleCode>, initial: LocaleCode) {
    if let Some(position) = languages.iter().position(|locale| *locale == initial) {
        let matched = languages.remove(position);
        languages.insert(0, matched);
    }
}

/// All supported languages with the active locale first.
#[must_use]
pub fn language_list(initial: LocaleCode) -> Vec<LocaleCode> {
    let mut languages = LocaleCode::all().to_vec();
    prioritize_initial(&mut languages, initial);
    languages
}
