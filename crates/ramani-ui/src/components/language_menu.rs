//! Language selection dropdown used in the top bar.
//!
//! # Design
//! - Presentation only; selection state is managed by the caller.
//! - The list arrives pre-ordered (active locale first), so rendering is a
//!   plain iteration.

use crate::i18n::LocaleCode;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LanguageMenuProps {
    pub languages: Vec<LocaleCode>,
    pub selected: LocaleCode,
    pub on_select: Callback<LocaleCode>,
}

#[function_component(LanguageMenu)]
pub(crate) fn language_menu(props: &LanguageMenuProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            if let Some(locale) = LocaleCode::from_lang_tag(&select.value()) {
                on_select.emit(locale);
            }
        })
    };

    html! {
        <select class="language-menu" value={props.selected.code()} {onchange}>
            {for props.languages.iter().map(|locale| html! {
                <option value={locale.code()} selected={*locale == props.selected}>
                    {locale.label()}
                </option>
            })}
        </select>
    }
}
