//! Full-screen loader overlay shown while the shell is busy.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoaderProps {
    pub label: String,
}

#[function_component(Loader)]
pub(crate) fn loader(props: &LoaderProps) -> Html {
    html! {
        <div class="loader-overlay" role="status" aria-live="polite">
            <div class="loader-spinner" />
            <span class="loader-label">{&props.label}</span>
        </div>
    }
}
