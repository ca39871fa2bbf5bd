//! First-run onboarding overlay.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct OnboardingPromptProps {
    pub title: String,
    pub body: String,
    pub action: String,
    pub on_complete: Callback<()>,
}

#[function_component(OnboardingPrompt)]
pub(crate) fn onboarding_prompt(props: &OnboardingPromptProps) -> Html {
    let onclick = {
        let on_complete = props.on_complete.clone();
        Callback::from(move |_| on_complete.emit(()))
    };
    html! {
        <div class="onboarding-overlay">
            <div class="onboarding-card">
                <h2>{&props.title}</h2>
                <p>{&props.body}</p>
                <button type="button" class="onboarding-done" {onclick}>
                    {&props.action}
                </button>
            </div>
        </div>
    }
}
