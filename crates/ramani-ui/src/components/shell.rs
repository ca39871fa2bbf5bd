//! Application chrome: header, primary navigation and the content slot.
//!
//! # Design
//! - Presentation only; flags and labels are supplied by the shell root.
//! - The inner-page flag collapses the chrome so drill-down views get the
//!   full viewport on small screens.

use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Localized labels for the primary navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NavLabels {
    pub feed: String,
    pub map: String,
    pub activity: String,
    pub settings: String,
}

#[derive(Properties, PartialEq)]
pub(crate) struct AppShellProps {
    pub title: String,
    pub nav: NavLabels,
    pub active: Route,
    pub inner_page: bool,
    pub language_menu: Html,
    pub children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &AppShellProps) -> Html {
    let wrapper = classes!("app-shell", props.inner_page.then_some("inner-page"));
    html! {
        <div class={wrapper}>
            <header class="app-header">
                <span class="app-title">{&props.title}</span>
                <nav class="app-nav">
                    <Link<Route> to={Route::Feed} classes={nav_class(&props.active, &Route::Feed)}>
                        {&props.nav.feed}
                    </Link<Route>>
                    <Link<Route> to={Route::Map} classes={nav_class(&props.active, &Route::Map)}>
                        {&props.nav.map}
                    </Link<Route>>
                    <Link<Route> to={Route::Activity} classes={nav_class(&props.active, &Route::Activity)}>
                        {&props.nav.activity}
                    </Link<Route>>
                    <Link<Route> to={Route::Settings} classes={nav_class(&props.active, &Route::Settings)}>
                        {&props.nav.settings}
                    </Link<Route>>
                </nav>
                {props.language_menu.clone()}
            </header>
            <main class="app-content">{for props.children.iter()}</main>
        </div>
    }
}

fn nav_class(active: &Route, target: &Route) -> Classes {
    classes!("nav-link", (active == target).then_some("active"))
}
