//! Root shell of the Ramani client.
//!
//! # Design
//! - All session bootstrap (onboarding flag, locale, direction) happens here
//!   before any dependent view state is read.
//! - Exactly one metadata synchronization pass runs per completed
//!   navigation, against the deepest activated route node.
//! - Bus subscriptions are owned by the shell and torn down with it.

use crate::components::language_menu::LanguageMenu;
use crate::components::loader::Loader;
use crate::components::onboarding::OnboardingPrompt;
use crate::components::shell::{AppShell, NavLabels};
use crate::core::languages::language_list;
use crate::core::meta::plan_route_meta;
use crate::core::session::{DirectionState, bootstrap_session};
use crate::core::store::{ShellStore, apply_signal};
use crate::core::surface::{apply_direction, apply_plan};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use gloo::timers::callback::Timeout;
use ramani_events::{Signal, SignalBus, SignalKind};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod dom;
mod preferences;
pub(crate) mod routes;

pub(crate) use routes::Route;

#[function_component(RamaniApp)]
pub(crate) fn ramani_app() -> Html {
    html! {
        <BrowserRouter>
            <RootShell />
        </BrowserRouter>
    }
}

#[function_component(RootShell)]
fn root_shell() -> Html {
    let namespace = use_memo(|_| preferences::namespace(), ());
    let locale = {
        let namespace = namespace.clone();
        use_state(move || preferences::load_locale(&namespace))
    };
    let bundle = use_memo(|locale: &LocaleCode| TranslationBundle::new(*locale), *locale);
    let direction = use_mut_ref(DirectionState::new);
    let dispatch = Dispatch::<ShellStore>::new();
    let bus = use_memo(|_| SignalBus::new(), ());

    // Restore persisted session state during the first render, before any
    // selector reads it. The effect hooks run after the frame is committed,
    // which is too late: a returning user would see one frame of defaults.
    let bootstrapped = use_mut_ref(|| false);
    if !*bootstrapped.borrow() {
        *bootstrapped.borrow_mut() = true;
        let stored = preferences::raw_onboarding(&namespace);
        let boot = bootstrap_session(
            stored.as_deref(),
            bundle.rtl(),
            &mut direction.borrow_mut(),
        );
        dispatch.reduce_mut(|store| store.onboarding = boot.onboarding);
        if let Some(rtl) = boot.apply_rtl {
            apply_direction(&dom::DomSurface, rtl);
        }
    }

    // Bus subscriptions live exactly as long as the shell.
    {
        let bus = (*bus).clone();
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let inner = {
                    let dispatch = dispatch.clone();
                    bus.subscribe(SignalKind::InnerPageMode, move |envelope| {
                        dispatch.reduce_mut(|store| apply_signal(store, &envelope.signal));
                    })
                };
                let reset = bus.subscribe(SignalKind::OnboardingReset, move |envelope| {
                    dispatch.reduce_mut(|store| apply_signal(store, &envelope.signal));
                });
                move || {
                    bus.unsubscribe(inner);
                    bus.unsubscribe(reset);
                }
            },
            (),
        );
    }

    let busy = use_selector(|store: &ShellStore| store.busy);
    let inner_page = use_selector(|store: &ShellStore| store.inner_page);
    let onboarding = use_selector(|store: &ShellStore| store.onboarding);

    let current_route = use_route::<Route>().unwrap_or(Route::NotFound);

    // One metadata synchronization pass per completed navigation.
    {
        let bundle = bundle.clone();
        use_effect_with_deps(
            move |route: &Route| {
                let meta = routes::route_trail(route).leaf_meta();
                let page_url = gloo::utils::window().location().href().unwrap_or_default();
                let plan = plan_route_meta(&meta, &page_url, |key| bundle.translate(key));
                apply_plan(&dom::DomSurface, &dom::SessionShareCache, &plan);
                || ()
            },
            current_route.clone(),
        );
    }

    // Persist the selected locale and apply direction changes, skipping
    // writes when the direction is unchanged.
    {
        let namespace = namespace.clone();
        let direction = direction.clone();
        use_effect_with_deps(
            move |locale: &UseStateHandle<LocaleCode>| {
                preferences::persist_locale(&namespace, **locale);
                let rtl = TranslationBundle::new(**locale).rtl();
                if let Some(rtl) = direction.borrow_mut().observe(rtl) {
                    apply_direction(&dom::DomSurface, rtl);
                }
                || ()
            },
            locale.clone(),
        );
    }

    let nav = NavLabels {
        feed: bundle.text("nav.feed", "Feed"),
        map: bundle.text("nav.map", "Map"),
        activity: bundle.text("nav.activity", "Activity"),
        settings: bundle.text("nav.settings", "Settings"),
    };

    let language_menu = {
        let on_select = {
            let locale = locale.clone();
            Callback::from(move |next: LocaleCode| locale.set(next))
        };
        html! {
            <LanguageMenu
                languages={language_list(*locale)}
                selected={*locale}
                on_select={on_select}
            />
        }
    };

    let on_complete_onboarding = {
        let dispatch = dispatch.clone();
        let namespace = namespace.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| store.onboarding.complete());
            preferences::persist_onboarding(&namespace, dispatch.get().onboarding);
        })
    };

    let bundle_routes = bundle.clone();

    html! {
        <ContextProvider<SignalBus> context={(*bus).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <AppShell
                    title={bundle.text("app.title", "Ramani")}
                    nav={nav}
                    active={current_route.clone()}
                    inner_page={*inner_page}
                    language_menu={language_menu}
                >
                    <Switch<Route> render={move |route| {
                        let bundle = (*bundle_routes).clone();
                        match route {
                            Route::Home => html! { <Redirect<Route> to={Route::Feed} /> },
                            Route::Feed => html! {
                                <PageView
                                    title={bundle.text("page.feed_title", "Feed")}
                                    body={bundle.text("view.feed_body", "")}
                                />
                            },
                            Route::FeedPost { id } => html! { <FeedPostView id={id} /> },
                            Route::Map => html! {
                                <PageView
                                    title={bundle.text("page.map_title", "Map")}
                                    body={bundle.text("view.map_body", "")}
                                />
                            },
                            Route::Activity => html! {
                                <PageView
                                    title={bundle.text("page.activity_title", "Activity")}
                                    body={bundle.text("view.activity_body", "")}
                                />
                            },
                            Route::Settings => html! { <SettingsView /> },
                            Route::SettingsPage { page } => html! { <SettingsPageView page={page} /> },
                            Route::NotFound => html! {
                                <PageView
                                    title={bundle.text("view.not_found_title", "Not found")}
                                    body={bundle.text("view.not_found_body", "")}
                                />
                            },
                        }
                    }} />
                </AppShell>
                { if *busy {
                    html! { <Loader label={bundle.text("loader.label", "Loading")} /> }
                } else {
                    html! {}
                }}
                { if onboarding.is_done() {
                    html! {}
                } else {
                    html! {
                        <OnboardingPrompt
                            title={bundle.text("onboarding.title", "")}
                            body={bundle.text("onboarding.body", "")}
                            action={bundle.text("onboarding.done", "")}
                            on_complete={on_complete_onboarding}
                        />
                    }
                }}
            </ContextProvider<TranslationBundle>>
        </ContextProvider<SignalBus>>
    }
}

#[derive(Properties, PartialEq)]
struct PageViewProps {
    pub title: String,
    pub body: String,
}

#[function_component(PageView)]
fn page_view(props: &PageViewProps) -> Html {
    html! {
        <section class="page-view">
            <h2>{&props.title}</h2>
            <p class="muted">{&props.body}</p>
        </section>
    }
}

/// How long the simulated report fetch keeps the loader overlay up.
const POST_LOAD_MS: u32 = 400;

#[derive(Properties, PartialEq)]
struct FeedPostProps {
    pub id: String,
}

#[function_component(FeedPostView)]
fn feed_post_view(props: &FeedPostProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let dispatch = Dispatch::<ShellStore>::new();
    let load_timer = use_mut_ref(|| None as Option<Timeout>);

    // Fetching the report blocks the view; the busy flag drives the shell's
    // loader overlay for the duration and is cleared on early navigation.
    {
        let dispatch = dispatch.clone();
        let load_timer = load_timer.clone();
        use_effect_with_deps(
            move |_: &String| {
                dispatch.reduce_mut(ShellStore::begin_load);
                let done = dispatch.clone();
                *load_timer.borrow_mut() = Some(Timeout::new(POST_LOAD_MS, move || {
                    done.reduce_mut(ShellStore::finish_load);
                }));
                move || {
                    load_timer.borrow_mut().take();
                    dispatch.reduce_mut(ShellStore::finish_load);
                }
            },
            props.id.clone(),
        );
    }

    html! {
        <PageView
            title={format!("{} #{}", bundle.text("page.post_title", "Report"), props.id)}
            body={bundle.text("page.post_description", "")}
        />
    }
}

#[function_component(SettingsView)]
fn settings_view() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let bus = use_context::<SignalBus>();
    let show_onboarding = Callback::from(move |_| {
        if let Some(bus) = &bus {
            bus.publish(Signal::OnboardingReset);
        }
    });
    html! {
        <section class="page-view settings">
            <h2>{bundle.text("nav.settings", "Settings")}</h2>
            <p class="muted">{bundle.text("view.settings_body", "")}</p>
            <ul class="settings-sections">
                {for ["general", "surveys", "members"].into_iter().map(|page| html! {
                    <li>
                        <Link<Route> to={Route::SettingsPage { page: page.to_string() }}>
                            {page}
                        </Link<Route>>
                    </li>
                })}
            </ul>
            <button type="button" class="link-button" onclick={show_onboarding}>
                {bundle.text("settings.show_onboarding", "")}
            </button>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SettingsPageProps {
    pub page: String,
}

#[function_component(SettingsPageView)]
fn settings_page_view(props: &SettingsPageProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let bus = use_context::<SignalBus>();
    // Inner pages ask the shell for drill-down layout while mounted.
    use_effect_with_deps(
        move |_| {
            if let Some(bus) = &bus {
                bus.publish(Signal::InnerPageMode { inner: true });
            }
            move || {
                if let Some(bus) = &bus {
                    bus.publish(Signal::InnerPageMode { inner: false });
                }
            }
        },
        (),
    );
    html! {
        <section class="page-view settings-inner">
            <h2>{&props.page}</h2>
            <p class="muted">{bundle.text("view.settings_inner_body", "")}</p>
        </section>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<RamaniApp>::with_root(root).render();
    } else {
        yew::Renderer::<RamaniApp>::new().render();
    }
}
