//! Routing definitions and the metadata attached to each navigation target.

use crate::core::meta::RouteMeta;
use crate::core::navigation::RouteTrail;
use yew_router::prelude::*;

/// Share preview image advertised for the map view.
const MAP_SHARE_IMAGE: &str = "https://static.ramani.example/share/map.png";

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/feed")]
    Feed,
    #[at("/feed/:id")]
    FeedPost { id: String },
    #[at("/map")]
    Map,
    #[at("/activity")]
    Activity,
    #[at("/settings")]
    Settings,
    #[at("/settings/:page")]
    SettingsPage { page: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Activated trail for the current navigation. Nested targets hang off
/// their section so the deepest node carries the effective metadata.
pub(crate) fn route_trail(route: &Route) -> RouteTrail {
    match route {
        Route::Home => RouteTrail::new(None),
        Route::Feed => RouteTrail::new(Some(feed_meta())),
        Route::FeedPost { .. } => {
            RouteTrail::new(Some(feed_meta())).with_child(RouteTrail::new(Some(post_meta())))
        }
        Route::Map => RouteTrail::new(Some(map_meta())),
        Route::Activity => RouteTrail::new(Some(activity_meta())),
        Route::Settings => RouteTrail::new(Some(settings_meta())),
        // Inner settings pages intentionally carry no share metadata.
        Route::SettingsPage { .. } => {
            RouteTrail::new(Some(settings_meta())).with_child(RouteTrail::new(None))
        }
        Route::NotFound => RouteTrail::new(None),
    }
}

fn feed_meta() -> RouteMeta {
    RouteMeta {
        description: Some("page.feed_description".into()),
        og_title: Some("page.feed_title".into()),
        og_description: Some("page.feed_description".into()),
        ..RouteMeta::default()
    }
}

fn post_meta() -> RouteMeta {
    RouteMeta {
        description: Some("page.post_description".into()),
        og_title: Some("page.post_title".into()),
        ..RouteMeta::default()
    }
}

fn map_meta() -> RouteMeta {
    RouteMeta {
        description: Some("page.map_description".into()),
        og_title: Some("page.map_title".into()),
        og_image: Some(MAP_SHARE_IMAGE.into()),
        ..RouteMeta::default()
    }
}

fn activity_meta() -> RouteMeta {
    RouteMeta {
        description: Some("page.activity_description".into()),
        og_title: Some("page.activity_title".into()),
        ..RouteMeta::default()
    }
}

fn settings_meta() -> RouteMeta {
    RouteMeta {
        description: Some("page.settings_description".into()),
        ..RouteMeta::default()
    }
}
