//! Activated-route trail and leaf metadata resolution.

use crate::core::meta::RouteMeta;

/// One node of the activated route tree, linking to at most one active child.
///
/// Route configuration attaches an optional [`RouteMeta`] to each node; only
/// the deepest active node's record drives metadata synchronization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteTrail {
    meta: Option<RouteMeta>,
    child: Option<Box<RouteTrail>>,
}

impl RouteTrail {
    /// Node with the given attached metadata and no child.
    #[must_use]
    pub fn new(meta: Option<RouteMeta>) -> Self {
        Self { meta, child: None }
    }

    /// Attach the active child, returning the extended trail.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    /// Descend first-child links to the deepest active node.
    #[must_use]
    pub fn leaf(&self) -> &Self {
        let mut node = self;
        while let Some(child) = &node.child {
            node = child;
        }
        node
    }

    /// Metadata of the deepest active node; an all-absent record when the
    /// leaf carries none.
    #[must_use]
    pub fn leaf_meta(&self) -> RouteMeta {
        self.leaf().meta.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> RouteMeta {
        RouteMeta {
            og_title: Some(title.to_string()),
            ..RouteMeta::default()
        }
    }

    #[test]
    fn single_node_resolves_own_meta() {
        let trail = RouteTrail::new(Some(titled("feed")));
        assert_eq!(trail.leaf_meta().og_title.as_deref(), Some("feed"));
    }

    #[test]
    fn deepest_child_wins_over_ancestors() {
        let trail = RouteTrail::new(Some(titled("root")))
            .with_child(RouteTrail::new(Some(titled("section"))).with_child(
                RouteTrail::new(Some(titled("detail"))),
            ));
        assert_eq!(trail.leaf_meta().og_title.as_deref(), Some("detail"));
    }

    #[test]
    fn bare_leaf_resolves_to_all_absent() {
        let trail = RouteTrail::new(Some(titled("root"))).with_child(RouteTrail::new(None));
        assert_eq!(trail.leaf_meta(), RouteMeta::default());
    }

    #[test]
    fn empty_trail_resolves_to_all_absent() {
        assert_eq!(RouteTrail::default().leaf_meta(), RouteMeta::default());
    }
}
