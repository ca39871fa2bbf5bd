//! Document metadata tags and the per-route reconciliation policy.
//!
//! # Design
//! - Reconciliation is planned as data (`TagPlan`) before anything touches
//!   the document, so the policy is testable off-wasm.
//! - The per-field rules live in one table; the `og:url` fallback asymmetry
//!   is an explicit `AbsentRule` variant rather than a buried branch.

use std::collections::HashMap;

/// Identity of a document-level metadata tag: the attribute that keys it and
/// that attribute's value. At most one live tag exists per key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKey {
    /// Tag keyed by its `name` attribute, e.g. `<meta name="description">`.
    Name(&'static str),
    /// Tag keyed by its `property` attribute, e.g. `<meta property="og:url">`.
    Property(&'static str),
}

impl TagKey {
    /// The keying attribute name (`name` or `property`).
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Property(_) => "property",
        }
    }

    /// The keying attribute value.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Name(value) | Self::Property(value) => value,
        }
    }
}

/// `<meta name="twitter:card">`, pinned to [`TWITTER_CARD_CONTENT`] on every pass.
pub const TWITTER_CARD: TagKey = TagKey::Name("twitter:card");
/// `<meta name="description">`.
pub const DESCRIPTION: TagKey = TagKey::Name("description");
/// `<meta property="og:url">`.
pub const OG_URL: TagKey = TagKey::Property("og:url");
/// `<meta property="og:title">`.
pub const OG_TITLE: TagKey = TagKey::Property("og:title");
/// `<meta name="twitter:title">`, mirrored from the Open Graph title.
pub const TWITTER_TITLE: TagKey = TagKey::Name("twitter:title");
/// `<meta name="twitter:description">`, mirrored from the Open Graph title.
pub const TWITTER_DESCRIPTION: TagKey = TagKey::Name("twitter:description");
/// `<meta property="og:description">`.
pub const OG_DESCRIPTION: TagKey = TagKey::Property("og:description");
/// `<meta property="og:image">`.
pub const OG_IMAGE: TagKey = TagKey::Property("og:image");

/// Fixed content for the Twitter card tag.
pub const TWITTER_CARD_CONTENT: &str = "summary";

/// Session-cache key under which the translated share title is mirrored for
/// share-preview consumers outside the shell.
pub const SHARE_TITLE_KEY: &str = "ogTitle";

/// Metadata attached to a navigation target by route configuration.
///
/// `description`, `og_title` and `og_description` hold translation keys;
/// `og_url` and `og_image` hold literal URLs. All fields are optional and the
/// record is read-only to the shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Page description translation key.
    pub description: Option<String>,
    /// Canonical share URL.
    pub og_url: Option<String>,
    /// Share title translation key.
    pub og_title: Option<String>,
    /// Share description translation key.
    pub og_description: Option<String>,
    /// Share preview image URL.
    pub og_image: Option<String>,
}

#[derive(Clone, Copy)]
enum MetaField {
    Description,
    OgUrl,
    OgTitle,
    OgDescription,
    OgImage,
}

impl MetaField {
    fn read(self, meta: &RouteMeta) -> Option<&str> {
        match self {
            Self::Description => meta.description.as_deref(),
            Self::OgUrl => meta.og_url.as_deref(),
            Self::OgTitle => meta.og_title.as_deref(),
            Self::OgDescription => meta.og_description.as_deref(),
            Self::OgImage => meta.og_image.as_deref(),
        }
    }
}

#[derive(Clone, Copy)]
enum AbsentRule {
    /// Delete the field's tags when the route supplies no value.
    Remove,
    /// Upsert the current page URL instead; a canonical URL is always
    /// advertised.
    PageUrl,
}

struct FieldRule {
    field: MetaField,
    keys: &'static [TagKey],
    translate: bool,
    absent: AbsentRule,
    mirror_share_title: bool,
}

const FIELD_RULES: [FieldRule; 5] = [
    FieldRule {
        field: MetaField::Description,
        keys: &[DESCRIPTION],
        translate: true,
        absent: AbsentRule::Remove,
        mirror_share_title: false,
    },
    FieldRule {
        field: MetaField::OgUrl,
        keys: &[OG_URL],
        translate: false,
        absent: AbsentRule::PageUrl,
        mirror_share_title: false,
    },
    FieldRule {
        field: MetaField::OgTitle,
        keys: &[OG_TITLE, TWITTER_TITLE, TWITTER_DESCRIPTION],
        translate: true,
        absent: AbsentRule::Remove,
        mirror_share_title: true,
    },
    FieldRule {
        field: MetaField::OgDescription,
        keys: &[OG_DESCRIPTION],
        translate: true,
        absent: AbsentRule::Remove,
        mirror_share_title: false,
    },
    FieldRule {
        field: MetaField::OgImage,
        keys: &[OG_IMAGE],
        translate: false,
        absent: AbsentRule::Remove,
        mirror_share_title: false,
    },
];

/// Reconciliation plan produced from one route's metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagPlan {
    /// Tags to upsert, in policy order.
    pub upserts: Vec<(TagKey, String)>,
    /// Tags to delete.
    pub removals: Vec<TagKey>,
    /// Translated title to mirror into the session cache, when present.
    pub share_title: Option<String>,
}

/// Build the reconciliation plan for a navigation target.
///
/// `page_url` is the current document URL, used as the `og:url` fallback.
/// `translate` resolves a translation key against the active locale; it runs
/// synchronously, once per translatable present field.
#[must_use]
pub fn plan_route_meta(
    meta: &RouteMeta,
    page_url: &str,
    translate: impl Fn(&str) -> String,
) -> TagPlan {
    let mut plan = TagPlan {
        upserts: vec![(TWITTER_CARD, TWITTER_CARD_CONTENT.to_string())],
        ..TagPlan::default()
    };
    for rule in &FIELD_RULES {
        match rule.field.read(meta) {
            Some(value) => {
                let content = if rule.translate {
                    translate(value)
                } else {
                    value.to_string()
                };
                for key in rule.keys {
                    plan.upserts.push((*key, content.clone()));
                }
                if rule.mirror_share_title {
                    plan.share_title = Some(content);
                }
            }
            None => match rule.absent {
                AbsentRule::Remove => plan.removals.extend_from_slice(rule.keys),
                AbsentRule::PageUrl => {
                    plan.upserts.push((rule.keys[0], page_url.to_string()));
                }
            },
        }
    }
    plan
}

/// Live set of shell-owned document tags, keyed by [`TagKey`].
///
/// The wasm build reconciles directly against the DOM head; this in-memory
/// store backs tests and any host without a document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagStore {
    tags: HashMap<TagKey, String>,
}

impl TagStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a tag.
    pub fn upsert(&mut self, key: TagKey, content: impl Into<String>) {
        self.tags.insert(key, content.into());
    }

    /// Remove a tag if present.
    pub fn remove(&mut self, key: TagKey) {
        self.tags.remove(&key);
    }

    /// Current content for a key.
    #[must_use]
    pub fn get(&self, key: TagKey) -> Option<&str> {
        self.tags.get(&key).map(String::as_str)
    }

    /// Number of live tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the store holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Apply a reconciliation plan: upserts first, then removals.
    pub fn apply(&mut self, plan: &TagPlan) {
        for (key, content) in &plan.upserts {
            self.upsert(*key, content.clone());
        }
        for key in &plan.removals {
            self.remove(*key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(key: &str) -> String {
        key.to_string()
    }

    fn upper(key: &str) -> String {
        key.to_ascii_uppercase()
    }

    #[test]
    fn empty_meta_yields_card_and_url_fallback_only() {
        let plan = plan_route_meta(&RouteMeta::default(), "https://r.example/feed", echo);
        let mut store = TagStore::new();
        store.apply(&plan);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(TWITTER_CARD), Some("summary"));
        assert_eq!(store.get(OG_URL), Some("https://r.example/feed"));
        assert!(plan.share_title.is_none());
    }

    #[test]
    fn og_title_fans_out_to_three_keys_and_mirrors() {
        let meta = RouteMeta {
            og_title: Some("hello".into()),
            ..RouteMeta::default()
        };
        let plan = plan_route_meta(&meta, "https://r.example/", upper);
        let mut store = TagStore::new();
        store.apply(&plan);

        assert_eq!(store.get(OG_TITLE), Some("HELLO"));
        assert_eq!(store.get(TWITTER_TITLE), Some("HELLO"));
        assert_eq!(store.get(TWITTER_DESCRIPTION), Some("HELLO"));
        assert_eq!(plan.share_title.as_deref(), Some("HELLO"));
    }

    #[test]
    fn literal_fields_skip_translation() {
        let meta = RouteMeta {
            og_url: Some("https://canonical.example/x".into()),
            og_image: Some("https://cdn.example/x.png".into()),
            ..RouteMeta::default()
        };
        let plan = plan_route_meta(&meta, "https://r.example/", upper);
        let mut store = TagStore::new();
        store.apply(&plan);

        assert_eq!(store.get(OG_URL), Some("https://canonical.example/x"));
        assert_eq!(store.get(OG_IMAGE), Some("https://cdn.example/x.png"));
    }

    #[test]
    fn absent_fields_remove_previous_tags() {
        let rich = RouteMeta {
            description: Some("page.feed_description".into()),
            og_title: Some("page.feed_title".into()),
            og_description: Some("page.feed_description".into()),
            og_image: Some("https://cdn.example/feed.png".into()),
            ..RouteMeta::default()
        };
        let mut store = TagStore::new();
        store.apply(&plan_route_meta(&rich, "https://r.example/feed", echo));
        assert_eq!(store.len(), 8);

        store.apply(&plan_route_meta(
            &RouteMeta::default(),
            "https://r.example/map",
            echo,
        ));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(OG_URL), Some("https://r.example/map"));
        assert!(store.get(DESCRIPTION).is_none());
        assert!(store.get(OG_TITLE).is_none());
        assert!(store.get(TWITTER_TITLE).is_none());
        assert!(store.get(TWITTER_DESCRIPTION).is_none());
        assert!(store.get(OG_DESCRIPTION).is_none());
        assert!(store.get(OG_IMAGE).is_none());
    }

    #[test]
    fn synchronization_is_idempotent() {
        let meta = RouteMeta {
            description: Some("d".into()),
            og_image: Some("http://x/y.png".into()),
            ..RouteMeta::default()
        };
        let mut once = TagStore::new();
        once.apply(&plan_route_meta(&meta, "https://r.example/", upper));
        let mut twice = once.clone();
        twice.apply(&plan_route_meta(&meta, "https://r.example/", upper));

        assert_eq!(once, twice);
    }

    #[test]
    fn partial_meta_matches_expected_tag_set() {
        let meta = RouteMeta {
            description: Some("d".into()),
            og_image: Some("http://x/y.png".into()),
            ..RouteMeta::default()
        };
        let mut store = TagStore::new();
        store.apply(&plan_route_meta(&meta, "https://r.example/feed", upper));

        assert_eq!(store.len(), 4);
        assert_eq!(store.get(TWITTER_CARD), Some("summary"));
        assert_eq!(store.get(DESCRIPTION), Some("D"));
        assert_eq!(store.get(OG_URL), Some("https://r.example/feed"));
        assert_eq!(store.get(OG_IMAGE), Some("http://x/y.png"));
        assert!(store.get(OG_TITLE).is_none());
        assert!(store.get(OG_DESCRIPTION).is_none());
    }

    #[test]
    fn tag_keys_expose_attribute_pairs() {
        assert_eq!(DESCRIPTION.attribute(), "name");
        assert_eq!(DESCRIPTION.value(), "description");
        assert_eq!(OG_URL.attribute(), "property");
        assert_eq!(OG_URL.value(), "og:url");
    }
}
