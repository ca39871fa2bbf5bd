//! `web-sys` implementations of the document capability traits.
//!
//! All operations are best-effort: a rejected DOM write is logged at most
//! and never propagated, since metadata bookkeeping must not block the page.

use crate::core::meta::{SHARE_TITLE_KEY, TagKey};
use crate::core::surface::{DocumentSurface, ShareCache};
use gloo::console;
use gloo::storage::{SessionStorage, Storage};
use gloo::utils::document;

/// The real browser document.
pub(crate) struct DomSurface;

impl DocumentSurface for DomSurface {
    fn upsert_tag(&self, key: TagKey, content: &str) {
        if let Ok(Some(existing)) = document().query_selector(&selector_for(key)) {
            let _ = existing.set_attribute("content", content);
            return;
        }
        let Ok(element) = document().create_element("meta") else {
            return;
        };
        let _ = element.set_attribute(key.attribute(), key.value());
        let _ = element.set_attribute("content", content);
        if let Some(head) = document().head() {
            let _ = head.append_child(&element);
        }
    }

    fn delete_tag(&self, key: TagKey) {
        if let Ok(Some(existing)) = document().query_selector(&selector_for(key)) {
            existing.remove();
        }
    }

    fn set_direction_attribute(&self, direction: Option<&str>) {
        if let Some(root) = document().document_element() {
            match direction {
                Some(value) => {
                    let _ = root.set_attribute("dir", value);
                }
                None => {
                    let _ = root.remove_attribute("dir");
                }
            }
        }
    }

    fn toggle_layout_class(&self, class: &str, enabled: bool) {
        if let Some(root) = document().document_element() {
            let classes = root.class_list();
            let _ = if enabled {
                classes.add_1(class)
            } else {
                classes.remove_1(class)
            };
        }
    }
}

/// Session-storage share cache read by share-preview consumers.
pub(crate) struct SessionShareCache;

impl ShareCache for SessionShareCache {
    fn store_share_title(&self, title: &str) {
        if let Err(err) = SessionStorage::raw().set_item(SHARE_TITLE_KEY, title) {
            console::warn!("session cache write failed", format!("{err:?}"));
        }
    }
}

fn selector_for(key: TagKey) -> String {
    format!("meta[{}='{}']", key.attribute(), key.value())
}
