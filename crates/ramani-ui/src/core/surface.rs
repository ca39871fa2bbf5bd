//! Capability traits for the mutable document state the shell owns.
//!
//! The wasm build implements these against the real DOM; tests substitute
//! recording doubles. Tag mutation is best-effort: implementations swallow
//! failures because metadata bookkeeping must never block navigation.

use crate::core::meta::{TagKey, TagPlan};

/// Class toggled on the document root while an RTL locale is active.
pub const RTL_CLASS: &str = "rtl";

/// Scoped access to the document-level state this shell mutates.
pub trait DocumentSurface {
    /// Insert or replace the tag identified by `key`.
    fn upsert_tag(&self, key: TagKey, content: &str);
    /// Remove the tag identified by `key` if it exists.
    fn delete_tag(&self, key: TagKey);
    /// Set the root direction attribute, or clear it when `None`.
    fn set_direction_attribute(&self, direction: Option<&str>);
    /// Add or remove a layout class on the document root.
    fn toggle_layout_class(&self, class: &str, enabled: bool);
}

/// Session-scoped sink for the mirrored share title.
pub trait ShareCache {
    /// Persist the translated share title for share-preview consumers.
    fn store_share_title(&self, title: &str);
}

/// Write a reconciliation plan through the document surface and mirror the
/// share title when one was planned.
pub fn apply_plan(surface: &dyn DocumentSurface, cache: &dyn ShareCache, plan: &TagPlan) {
    for (key, content) in &plan.upserts {
        surface.upsert_tag(*key, content);
    }
    for key in &plan.removals {
        surface.delete_tag(*key);
    }
    if let Some(title) = &plan.share_title {
        cache.store_share_title(title);
    }
}

/// Apply a direction change: RTL gains the layout class and an explicit
/// `dir="rtl"`; LTR drops both rather than writing `dir="ltr"`.
pub fn apply_direction(surface: &dyn DocumentSurface, rtl: bool) {
    surface.toggle_layout_class(RTL_CLASS, rtl);
    surface.set_direction_attribute(if rtl { Some("rtl") } else { None });
}
