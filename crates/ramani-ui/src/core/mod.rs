//! Core, DOM-free primitives and helpers for the client shell.
pub mod languages;
pub mod meta;
pub mod navigation;
pub mod session;
pub mod store;
pub mod surface;
