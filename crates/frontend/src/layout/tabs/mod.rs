//! Tab management module
//!
//! `registry` is the single source of truth for both tab labels and the
//! tab.key → View mapping.

pub mod registry;

pub use registry::{render_tab_content, tab_label_for_key};
