//! Product screen
//!
//! MVVM split:
//! - model.rs: API functions (fetch, create, update, patch status)
//! - view_model.rs: screen state and commands
//! - view.rs: Leptos component (form + table)

pub mod model;
mod view;
mod view_model;

pub use view::ProductoPage;
