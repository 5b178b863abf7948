//! Category screen

pub mod model;
mod view;
mod view_model;

pub use view::CategoriaPage;
