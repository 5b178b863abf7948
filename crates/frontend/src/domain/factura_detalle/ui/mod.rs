//! Invoice line-item screen, including the per-invoice totals table.

pub mod model;
mod view;
mod view_model;

pub use view::FacturaDetallePage;
