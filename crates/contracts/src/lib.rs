//! Wire contracts shared by every screen of the admin frontend.
//!
//! Field names follow the external REST API (Spanish snake_case); the
//! collection helpers (month filter, inventory grouping, invoice totals)
//! live next to the types they operate on so they can be unit-tested
//! without a browser.

pub mod domain;
pub mod system;
