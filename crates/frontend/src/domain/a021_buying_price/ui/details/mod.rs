//! Buying price line form
//!
//! - model.rs: API functions (fetch, save)
//! - view_model.rs: form state, recalculation and commands
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::BuyingPriceLineDetails;
pub use view_model::BuyingPriceLineViewModel;
