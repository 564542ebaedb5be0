//! Selling price line form
//!
//! New lines take the channel fee of the header's sales channel.

mod model;
mod view;
mod view_model;

pub use view::SellingPriceLineDetails;
pub use view_model::SellingPriceLineViewModel;
