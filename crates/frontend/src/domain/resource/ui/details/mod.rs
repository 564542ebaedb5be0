//! Generic record form
//!
//! - model.rs: API calls and option helpers
//! - view_model.rs: form state and commands
//! - view.rs: Leptos component

pub mod model;
mod view;
mod view_model;

pub use view::ResourceDetails;
pub use view_model::ResourceDetailsViewModel;
