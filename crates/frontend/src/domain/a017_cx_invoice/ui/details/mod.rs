//! CX invoice line form

mod model;
mod view;
mod view_model;

pub use view::CxInvoiceLineDetails;
pub use view_model::CxInvoiceLineViewModel;
