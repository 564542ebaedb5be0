//! Metadata describing the REST resources of the console
//!
//! Every resource ships a `ResourceMeta` constant next to its wire types.
//! Generic list/detail pages are rendered from these descriptors.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::registry;
//!
//! let meta = registry::resource("a001_country").unwrap();
//! for field in meta.list_fields() {
//!     println!("{}: {}", field.name, field.label);
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::FieldKind;
pub use types::{reference, FieldMeta, ParentLink, ResourceGroup, ResourceMeta};
pub use validation::ValidationRules;
