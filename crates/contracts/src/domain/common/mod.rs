//! Common types shared by all resources

pub mod record_id;

pub use record_id::{matches_selection, RecordId};
