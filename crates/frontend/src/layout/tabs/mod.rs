//! Tab management
//!
//! - `page` - TabPage wrapper, shows/hides tab content
//! - `registry` - tab key to view mapping
//! - `tab_key` - tab key format
//! - `tab_labels` - tab titles

pub mod page;
pub mod registry;
pub mod tab_key;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_key::{detail_key, list_key, new_detail_key, parse_tab_key, TabTarget};
pub use tab_labels::{detail_tab_label, pick_identifier, tab_label_for_key};
