//! Core metadata types for resources
//!
//! All types use 'static lifetimes so descriptors are plain constants.

use super::field_type::FieldKind;
use super::validation::ValidationRules;

/// Sidebar section a resource belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceGroup {
    MasterData,
    Transaction,
    Pricing,
}

impl ResourceGroup {
    pub const ALL: [ResourceGroup; 3] = [Self::MasterData, Self::Transaction, Self::Pricing];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MasterData => "master_data",
            Self::Transaction => "transaction",
            Self::Pricing => "pricing",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MasterData => "Master Data",
            Self::Transaction => "Transactions",
            Self::Pricing => "Pricing",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::MasterData => "database",
            Self::Transaction => "file-text",
            Self::Pricing => "dollar-sign",
        }
    }
}

/// Link from a line-item resource to its header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentLink {
    /// Key of the header resource
    pub resource: &'static str,
    /// Field of the line item holding the header ID
    pub field: &'static str,
}

/// Descriptor of one REST resource managed by the console
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceMeta {
    /// Short index, e.g. "a001"
    pub index: &'static str,
    /// Unique key, also the tab key of the list page, e.g. "a001_country"
    pub key: &'static str,
    /// Path segment under `/api/`, e.g. "country"
    pub endpoint: &'static str,
    pub element_name: &'static str,
    pub list_name: &'static str,
    pub icon: &'static str,
    pub group: ResourceGroup,
    pub fields: &'static [FieldMeta],
    /// Field used as the label when this resource feeds a dropdown
    pub display_field: &'static str,
    pub parent: Option<ParentLink>,
}

impl ResourceMeta {
    pub fn field(&self, name: &str) -> Option<&'static FieldMeta> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn list_fields(&self) -> impl Iterator<Item = &'static FieldMeta> {
        self.fields.iter().filter(|f| f.visible_in_list)
    }

    /// Fields that reference other resources (need dropdown options)
    pub fn reference_fields(&self) -> impl Iterator<Item = &'static FieldMeta> {
        self.fields
            .iter()
            .filter(|f| matches!(f.kind, FieldKind::Reference { .. }))
    }

    pub fn is_line_item(&self) -> bool {
        self.parent.is_some()
    }
}

/// Metadata for a single field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMeta {
    /// Name on the wire (JSON key)
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub validation: ValidationRules,
    pub visible_in_list: bool,
    /// Calculated by the page, never typed by the user
    pub read_only: bool,
    pub placeholder: Option<&'static str>,
}

impl FieldMeta {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            validation: ValidationRules::none(),
            visible_in_list: true,
            read_only: false,
            placeholder: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.validation.required = true;
        self
    }

    pub const fn min(mut self, min: f64) -> Self {
        self.validation.min = Some(min);
        self
    }

    pub const fn max(mut self, max: f64) -> Self {
        self.validation.max = Some(max);
        self
    }

    pub const fn max_length(mut self, len: usize) -> Self {
        self.validation.max_length = Some(len);
        self
    }

    pub const fn hidden_in_list(mut self) -> Self {
        self.visible_in_list = false;
        self
    }

    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub const fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }
}

/// Shorthand for a reference field definition
pub const fn reference(
    name: &'static str,
    label: &'static str,
    resource: &'static str,
    display: &'static str,
) -> FieldMeta {
    FieldMeta::new(name, label, FieldKind::Reference { resource, display })
}
