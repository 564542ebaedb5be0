//! Field kinds for resource metadata

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    TextArea,
    /// Plain number (quantities, rates, percentages)
    Number,
    /// Monetary amount, shown with two decimals
    Money,
    /// Calendar date in `YYYY-MM-DD`
    Date,
    /// ID of a record of another resource, picked from a dropdown.
    /// `display` is the field of the referenced record shown as the label.
    Reference {
        resource: &'static str,
        display: &'static str,
    },
    /// One of a fixed set of string values
    Enum(&'static [&'static str]),
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextArea => "textarea",
            Self::Number => "number",
            Self::Money => "money",
            Self::Date => "date",
            Self::Reference { .. } => "reference",
            Self::Enum(_) => "enum",
        }
    }

    /// `type` attribute of the `<input>` rendering this kind
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Number | Self::Money => "number",
            Self::Date => "date",
            _ => "text",
        }
    }
}
