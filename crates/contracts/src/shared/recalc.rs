//! Derived-field recomputation for pricing forms.
//!
//! A form keeps its working copy as display strings. When one field changes,
//! the form applies the raw value and recomputes every field derived from it.
//! Missing reference data never fails the edit: the raw value is applied and
//! the derived fields are left alone.

/// A form whose dependent fields are recomputed on every input change.
///
/// `Ctx` carries the reference records loaded for the page (dropdown
/// sources); lookups into it happen inside `apply_change`.
pub trait Recalculate<Ctx: ?Sized> {
    /// Editable inputs that may trigger a recomputation
    type Field: Copy;

    /// Apply `value` to `field` and refresh the derived fields
    fn apply_change(&mut self, field: Self::Field, value: &str, ctx: &Ctx);
}
