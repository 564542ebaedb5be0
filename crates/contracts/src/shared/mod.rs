pub mod api;
pub mod form;
pub mod metadata;
pub mod money;
pub mod recalc;
