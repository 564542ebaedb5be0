//! Pages rendered from resource metadata: one list and one form serve
//! every resource without a hand-written page.

pub mod ui;
