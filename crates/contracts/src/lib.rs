//! Types shared between the console and anything else talking to the
//! warehouse REST API: resource descriptors, wire records and the pure
//! calculations behind the pricing forms.

pub mod domain;
pub mod shared;
pub mod system;
