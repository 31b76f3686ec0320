//! Core release domain types: versions, update kinds, and tag grammar.

pub mod tag;
pub mod version;

pub use tag::TagPattern;
pub use version::{UpdateKind, Version};
