//! Domain logic for the Perspective Coach journaling service.
//!
//! This crate has no internal dependencies and holds everything the API
//! and repository layers share: ID/timestamp aliases, the domain error
//! enum, the diary entry content model with its validation rules, the
//! perspective card catalog, and the mock perspective generator.

pub mod cards;
pub mod coach;
pub mod entry;
pub mod error;
pub mod types;
