//! Scope resolution and merging of declaration sources

pub mod dictionary;
pub mod filter;
pub mod unused;

pub use dictionary::{build_dictionary, collision_message, MergeOutcome};
pub use unused::unused_message;
