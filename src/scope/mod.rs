//! Scoped key parsing (`name@scope1 scope2`)

pub mod key;

pub use key::ScopedKey;
