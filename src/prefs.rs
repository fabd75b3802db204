//! Persisted user preferences: the last-used track directory plus the color
//! choices the theming service applies on startup.
//!
//! One document, one fixed location. The settings side writes it, everything
//! else only reads.

mod schema;
mod store;

pub use schema::*;
pub use store::*;

#[cfg(test)]
mod tests;
