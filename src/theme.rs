//! Color theming: a fixed set of named style variables, a static mapping
//! from preference fields onto them, the service that applies persisted
//! color choices, and the built-in presets.

mod color;
mod mapping;
mod presets;
mod service;
mod vars;

pub use color::*;
pub use presets::*;
pub use service::*;
pub use vars::*;

#[cfg(test)]
mod tests;
