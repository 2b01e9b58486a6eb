//! Derives the standard and maskable site icons from the brand logo.

pub mod config;
pub mod error;
pub mod generator;
pub mod processor;

#[cfg(test)]
mod test_support;

pub use config::{IconConfig, IconKind, IconPaths, IconSpec};
pub use error::{GenerationFailure, IconError};
pub use generator::{GeneratedIcon, GeneratedIcons, IconGenerator};
