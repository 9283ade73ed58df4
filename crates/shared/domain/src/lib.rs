//! Domain layer - Deployment environments and their env-file mapping.
//!
//! This crate holds the closed environment registry and has no
//! infrastructure dependencies. The settings crate builds on top of it.

pub mod constants;
pub mod environment;
pub mod error;

pub use constants::*;
pub use environment::EnvironmentType;
pub use error::{DomainError, DomainResult};
