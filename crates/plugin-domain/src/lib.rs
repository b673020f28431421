//! # Plugin Domain
//!
//! Ports for discovering and removing plugin artifacts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - PluginLocation value object                   ││
//! │  │  repository/- PluginRepository trait + compound repository  ││
//! │  │  config     - RuntimeMode / RegistryConfig                  ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Concrete repositories (directory scanners, archives, remote stores)
//! live in adapter crates. This crate only knows the trait.

pub mod config;
pub mod model;
pub mod repository;

// Re-export commonly used types
pub use config::{ConfigError, RegistryConfig, RuntimeMode};
pub use model::location::PluginLocation;
pub use repository::{
    compound::CompoundPluginRepository,
    plugin_repository::{PluginRepository, RepositoryError, RepositoryHandle},
};
