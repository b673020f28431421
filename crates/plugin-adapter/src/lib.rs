//! # Plugin Adapter Layer
//!
//! Implementations of the `PluginRepository` port from `plugin-domain`.
//!
//! ## Structure
//!
//! - `repository/` - Repository implementations

pub mod repository;

pub use repository::in_memory::InMemoryPluginRepository;
