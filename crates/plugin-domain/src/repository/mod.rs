//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! ```text
//! Domain Layer               │  Adapter Layer
//! ───────────────────────────┼────────────────────────────
//! trait PluginRepository     │  InMemoryPluginRepository
//!   fn list_locations()      │  (directory scanners, ...)
//!   fn delete()              │
//! CompoundPluginRepository   │
//! ```

pub mod compound;
pub mod plugin_repository;
