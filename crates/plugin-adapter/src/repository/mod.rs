//! Repository Adapters - PluginRepository implementations

pub mod in_memory;

// TODO: directory-scanning repository (one subdirectory per plugin)
