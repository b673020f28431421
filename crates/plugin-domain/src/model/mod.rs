//! Domain Models - Value Objects

pub mod location;
