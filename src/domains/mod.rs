//! Domains module containing business logic organized by bounded contexts.
//!
//! The transit server exposes a single domain, tools, split into the
//! `agencies`, `routes` and `stops` groups.

pub mod tools;
