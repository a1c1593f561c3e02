//! Domains module containing business logic organized by bounded contexts.
//!
//! The server only exposes tools; transports live in [`crate::core`].

pub mod tools;
