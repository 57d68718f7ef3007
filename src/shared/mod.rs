//! Cross-cutting concerns shared by main and adapters.

pub mod config;
