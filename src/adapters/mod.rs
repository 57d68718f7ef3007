//! Infrastructure adapters. Implement ports.
//!
//! Record sources and the terminal UI. Map errors to DomainError.

pub mod source;
pub mod ui;
