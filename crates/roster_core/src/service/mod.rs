//! Core use-case services.
//!
//! # Responsibility
//! - Bundle repository calls into the entry points the presentation shell uses.
//! - Keep the shell decoupled from SQL and store wiring.

pub mod roster_service;
