//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, doctor assignment and registry calls into
//!   use-case level APIs.
//! - Keep UI/FFI layers decoupled from registry details.

pub mod admission_service;
