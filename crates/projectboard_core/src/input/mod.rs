//! Project input form and declarative field validation.
//!
//! # Responsibility
//! - Validate raw form values against small declarative rule sets.
//! - Call `ProjectStore::create` only with values that passed validation.
//!
//! # Invariants
//! - The store is never invoked for invalid input.
//! - Field values are cleared only after a successful create.

pub mod form;
pub mod validation;
