//! Board domain model.
//!
//! # Responsibility
//! - Define the project record shared by store, lanes and item views.
//! - Define the two-lane status enumeration.
//!
//! # Invariants
//! - Every project is identified by a store-assigned `ProjectId`.
//! - Projects are never deleted; only `status` changes after creation.

pub mod project;
