//! Authoritative in-memory project state.
//!
//! # Responsibility
//! - Own the ordered project collection and the next-id counter.
//! - Fan out full snapshots to registered listeners after each mutation.
//!
//! # Invariants
//! - The store is the only writable copy of project data.
//! - Every broadcast delivers an owned copy per listener, in registration order.
//! - No broadcast happens for a no-op transition (missing id or same status).

pub mod listener;
pub mod store;
