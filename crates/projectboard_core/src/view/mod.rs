//! Lane and item views.
//!
//! # Responsibility
//! - Turn store snapshots into per-lane render output.
//! - Bridge user gestures (toggle click, drag source, drop target) to the store.
//!
//! # Invariants
//! - Views never hold store-owned data; every project they keep is a copy.
//! - A lane re-renders from scratch on every broadcast (no diffing).

pub mod project_item;
pub mod project_list;
