//! Board use-case services.
//!
//! # Responsibility
//! - Wire store, input form and lanes the way the board starts up.
//! - Route user gestures to the right view so hosts stay thin.

pub mod board_service;
