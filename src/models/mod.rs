//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables.

/// Recurring subscription model
pub mod subscription;
/// Payment history model
pub mod payment;
