//! Business logic services.
//!
//! Services sit between HTTP handlers and the record stores. Each one is
//! constructed with the store it works against.

pub mod payment_service;
pub mod subscription_service;
