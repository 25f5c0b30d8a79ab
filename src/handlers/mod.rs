//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params)
//! 2. Calls the matching service
//! 3. Returns HTTP response (JSON, status code)

/// Service health endpoint
pub mod health;
/// Payment history and spending endpoints
pub mod payments;
/// Subscription management endpoints
pub mod subscriptions;
