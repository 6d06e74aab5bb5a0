//! Simulated backend collaborators.
//!
//! There is no real backend in this build: authentication, payment and
//! profile submission resolve after a short timer, and the address
//! lookup reads a canned table. Each call site disables its submit
//! control while a call is pending, so at most one simulated call per
//! user action is ever in flight.

pub mod address;
pub mod auth;
pub mod payment;
pub mod profile;
