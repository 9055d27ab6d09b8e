//! Core data models for the service
//!
//! This module defines the data structures shared by storage, the bulk loader and
//! the HTTP layer.

pub mod user;

pub use user::*;
