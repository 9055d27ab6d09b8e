//! Core functionality for the service
//!
//! This module contains the business logic: the user model, the concurrent
//! bulk loader and the host stress primitives behind the tuning endpoints.

pub mod bulk_load;
pub mod models;
pub mod tuning;
