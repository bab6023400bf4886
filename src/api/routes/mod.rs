//! API route handlers, grouped by resource

pub mod charts;
pub mod features;
pub mod health;
pub mod insights;
pub mod parks;
pub mod reviews;
pub mod summary;
