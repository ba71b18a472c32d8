//! Command handlers.

pub mod stamp;
