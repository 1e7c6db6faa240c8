//! Request handlers.

pub mod draw;
pub mod health;
