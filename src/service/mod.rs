//! Service layer module.
//!
//! Contains the draw workflow and reveal planning built on the sampling engine.

pub mod draw;
pub mod reveal;

pub use draw::DrawService;
pub use reveal::RevealPlanner;
