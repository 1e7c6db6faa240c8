//! Sampling engine.
//!
//! Pure functions for turning a draw request into an unbiased set of distinct
//! numbers. Callers pass the entropy source in; production code uses the
//! operating system generator ([`rand::rngs::OsRng`]) and tests use seeded
//! generators.
//!
//! The expected call order is [`parse_exclusions`], [`validate`], [`draw`].

pub mod draw;
pub mod exclusion;
pub mod uniform;
pub mod validate;

pub use draw::{candidate_pool, draw, partial_shuffle};
pub use exclusion::parse_exclusions;
pub use uniform::{byte_width, generate_uniform, rejection_bound};
pub use validate::{available_count, parse_integer, validate};
