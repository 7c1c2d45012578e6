//! # Hybrid Objective Planner - Common Library
//!
//! Shared code for the planner service including:
//! - Error taxonomy
//! - Bootstrap configuration and data-folder resolution
//! - Objective catalog (the set of valid identifiers)
//! - Record indexes over the precomputed result datasets
//! - Request normalization (canonical objective-set keys)
//! - Response formatting

pub mod axes;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod index;
pub mod normalize;

pub use error::{Error, Result};
pub use normalize::CanonicalKey;
