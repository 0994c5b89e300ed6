//! # Workflows Module
//!
//! High-level entry points that run the whole ordering pipeline.
//!
//! - **Ordering Workflow** ([`order`]) - Encodes every name, resolves its structure
//!   prediction through the cache or the prediction service, scores it, and ranks the
//!   names by score.

pub mod order;
