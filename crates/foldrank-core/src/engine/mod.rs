//! # Engine Module
//!
//! This module implements the stateful and side-effecting half of the ordering pipeline:
//! turning sequences into structure predictions, scoring them, and ranking the results.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Amplification factor, cache location, and service settings
//! - **Error Handling** ([`error`]) - Engine-specific error types and error propagation
//! - **Providers** ([`provider`]) - The structure prediction capability and its HTTP implementation
//! - **Structure Stores** ([`cache`]) - Content-addressed storage of raw prediction payloads
//! - **Structure Client** ([`client`]) - Cache-first prediction lookups
//! - **Scoring** ([`scoring`]) - Reduction of a prediction to a single confidence score
//! - **Ranking** ([`ranking`]) - Stable descending ordering and its two text renderings
//! - **Progress Monitoring** ([`progress`]) - Progress reporting and user feedback mechanisms

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod progress;
pub mod provider;
pub mod ranking;
pub mod scoring;
