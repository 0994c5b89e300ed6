//! # foldrank Core Library
//!
//! A reproducible procedure for ordering a list of names, using a protein structure
//! prediction service as a source of entropy that is hard to predict in advance but
//! identical on every rerun.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that every stage of the pipeline can be
//! tested in isolation.
//!
//! - **[`core`]: The Foundation.** Stateless pieces: the amino-acid alphabet and the
//!   name encoder, the structure prediction model, and the file readers for name lists
//!   and PDB structures.
//!
//! - **[`engine`]: The Logic Core.** Everything that talks to the outside world or holds
//!   state across names: prediction providers, structure stores (the on-disk cache),
//!   the structure client, confidence scoring, ranking and progress reporting.
//!
//! - **[`workflows`]: The Public API.** The end-to-end ordering workflow that ties the
//!   `core` and `engine` layers together.

pub mod core;
pub mod engine;
pub mod workflows;
