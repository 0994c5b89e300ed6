//! Provides input functionality for the files consumed by the pipeline.
//!
//! This module contains the name-list loader and a reader for the PDB payloads
//! returned by the structure prediction service, behind a small trait-based
//! interface for structure formats.

pub mod names;
pub mod pdb;
pub mod traits;
