//! # Core Module
//!
//! Stateless building blocks of the ordering pipeline.
//!
//! - **Sequences** ([`sequence`]) - The canonical amino-acid alphabet and the encoder that
//!   turns a name into an amplified sequence
//! - **Models** ([`models`]) - The structure prediction and its per-atom confidence records
//! - **File I/O** ([`io`]) - Readers for name lists and PDB structure files

pub mod io;
pub mod models;
pub mod sequence;
