//! Interleave - Even/Odd Plane Merger
//!
//! Merges two equal-length 8-bit files into one file of twice the size,
//! alternating bytes from each. This rebuilds 16-bit wide data (audio
//! samples, tile graphics, ROM images) that was stored as two separate
//! byte planes.
//!
//! # Architecture
//!
//! A single linear pipeline:
//! - `engine::io`: load both planes, probe and write the output
//! - `engine::interleave`: the fixed-stride merge and its inverse
//! - `cli::commands`: the driver that sequences the stages

pub mod cli;
pub mod engine;
pub mod error;

pub use error::{FileError, InterleaveError, Result};
