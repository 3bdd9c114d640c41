//! Interleave Engine Module
//!
//! Core of the tool:
//! - Byte buffer ownership
//! - Binary file I/O with classified errors
//! - Even/odd plane interleaving

pub mod buffer;
pub mod interleave;
pub mod io;

pub use buffer::ByteBuffer;
pub use interleave::{deinterleave, interleave};
pub use io::{file_exists, load_binary_file, save_binary_file};
