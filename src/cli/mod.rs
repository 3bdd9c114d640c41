//! CLI Module
//!
//! Positional-argument surface for the interleave tool.

pub mod commands;

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Output path used when no third argument is given
pub const DEFAULT_OUTPUT: &str = "output.bin";

/// Interleave two 8-bit files into a 16-bit file.
#[derive(Parser, Debug, Default)]
#[command(name = "interleave")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File supplying the even-indexed output bytes
    pub even: Option<PathBuf>,

    /// File supplying the odd-indexed output bytes
    pub odd: Option<PathBuf>,

    /// Output file (default: output.bin)
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Build arguments from explicit paths
    pub fn new(even: impl Into<PathBuf>, odd: impl Into<PathBuf>) -> Self {
        Self {
            even: Some(even.into()),
            odd: Some(odd.into()),
            output: None,
        }
    }

    /// Set the output path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Resolve the output path, falling back to [`DEFAULT_OUTPUT`]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}

/// Program name for the usage text, from argv[0] if present
///
/// Non-UTF-8 names are converted lossily.
pub fn program_name(argv0: Option<OsString>) -> String {
    argv0
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "interleave".to_string())
}

/// Usage text shown when fewer than two paths are given
pub fn usage(program: &str) -> String {
    format!(
        "Interleave two 8-bit files into a 16-bit file.\nusage: {} even.bin odd.bin <output>",
        program
    )
}
