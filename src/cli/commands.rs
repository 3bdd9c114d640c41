//! CLI Command Implementation
//!
//! Runs the load, validate, interleave, write pipeline. Each stage either
//! advances or stops the run with an [`InterleaveError`]; nothing is
//! retried and nothing is written after a failure.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::cli::{usage, Cli};
use crate::engine::{file_exists, interleave, load_binary_file, save_binary_file, ByteBuffer};
use crate::error::{InterleaveError, Result};

/// Pipeline stages, in the order a successful run passes through them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    ArgsChecked,
    InputsLoaded,
    SizesValidated,
    Merged,
    OutputPathResolved,
    OutputChecked,
    Written,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "Start",
            Stage::ArgsChecked => "ArgsChecked",
            Stage::InputsLoaded => "InputsLoaded",
            Stage::SizesValidated => "SizesValidated",
            Stage::Merged => "Merged",
            Stage::OutputPathResolved => "OutputPathResolved",
            Stage::OutputChecked => "OutputChecked",
            Stage::Written => "Written",
            Stage::Done => "Done",
        };
        write!(f, "{}", name)
    }
}

/// How a run finished when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Too few arguments; usage was printed and no file was touched
    Usage,
    /// The merged file was written
    Written {
        input_size: usize,
        output_size: usize,
        path: PathBuf,
    },
}

/// Run the whole pipeline, writing progress messages to `out`
///
/// # Arguments
/// * `cli` - Parsed arguments
/// * `program` - Program name shown in the usage text
/// * `out` - Destination for console messages (stdout in the binary).
///   Failures writing to it are logged and do not stop the run.
///
/// # Errors
/// * `Load` - Either input could not be loaded
/// * `SizeMismatch` - The inputs differ in length
/// * `OutputAllocationFailed` - No memory for the merged buffer
/// * `OutputAlreadyExists` - Something already exists at the output path
/// * `Save` - The merged buffer could not be written
pub fn run<W: Write>(cli: &Cli, program: &str, out: &mut W) -> Result<Outcome> {
    enter(Stage::Start);

    let (even_path, odd_path) = match input_paths(cli) {
        Ok(paths) => paths,
        Err(InterleaveError::InsufficientArguments) => {
            say(out, format_args!("{}", usage(program)));
            return Ok(Outcome::Usage);
        }
        Err(e) => return Err(e),
    };
    enter(Stage::ArgsChecked);

    let even = load(even_path)?;
    let odd = load(odd_path)?;
    enter(Stage::InputsLoaded);

    if even.len() != odd.len() {
        return Err(InterleaveError::SizeMismatch {
            even: even.len(),
            odd: odd.len(),
        });
    }
    enter(Stage::SizesValidated);
    say(out, format_args!("Input size: {} bytes.", even.len()));

    let merged = interleave(even.as_slice(), odd.as_slice())?;
    let input_size = even.len();
    drop(even);
    drop(odd);
    enter(Stage::Merged);

    let output_path = cli.output_path();
    enter(Stage::OutputPathResolved);

    if file_exists(&output_path) {
        info!("Refusing to overwrite {}", output_path.display());
        return Err(InterleaveError::OutputAlreadyExists { path: output_path });
    }
    enter(Stage::OutputChecked);

    say(out, format_args!("Output size: {} bytes.", merged.len()));
    say(
        out,
        format_args!("Writing result to file `{}'.", output_path.display()),
    );

    save_binary_file(merged.as_slice(), &output_path).map_err(|source| {
        InterleaveError::Save {
            path: output_path.clone(),
            source,
        }
    })?;
    enter(Stage::Written);

    info!(
        "Interleaved {} + {} bytes into {}",
        input_size,
        input_size,
        output_path.display()
    );
    enter(Stage::Done);

    Ok(Outcome::Written {
        input_size,
        output_size: merged.len(),
        path: output_path,
    })
}

/// Both input paths, or `InsufficientArguments`
fn input_paths(cli: &Cli) -> Result<(&Path, &Path)> {
    match (&cli.even, &cli.odd) {
        (Some(even), Some(odd)) => Ok((even.as_path(), odd.as_path())),
        _ => Err(InterleaveError::InsufficientArguments),
    }
}

fn load(path: &Path) -> Result<ByteBuffer> {
    load_binary_file(path).map_err(|source| InterleaveError::Load {
        path: path.to_path_buf(),
        source,
    })
}

/// Write one console line; a failing console never stops the pipeline
fn say<W: Write>(out: &mut W, line: fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{}", line) {
        debug!("Console write failed: {}", e);
    }
}

fn enter(stage: Stage) {
    debug!("Pipeline stage: {}", stage);
}
