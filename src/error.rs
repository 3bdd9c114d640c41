//! Error handling for interleave
//!
//! File operations report a [`FileError`] classification. The CLI driver
//! wraps those into [`InterleaveError`], which is the only type that turns
//! into a user-facing message.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for interleave operations
pub type Result<T> = std::result::Result<T, InterleaveError>;

/// Classified outcome of a failed load or save
#[derive(Error, Debug)]
pub enum FileError {
    #[error("cannot open file: {source}")]
    OpenFailed {
        #[source]
        source: std::io::Error,
    },

    #[error("file is empty")]
    SizeInvalid,

    #[error("cannot allocate {bytes} bytes")]
    AllocationFailed { bytes: u64 },

    #[error("incomplete transfer: {actual} of {expected} bytes")]
    IncompleteTransfer {
        expected: usize,
        actual: usize,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl FileError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            FileError::OpenFailed { .. } => "OPEN_FAILED",
            FileError::SizeInvalid => "SIZE_INVALID",
            FileError::AllocationFailed { .. } => "ALLOCATION_FAILED",
            FileError::IncompleteTransfer { .. } => "INCOMPLETE_TRANSFER",
        }
    }
}

/// Errors that stop the interleave pipeline
#[derive(Error, Debug)]
pub enum InterleaveError {
    #[error("Insufficient arguments: expected an even file and an odd file")]
    InsufficientArguments,

    #[error("Can't read file `{}'.", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: FileError,
    },

    #[error("Files are not the same size ({even} and {odd} bytes).")]
    SizeMismatch { even: usize, odd: usize },

    #[error("Output file `{}' already exists.", .path.display())]
    OutputAlreadyExists { path: PathBuf },

    #[error("Can't allocate memory for output ({bytes} bytes).")]
    OutputAllocationFailed { bytes: u64 },

    #[error("Can't write file `{}'.", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: FileError,
    },

    #[error("Interleaved data has an odd length ({len} bytes).")]
    OddLength { len: usize },
}

impl InterleaveError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            InterleaveError::InsufficientArguments => "INSUFFICIENT_ARGUMENTS",
            InterleaveError::Load { .. } => "LOAD_FAILED",
            InterleaveError::SizeMismatch { .. } => "SIZE_MISMATCH",
            InterleaveError::OutputAlreadyExists { .. } => "OUTPUT_ALREADY_EXISTS",
            InterleaveError::OutputAllocationFailed { .. } => "OUTPUT_ALLOCATION_FAILED",
            InterleaveError::Save { .. } => "SAVE_FAILED",
            InterleaveError::OddLength { .. } => "ODD_LENGTH",
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            InterleaveError::Load { source, .. } => match source {
                FileError::OpenFailed { .. } => vec![
                    "Check the file path is correct",
                    "Check that the file is readable",
                ],
                FileError::SizeInvalid => vec!["Empty files cannot be interleaved"],
                _ => vec![],
            },
            InterleaveError::SizeMismatch { .. } => vec![
                "Both planes must come from the same dump",
                "Check that neither file was truncated",
            ],
            InterleaveError::OutputAlreadyExists { .. } => vec![
                "Remove or rename the existing file",
                "Pass a different output path as the third argument",
            ],
            InterleaveError::Save { .. } => vec![
                "Check that the output directory exists and is writable",
                "Free up disk space",
            ],
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = InterleaveError::OutputAlreadyExists {
            path: PathBuf::from("output.bin"),
        };
        assert_eq!(err.error_code(), "OUTPUT_ALREADY_EXISTS");
        assert_eq!(FileError::SizeInvalid.error_code(), "SIZE_INVALID");
    }

    #[test]
    fn test_load_message_names_path() {
        let err = InterleaveError::Load {
            path: PathBuf::from("even.bin"),
            source: FileError::SizeInvalid,
        };
        assert_eq!(err.to_string(), "Can't read file `even.bin'.");
        assert_eq!(err.recovery_suggestions(), vec!["Empty files cannot be interleaved"]);
    }

    #[test]
    fn test_size_mismatch_message() {
        let err = InterleaveError::SizeMismatch { even: 4, odd: 3 };
        assert!(err.to_string().starts_with("Files are not the same size"));
        assert!(!err.recovery_suggestions().is_empty());
    }
}
