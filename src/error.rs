use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Error types that can occur while evaluating or validating a model
///
/// # Variants
///
/// - `ShapeMismatch` - indicates the loaded weights disagree with the expected layer shapes
/// - `InputValidationError` - indicates the input data provided does not meet the expected format, type, or validation rules
/// - `ProcessingError` - indicates that there is something wrong while processing
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    ShapeMismatch(String),
    InputValidationError(String),
    ProcessingError(String),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::ShapeMismatch(msg) => write!(f, "Architecture mismatch: {}", msg),
            ModelError::InputValidationError(msg) => write!(f, "Input validation error: {}", msg),
            ModelError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl std::error::Error for ModelError {}

/// Input/Output error types that can occur while loading model and dataset files
///
/// # Variants
///
/// - `Open` - the file could not be opened; carries the OS error
/// - `Read` - the file ended before the expected bytes were consumed
/// - `Parse` - a text record or header field did not match the expected format
#[derive(Debug)]
pub enum IoError {
    Open { path: PathBuf, source: std::io::Error },
    Read { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, message: String },
}

impl IoError {
    /// Opens the file at `path` and wraps it in a `BufReader`, mapping an open
    /// failure to `IoError::Open`.
    pub fn load_in_buf_reader<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, IoError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IoError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(BufReader::new(file))
    }
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::Open { path, source } => {
                write!(f, "failed to open file {}: {}", path.display(), source)
            }
            IoError::Read { path, source } => {
                write!(f, "failed to read file {}: {}", path.display(), source)
            }
            IoError::Parse { path, message } => {
                write!(f, "failed to parse file {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::Open { source, .. } | IoError::Read { source, .. } => Some(source),
            IoError::Parse { .. } => None,
        }
    }
}
