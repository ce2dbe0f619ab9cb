use crate::error::IoError;
use crate::utility::warn_if_trailing_bytes;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Shape of a single dense layer: `input` columns in, `output` rows out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerShape {
    pub input: usize,
    pub output: usize,
}

/// Ordered dense-layer shapes parsed from an architecture description file.
///
/// The text format is line-oriented: the first record declares the first dense
/// layer with a fixed input width of 3 (`Dense input shape (3) output shape (H)`),
/// followed by repeating `Sin` / `Dense` record pairs until a dense record with
/// an output width of 1 terminates the description. Sine records carry no
/// parameters; they are consumed to advance the cursor and checked against the
/// preceding dense output, but never stored.
///
/// # Example
/// ```rust
/// use sirensdf::siren::{LayerShape, SirenArchitecture};
///
/// let arch = SirenArchitecture::from_layers(vec![
///     LayerShape { input: 3, output: 64 },
///     LayerShape { input: 64, output: 1 },
/// ]);
/// assert_eq!(arch.layers().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SirenArchitecture {
    layers: Vec<LayerShape>,
}

impl SirenArchitecture {
    /// Builds an architecture directly from a list of dense-layer shapes.
    pub fn from_layers(layers: Vec<LayerShape>) -> Self {
        Self { layers }
    }

    /// Parses an architecture description file.
    ///
    /// # Parameters
    ///
    /// * `path` - Path to the text description file
    ///
    /// # Returns
    ///
    /// * `Result<SirenArchitecture, IoError>` - The parsed dense-layer sequence,
    ///   or an error if the file cannot be opened or a record is malformed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IoError> {
        let path = path.as_ref();
        let mut reader = IoError::load_in_buf_reader(path)?;

        // First record: dense layer with the point dimensionality as input.
        let line = next_record(&mut reader, path)?;
        let (input, output) = parse_record(&line, "Dense", path)?;
        if input != 3 {
            return Err(parse_error(
                path,
                format!("first dense layer must have input shape 3, got {}", input),
            ));
        }

        let mut layers = vec![LayerShape { input, output }];
        let mut previous_output = output;

        while previous_output != 1 {
            // Sine records are parameter-free; read them only to advance the
            // cursor, checking their shape against the preceding dense output.
            let line = next_record(&mut reader, path)?;
            let (sin_input, sin_output) = parse_record(&line, "Sin", path)?;
            if sin_input != previous_output || sin_output != sin_input {
                return Err(parse_error(
                    path,
                    format!(
                        "sine record shape ({}, {}) does not match preceding dense output {}",
                        sin_input, sin_output, previous_output
                    ),
                ));
            }

            let line = next_record(&mut reader, path)?;
            let (input, output) = parse_record(&line, "Dense", path)?;
            if input != previous_output {
                return Err(parse_error(
                    path,
                    format!(
                        "dense layer input {} does not chain with preceding output {}",
                        input, previous_output
                    ),
                ));
            }
            layers.push(LayerShape { input, output });
            previous_output = output;
        }

        warn_if_trailing_bytes(&mut reader, path);
        Ok(Self { layers })
    }

    /// Returns the ordered dense-layer shapes.
    pub fn layers(&self) -> &[LayerShape] {
        &self.layers
    }

    /// Returns the number of dense layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` when no layers have been parsed.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

fn parse_error(path: &Path, message: String) -> IoError {
    IoError::Parse {
        path: path.to_path_buf(),
        message,
    }
}

/// Reads the next non-empty line, failing on end of file.
fn next_record(reader: &mut BufReader<File>, path: &Path) -> Result<String, IoError> {
    let mut line = String::new();
    loop {
        line.clear();
        let bytes = reader.read_line(&mut line).map_err(|source| IoError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if bytes == 0 {
            return Err(parse_error(
                path,
                "unexpected end of file before terminating dense record".to_string(),
            ));
        }
        if !line.trim().is_empty() {
            return Ok(line);
        }
    }
}

/// Parses a record of the form `<kind> input shape (I) output shape (O)`.
fn parse_record(line: &str, kind: &str, path: &Path) -> Result<(usize, usize), IoError> {
    let malformed = || parse_error(path, format!("malformed {} record: {:?}", kind, line.trim_end()));

    let rest = line.trim().strip_prefix(kind).ok_or_else(|| malformed())?;
    let rest = rest
        .strip_prefix(" input shape (")
        .ok_or_else(|| malformed())?;
    let (input, rest) = rest.split_once(')').ok_or_else(|| malformed())?;
    let rest = rest
        .strip_prefix(" output shape (")
        .ok_or_else(|| malformed())?;
    let (output, _) = rest.split_once(')').ok_or_else(|| malformed())?;

    let input = input.trim().parse::<usize>().map_err(|_| malformed())?;
    let output = output.trim().parse::<usize>().map_err(|_| malformed())?;
    Ok((input, output))
}
