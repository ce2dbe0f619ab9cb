use crate::error::IoError;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// Reads `count` consecutive 32-bit floats in platform-native byte order.
pub(crate) fn read_f32s(
    reader: &mut BufReader<File>,
    count: usize,
    path: &Path,
) -> Result<Vec<f32>, IoError> {
    let mut buf = vec![0u8; count * size_of::<f32>()];
    reader.read_exact(&mut buf).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(buf
        .chunks_exact(size_of::<f32>())
        .map(|chunk| f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

/// Reads a single 32-bit signed integer in platform-native byte order.
pub(crate) fn read_i32(reader: &mut BufReader<File>, path: &Path) -> Result<i32, IoError> {
    let mut buf = [0u8; size_of::<i32>()];
    reader.read_exact(&mut buf).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(i32::from_ne_bytes(buf))
}

/// Prints a warning when unread bytes remain after the expected records, which
/// usually signals a mismatch between the file and the declared architecture.
/// Non-fatal; errors while probing the file length are ignored.
pub(crate) fn warn_if_trailing_bytes(reader: &mut BufReader<File>, path: &Path) {
    let Ok(position) = reader.stream_position() else {
        return;
    };
    let Ok(metadata) = reader.get_ref().metadata() else {
        return;
    };
    if metadata.len() > position {
        eprintln!(
            "[Warn] {} bytes remain unread at the end of {}",
            metadata.len() - position,
            path.display()
        );
    }
}
