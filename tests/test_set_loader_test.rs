use ndarray::{arr1, arr2};
use sirensdf::dataset::SdfTestSet;
use sirensdf::{IoError, ModelError};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_test_set(path: &Path, count: i32, points: &[f32], distances: &[f32]) {
    let mut bytes = count.to_ne_bytes().to_vec();
    bytes.extend(points.iter().flat_map(|v| v.to_ne_bytes()));
    bytes.extend(distances.iter().flat_map(|v| v.to_ne_bytes()));
    fs::write(path, bytes).unwrap();
}

#[test]
fn loading_round_trips_the_binary_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.bin");
    write_test_set(
        &path,
        2,
        &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
        &[0.05, 1.2],
    );

    let test_set = SdfTestSet::from_file(&path).unwrap();

    assert_eq!(test_set.len(), 2);
    assert!(!test_set.is_empty());
    assert_eq!(test_set.points()[[1, 2]], 1.0);
    assert_eq!(test_set.distances()[1], 1.2);

    let samples: Vec<([f32; 3], f32)> = test_set.samples().collect();
    assert_eq!(samples[0], ([0.0, 0.0, 0.0], 0.05));
    assert_eq!(samples[1], ([1.0, 1.0, 1.0], 1.2));
}

#[test]
fn empty_test_set_loads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.bin");
    write_test_set(&path, 0, &[], &[]);

    let test_set = SdfTestSet::from_file(&path).unwrap();
    assert!(test_set.is_empty());
}

#[test]
fn negative_count_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.bin");
    write_test_set(&path, -1, &[], &[]);

    let result = SdfTestSet::from_file(&path);
    assert!(matches!(result, Err(IoError::Parse { .. })));
}

#[test]
fn truncated_file_fails_with_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.bin");
    // Count promises two samples; only the points of the first are present
    write_test_set(&path, 2, &[0.0, 0.0, 0.0], &[]);

    let result = SdfTestSet::from_file(&path);
    assert!(matches!(result, Err(IoError::Read { .. })));
}

#[test]
fn missing_file_fails_with_open_error() {
    let dir = tempdir().unwrap();
    let result = SdfTestSet::from_file(dir.path().join("missing.bin"));
    assert!(matches!(result, Err(IoError::Open { .. })));
}

#[test]
fn trailing_bytes_warn_but_still_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.bin");
    let mut bytes = 1_i32.to_ne_bytes().to_vec();
    for v in [0.5_f32, 0.5, 0.5, 0.1, 7.0] {
        bytes.extend(v.to_ne_bytes());
    }
    fs::write(&path, bytes).unwrap();

    let test_set = SdfTestSet::from_file(&path).unwrap();
    assert_eq!(test_set.len(), 1);
    assert_eq!(test_set.distances()[0], 0.1);
}

#[test]
fn from_parts_rejects_mismatched_shapes() {
    let result = SdfTestSet::from_parts(arr2(&[[0.0_f32, 0.0]]), arr1(&[0.0_f32]));
    assert!(matches!(result, Err(ModelError::InputValidationError(_))));

    let result = SdfTestSet::from_parts(arr2(&[[0.0_f32, 0.0, 0.0]]), arr1(&[0.0_f32, 1.0]));
    assert!(matches!(result, Err(ModelError::InputValidationError(_))));
}
