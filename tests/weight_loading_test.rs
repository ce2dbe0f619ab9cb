use approx::assert_relative_eq;
use ndarray::{arr1, arr2};
use sirensdf::IoError;
use sirensdf::siren::{LayerShape, Siren, SirenArchitecture, W0};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn two_layer_architecture() -> SirenArchitecture {
    SirenArchitecture::from_layers(vec![
        LayerShape { input: 3, output: 2 },
        LayerShape { input: 2, output: 1 },
    ])
}

/// Layer 0: 2x3 weights then 2 biases, layer 1: 1x2 weights then 1 bias.
const TWO_LAYER_VALUES: [f32; 11] = [
    1.0, 2.0, 3.0, 4.0, 5.0, 6.0, // layer 0 weights, row-major
    0.5, -0.5, // layer 0 biases
    0.25, -0.25, // layer 1 weights
    1.0, // layer 1 bias
];

fn write_f32s(path: &Path, values: &[f32]) {
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
    fs::write(path, bytes).unwrap();
}

#[test]
fn loading_round_trips_the_binary_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weights.bin");
    write_f32s(&path, &TWO_LAYER_VALUES);

    let model = Siren::from_file(&path, &two_layer_architecture()).unwrap();

    assert_eq!(model.num_layers(), 2);
    assert_eq!(
        model.weights()[0],
        arr2(&[[1.0_f32, 2.0, 3.0], [4.0, 5.0, 6.0]])
    );
    assert_eq!(model.biases()[0], arr1(&[0.5_f32, -0.5]));
    assert_eq!(model.weights()[1], arr2(&[[0.25_f32, -0.25]]));
    assert_eq!(model.biases()[1], arr1(&[1.0_f32]));
}

#[test]
fn loaded_model_evaluates_like_the_hand_computation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weights.bin");
    write_f32s(&path, &TWO_LAYER_VALUES);

    let model = Siren::from_file(&path, &two_layer_architecture()).unwrap();

    // Hidden pre-activations at (1, 0, 0): 1 + 0.5 and 4 - 0.5
    let s0 = (W0 * 1.5_f32).sin();
    let s1 = (W0 * 3.5_f32).sin();
    let expected = 0.25_f32 * s0 + (-0.25_f32) * s1 + 1.0_f32;

    assert_relative_eq!(model.forward([1.0, 0.0, 0.0]), expected, epsilon = 1e-5);
}

#[test]
fn trailing_bytes_warn_but_still_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weights.bin");
    let mut values = TWO_LAYER_VALUES.to_vec();
    values.push(9.0);
    write_f32s(&path, &values);

    let model = Siren::from_file(&path, &two_layer_architecture()).unwrap();
    assert_eq!(model.biases()[1], arr1(&[1.0_f32]));
}

#[test]
fn truncated_file_fails_with_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weights.bin");
    write_f32s(&path, &TWO_LAYER_VALUES[..10]);

    let result = Siren::from_file(&path, &two_layer_architecture());
    assert!(matches!(result, Err(IoError::Read { .. })));
}

#[test]
fn missing_file_fails_with_open_error() {
    let dir = tempdir().unwrap();
    let result = Siren::from_file(dir.path().join("missing.bin"), &two_layer_architecture());
    assert!(matches!(result, Err(IoError::Open { .. })));
}
