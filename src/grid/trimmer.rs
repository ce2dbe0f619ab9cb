use crate::siren::Siren;
use rayon::prelude::*;

/// Keeps exactly the points whose signed distance is non-positive, preserving
/// their relative order.
///
/// A distance of exactly 0 is on the surface and is kept; strictly positive
/// distances lie outside the solid and are dropped. Distances are evaluated in
/// parallel, but the filter runs over the original sequence so survivor order
/// (and with it the primitive index assignment downstream) matches a serial
/// evaluation.
pub fn trim_to_surface(points: &[[f32; 3]], model: &Siren) -> Vec<[f32; 3]> {
    let distances: Vec<f32> = points.par_iter().map(|&p| model.forward(p)).collect();

    points
        .iter()
        .zip(&distances)
        .filter(|&(_, &dist)| dist <= 0.0)
        .map(|(&p, _)| p)
        .collect()
}
