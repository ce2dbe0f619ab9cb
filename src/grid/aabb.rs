/// One padded axis-aligned box handed to the acceleration-structure builder.
///
/// `primitive_index` is the 0-based position of the originating point in the
/// trimmed sequence; the builder uses it to refer back to the primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub primitive_index: u32,
    pub aabb_min: [f32; 3],
    pub aabb_max: [f32; 3],
}

/// Global bounding extent accumulated over every generated element.
///
/// Starts inverted (`min = +inf`, `max = -inf`) and only ever grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Extent {
    /// Creates an empty (inverted) extent that any expansion will replace.
    pub fn empty() -> Self {
        Self {
            min: [f32::INFINITY; 3],
            max: [f32::NEG_INFINITY; 3],
        }
    }

    /// Expands the extent to cover both corners of a box.
    pub fn expand(&mut self, aabb_min: [f32; 3], aabb_max: [f32; 3]) {
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(aabb_min[axis]);
            self.max[axis] = self.max[axis].max(aabb_max[axis]);
        }
    }

    /// Returns `true` while no box has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.min[0] > self.max[0]
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::empty()
    }
}

/// Converts each surviving grid point into a padded box and accumulates the
/// global extent.
///
/// Each point `p` becomes the box `[p - spacing/2 - eps, p + spacing/2 + eps]`
/// with a sequential 0-based `primitive_index`. `eps` guarantees adjacent
/// grid-cell boxes overlap so the conservative covering has no gaps when the
/// builder treats boxes as disjoint primitives; it is an independent tunable,
/// not derived from `spacing`.
pub fn generate_elements(
    points: &[[f32; 3]],
    spacing: f32,
    eps: f32,
) -> (Vec<Element>, Extent) {
    let half = spacing / 2.0;
    let mut extent = Extent::empty();

    let elements = points
        .iter()
        .enumerate()
        .map(|(index, p)| {
            let aabb_min = [
                p[0] - half - eps,
                p[1] - half - eps,
                p[2] - half - eps,
            ];
            let aabb_max = [
                p[0] + half + eps,
                p[1] + half + eps,
                p[2] + half + eps,
            ];
            extent.expand(aabb_min, aabb_max);
            Element {
                primitive_index: index as u32,
                aabb_min,
                aabb_max,
            }
        })
        .collect();

    (elements, extent)
}
