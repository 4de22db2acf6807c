use crate::error::{Error, Result};

/// Squared euclidean distance. Both seeding and Lloyd iterations go through this calculator so
/// the two never disagree on the metric.
#[derive(Debug, Default, Clone, Copy)]
pub struct L2DistanceCalculator {}

impl L2DistanceCalculator {
    pub fn new() -> Self {
        Self {}
    }

    /// Caller guarantees `a.len() == b.len()`. Accumulates in `f64`, which cannot overflow for
    /// finite `f32` coordinates.
    pub fn calculate_squared(&self, a: &[f32], b: &[f32]) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(&x, &y)| (x as f64 - y as f64).powi(2))
            .sum::<f64>()
    }

    /// Index of the nearest centroid in a flattened centroid buffer. Ties go to the lowest index.
    pub fn nearest(&self, point: &[f32], centroids: &[f32], dimension: usize) -> (usize, f64) {
        let mut best_distance = f64::INFINITY;
        let mut best_id = 0;
        for (centroid_id, centroid) in centroids.chunks_exact(dimension).enumerate() {
            let distance = self.calculate_squared(point, centroid);
            if distance < best_distance {
                best_distance = distance;
                best_id = centroid_id;
            }
        }
        (best_id, best_distance)
    }
}

/// Checked squared euclidean distance between two points.
pub fn squared_distance(a: &[f32], b: &[f32]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(L2DistanceCalculator::new().calculate_squared(a, b))
}
