use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::l2::L2DistanceCalculator;

/// k-means++ initialization. Owns its random source, so two seeders built from the same seed
/// pick the same centroids for the same data.
pub struct KMeansPlusPlusSeeder {
    rng: StdRng,
    distance_calculator: L2DistanceCalculator,
}

impl KMeansPlusPlusSeeder {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            distance_calculator: L2DistanceCalculator::new(),
        }
    }

    /// Pick `num_clusters` points from `data_points` and return copies of them as flattened
    /// centroids. Points are assumed to share the dimension of the first one.
    pub fn seed(&mut self, data_points: &[&[f32]], num_clusters: usize) -> Result<Vec<f32>> {
        if data_points.is_empty() {
            return Err(Error::InvalidInput("empty dataset".to_string()));
        }

        let num_data_points = data_points.len();
        let dimension = data_points[0].len();
        let mut centroids = Vec::with_capacity(num_clusters * dimension);

        let first = self.rng.gen_range(0..num_data_points);
        centroids.extend_from_slice(data_points[first]);

        // Squared distance from each point to its nearest chosen centroid so far.
        let mut min_distances = vec![f64::INFINITY; num_data_points];

        for _ in 1..num_clusters {
            let newest = &centroids[centroids.len() - dimension..];
            let mut total = 0.0f64;
            for (min_distance, data_point) in min_distances.iter_mut().zip(data_points.iter()) {
                let distance = self.distance_calculator.calculate_squared(data_point, newest);
                if distance < *min_distance {
                    *min_distance = distance;
                }
                total += *min_distance;
            }

            let chosen = if total == 0.0 {
                debug!("All points coincide with chosen centroids, picking uniformly");
                self.rng.gen_range(0..num_data_points)
            } else {
                let draw = self.rng.gen_range(0.0..=total);
                Self::pick_weighted(&min_distances, draw)
            };
            centroids.extend_from_slice(data_points[chosen]);
        }

        Ok(centroids)
    }

    /// First point whose cumulative weight reaches `draw`, walking the points in order.
    ///
    /// Two deliberate departures from a plain cumulative walk:
    /// - Zero-weight points are skipped. They already coincide with a chosen centroid, so a draw
    ///   of exactly 0 cannot pick a duplicate seed while unchosen points remain.
    /// - If rounding makes the draw overshoot the final cumulative sum, the last point with
    ///   positive weight is picked rather than the first point of the dataset.
    fn pick_weighted(weights: &[f64], draw: f64) -> usize {
        let mut cumulative = 0.0f64;
        let mut last_weighted = 0;
        for (i, &weight) in weights.iter().enumerate() {
            if weight <= 0.0 {
                continue;
            }
            cumulative += weight;
            last_weighted = i;
            if cumulative >= draw {
                return i;
            }
        }
        last_weighted
    }
}
