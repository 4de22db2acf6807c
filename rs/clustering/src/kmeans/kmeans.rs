use log::debug;

use crate::config::KMeansConfig;
use crate::error::{Error, Result};
use crate::kmeans::observer::{IterationObserver, LogObserver};
use crate::kmeans::seeder::KMeansPlusPlusSeeder;
use crate::l2::L2DistanceCalculator;

/// Output of a successful fit.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansResult {
    pub dimension: usize,

    // Flattened centroids, `num_clusters * dimension` values
    pub centroids: Vec<f32>,

    // One label per data point, parallel to the fitted dataset
    pub assignments: Vec<usize>,

    // Number of assign/update rounds executed
    pub num_iterations: usize,

    // Whether the tolerance was met before hitting `max_iteration`
    pub converged: bool,

    // Largest centroid displacement of the last round
    pub shift: f64,

    // Sum of squared distances from each point to its assigned centroid
    pub inertia: f64,
}

/// Lloyd's k-means seeded with k-means++.
///
/// A model is not safe to fit from several threads at once. Callers serialize access.
pub struct KMeans {
    config: KMeansConfig,
    distance_calculator: L2DistanceCalculator,
    result: Option<KMeansResult>,
}

impl KMeans {
    pub fn new(num_clusters: usize, max_iteration: usize, tolerance: f32) -> Result<Self> {
        Self::from_config(KMeansConfig {
            num_clusters,
            max_iteration,
            tolerance,
            ..KMeansConfig::new(num_clusters)
        })
    }

    pub fn from_config(config: KMeansConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            distance_calculator: L2DistanceCalculator::new(),
            result: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }

    pub fn num_clusters(&self) -> usize {
        self.config.num_clusters
    }

    /// Fit on `data`, reporting progress through the `log` facade.
    pub fn fit<P: AsRef<[f32]>>(&mut self, data: &[P]) -> Result<()> {
        self.fit_with_observer(data, &LogObserver {})
    }

    /// Fit on `data`. On error the previously fitted state, if any, is left untouched.
    pub fn fit_with_observer<P: AsRef<[f32]>>(
        &mut self,
        data: &[P],
        observer: &dyn IterationObserver,
    ) -> Result<()> {
        let data_points = data.iter().map(|x| x.as_ref()).collect::<Vec<&[f32]>>();
        let dimension = self.validate(&data_points)?;
        let result = self.run_lloyd(&data_points, dimension, observer)?;
        self.result = Some(result);
        Ok(())
    }

    /// Index of the nearest centroid to `point`, lowest index on ties.
    pub fn predict(&self, point: &[f32]) -> Result<usize> {
        let result = self.result.as_ref().ok_or(Error::NotFitted)?;
        if point.len() != result.dimension {
            return Err(Error::DimensionMismatch {
                expected: result.dimension,
                found: point.len(),
            });
        }
        let (label, _) = self
            .distance_calculator
            .nearest(point, &result.centroids, result.dimension);
        Ok(label)
    }

    pub fn result(&self) -> Option<&KMeansResult> {
        self.result.as_ref()
    }

    /// Flattened centroids. Empty until fitted.
    pub fn centroids(&self) -> &[f32] {
        self.result
            .as_ref()
            .map(|r| r.centroids.as_slice())
            .unwrap_or(&[])
    }

    pub fn centroid(&self, cluster_id: usize) -> Option<&[f32]> {
        let result = self.result.as_ref()?;
        result.centroids.chunks_exact(result.dimension).nth(cluster_id)
    }

    /// Labels of the last fitted dataset. Empty until fitted.
    pub fn labels(&self) -> &[usize] {
        self.result
            .as_ref()
            .map(|r| r.assignments.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the shared dimension of the data points.
    fn validate(&self, data_points: &[&[f32]]) -> Result<usize> {
        if data_points.is_empty() {
            return Err(Error::InvalidInput("empty dataset".to_string()));
        }

        let dimension = data_points[0].len();
        if dimension == 0 {
            return Err(Error::InvalidInput(
                "data points must have at least one dimension".to_string(),
            ));
        }
        for (i, data_point) in data_points.iter().enumerate() {
            if data_point.len() != dimension {
                return Err(Error::InvalidInput(format!(
                    "Dimension of data point {} is {}, expected {}",
                    i,
                    data_point.len(),
                    dimension
                )));
            }
        }

        if self.config.num_clusters > data_points.len() {
            return Err(Error::InvalidInput(format!(
                "number of clusters {} cannot be greater than number of data points {}",
                self.config.num_clusters,
                data_points.len()
            )));
        }
        Ok(dimension)
    }

    fn run_lloyd(
        &self,
        data_points: &[&[f32]],
        dimension: usize,
        observer: &dyn IterationObserver,
    ) -> Result<KMeansResult> {
        let mut seeder = KMeansPlusPlusSeeder::new(self.config.seed);
        let mut centroids = seeder.seed(data_points, self.config.num_clusters)?;
        observer.seeding_done(&centroids, dimension);

        let mut assignments = vec![0; data_points.len()];
        let mut num_iterations = 0;
        let mut converged = false;
        let mut shift = 0.0;

        for iteration in 0..self.config.max_iteration {
            num_iterations = iteration + 1;

            for (label, data_point) in assignments.iter_mut().zip(data_points.iter()) {
                *label = self
                    .distance_calculator
                    .nearest(data_point, &centroids, dimension)
                    .0;
            }

            let new_centroids = self.update_centroids(data_points, &assignments, dimension);

            let max_shift = centroids
                .chunks_exact(dimension)
                .zip(new_centroids.chunks_exact(dimension))
                .map(|(old, new)| self.distance_calculator.calculate_squared(old, new))
                .fold(0.0f64, f64::max);
            shift = max_shift.sqrt();

            centroids = new_centroids;
            observer.iteration_done(iteration, shift);

            if shift < self.config.tolerance as f64 {
                converged = true;
                observer.converged(iteration);
                break;
            }
        }

        let inertia = data_points
            .iter()
            .zip(assignments.iter())
            .map(|(data_point, &label)| {
                let centroid = &centroids[label * dimension..(label + 1) * dimension];
                self.distance_calculator
                    .calculate_squared(data_point, centroid)
            })
            .sum::<f64>();

        Ok(KMeansResult {
            dimension,
            centroids,
            assignments,
            num_iterations,
            converged,
            shift,
            inertia,
        })
    }

    /// Mean of each cluster. A cluster with no points is reset to the data point at
    /// `cluster_id % num_data_points`, which may place it poorly or on top of another cluster.
    fn update_centroids(
        &self,
        data_points: &[&[f32]],
        assignments: &[usize],
        dimension: usize,
    ) -> Vec<f32> {
        let num_clusters = self.config.num_clusters;
        let mut cluster_sizes = vec![0usize; num_clusters];
        // Sums are kept in f64 so large coordinates do not overflow before dividing.
        let mut sums = vec![0.0f64; num_clusters * dimension];

        for (data_point, &label) in data_points.iter().zip(assignments.iter()) {
            cluster_sizes[label] += 1;
            sums[label * dimension..(label + 1) * dimension]
                .iter_mut()
                .zip(data_point.iter())
                .for_each(|(sum, &x)| *sum += x as f64);
        }

        let mut centroids = vec![0.0f32; num_clusters * dimension];
        for (cluster_id, centroid) in centroids.chunks_exact_mut(dimension).enumerate() {
            let size = cluster_sizes[cluster_id];
            if size == 0 {
                debug!("Cluster {} is empty, reinitializing from data", cluster_id);
                centroid.copy_from_slice(data_points[cluster_id % data_points.len()]);
            } else {
                let sum = &sums[cluster_id * dimension..(cluster_id + 1) * dimension];
                centroid
                    .iter_mut()
                    .zip(sum.iter())
                    .for_each(|(x, &s)| *x = (s / size as f64) as f32);
            }
        }
        centroids
    }
}
