use log::{debug, info};

/// Receives progress events from `KMeans::fit_with_observer`. All methods default to no-ops.
pub trait IterationObserver {
    /// Called once with the flattened k-means++ seeds.
    fn seeding_done(&self, _centroids: &[f32], _dimension: usize) {}

    /// Called after every assign/update round with the largest centroid displacement.
    fn iteration_done(&self, _iteration: usize, _shift: f64) {}

    /// Called when a round's shift drops below the tolerance. Not called if the iteration cap is
    /// hit first.
    fn converged(&self, _iteration: usize) {}
}

/// Reports progress through the `log` facade. Used by `KMeans::fit`.
pub struct LogObserver {}

impl IterationObserver for LogObserver {
    fn seeding_done(&self, centroids: &[f32], dimension: usize) {
        debug!(
            "Initialization completed with {} centroids.",
            centroids.len() / dimension
        );
    }

    fn iteration_done(&self, iteration: usize, shift: f64) {
        debug!("Iteration {} - max centroid shift = {:.6}", iteration, shift);
    }

    fn converged(&self, iteration: usize) {
        info!("Converged after {} iterations", iteration);
    }
}

/// Ignores every event. Useful in tests and benches.
pub struct NoOpObserver {}

impl IterationObserver for NoOpObserver {}
