use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::report::write_labeled_points_to_file;
use clustering::synthetic::generate_blobs;
use clustering::{KMeans, KMeansConfig};
use log::info;

#[derive(Parser, Debug)]
#[command(version, about = "Cluster a synthetic 2-D dataset with k-means", long_about = None)]
struct Args {
    /// YAML file holding a KMeansConfig. Overrides the k-means flags below.
    #[arg(long)]
    config_path: Option<PathBuf>,

    #[arg(long, default_value_t = 3)]
    num_clusters: usize,

    #[arg(long, default_value_t = 100)]
    max_iteration: usize,

    #[arg(long, default_value_t = 1e-3)]
    tolerance: f32,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    // Synthetic data
    #[arg(long, default_value_t = 100)]
    points_per_cluster: usize,

    #[arg(long, default_value_t = 0.5)]
    noise: f32,

    #[arg(long, default_value_t = 123)]
    data_seed: u64,

    #[arg(short, long, default_value = "clusters.csv")]
    output_path: PathBuf,
}

fn load_config(args: &Args) -> Result<KMeansConfig> {
    match &args.config_path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
            Ok(serde_yaml::from_str(&contents)?)
        }
        None => Ok(KMeansConfig {
            num_clusters: args.num_clusters,
            max_iteration: args.max_iteration,
            tolerance: args.tolerance,
            seed: args.seed,
        }),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args)?;
    info!("K-means config: {:?}", config);

    let centers = vec![vec![0.0, 0.0], vec![5.0, 5.0], vec![-5.0, 5.0]];
    let data = generate_blobs(&centers, args.points_per_cluster, args.noise, args.data_seed)?;

    let mut kmeans = KMeans::from_config(config)?;
    kmeans.fit(&data)?;

    for cluster_id in 0..kmeans.num_clusters() {
        if let Some(centroid) = kmeans.centroid(cluster_id) {
            info!("Cluster {}: {:?}", cluster_id, centroid);
        }
    }
    if let Some(result) = kmeans.result() {
        info!(
            "Iterations: {}, converged: {}, inertia: {:.4}",
            result.num_iterations, result.converged, result.inertia
        );
    }

    write_labeled_points_to_file(&args.output_path, &data, kmeans.labels())?;
    info!("Saved clusters to {}", args.output_path.display());
    Ok(())
}
