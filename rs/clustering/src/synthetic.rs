use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::error::{Error, Result};

/// Generate `points_per_center` points around each center with isotropic gaussian noise.
/// Points are grouped by center, in the order the centers are given.
pub fn generate_blobs(
    centers: &[Vec<f32>],
    points_per_center: usize,
    std_dev: f32,
    seed: u64,
) -> Result<Vec<Vec<f32>>> {
    let noise = Normal::new(0.0f32, std_dev)
        .map_err(|e| Error::InvalidInput(format!("invalid noise std dev {}: {}", std_dev, e)))?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(centers.len() * points_per_center);
    for center in centers {
        for _ in 0..points_per_center {
            let point = center
                .iter()
                .map(|&c| c + noise.sample(&mut rng))
                .collect();
            data.push(point);
        }
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_blobs() {
        let centers = vec![vec![0.0, 0.0], vec![5.0, 5.0], vec![-5.0, 5.0]];
        let data = generate_blobs(&centers, 50, 0.5, 123).unwrap();
        assert_eq!(data.len(), 150);

        for (i, point) in data.iter().enumerate() {
            let center = &centers[i / 50];
            assert_eq!(point.len(), 2);
            // 0.5 std dev, 5 sigma is far beyond anything 150 samples produce.
            assert!((point[0] - center[0]).abs() < 2.5);
            assert!((point[1] - center[1]).abs() < 2.5);
        }

        assert_eq!(data, generate_blobs(&centers, 50, 0.5, 123).unwrap());
        assert_ne!(data, generate_blobs(&centers, 50, 0.5, 124).unwrap());
    }

    #[test]
    fn test_generate_blobs_invalid_std_dev() {
        let centers = vec![vec![0.0, 0.0]];
        assert!(matches!(
            generate_blobs(&centers, 10, -1.0, 123),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            generate_blobs(&centers, 10, f32::NAN, 123),
            Err(Error::InvalidInput(_))
        ));
    }
}
