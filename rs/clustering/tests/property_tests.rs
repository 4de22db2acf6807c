use clustering::l2::squared_distance;
use clustering::{KMeans, NoOpObserver};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_kmeans_all_assigned(
        data in prop::collection::vec(prop::collection::vec(-10.0f32..10.0, 2), 1..30),
        k in 1usize..5,
        max_iteration in 1usize..20,
    ) {
        // Skip if k > n
        if k <= data.len() {
            let mut kmeans = KMeans::new(k, max_iteration, 1e-4).unwrap();
            kmeans.fit_with_observer(&data, &NoOpObserver {}).unwrap();

            let result = kmeans.result().unwrap();
            prop_assert_eq!(kmeans.labels().len(), data.len());
            prop_assert_eq!(kmeans.centroids().len(), k * 2);
            prop_assert!(result.num_iterations >= 1);
            prop_assert!(result.num_iterations <= max_iteration);
            prop_assert!(result.shift >= 0.0);
            for &l in kmeans.labels() {
                prop_assert!(l < k);
            }
        }
    }

    #[test]
    fn prop_squared_distance_symmetric(
        pairs in prop::collection::vec((-100.0f32..100.0, -100.0f32..100.0), 1..16)
    ) {
        let a = pairs.iter().map(|p| p.0).collect::<Vec<f32>>();
        let b = pairs.iter().map(|p| p.1).collect::<Vec<f32>>();
        let ab = squared_distance(&a, &b).unwrap();
        prop_assert_eq!(ab, squared_distance(&b, &a).unwrap());
        prop_assert!(ab >= 0.0);
        prop_assert_eq!(squared_distance(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn prop_kmeans_deterministic(
        data in prop::collection::vec(prop::collection::vec(-10.0f32..10.0, 3), 4..30),
        seed in any::<u64>(),
    ) {
        let mut a = KMeans::new(4, 50, 1e-4).unwrap().with_seed(seed);
        let mut b = KMeans::new(4, 50, 1e-4).unwrap().with_seed(seed);
        a.fit_with_observer(&data, &NoOpObserver {}).unwrap();
        b.fit_with_observer(&data, &NoOpObserver {}).unwrap();
        prop_assert_eq!(a.result(), b.result());
    }

    #[test]
    fn prop_centroids_finite_with_duplicates(
        // A tiny integer grid forces duplicate points, duplicate seeds and empty clusters.
        data in prop::collection::vec(prop::collection::vec(0u8..3, 2), 1..12),
        k in 1usize..12,
    ) {
        let data = data
            .iter()
            .map(|p| p.iter().map(|&x| x as f32).collect::<Vec<f32>>())
            .collect::<Vec<_>>();
        if k <= data.len() {
            let mut kmeans = KMeans::new(k, 100, 1e-4).unwrap();
            kmeans.fit_with_observer(&data, &NoOpObserver {}).unwrap();
            prop_assert!(kmeans.centroids().iter().all(|x| x.is_finite()));
            for point in &data {
                prop_assert!(kmeans.predict(point).unwrap() < k);
            }
        }
    }
}
