pub mod config;
pub mod error;
pub mod kmeans;
pub mod l2;
pub mod synthetic;

pub use config::KMeansConfig;
pub use error::{Error, Result};
pub use kmeans::kmeans::KMeans;
pub use kmeans::observer::{IterationObserver, LogObserver, NoOpObserver};
