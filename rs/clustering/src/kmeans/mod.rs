pub mod kmeans;
pub mod observer;
pub mod seeder;
