//! Steps of the compose pipeline

pub mod step;

pub use step::Step;
