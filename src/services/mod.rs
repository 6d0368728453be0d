pub mod classifier;
pub mod ranking;
pub mod tags;
