pub mod client;
pub mod controller;
pub mod model;
