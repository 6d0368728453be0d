pub mod catalog;
pub mod services;
pub mod types;
