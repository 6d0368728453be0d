pub mod errors;
pub mod locale;
