pub mod error;
pub mod logger;
pub mod params;
pub mod validation;
