pub mod catalog;
pub mod config;
pub mod error;
pub mod leads;
pub mod models;
pub mod search;

pub use config::Config;
pub use error::ExtractionError;
pub use models::{format_price, Operation, Property, PropertyType};
