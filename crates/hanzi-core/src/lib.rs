pub mod error;
pub mod numbering;
pub mod preprocess;
pub mod types;
