pub mod builder;
pub mod hsk;
pub mod loader;


pub use builder::{RawFields, RecordBuilder, build_document, parse_line};
pub use hsk::HskLevel;
pub use loader::HskLoader;
