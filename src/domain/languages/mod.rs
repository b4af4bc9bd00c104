pub mod registry;

pub use registry::LanguageEntry;
