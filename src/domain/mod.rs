pub mod languages;
pub mod translation;
