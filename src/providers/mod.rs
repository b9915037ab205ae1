//! Concrete keyword-data provider implementations.

pub mod dataforseo;

pub use dataforseo::DataForSeoClient;
