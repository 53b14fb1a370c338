pub mod aggregator;
pub mod analyzer;
pub mod config;
pub mod graph;
pub mod profiles;
pub mod resolver;
pub mod scoring;

pub use aggregator::*;
pub use analyzer::*;
pub use config::*;
pub use profiles::CharacteristicVector;
pub use scoring::*;
