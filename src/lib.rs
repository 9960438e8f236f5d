pub mod error;
pub mod generator;
pub mod generator_config;
pub mod graph;
pub mod json_output;
pub mod pathfinding;
pub mod records;
pub mod source;

// Re-export commonly used items
pub use error::{ConfigError, GenerateError, LookupError, SearchError};
pub use generator::GraphGenerator;
pub use generator_config::GeneratorConfig;
pub use graph::{ActorGraph, ProductionSet};
pub use pathfinding::{Connection, PathResult, search};
pub use records::{ActorId, Person, PersonStub, Production, ProductionId, ProductionStub};
pub use source::{InMemorySource, MetadataSource};
