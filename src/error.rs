//! Error types for graph generation and path search.

use crate::records::{ActorId, ProductionId};
use std::time::Duration;

/// A single metadata lookup failed.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The provider has no person with this id.
    #[error("unknown person `{0}`")]
    UnknownPerson(ActorId),

    /// The provider has no production with this id.
    #[error("unknown production `{0}`")]
    UnknownProduction(ProductionId),

    /// The provider could not be reached.
    #[error("metadata provider unavailable: {0}")]
    Unavailable(String),

    /// The lookup did not finish within the configured timeout.
    #[error("lookup timed out after {timeout:?}")]
    TimedOut { timeout: Duration },

    /// The provider returned data that could not be interpreted.
    #[error("malformed metadata: {0}")]
    Malformed(String),
}

/// Graph generation was aborted. No partial graph is produced.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to look up person `{actor}`")]
    PersonLookup {
        actor: ActorId,
        #[source]
        source: LookupError,
    },

    #[error("failed to look up production `{production}`")]
    ProductionLookup {
        production: ProductionId,
        #[source]
        source: LookupError,
    },
}

impl GenerateError {
    /// The lookup failure that aborted generation.
    pub fn lookup_error(&self) -> &LookupError {
        match self {
            Self::PersonLookup { source, .. } | Self::ProductionLookup { source, .. } => source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The actor is not a node of the searched graph.
    #[error("actor `{0}` is not in the graph")]
    UnknownActor(ActorId),
}

/// Invalid generator configuration read from the environment.
#[derive(Debug, thiserror::Error)]
#[error("invalid value `{value}` for {key}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}
