use crate::pathfinding::PathResult;
use crate::records::ProductionId;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
    pub path_count: usize,
    pub connections: Vec<JsonConnection>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonConnection {
    pub from: String,
    pub to: String,
    pub productions: Vec<JsonProduction>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonProduction {
    pub id: String,
    pub title: String,
}

/// Renders a search result; production titles come from `titles`, falling
/// back to the id when unknown.
pub fn create_json_output(
    result: &PathResult,
    titles: &FxHashMap<ProductionId, String>,
) -> JsonOutput {
    let connections = result
        .connections()
        .iter()
        .map(|connection| JsonConnection {
            from: connection.from.to_string(),
            to: connection.to.to_string(),
            productions: connection
                .productions
                .iter()
                .map(|id| JsonProduction {
                    id: id.to_string(),
                    title: titles
                        .get(id)
                        .cloned()
                        .unwrap_or_else(|| id.to_string()),
                })
                .collect(),
        })
        .collect();

    JsonOutput {
        query: JsonQuery {
            from: result.start().to_string(),
            to: result.end().to_string(),
        },
        result: JsonResult {
            found: result.is_found(),
            distance: result.distance(),
            path_count: result.path_count(),
            connections,
        },
    }
}
