use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// response of `GET /v1/users/{username}/graphs`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GraphDefinitions {
    pub graphs: Vec<Graph>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
    pub id: String,
    pub name: String,
    pub unit: String,
    #[serde(rename = "type")]
    pub num_type: String,
    pub color: String,
    pub timezone: Option<String>,
    #[serde(rename = "purgeCacheURLs")]
    pub purge_cache_urls: Option<Vec<String>>,
    pub self_sufficient: Option<String>,
}

/// response of `GET /v1/users/{username}/graphs/{graphID}/pixels`, dates as `yyyyMMdd`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PixelsDateList {
    pub pixels: Vec<String>,
}
