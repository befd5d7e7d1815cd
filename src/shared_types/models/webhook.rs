use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WebhookDefinitions {
    pub webhooks: Vec<Webhook>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    pub webhook_hash: String,
    #[serde(rename = "graphID")]
    pub graph_id: String,
    #[serde(rename = "type")]
    pub webhook_type: String,
}
