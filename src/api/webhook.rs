use serde::Serialize;

use crate::shared_types::{ApiResponse, WebhookDefinitions};

use super::{validator::ValidateField, CommandError, Pixela};

#[derive(Serialize, Debug)]
struct CreateWebhookReq<'a> {
    #[serde(rename = "graphID")]
    graph_id: &'a str,
    #[serde(rename = "type")]
    webhook_type: &'a str,
}

impl Pixela {
    /// the returned envelope carries the new hash in `webhook_hash`
    pub async fn create_webhook(
        &self,
        graph_id: &str,
        webhook_type: &str,
    ) -> Result<ApiResponse, CommandError> {
        const OP: &str = "webhook create";

        self.validate(
            OP,
            &ValidateField {
                graph_id: Some(graph_id),
                webhook_type: Some(webhook_type),
                ..Default::default()
            },
        )?;

        let payload = Self::encode(
            OP,
            &CreateWebhookReq {
                graph_id,
                webhook_type,
            },
        )?;

        let body = self
            .post(self.user_endpoint(&["webhooks"]), Some(payload))
            .await
            .map_err(|err| CommandError::new(OP, err))?;

        Self::decode(OP, &body)
    }

    pub async fn get_webhook_definitions(&self) -> Result<WebhookDefinitions, CommandError> {
        const OP: &str = "webhook get";

        let body = self
            .get(self.user_endpoint(&["webhooks"]))
            .await
            .map_err(|err| CommandError::new(OP, err))?;

        Self::decode(OP, &body)
    }

    pub async fn invoke_webhook(&self, webhook_hash: &str) -> Result<ApiResponse, CommandError> {
        const OP: &str = "webhook invoke";

        let body = self
            .post(self.user_endpoint(&["webhooks", webhook_hash]), None)
            .await
            .map_err(|err| CommandError::new(OP, err))?;

        Self::decode(OP, &body)
    }

    pub async fn delete_webhook(&self, webhook_hash: &str) -> Result<ApiResponse, CommandError> {
        const OP: &str = "webhook delete";

        let body = self
            .delete(self.user_endpoint(&["webhooks", webhook_hash]))
            .await
            .map_err(|err| CommandError::new(OP, err))?;

        Self::decode(OP, &body)
    }
}
