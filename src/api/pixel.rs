use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::shared_types::{ApiResponse, Pixel};

use super::{non_empty, validator::ValidateField, CommandError, Pixela};

#[skip_serializing_none]
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CreatePixelReq<'a> {
    date: &'a str,
    quantity: &'a str,
    optional_data: Option<&'a str>,
}

#[skip_serializing_none]
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct UpdatePixelReq<'a> {
    quantity: &'a str,
    optional_data: Option<&'a str>,
}

impl Pixela {
    /// records `quantity` for `date` (yyyyMMdd), overwriting whatever was there
    pub async fn create_pixel(
        &self,
        graph_id: &str,
        date: &str,
        quantity: &str,
        optional_data: Option<&str>,
    ) -> Result<ApiResponse, CommandError> {
        const OP: &str = "pixel create";

        self.validate(
            OP,
            &ValidateField {
                graph_id: Some(graph_id),
                date: Some(date),
                quantity: Some(quantity),
                optional_data,
                ..Default::default()
            },
        )?;

        let payload = Self::encode(
            OP,
            &CreatePixelReq {
                date,
                quantity,
                optional_data: non_empty(optional_data),
            },
        )?;

        let body = self
            .post(self.user_endpoint(&["graphs", graph_id]), Some(payload))
            .await
            .map_err(|err| CommandError::new(OP, err))?;

        Self::decode(OP, &body)
    }

    pub async fn get_pixel(&self, graph_id: &str, date: &str) -> Result<Pixel, CommandError> {
        const OP: &str = "pixel get";

        self.validate(
            OP,
            &ValidateField {
                graph_id: Some(graph_id),
                date: Some(date),
                ..Default::default()
            },
        )?;

        let body = self
            .get(self.user_endpoint(&["graphs", graph_id, date]))
            .await
            .map_err(|err| CommandError::new(OP, err))?;

        Self::decode(OP, &body)
    }

    pub async fn update_pixel(
        &self,
        graph_id: &str,
        date: &str,
        quantity: &str,
        optional_data: Option<&str>,
    ) -> Result<ApiResponse, CommandError> {
        const OP: &str = "pixel update";

        self.validate(
            OP,
            &ValidateField {
                graph_id: Some(graph_id),
                date: Some(date),
                quantity: Some(quantity),
                optional_data,
                ..Default::default()
            },
        )?;

        let payload = Self::encode(
            OP,
            &UpdatePixelReq {
                quantity,
                optional_data: non_empty(optional_data),
            },
        )?;

        let body = self
            .put(self.user_endpoint(&["graphs", graph_id, date]), Some(payload))
            .await
            .map_err(|err| CommandError::new(OP, err))?;

        Self::decode(OP, &body)
    }

    pub async fn increment_pixel(&self, graph_id: &str) -> Result<ApiResponse, CommandError> {
        self.step_pixel("pixel inc", graph_id, "increment").await
    }

    pub async fn decrement_pixel(&self, graph_id: &str) -> Result<ApiResponse, CommandError> {
        self.step_pixel("pixel dec", graph_id, "decrement").await
    }

    /// today's pixel of the graph, moved one step in `direction`; no request body
    async fn step_pixel(
        &self,
        operation: &'static str,
        graph_id: &str,
        direction: &str,
    ) -> Result<ApiResponse, CommandError> {
        self.validate(
            operation,
            &ValidateField {
                graph_id: Some(graph_id),
                ..Default::default()
            },
        )?;

        let body = self
            .put(self.user_endpoint(&["graphs", graph_id, direction]), None)
            .await
            .map_err(|err| CommandError::new(operation, err))?;

        Self::decode(operation, &body)
    }

    pub async fn delete_pixel(
        &self,
        graph_id: &str,
        date: &str,
    ) -> Result<ApiResponse, CommandError> {
        const OP: &str = "pixel delete";

        self.validate(
            OP,
            &ValidateField {
                graph_id: Some(graph_id),
                date: Some(date),
                ..Default::default()
            },
        )?;

        let body = self
            .delete(self.user_endpoint(&["graphs", graph_id, date]))
            .await
            .map_err(|err| CommandError::new(OP, err))?;

        Self::decode(OP, &body)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use serde_json::json;

    use crate::api::tests::{client, SUCCESS_BODY, TOKEN};

    #[tokio::test]
    async fn create_pixel_omits_empty_optional_data() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST")
                .path("/v1/users/testuser/graphs/test-id")
                .json_body(json!({ "date": "20200101", "quantity": "5" }));
            then.status(200).body(SUCCESS_BODY);
        });

        client(&server)
            .create_pixel("test-id", "20200101", "5", Some(""))
            .await
            .expect("create pixel");
        mock.assert();
    }

    #[tokio::test]
    async fn create_pixel_sends_optional_data() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST")
                .path("/v1/users/testuser/graphs/test-id")
                .json_body(json!({
                    "date": "20200101",
                    "quantity": "5.5",
                    "optionalData": r#"{"key":"value"}"#,
                }));
            then.status(200).body(SUCCESS_BODY);
        });

        client(&server)
            .create_pixel("test-id", "20200101", "5.5", Some(r#"{"key":"value"}"#))
            .await
            .expect("create pixel");
        mock.assert();
    }

    #[tokio::test]
    async fn create_pixel_rejects_bad_fields_without_request() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.path("/v1/users/testuser/graphs/test-id");
            then.status(200).body(SUCCESS_BODY);
        });

        let err = client(&server)
            .create_pixel("test-id", "20200230", "-1", Some("{"))
            .await
            .expect_err("invalid pixel");

        assert_eq!(
            err.to_string(),
            "`pixel create`: wrong arguments: `date` format is `yyyyMMdd`. and `quantity` allows value of int or float. and `optionalData` is under 10k JSON string."
        );
        mock.assert_calls(0);
    }

    #[tokio::test]
    async fn get_pixel_decodes_quantity() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET")
                .path("/v1/users/testuser/graphs/test-id/20200101")
                .header("x-user-token", TOKEN);
            then.status(200)
                .body(r#"{"quantity":"5","optionalData":"{\"key\":\"value\"}"}"#);
        });

        let pixel = client(&server)
            .get_pixel("test-id", "20200101")
            .await
            .expect("get pixel");

        assert_eq!(pixel.quantity, "5");
        assert_eq!(pixel.optional_data.as_deref(), Some(r#"{"key":"value"}"#));
    }

    #[tokio::test]
    async fn get_pixel_forbidden() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET")
                .path("/v1/users/testuser/graphs/test-id/20200101");
            then.status(403)
                .body(r#"{"message":"User `testuser` does not exist or the token is wrong.","isSuccess":false}"#);
        });

        let err = client(&server)
            .get_pixel("test-id", "20200101")
            .await
            .expect_err("403");

        assert_eq!(
            err.to_string(),
            "`pixel get`: http request failed: get request failed: User `testuser` does not exist or the token is wrong."
        );
    }

    #[tokio::test]
    async fn update_pixel_puts_quantity() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("PUT")
                .path("/v1/users/testuser/graphs/test-id/20200101")
                .json_body(json!({ "quantity": "7" }));
            then.status(200).body(SUCCESS_BODY);
        });

        client(&server)
            .update_pixel("test-id", "20200101", "7", None)
            .await
            .expect("update pixel");
        mock.assert();
    }

    #[tokio::test]
    async fn increment_sends_no_body_each_call() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("PUT")
                .path("/v1/users/testuser/graphs/test-id/increment")
                .header("content-length", "0")
                .header_missing("content-type");
            then.status(200).body(SUCCESS_BODY);
        });

        let pixela = client(&server);
        pixela.increment_pixel("test-id").await.expect("first inc");
        pixela.increment_pixel("test-id").await.expect("second inc");
        mock.assert_calls(2);
    }

    #[tokio::test]
    async fn decrement_uses_decrement_path() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("PUT")
                .path("/v1/users/testuser/graphs/test-id/decrement")
                .header("content-length", "0");
            then.status(200).body(SUCCESS_BODY);
        });

        client(&server)
            .decrement_pixel("test-id")
            .await
            .expect("dec");
        mock.assert();
    }

    #[tokio::test]
    async fn delete_pixel_requires_valid_graph_id() {
        let server = MockServer::start();
        let err = client(&server)
            .delete_pixel("1-graph", "20200101")
            .await
            .expect_err("bad graph id");

        assert!(err
            .to_string()
            .starts_with("`pixel delete`: wrong arguments: `graphId` allows"));
    }
}
