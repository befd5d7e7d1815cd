use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::shared_types::{ApiResponse, GraphDefinitions, PixelsDateList};

use super::{non_empty, validator::ValidateField, CommandError, Pixela};

#[skip_serializing_none]
#[derive(Serialize, Debug, Default, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct CreateGraphOpts<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub unit: &'a str,
    #[serde(rename = "type")]
    pub num_type: &'a str,
    pub color: &'a str,
    pub timezone: Option<&'a str>,
    pub self_sufficient: Option<&'a str>,
}

/// every field is optional, `None`/empty fields are left out of the request
#[skip_serializing_none]
#[derive(Serialize, Debug, Default, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGraphOpts<'a> {
    pub name: Option<&'a str>,
    pub unit: Option<&'a str>,
    pub color: Option<&'a str>,
    pub timezone: Option<&'a str>,
    #[serde(rename = "purgeCacheURLs")]
    pub purge_cache_urls: Option<&'a [String]>,
    pub self_sufficient: Option<&'a str>,
}

impl<'a> UpdateGraphOpts<'a> {
    fn without_empty_fields(self) -> Self {
        Self {
            name: non_empty(self.name),
            unit: non_empty(self.unit),
            color: non_empty(self.color),
            timezone: non_empty(self.timezone),
            purge_cache_urls: self.purge_cache_urls.filter(|urls| !urls.is_empty()),
            self_sufficient: non_empty(self.self_sufficient),
        }
    }
}

impl Pixela {
    pub async fn create_graph(
        &self,
        opts: &CreateGraphOpts<'_>,
    ) -> Result<ApiResponse, CommandError> {
        const OP: &str = "graph create";

        self.validate(
            OP,
            &ValidateField {
                graph_id: Some(opts.id),
                unit_type: Some(opts.num_type),
                color: Some(opts.color),
                self_sufficient: opts.self_sufficient,
                ..Default::default()
            },
        )?;

        let payload = Self::encode(
            OP,
            &CreateGraphOpts {
                timezone: non_empty(opts.timezone),
                self_sufficient: non_empty(opts.self_sufficient),
                ..*opts
            },
        )?;

        let body = self
            .post(self.user_endpoint(&["graphs"]), Some(payload))
            .await
            .map_err(|err| CommandError::new(OP, err))?;

        Self::decode(OP, &body)
    }

    pub async fn get_graph_definitions(&self) -> Result<GraphDefinitions, CommandError> {
        const OP: &str = "graph def";

        let body = self
            .get(self.user_endpoint(&["graphs"]))
            .await
            .map_err(|err| CommandError::new(OP, err))?;

        Self::decode(OP, &body)
    }

    /// raw svg markup of the graph, `date` (yyyyMMdd) and `mode` are passed through as query
    pub async fn get_graph_svg(
        &self,
        graph_id: &str,
        date: Option<&str>,
        mode: Option<&str>,
    ) -> Result<String, CommandError> {
        const OP: &str = "graph svg";

        self.validate(
            OP,
            &ValidateField {
                graph_id: Some(graph_id),
                date,
                ..Default::default()
            },
        )?;

        let mut url = self.user_endpoint(&["graphs", graph_id]);
        if let Some(date) = non_empty(date) {
            url.query_pairs_mut().append_pair("date", date);
        }
        if let Some(mode) = non_empty(mode) {
            url.query_pairs_mut().append_pair("mode", mode);
        }

        let body = self
            .get(url)
            .await
            .map_err(|err| CommandError::new(OP, err))?;

        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    pub async fn update_graph(
        &self,
        graph_id: &str,
        opts: &UpdateGraphOpts<'_>,
    ) -> Result<ApiResponse, CommandError> {
        const OP: &str = "graph update";

        self.validate(
            OP,
            &ValidateField {
                graph_id: Some(graph_id),
                color: opts.color,
                self_sufficient: opts.self_sufficient,
                ..Default::default()
            },
        )?;

        let payload = Self::encode(OP, &opts.without_empty_fields())?;

        let body = self
            .put(self.user_endpoint(&["graphs", graph_id]), Some(payload))
            .await
            .map_err(|err| CommandError::new(OP, err))?;

        Self::decode(OP, &body)
    }

    pub async fn delete_graph(&self, graph_id: &str) -> Result<ApiResponse, CommandError> {
        const OP: &str = "graph delete";

        self.validate(
            OP,
            &ValidateField {
                graph_id: Some(graph_id),
                ..Default::default()
            },
        )?;

        let body = self
            .delete(self.user_endpoint(&["graphs", graph_id]))
            .await
            .map_err(|err| CommandError::new(OP, err))?;

        Self::decode(OP, &body)
    }

    /// dates (yyyyMMdd) that have a pixel, optionally bounded by `from`/`to`
    pub async fn get_graph_pixels_date_list(
        &self,
        graph_id: &str,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<PixelsDateList, CommandError> {
        const OP: &str = "graph pixels";

        self.validate(
            OP,
            &ValidateField {
                graph_id: Some(graph_id),
                from,
                to,
                ..Default::default()
            },
        )?;

        let mut url = self.user_endpoint(&["graphs", graph_id, "pixels"]);
        if let Some(from) = non_empty(from) {
            url.query_pairs_mut().append_pair("from", from);
        }
        if let Some(to) = non_empty(to) {
            url.query_pairs_mut().append_pair("to", to);
        }

        let body = self
            .get(url)
            .await
            .map_err(|err| CommandError::new(OP, err))?;

        Self::decode(OP, &body)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use serde_json::json;

    use super::*;
    use crate::api::tests::{client, FAILURE_BODY, SUCCESS_BODY, TOKEN};

    fn test_graph() -> CreateGraphOpts<'static> {
        CreateGraphOpts {
            id: "test-id",
            name: "Test Graph",
            unit: "count",
            num_type: "int",
            color: "shibafu",
            timezone: None,
            self_sufficient: None,
        }
    }

    #[test]
    fn create_payload_omits_empty_optionals() {
        let opts = CreateGraphOpts {
            timezone: non_empty(Some("")),
            ..test_graph()
        };

        assert_eq!(
            serde_json::to_string(&opts).expect("serialize"),
            r#"{"id":"test-id","name":"Test Graph","unit":"count","type":"int","color":"shibafu"}"#
        );
    }

    #[test]
    fn update_payload_drops_empty_fields() {
        let urls: Vec<String> = vec![];
        let opts = UpdateGraphOpts {
            name: Some("renamed"),
            unit: Some(""),
            purge_cache_urls: Some(&urls),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_string(&opts.without_empty_fields()).expect("serialize"),
            r#"{"name":"renamed"}"#
        );
    }

    #[tokio::test]
    async fn create_graph_posts_minimal_payload() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST")
                .path("/v1/users/testuser/graphs")
                .header("x-user-token", TOKEN)
                .header("content-type", "application/json")
                .json_body(json!({
                    "id": "test-id",
                    "name": "Test Graph",
                    "unit": "count",
                    "type": "int",
                    "color": "shibafu",
                }));
            then.status(200).body(SUCCESS_BODY);
        });

        let res = client(&server)
            .create_graph(&CreateGraphOpts {
                timezone: Some(""),
                self_sufficient: Some(""),
                ..test_graph()
            })
            .await
            .expect("create graph");

        assert!(res.is_success);
        mock.assert();
    }

    #[tokio::test]
    async fn create_graph_sends_optionals_when_given() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST")
                .path("/v1/users/testuser/graphs")
                .json_body(json!({
                    "id": "test-id",
                    "name": "Test Graph",
                    "unit": "count",
                    "type": "int",
                    "color": "shibafu",
                    "timezone": "Asia/Tokyo",
                    "selfSufficient": "increment",
                }));
            then.status(200).body(SUCCESS_BODY);
        });

        client(&server)
            .create_graph(&CreateGraphOpts {
                timezone: Some("Asia/Tokyo"),
                self_sufficient: Some("increment"),
                ..test_graph()
            })
            .await
            .expect("create graph");
        mock.assert();
    }

    #[tokio::test]
    async fn create_graph_aggregates_validation_errors() {
        let server = MockServer::start();
        let err = client(&server)
            .create_graph(&CreateGraphOpts {
                num_type: "string",
                color: "red",
                ..test_graph()
            })
            .await
            .expect_err("invalid graph");

        assert_eq!(
            err.to_string(),
            "`graph create`: wrong arguments: `unit` allows `int` or `float`. and `color` allows `shibafu`, `momiji`, `sora`, `ichou`, `ajisai` or `kuro`."
        );
    }

    #[tokio::test]
    async fn get_graph_definitions_decodes_graphs() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/v1/users/testuser/graphs");
            then.status(200).body(
                r#"{"graphs":[{"id":"test-id","name":"Test Graph","unit":"count","type":"int","color":"shibafu","timezone":"Asia/Tokyo","purgeCacheURLs":[],"selfSufficient":"none","isSecret":false}]}"#,
            );
        });

        let defs = client(&server)
            .get_graph_definitions()
            .await
            .expect("graph def");

        assert_eq!(defs.graphs.len(), 1);
        let graph = &defs.graphs[0];
        assert_eq!(graph.id, "test-id");
        assert_eq!(graph.num_type, "int");
        assert_eq!(graph.timezone.as_deref(), Some("Asia/Tokyo"));
        assert_eq!(graph.self_sufficient.as_deref(), Some("none"));
    }

    #[tokio::test]
    async fn get_graph_definitions_reports_bad_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/v1/users/testuser/graphs");
            then.status(200).body("hoge");
        });

        let err = client(&server)
            .get_graph_definitions()
            .await
            .expect_err("bad body");

        assert!(err
            .to_string()
            .starts_with("`graph def`: response parse failed: "));
    }

    #[tokio::test]
    async fn get_graph_svg_passes_query_only_when_set() {
        let server = MockServer::start();
        let with_query = server.mock(|when, then| {
            when.method("GET")
                .path("/v1/users/testuser/graphs/test-id")
                .query_param("date", "20190101")
                .query_param("mode", "short");
            then.status(200).body("<svg>short</svg>");
        });

        let pixela = client(&server);
        let svg = pixela
            .get_graph_svg("test-id", Some("20190101"), Some("short"))
            .await
            .expect("svg");
        assert_eq!(svg, "<svg>short</svg>");
        with_query.assert();

        let plain = server.mock(|when, then| {
            when.method("GET")
                .path("/v1/users/testuser/graphs/test-id")
                .query_param_missing("date")
                .query_param_missing("mode");
            then.status(200).body("<svg>plain</svg>");
        });

        let svg = pixela
            .get_graph_svg("test-id", Some(""), None)
            .await
            .expect("svg");
        assert_eq!(svg, "<svg>plain</svg>");
        plain.assert();
    }

    #[tokio::test]
    async fn update_graph_puts_given_fields() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("PUT")
                .path("/v1/users/testuser/graphs/test-id")
                .json_body(json!({
                    "name": "renamed",
                    "purgeCacheURLs": ["https://example.com/badge.svg"],
                }));
            then.status(200).body(SUCCESS_BODY);
        });

        let urls = vec!["https://example.com/badge.svg".to_string()];
        client(&server)
            .update_graph(
                "test-id",
                &UpdateGraphOpts {
                    name: Some("renamed"),
                    color: Some(""),
                    purge_cache_urls: Some(&urls),
                    ..Default::default()
                },
            )
            .await
            .expect("update graph");
        mock.assert();
    }

    #[tokio::test]
    async fn delete_graph_surfaces_embedded_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("DELETE").path("/v1/users/testuser/graphs/test-id");
            then.status(200).body(FAILURE_BODY);
        });

        let err = client(&server)
            .delete_graph("test-id")
            .await
            .expect_err("isSuccess false");

        assert_eq!(
            err.to_string(),
            "`graph delete`: http request failed: delete request failed: errorMessage"
        );
    }

    #[tokio::test]
    async fn pixels_date_list_with_range() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET")
                .path("/v1/users/testuser/graphs/test-id/pixels")
                .query_param("from", "20190101")
                .query_param("to", "20190131");
            then.status(200)
                .body(r#"{"pixels":["20190101","20190102"]}"#);
        });

        let list = client(&server)
            .get_graph_pixels_date_list("test-id", Some("20190101"), Some("20190131"))
            .await
            .expect("pixels");

        assert_eq!(list.pixels, vec!["20190101", "20190102"]);
        mock.assert();
    }

    #[tokio::test]
    async fn pixels_date_list_validates_range() {
        let server = MockServer::start();
        let err = client(&server)
            .get_graph_pixels_date_list("test-id", Some("2019"), None)
            .await
            .expect_err("bad from");

        assert_eq!(
            err.to_string(),
            "`graph pixels`: wrong arguments: `from` format is `yyyyMMdd`."
        );
    }
}
