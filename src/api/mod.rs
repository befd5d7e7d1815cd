use std::time::Duration;

use reqwest::{
    header::{CONTENT_LENGTH, CONTENT_TYPE},
    StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use url::Url;

use crate::{constants, shared_types::ApiResponse};

pub mod error;
pub mod graph;
pub mod pixel;
pub mod user;
pub mod validator;
pub mod webhook;

pub use error::{CommandError, InitError, TransportError, Verb};
use validator::{ValidateField, Validator};

pub struct ClientOpts {
    pub base_url: String,
    pub timeout: Duration,
    pub debug: bool,
}

impl Default for ClientOpts {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS),
            debug: false,
        }
    }
}

/// empty strings are treated as "not given" and left out of payloads and queries
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// pixe.la api client, one per cli invocation
pub struct Pixela {
    http_client: reqwest::Client,
    base_url: Url,
    username: String,
    token: String,
    validator: Validator,
    debug: bool,
}

impl Pixela {
    pub fn new(username: &str, token: &str, opts: &ClientOpts) -> Result<Self, InitError> {
        let validator = Validator::new();
        validator
            .validate_required(&ValidateField {
                username: Some(username),
                token: Some(token),
                ..Default::default()
            })
            .map_err(InitError::InvalidArguments)?;

        let base_url = Url::parse(&opts.base_url).map_err(InitError::BaseUrl)?;
        if base_url.cannot_be_a_base() {
            return Err(InitError::CannotBeABase(opts.base_url.clone()));
        }

        let http_client = reqwest::Client::builder()
            .timeout(opts.timeout)
            .build()
            .map_err(InitError::HttpClient)?;

        Ok(Self {
            http_client,
            base_url,
            username: username.to_string(),
            token: token.to_string(),
            validator,
            debug: opts.debug,
        })
    }

    fn validate(
        &self,
        operation: &'static str,
        vf: &ValidateField<'_>,
    ) -> Result<(), CommandError> {
        self.validator
            .validate(vf)
            .map_err(|err| CommandError::new(operation, err))
    }

    fn encode<T: Serialize>(
        operation: &'static str,
        payload: &T,
    ) -> Result<Vec<u8>, CommandError> {
        serde_json::to_vec(payload).map_err(|err| CommandError::marshal(operation, err))
    }

    fn decode<T: DeserializeOwned>(
        operation: &'static str,
        body: &[u8],
    ) -> Result<T, CommandError> {
        serde_json::from_slice(body).map_err(|err| CommandError::parse(operation, err))
    }

    /// base url + `segments`, each segment percent-encoded
    fn endpoint<I, S>(&self, segments: I) -> Url
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            for segment in segments {
                path.push(segment.as_ref());
            }
        }

        url
    }

    /// `/v1/users/{username}/...`
    fn user_endpoint(&self, rest: &[&str]) -> Url {
        self.endpoint(
            ["v1", "users", self.username.as_str()]
                .into_iter()
                .chain(rest.iter().copied()),
        )
    }

    pub(crate) async fn post(
        &self,
        url: Url,
        payload: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, TransportError> {
        self.request(Verb::Post, url, payload).await
    }

    pub(crate) async fn get(&self, url: Url) -> Result<Vec<u8>, TransportError> {
        self.request(Verb::Get, url, None).await
    }

    pub(crate) async fn put(
        &self,
        url: Url,
        payload: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, TransportError> {
        self.request(Verb::Put, url, payload).await
    }

    pub(crate) async fn delete(&self, url: Url) -> Result<Vec<u8>, TransportError> {
        self.request(Verb::Delete, url, None).await
    }

    async fn request(
        &self,
        verb: Verb,
        url: Url,
        payload: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, TransportError> {
        debug!(method = %verb, url = %url, with_body = payload.is_some(), "sending request");

        let mut req = self
            .http_client
            .request(verb.into(), url)
            .header(constants::HEADER_USER_TOKEN, &self.token);

        match (verb, payload) {
            (Verb::Post | Verb::Put, Some(payload)) => {
                req = req.header(CONTENT_TYPE, "application/json").body(payload);
            }
            (Verb::Post | Verb::Put, None) => {
                req = req.header(CONTENT_LENGTH, "0");
            }
            _ => {}
        }

        let res = req
            .send()
            .await
            .map_err(|source| TransportError::Request { verb, source })?;

        let status = res.status();
        let body = res
            .bytes()
            .await
            .map_err(|source| TransportError::Read { verb, source })?;

        debug!(%status, len = body.len(), "received response");
        if self.debug {
            debug!(body = %String::from_utf8_lossy(&body), "response body");
        }

        if status != StatusCode::OK {
            let message = match serde_json::from_slice::<ApiResponse>(&body) {
                Ok(envelope) if !envelope.message.is_empty() => envelope.message,
                _ => status.to_string(),
            };

            return Err(TransportError::Remote { verb, message });
        }

        // pixe.la reports some failures with a 200 status, the envelope has the final say
        if verb != Verb::Get {
            let envelope: ApiResponse = serde_json::from_slice(&body)
                .map_err(|source| TransportError::Parse { verb, source })?;

            if !envelope.is_success {
                return Err(TransportError::Remote {
                    verb,
                    message: envelope.message,
                });
            }
        }

        Ok(body.to_vec())
    }
}
