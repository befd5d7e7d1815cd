use std::fmt::Display;

use thiserror::Error;

use super::validator::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Post,
    Get,
    Put,
    Delete,
}

impl Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verb::Post => write!(f, "post"),
            Verb::Get => write!(f, "get"),
            Verb::Put => write!(f, "put"),
            Verb::Delete => write!(f, "delete"),
        }
    }
}

impl From<Verb> for reqwest::Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Post => reqwest::Method::POST,
            Verb::Get => reqwest::Method::GET,
            Verb::Put => reqwest::Method::PUT,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }
}

/// outcome of a single round trip that did not end in success
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http {verb} request failed: {source}")]
    Request {
        verb: Verb,
        source: reqwest::Error,
    },

    #[error("{verb} response read failed: {source}")]
    Read {
        verb: Verb,
        source: reqwest::Error,
    },

    #[error("{verb} response body parse failed: {source}")]
    Parse {
        verb: Verb,
        source: serde_json::Error,
    },

    /// pixe.la answered, but reported a failure (non-200 status or `isSuccess: false`)
    #[error("{verb} request failed: {message}")]
    Remote { verb: Verb, message: String },
}

#[derive(Debug, Error)]
pub enum CommandErrorKind {
    #[error("wrong arguments: {0}")]
    WrongArguments(#[from] ValidationError),

    #[error("can not marshal request payload: {0}")]
    Marshal(serde_json::Error),

    #[error("http request failed: {0}")]
    Request(#[from] TransportError),

    #[error("response parse failed: {0}")]
    Parse(serde_json::Error),
}

/// every error coming out of a resource operation, tagged with the operation name
#[derive(Debug, Error)]
#[error("`{operation}`: {kind}")]
pub struct CommandError {
    pub operation: &'static str,
    pub kind: CommandErrorKind,
}

impl CommandError {
    pub fn new(operation: &'static str, kind: impl Into<CommandErrorKind>) -> Self {
        Self {
            operation,
            kind: kind.into(),
        }
    }

    pub fn marshal(operation: &'static str, err: serde_json::Error) -> Self {
        Self::new(operation, CommandErrorKind::Marshal(err))
    }

    pub fn parse(operation: &'static str, err: serde_json::Error) -> Self {
        Self::new(operation, CommandErrorKind::Parse(err))
    }
}

/// the wrapped errors are rendered inline rather than exposed as sources
#[derive(Debug, Error)]
pub enum InitError {
    #[error("initialization error: {0}")]
    InvalidArguments(ValidationError),

    #[error("initialization error: invalid base url: {0}")]
    BaseUrl(url::ParseError),

    #[error("initialization error: {0} can not be used as a base url")]
    CannotBeABase(String),

    #[error("initialization error: {0}")]
    HttpClient(reqwest::Error),
}
