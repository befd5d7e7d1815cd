use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use crate::constants;

static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]{1,32}$").unwrap());
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ -~]{8,128}$").unwrap());
static GRAPH_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]{1,16}$").unwrap());
static QUANTITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0|[1-9][0-9]*)(\.[0-9])*$").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{}", .0.join(" and "))]
pub struct ValidationError(pub Vec<&'static str>);

/// arguments of one api call; `None` (or an empty string) means "not checked for this call"
#[derive(Debug, Default, Clone)]
pub struct ValidateField<'a> {
    pub username: Option<&'a str>,
    pub token: Option<&'a str>,
    pub agree_terms_of_service: Option<&'a str>,
    pub not_minor: Option<&'a str>,
    pub new_token: Option<&'a str>,
    pub graph_id: Option<&'a str>,
    pub unit_type: Option<&'a str>,
    pub color: Option<&'a str>,
    pub date: Option<&'a str>,
    pub from: Option<&'a str>,
    pub to: Option<&'a str>,
    pub quantity: Option<&'a str>,
    pub webhook_type: Option<&'a str>,
    pub optional_data: Option<&'a str>,
    pub self_sufficient: Option<&'a str>,
}

struct Rule {
    field: for<'a, 'b> fn(&'b ValidateField<'a>) -> Option<&'a str>,
    is_valid: fn(&str) -> bool,
    message: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        field: |vf| vf.username,
        is_valid: is_username,
        message: "`username` allows lowercase alphabet, number and hyphen (NOTE: first letter only allows alphabet.) and 1 to 32 length.",
    },
    Rule {
        field: |vf| vf.token,
        is_valid: is_token,
        message: "`token` allows 8 to 128 length.",
    },
    Rule {
        field: |vf| vf.agree_terms_of_service,
        is_valid: |s| one_of(s, &["yes", "no"]),
        message: "`agreeTermsOfService` allows `yes` or `no`.",
    },
    Rule {
        field: |vf| vf.not_minor,
        is_valid: |s| one_of(s, &["yes", "no"]),
        message: "`notMinor` allows `yes` or `no`.",
    },
    Rule {
        field: |vf| vf.new_token,
        is_valid: is_token,
        message: "`newToken` allows 8 to 128 length.",
    },
    Rule {
        field: |vf| vf.graph_id,
        is_valid: is_graph_id,
        message: "`graphId` allows lowercase alphabet, number and hyphen (NOTE: first letter only allows alphabet.) and 1 to 16 length.",
    },
    Rule {
        field: |vf| vf.unit_type,
        is_valid: |s| one_of(s, &["int", "float"]),
        message: "`unit` allows `int` or `float`.",
    },
    Rule {
        field: |vf| vf.color,
        is_valid: |s| one_of(s, &["shibafu", "momiji", "sora", "ichou", "ajisai", "kuro"]),
        message: "`color` allows `shibafu`, `momiji`, `sora`, `ichou`, `ajisai` or `kuro`.",
    },
    Rule {
        field: |vf| vf.date,
        is_valid: is_date,
        message: "`date` format is `yyyyMMdd`.",
    },
    Rule {
        field: |vf| vf.from,
        is_valid: is_date,
        message: "`from` format is `yyyyMMdd`.",
    },
    Rule {
        field: |vf| vf.to,
        is_valid: is_date,
        message: "`to` format is `yyyyMMdd`.",
    },
    Rule {
        field: |vf| vf.quantity,
        is_valid: is_quantity,
        message: "`quantity` allows value of int or float.",
    },
    Rule {
        field: |vf| vf.webhook_type,
        is_valid: |s| one_of(s, &["increment", "decrement"]),
        message: "`type` allows `increment` or `decrement`.",
    },
    Rule {
        field: |vf| vf.optional_data,
        is_valid: is_optional_data,
        message: "`optionalData` is under 10k JSON string.",
    },
    Rule {
        field: |vf| vf.self_sufficient,
        is_valid: |s| one_of(s, &["none", "increment", "decrement"]),
        message: "`selfSufficient` allows `none`, `increment` or `decrement`.",
    },
];

#[derive(Debug, Default, Clone, Copy)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, vf: &ValidateField<'_>) -> Result<(), ValidationError> {
        Self::run(vf, true)
    }

    /// like `validate`, but a present field holding an empty string fails its rule
    pub fn validate_required(&self, vf: &ValidateField<'_>) -> Result<(), ValidationError> {
        Self::run(vf, false)
    }

    fn run(vf: &ValidateField<'_>, skip_empty: bool) -> Result<(), ValidationError> {
        let failures = RULES
            .iter()
            .filter(|rule| match (rule.field)(vf) {
                None => false,
                Some("") => !skip_empty,
                Some(value) => !(rule.is_valid)(value),
            })
            .map(|rule| rule.message)
            .collect::<Vec<&'static str>>();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(ValidationError(failures))
        }
    }
}

fn one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

fn is_username(value: &str) -> bool {
    USERNAME_REGEX.is_match(value)
}

fn is_token(value: &str) -> bool {
    TOKEN_REGEX.is_match(value)
}

fn is_graph_id(value: &str) -> bool {
    GRAPH_ID_REGEX.is_match(value)
}

/// exactly 8 digits forming a real calendar date
fn is_date(value: &str) -> bool {
    value.len() == 8
        && value.bytes().all(|b| b.is_ascii_digit())
        && NaiveDate::parse_from_str(value, constants::DATE_FORMAT).is_ok()
}

fn is_quantity(value: &str) -> bool {
    QUANTITY_REGEX.is_match(value)
}

fn is_optional_data(value: &str) -> bool {
    value.len() <= constants::OPTIONAL_DATA_MAX_LEN
        && serde_json::from_str::<serde_json::Value>(value).is_ok()
}
