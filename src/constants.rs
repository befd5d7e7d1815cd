pub const DEFAULT_BASE_URL: &str = "https://pixe.la";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const HEADER_USER_TOKEN: &str = "X-USER-TOKEN";

pub const DATE_FORMAT: &str = "%Y%m%d";

/// upper bound (in bytes) of the `optionalData` JSON string accepted by pixe.la
pub const OPTIONAL_DATA_MAX_LEN: usize = 10240;

pub const CONFIG_FILEPATH: &str = "~/.pixela/config.toml";

pub const CREDENTIALS_FILEPATH: &str = "~/.pixela.yaml";

pub const ENV_USERNAME: &str = "PIXELA_USERNAME";
pub const ENV_TOKEN: &str = "PIXELA_TOKEN";
pub const ENV_BASE_URL: &str = "PIXELA_BASE_URL";
