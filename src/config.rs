use url::Url;

const DEFAULT_API_BASE: &str = "https://api.hubapi.com";
const DEFAULT_PORT: u16 = 3000;

#[derive(Clone)]
pub(crate) struct Config {
    pub(crate) access_token: String,
    pub(crate) object_type: String,
    pub(crate) api_base: Url,
    pub(crate) port: u16
}
impl Config {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        let access_token = std::env::var("HUBSPOT_ACCESS_TOKEN").map_err(|_error| ConfigError::MissingAccessToken)?;
        let object_type = std::env::var("CUSTOM_OBJECT_TYPE").map_err(|_error| ConfigError::MissingObjectType)?;
        let api_base = match std::env::var("HUBSPOT_API_BASE") {
            Ok(raw_api_base) => Url::parse(&raw_api_base).map_err(ConfigError::InvalidApiBase)?,
            Err(_error) => Url::parse(DEFAULT_API_BASE).expect("default api base is known to be good")
        };
        let port = match std::env::var("PORT") {
            Ok(raw_port) => raw_port.parse::<u16>().map_err(ConfigError::InvalidPort)?,
            Err(_error) => DEFAULT_PORT
        };

        Ok(Self {
            access_token,
            object_type,
            api_base,
            port
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum ConfigError {
    #[error("HUBSPOT_ACCESS_TOKEN is not set")]
    MissingAccessToken,
    #[error("CUSTOM_OBJECT_TYPE is not set")]
    MissingObjectType,
    #[error("HUBSPOT_API_BASE is not a valid url")]
    InvalidApiBase(url::ParseError),
    #[error("PORT is not a valid port number")]
    InvalidPort(std::num::ParseIntError)
}
