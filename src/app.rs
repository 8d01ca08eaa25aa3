use std::sync::Arc;
use crate::config::{Config, ConfigError};
use crate::services::crm::CrmClient;
use crate::state::AppState;
use crate::USER_AGENT;
use http::header::USER_AGENT as USER_AGENT_HEADER_KEY;
use http::{HeaderMap, HeaderValue};
use tokio::net::TcpListener;

pub(crate) async fn run() -> Result<(), AppRunError> {
    let config = Config::from_env().map_err(AppRunError::ConfigError)?;
    let http_client = {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT_HEADER_KEY, HeaderValue::from_static(USER_AGENT));
        reqwest::Client::builder()
            .default_headers(default_headers)
            .build()
            .expect("all options is known to be good")
    };

    // Services
    let objects_url = config.api_base
        .join(&format!("crm/v3/objects/{}", config.object_type))
        .map_err(AppRunError::InvalidObjectType)?;
    let crm = CrmClient::new(objects_url, config.access_token.clone(), http_client);

    let state = Arc::new(AppState {
        crm
    });
    let service = crate::routers::router().with_state(state);
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await.map_err(AppRunError::BindError)?;
    tracing::info!(port = config.port, "listening");

    axum::serve(listener, service).await.map_err(AppRunError::ServeError)?;

    Ok(())
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum AppRunError {
    #[error("failed to bind")]
    BindError(std::io::Error),
    #[error("failed to serve")]
    ServeError(std::io::Error),
    #[error("failed to load config")]
    ConfigError(ConfigError),
    #[error("custom object type does not form a valid objects url")]
    InvalidObjectType(url::ParseError)
}
