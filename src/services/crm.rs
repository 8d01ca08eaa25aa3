use http::StatusCode;
use url::Url;

use crate::models::player::{NewPlayer, ObjectPage, PlayerRecord};

const PLAYER_PROPERTIES: &str = "name,role,country";

pub(crate) struct CrmClient {
    http_client: reqwest::Client,
    objects_url: Url,
    access_token: String
}
impl CrmClient {
    pub(crate) fn new(objects_url: Url, access_token: String, http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            objects_url,
            access_token
        }
    }
    pub(crate) async fn list_players(&self) -> Result<Vec<PlayerRecord>, CrmError> {
        let response = self.http_client
            .get(self.objects_url.clone())
            .query(&[("properties", PLAYER_PROPERTIES)])
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(CrmError::Request)?;
        let page = Self::require_success(response)
            .await?
            .json::<ObjectPage>()
            .await
            .map_err(CrmError::Request)?;
        Ok(page.results)
    }
    pub(crate) async fn create_player(&self, player: &NewPlayer) -> Result<(), CrmError> {
        let response = self.http_client
            .post(self.objects_url.clone())
            .bearer_auth(&self.access_token)
            .json(&CreatePlayerRequest { properties: player })
            .send()
            .await
            .map_err(CrmError::Request)?;
        Self::require_success(response).await?;
        Ok(())
    }
    async fn require_success(response: reqwest::Response) -> Result<reqwest::Response, CrmError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(CrmError::Api {
            status,
            body
        })
    }
}

#[derive(serde::Serialize)]
struct CreatePlayerRequest<'a> {
    properties: &'a NewPlayer
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum CrmError {
    #[error("failed to reach the crm api")]
    Request(reqwest::Error),
    #[error("crm api returned {status}")]
    Api {
        status: StatusCode,
        body: String
    }
}
