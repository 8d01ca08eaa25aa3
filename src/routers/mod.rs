use std::sync::Arc;

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use http::header::LOCATION;

use crate::models::player::{NewPlayer, PlayerRecord};
use crate::state::AppState;

pub(crate) fn router() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route("/", get(get_players))
        .route("/update-cobj", get(get_update_form).post(create_player))
}

#[derive(Template, WebTemplate)]
#[template(path = "homepage.html")]
struct HomepageTemplate {
    players: Vec<PlayerRecord>
}

#[derive(Template, WebTemplate)]
#[template(path = "updates.html")]
struct UpdateFormTemplate;

async fn get_players(State(state): State<Arc<AppState>>) -> Response {
    match state.crm.list_players().await {
        Ok(players) => {
            tracing::debug!(count = players.len(), "fetched cricket players");
            HomepageTemplate {
                players
            }.into_response()
        },
        Err(error) => {
            tracing::error!(?error, "failed to fetch cricket players");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving Cricket Players").into_response()
        }
    }
}

async fn get_update_form() -> UpdateFormTemplate {
    UpdateFormTemplate
}

async fn create_player(State(state): State<Arc<AppState>>, Form(player): Form<NewPlayer>) -> Response {
    tracing::debug!(?player, "received player form");
    match state.crm.create_player(&player).await {
        Ok(()) => {
            tracing::info!("cricket player created");
            (StatusCode::FOUND, [(LOCATION, "/")]).into_response()
        },
        Err(error) => {
            tracing::error!(?error, "failed to create cricket player");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error creating Cricket Player").into_response()
        }
    }
}
