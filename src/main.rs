mod app;
mod routers;
mod state;
mod services;
mod models;
mod config;

const USER_AGENT: &str = "pavilion v/0.1.0";

#[tokio::main]
async fn main() {
    // Local development keeps credentials in a .env file
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(error) = app::run().await {
        tracing::error!(?error, "failed to run app");
        std::process::exit(1);
    }
}
