mod config;
mod routes;
mod services;
mod state;

use config::ServerConfig;
use services::users::UserDirectory;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };

    let users = match &config.users_file {
        Some(path) => match UserDirectory::load(path) {
            Ok(users) => {
                tracing::info!(path = %path.display(), count = users.len(), "loaded user file");
                users
            }
            Err(e) => {
                tracing::error!(error = %e, "user file unusable");
                std::process::exit(2);
            }
        },
        None => {
            tracing::info!("ECOGUARD_USERS_FILE not set; using built-in demo accounts");
            UserDirectory::demo()
        }
    };

    let state = state::AppState::new(users);
    let app = routes::app(state);

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "ecoguard listening");
    axum::serve(listener, app).await.expect("server failed");
}
