use sea_orm::Database;
use tracing::info;

use clinica_core::tracing::init_tracing;
use clinica_results::config::ResultsConfig;
use clinica_results::infra::mail::HttpMailer;
use clinica_results::router::build_router;
use clinica_results::state::AppState;
use clinica_results::worker;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ResultsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let mailer = HttpMailer::new(config.mail_relay_url, config.mail_api_key, config.mail_from);

    let state = AppState {
        db,
        mailer,
        session_secret: config.session_secret,
        cookie_domain: config.cookie_domain,
    };

    // Spawn outbox delivery worker
    tokio::spawn(worker::run(state.clone()));

    // HTTP server
    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.results_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("results service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
