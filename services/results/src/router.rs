use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use clinica_core::health::{healthz, readyz};
use clinica_core::middleware::request_id_layer;

use crate::handlers::{
    account::register,
    record::{add_record, delete_record, list_records},
    session::{login, logout},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Records
        .route("/", get(list_records))
        .route("/add", post(add_record))
        .route("/delete/{id}", post(delete_record))
        // Accounts & sessions
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", get(logout))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}
