//! Defines the Axum routes and handlers.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::info;

use crate::{Registration, RegistrationResponse, RegistrationStore, RegistryResult};

/// Creates the Axum router with all the registration endpoints.
pub fn create_router(store: RegistrationStore) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/register/", post(register))
        .route("/registration/{id}", get(get_registration))
        .with_state(store)
}

async fn register(
    State(store): State<RegistrationStore>,
    Json(registration): Json<Registration>,
) -> Json<RegistrationResponse> {
    let id = store.insert(registration.clone()).await;
    info!("new registration {id} ({})", registration.user_type);
    Json(RegistrationResponse { id, data: registration })
}

async fn get_registration(
    State(store): State<RegistrationStore>,
    Path(id): Path<u64>,
) -> RegistryResult<Json<Registration>> {
    store.get(id).await.map(Json)
}
