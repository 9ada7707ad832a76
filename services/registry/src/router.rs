use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use signup_core::health::healthz;
use signup_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    health::readyz,
    index::index,
    registration::{
        create_form, create_registration, delete_form, delete_registration, list_registrations,
        update_email, update_form,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Landing (basic auth)
        .route("/", get(index))
        // Registrations
        .route("/create/", get(create_form).post(create_registration))
        .route("/all/", get(list_registrations))
        .route("/update/", get(update_form).post(update_email))
        .route("/delete/", get(delete_form).post(delete_registration))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
