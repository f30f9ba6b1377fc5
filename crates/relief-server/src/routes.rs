use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use chrono::Utc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use relief_core::Document;

use crate::dto::{Envelope, HealthResponse, LoginRequest, LoginResponse, RegisterRequest};
use crate::error::ApiError;
use crate::extract::Json;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/create-supply", post(create_supply))
        .route("/getAllSupply", get(get_all_supply))
        .route("/getSingleSupply/{id}", get(get_single_supply))
        .route("/edit-supply/{id}", put(edit_supply))
        .route("/delete-supply/{id}", delete(delete_supply))
        .route("/create-testimonial", post(create_testimonial))
        .route("/getAllTestimonial", get(get_all_testimonial));

    Router::new()
        .route("/", get(health))
        .nest("/api/v1", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/api/v1/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = crate::dto::ApiEnvelope),
        (status = 400, description = "Email already registered or malformed body", body = crate::dto::ApiEnvelope),
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .auth
        .register(&body.name, &body.email, &body.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        axum::Json(Envelope::empty(true, "User registered successfully")),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = crate::dto::ApiEnvelope),
        (status = 400, description = "Malformed body", body = crate::dto::ApiEnvelope),
        (status = 401, description = "Invalid email or password", body = crate::dto::ApiEnvelope),
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let token = state.auth.login(&body.email, &body.password).await?;

    Ok(axum::Json(Envelope::ok(
        "Login successful",
        LoginResponse { token },
    )))
}

// ---------------------------------------------------------------------------
// Supplies
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/api/v1/create-supply",
    request_body(content = Object, description = "Arbitrary supply fields"),
    responses(
        (status = 200, description = "Supply created", body = crate::dto::ApiEnvelope),
        (status = 400, description = "Malformed body", body = crate::dto::ApiEnvelope),
    ),
    tag = "supplies"
)]
pub async fn create_supply(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Document>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.supplies.create(body).await?;
    Ok(axum::Json(Envelope::ok(
        "Your Supply Create successfully done",
        result,
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/getAllSupply",
    responses(
        (status = 200, description = "All supplies", body = crate::dto::ApiEnvelope),
    ),
    tag = "supplies"
)]
pub async fn get_all_supply(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let supplies = state.supplies.list_all().await?;
    Ok(axum::Json(Envelope::ok(
        "Data retrieve successfully done",
        supplies,
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/getSingleSupply/{id}",
    params(
        ("id" = String, Path, description = "Supply ID")
    ),
    responses(
        (status = 200, description = "Supply details", body = crate::dto::ApiEnvelope),
        (status = 400, description = "Malformed ID", body = crate::dto::ApiEnvelope),
        (status = 404, description = "Not found", body = crate::dto::ApiEnvelope),
    ),
    tag = "supplies"
)]
pub async fn get_single_supply(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let supply = state.supplies.get_one(&id).await?;
    Ok(axum::Json(Envelope::ok(
        "Get single Supply successfully",
        supply,
    )))
}

#[utoipa::path(
    put,
    path = "/api/v1/edit-supply/{id}",
    params(
        ("id" = String, Path, description = "Supply ID")
    ),
    request_body(content = Object, description = "Fields to overwrite"),
    responses(
        (status = 200, description = "Updated supply", body = crate::dto::ApiEnvelope),
        (status = 400, description = "Malformed ID", body = crate::dto::ApiEnvelope),
        (status = 404, description = "Not found", body = crate::dto::ApiEnvelope),
    ),
    tag = "supplies"
)]
pub async fn edit_supply(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<Document>,
) -> Result<impl IntoResponse, ApiError> {
    let supply = state.supplies.update(&id, body).await?;
    Ok(axum::Json(Envelope::ok("Supply updated successfully", supply)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/delete-supply/{id}",
    params(
        ("id" = String, Path, description = "Supply ID")
    ),
    responses(
        (status = 200, description = "Deleted supply", body = crate::dto::ApiEnvelope),
        (status = 400, description = "Malformed ID", body = crate::dto::ApiEnvelope),
        (status = 404, description = "Not found", body = crate::dto::ApiEnvelope),
    ),
    tag = "supplies"
)]
pub async fn delete_supply(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let supply = state.supplies.delete(&id).await?;
    Ok(axum::Json(Envelope::ok("Supply deleted successfully", supply)))
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/api/v1/create-testimonial",
    request_body(content = Object, description = "Arbitrary testimonial fields"),
    responses(
        (status = 200, description = "Testimonial created", body = crate::dto::ApiEnvelope),
        (status = 400, description = "Malformed body", body = crate::dto::ApiEnvelope),
    ),
    tag = "testimonials"
)]
pub async fn create_testimonial(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Document>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.testimonials.create(body).await?;
    Ok(axum::Json(Envelope::ok(
        "Your Testimonial Created successfully",
        result,
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/getAllTestimonial",
    responses(
        (status = 200, description = "All testimonials", body = crate::dto::ApiEnvelope),
    ),
    tag = "testimonials"
)]
pub async fn get_all_testimonial(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let testimonials = state.testimonials.list_all().await?;
    Ok(axum::Json(Envelope::ok(
        "Data retrieve successfully done",
        testimonials,
    )))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health() -> impl IntoResponse {
    axum::Json(HealthResponse {
        message: "Server is running smoothly",
        timestamp: Utc::now(),
    })
}
