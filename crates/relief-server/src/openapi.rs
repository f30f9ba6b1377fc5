use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Relief Goods API",
        version = "0.1.0",
        description = "Accounts, relief supply listings and donor testimonials."
    ),
    paths(
        crate::routes::register,
        crate::routes::login,
        crate::routes::create_supply,
        crate::routes::get_all_supply,
        crate::routes::get_single_supply,
        crate::routes::edit_supply,
        crate::routes::delete_supply,
        crate::routes::create_testimonial,
        crate::routes::get_all_testimonial,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::ApiEnvelope,
        crate::dto::RegisterRequest,
        crate::dto::LoginRequest,
        crate::dto::LoginResponse,
        crate::dto::HealthResponse,
    )),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "supplies", description = "Relief supply listings"),
        (name = "testimonials", description = "Donor testimonials"),
        (name = "system", description = "Liveness"),
    )
)]
pub struct ApiDoc;
