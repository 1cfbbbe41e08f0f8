//! Axum route configuration and API documentation.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::Config,
    controller::{auth, dog, news, request, stats, tag, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        tag::create_tag,
        tag::get_tags,
        tag::get_tag,
        tag::update_tag,
        tag::delete_tag,
        dog::create_dog,
        dog::get_dogs,
        dog::get_dog,
        dog::update_dog,
        dog::patch_dog,
        dog::delete_dog,
        news::create_news,
        news::get_news_list,
        news::get_news,
        news::update_news,
        news::patch_news,
        news::delete_news,
        user::create_user,
        user::get_users,
        user::get_user,
        user::update_user,
        user::delete_user,
        request::create_request,
        request::get_requests,
        request::get_request,
        request::update_request,
        request::patch_request,
        request::delete_request,
        stats::get_stats,
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Dog Shelter API",
        description = "Backend for the dog shelter: dogs, news, tags, users, and adoption/guardianship requests."
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub fn router(config: &Config) -> Router<AppState> {
    let api = Router::new()
        .route("/auth/login", post(auth::login))
        .route("/tags", get(tag::get_tags).post(tag::create_tag))
        .route(
            "/tags/{id}",
            get(tag::get_tag)
                .put(tag::update_tag)
                .patch(tag::update_tag)
                .delete(tag::delete_tag),
        )
        .route("/dogs", get(dog::get_dogs).post(dog::create_dog))
        .route(
            "/dogs/{id}",
            get(dog::get_dog)
                .put(dog::update_dog)
                .patch(dog::patch_dog)
                .delete(dog::delete_dog),
        )
        .route("/news", get(news::get_news_list).post(news::create_news))
        .route(
            "/news/{id}",
            get(news::get_news)
                .put(news::update_news)
                .patch(news::patch_news)
                .delete(news::delete_news),
        )
        .route("/users", get(user::get_users).post(user::create_user))
        .route(
            "/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/requests",
            get(request::get_requests).post(request::create_request),
        )
        .route(
            "/requests/{id}",
            get(request::get_request)
                .put(request::update_request)
                .patch(request::patch_request)
                .delete(request::delete_request),
        )
        .route("/stats", get(stats::get_stats));

    Router::new()
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
