// src/presentation/http/routes.rs
use crate::config::{AllowedOrigins, AppConfig};
use crate::presentation::http::{
    controllers::time, middleware::rate_limit::rate_limit_layer, state::HttpState,
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, config: &AppConfig) -> Router {
    let router = Router::new()
        .route("/time", get(time::current_time))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config.allowed_origins()))
        .layer(Extension(state));

    match config.rate_limit() {
        Some(settings) => router.layer(rate_limit_layer(settings)),
        None => router,
    }
}

fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let allow_origin = match origins {
        AllowedOrigins::Any => AllowOrigin::any(),
        AllowedOrigins::List(list) => AllowOrigin::list(
            list.iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        ),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600))
}
