pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;
pub mod validation;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::state::AppState;

/// Build the full HTTP application: public routes, the JWT-guarded `/api`
/// surface and the global layers configured in [`config::AppConfig`].
pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    let mut router = Router::new()
        // Public
        .route("/", get(handlers::public::root))
        .route("/health", get(handlers::public::health))
        .route("/api/auth/login", post(handlers::public::login))
        // Protected API
        .merge(protected_routes(state.clone()))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security));
    }

    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use handlers::protected::{auth, beneficiaries, campaigns, dashboard, donations, donors, expenses, export};

    Router::new()
        .route("/api/auth/whoami", get(auth::whoami))
        .route("/api/dashboard/stats", get(dashboard::stats))
        .route("/api/expenses", get(expenses::list).post(expenses::create))
        .route("/api/expenses/:id", put(expenses::update).delete(expenses::delete))
        .route("/api/donations", get(donations::list).post(donations::create))
        .route("/api/campaigns", get(campaigns::list).post(campaigns::create))
        .route("/api/donors", get(donors::list).post(donors::create))
        .route("/api/beneficiaries", get(beneficiaries::list).post(beneficiaries::create))
        .route("/api/export/expenses", get(export::expenses))
        .route_layer(from_fn_with_state(state, middleware::jwt_auth_middleware))
}

/// Permissive when no origins are listed or `*` is among them, otherwise an exact allow-list
fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if security.cors_origins.is_empty() || security.cors_origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
