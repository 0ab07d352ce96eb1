use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::handlers::{protected, public};
use crate::middleware::{jwt_auth_middleware, require_auth_middleware};
use crate::state::AppState;

pub fn app(state: AppState, security: &SecurityConfig) -> Router {
    Router::new()
        // Public
        .route("/", get(public::status::root))
        .route("/health", get(public::status::health))
        .merge(auth_public_routes())
        // Protected
        .merge(pokemon_routes().route_layer(middleware::from_fn(require_auth_middleware)))
        // Global middleware; the token filter sees every request exactly once
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(security))
                .layer(middleware::from_fn_with_state(state.clone(), jwt_auth_middleware)),
        )
        .with_state(state)
}

fn auth_public_routes() -> Router<AppState> {
    use public::auth;

    Router::new()
        .route("/api/auth/login", post(auth::login_post))
        .route("/api/auth/register", post(auth::register_post))
}

fn pokemon_routes() -> Router<AppState> {
    use protected::{pokemon, review};

    Router::new()
        .route("/api/pokemon", get(pokemon::pokemon_list).post(pokemon::pokemon_create))
        .route("/api/pokemon/create", post(pokemon::pokemon_create))
        .route("/api/pokemon/type/:pokemon_type", get(pokemon::pokemon_get_by_type))
        .route(
            "/api/pokemon/:pokemon_id",
            get(pokemon::pokemon_get)
                .put(pokemon::pokemon_put)
                .delete(pokemon::pokemon_delete),
        )
        .route("/api/pokemon/:pokemon_id/review", post(review::review_create))
        .route("/api/pokemon/:pokemon_id/reviews", get(review::review_list))
        .route(
            "/api/pokemon/:pokemon_id/reviews/:review_id",
            get(review::review_get)
                .put(review::review_put)
                .delete(review::review_delete),
        )
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
