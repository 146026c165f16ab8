//! Routing for the carelink API.

use axum::Router;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::routing::{MethodRouter, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::{RequestIdLayer, make_request_span};
use crate::state::AppState;
use carelink_workflow::ports::{Clock, IdentityVerifier, MailSender, MapProvider, ProfileRepository};

/// Largest accepted request body: a 10 MiB attachment after base64
/// expansion plus the rest of the JSON.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

// =============================================================================
// Router Creation
// =============================================================================

/// Builds the router with every endpoint and the shared middleware.
///
/// A known path called with an unsupported method answers 405; an unknown
/// path answers 404. Both use the JSON error body.
pub fn create_router<Mail, Maps, Profiles, Identity, Time>(
    state: AppState<Mail, Maps, Profiles, Identity, Time>,
) -> Router
where
    Mail: MailSender,
    Maps: MapProvider,
    Profiles: ProfileRepository,
    Identity: IdentityVerifier,
    Time: Clock,
{
    Router::new()
        .route(
            "/sendMail",
            only(post(handlers::send_mail::<Mail, Maps, Profiles, Identity, Time>)),
        )
        .route(
            "/places/search",
            only(get(handlers::search_places::<Mail, Maps, Profiles, Identity, Time>)),
        )
        .route(
            "/places/geocode",
            only(get(handlers::geocode::<Mail, Maps, Profiles, Identity, Time>)),
        )
        .route(
            "/places/directions",
            only(get(handlers::directions::<Mail, Maps, Profiles, Identity, Time>)),
        )
        .route(
            "/profile",
            only(
                get(handlers::get_profile::<Mail, Maps, Profiles, Identity, Time>)
                    .post(handlers::update_profile::<Mail, Maps, Profiles, Identity, Time>),
            ),
        )
        .route(
            "/checkUsername",
            only(get(handlers::check_username::<Mail, Maps, Profiles, Identity, Time>)),
        )
        .route(
            "/health",
            only(get(handlers::health_check::<Mail, Maps, Profiles, Identity, Time>)),
        )
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(RequestIdLayer::new())
        .layer(create_cors_layer())
        .with_state(state)
}

/// Answers any other method on the route with 405.
fn only<S>(route: MethodRouter<S>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.fallback(handlers::method_not_allowed)
}

/// Open CORS, as the browser client may be served from any origin.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
