use axum::Json;
use axum::extract::State;
use carelink_workflow::ports::{Clock, IdentityVerifier, MailSender, MapProvider, ProfileRepository};

use crate::dto::response::{HealthResponse, ServicesResponse};
use crate::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Health Check Handler
// =============================================================================

/// Liveness plus which upstreams have credentials. Never calls out.
///
/// Profile endpoints need both Firestore and token verification, so
/// `profiles` is only true when both are configured.
pub async fn health_check<Mail, Maps, Profiles, Identity, Time>(
    State(state): State<AppState<Mail, Maps, Profiles, Identity, Time>>,
) -> Json<HealthResponse>
where
    Mail: MailSender,
    Maps: MapProvider,
    Profiles: ProfileRepository,
    Identity: IdentityVerifier,
    Time: Clock,
{
    Json(HealthResponse {
        ok: true,
        version: VERSION.to_string(),
        services: ServicesResponse {
            mail: state.mailer.is_configured(),
            maps: state.maps.is_configured(),
            profiles: state.profiles.is_configured() && state.identity.is_configured(),
        },
    })
}
