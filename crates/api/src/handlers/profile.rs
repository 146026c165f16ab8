use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use carelink_workflow::ports::{Clock, IdentityVerifier, MailSender, MapProvider, ProfileRepository};
use carelink_workflow::workflows;

use crate::dto::request::{CheckUsernameParams, UpdateProfileRequest};
use crate::dto::response::{ProfileResponse, UsernameAvailabilityResponse};
use crate::errors::{ApiError, FailureMessage};
use crate::extract::JsonObject;
use crate::state::AppState;

// =============================================================================
// Bearer Token
// =============================================================================

/// Token from `Authorization: Bearer <token>`; the scheme is
/// case-insensitive.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then(|| token.to_string())
}

// =============================================================================
// Get Profile Handler
// =============================================================================

pub async fn get_profile<Mail, Maps, Profiles, Identity, Time>(
    State(state): State<AppState<Mail, Maps, Profiles, Identity, Time>>,
    headers: HeaderMap,
) -> Result<Json<ProfileResponse>, ApiError>
where
    Mail: MailSender,
    Maps: MapProvider,
    Profiles: ProfileRepository,
    Identity: IdentityVerifier,
    Time: Clock,
{
    let token = bearer_token(&headers);

    let profile = workflows::get_profile(
        state.profiles.as_ref(),
        state.identity.as_ref(),
        token.as_deref(),
    )
    .await
    .map_err(|error| ApiError::from_workflow(error, FailureMessage::LoadProfile))?;

    Ok(Json(profile.into()))
}

// =============================================================================
// Update Profile Handler
// =============================================================================

pub async fn update_profile<Mail, Maps, Profiles, Identity, Time>(
    State(state): State<AppState<Mail, Maps, Profiles, Identity, Time>>,
    headers: HeaderMap,
    JsonObject(request): JsonObject<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError>
where
    Mail: MailSender,
    Maps: MapProvider,
    Profiles: ProfileRepository,
    Identity: IdentityVerifier,
    Time: Clock,
{
    let command = request.into_command(bearer_token(&headers));

    let profile = workflows::update_profile(
        state.profiles.as_ref(),
        state.identity.as_ref(),
        state.clock.as_ref(),
        command,
    )
    .await
    .map_err(|error| ApiError::from_workflow(error, FailureMessage::UpdateProfile))?;

    Ok(Json(profile.into()))
}

// =============================================================================
// Check Username Handler
// =============================================================================

pub async fn check_username<Mail, Maps, Profiles, Identity, Time>(
    State(state): State<AppState<Mail, Maps, Profiles, Identity, Time>>,
    headers: HeaderMap,
    params: Result<Query<CheckUsernameParams>, QueryRejection>,
) -> Result<Json<UsernameAvailabilityResponse>, ApiError>
where
    Mail: MailSender,
    Maps: MapProvider,
    Profiles: ProfileRepository,
    Identity: IdentityVerifier,
    Time: Clock,
{
    let Query(params) = params?;
    let command = params.into_command(bearer_token(&headers));

    let availability =
        workflows::check_username(state.profiles.as_ref(), state.identity.as_ref(), command)
            .await
            .map_err(|error| ApiError::from_workflow(error, FailureMessage::CheckUsername))?;

    Ok(Json(availability.into()))
}

// =============================================================================
// Tests
// =============================================================================
