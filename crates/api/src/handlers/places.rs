use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use carelink_domain::common::DomainError;
use carelink_domain::places::{
    Coordinates, DirectionsQuery, GeocodeQuery, PlaceQuery, PlacesValidationError, SearchRadius,
    TravelMode,
};
use carelink_workflow::ports::{
    Clock, IdentityVerifier, MailSender, MapProvider, ProfileRepository, UpstreamReply,
};
use carelink_workflow::workflows;

use crate::dto::request::{DirectionsParams, GeocodeParams, PlaceSearchParams};
use crate::errors::{ApiError, FailureMessage};
use crate::state::AppState;

// =============================================================================
// Request Parsing
// =============================================================================

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

pub(crate) fn place_query(params: &PlaceSearchParams) -> Result<PlaceQuery, PlacesValidationError> {
    let near = present(params.near.as_deref())
        .map(str::parse::<Coordinates>)
        .transpose()?;
    let radius = present(params.radius.as_deref())
        .map(str::parse::<SearchRadius>)
        .transpose()?
        .unwrap_or_default();
    PlaceQuery::new(params.q.as_deref().unwrap_or_default(), near, radius)
}

pub(crate) fn directions_query(
    params: &DirectionsParams,
) -> Result<DirectionsQuery, PlacesValidationError> {
    let mode = params
        .mode
        .as_deref()
        .unwrap_or_default()
        .parse::<TravelMode>()?;
    DirectionsQuery::new(
        params.origin.as_deref().unwrap_or_default(),
        params.destination.as_deref().unwrap_or_default(),
        mode,
    )
}

fn parse<T>(result: Result<T, PlacesValidationError>) -> Result<T, ApiError> {
    result.map_err(|error| DomainError::from(error).into())
}

// =============================================================================
// Passthrough
// =============================================================================

/// Replays a provider reply with its own status.
fn passthrough(reply: UpstreamReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, Json(reply.body)).into_response()
}

fn maps_failure(error: carelink_workflow::WorkflowError) -> ApiError {
    ApiError::from_workflow(error, FailureMessage::Maps)
}

// =============================================================================
// Search Places Handler
// =============================================================================

pub async fn search_places<Mail, Maps, Profiles, Identity, Time>(
    State(state): State<AppState<Mail, Maps, Profiles, Identity, Time>>,
    params: Result<Query<PlaceSearchParams>, QueryRejection>,
) -> Result<Response, ApiError>
where
    Mail: MailSender,
    Maps: MapProvider,
    Profiles: ProfileRepository,
    Identity: IdentityVerifier,
    Time: Clock,
{
    let Query(params) = params?;
    let query = parse(place_query(&params))?;

    let reply = workflows::search_places(state.maps.as_ref(), query)
        .await
        .map_err(maps_failure)?;

    Ok(passthrough(reply))
}

// =============================================================================
// Geocode Handler
// =============================================================================

pub async fn geocode<Mail, Maps, Profiles, Identity, Time>(
    State(state): State<AppState<Mail, Maps, Profiles, Identity, Time>>,
    params: Result<Query<GeocodeParams>, QueryRejection>,
) -> Result<Response, ApiError>
where
    Mail: MailSender,
    Maps: MapProvider,
    Profiles: ProfileRepository,
    Identity: IdentityVerifier,
    Time: Clock,
{
    let Query(params) = params?;
    let query = parse(GeocodeQuery::new(
        params.address.as_deref().unwrap_or_default(),
    ))?;

    let reply = workflows::geocode(state.maps.as_ref(), query)
        .await
        .map_err(maps_failure)?;

    Ok(passthrough(reply))
}

// =============================================================================
// Directions Handler
// =============================================================================

pub async fn directions<Mail, Maps, Profiles, Identity, Time>(
    State(state): State<AppState<Mail, Maps, Profiles, Identity, Time>>,
    params: Result<Query<DirectionsParams>, QueryRejection>,
) -> Result<Response, ApiError>
where
    Mail: MailSender,
    Maps: MapProvider,
    Profiles: ProfileRepository,
    Identity: IdentityVerifier,
    Time: Clock,
{
    let Query(params) = params?;
    let query = parse(directions_query(&params))?;

    let reply = workflows::directions(state.maps.as_ref(), query)
        .await
        .map_err(maps_failure)?;

    Ok(passthrough(reply))
}

// =============================================================================
// Tests
// =============================================================================
