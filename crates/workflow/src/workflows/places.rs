use carelink_domain::places::{DirectionsQuery, GeocodeQuery, PlaceQuery};

use crate::errors::{Service, WorkflowError};
use crate::ports::{MapProvider, UpstreamReply, WorkflowResult};

const MISSING_MAPS_KEY: &str = "GOOGLE_MAPS_API_KEY";

fn ensure_configured<P: MapProvider>(maps: &P) -> WorkflowResult<()> {
    if maps.is_configured() {
        Ok(())
    } else {
        Err(WorkflowError::not_configured(Service::Maps, MISSING_MAPS_KEY))
    }
}

// =============================================================================
// SearchPlaces Workflow
// =============================================================================

/// Searches for places, first with the inferred category hint.
///
/// When a categorised search succeeds but returns no results, the search
/// is repeated once without the category. The provider reply is returned
/// as-is, whatever its status.
///
/// # Errors
///
/// Fails only when the provider is not configured or cannot be reached.
pub async fn search_places<P: MapProvider>(
    maps: &P,
    query: PlaceQuery,
) -> WorkflowResult<UpstreamReply> {
    ensure_configured(maps)?;

    let category = query.category();
    let reply = maps.search_places(&query, category).await?;

    match category {
        Some(category) if reply.is_success() && !reply.has_results() => {
            tracing::debug!(
                category = category.as_str(),
                "No results with category hint, retrying without it"
            );
            maps.search_places(&query, None).await
        }
        _ => Ok(reply),
    }
}

// =============================================================================
// Geocode Workflow
// =============================================================================

/// # Errors
///
/// Fails only when the provider is not configured or cannot be reached.
pub async fn geocode<P: MapProvider>(maps: &P, query: GeocodeQuery) -> WorkflowResult<UpstreamReply> {
    ensure_configured(maps)?;
    maps.geocode(&query).await
}

// =============================================================================
// Directions Workflow
// =============================================================================

/// # Errors
///
/// Fails only when the provider is not configured or cannot be reached.
pub async fn directions<P: MapProvider>(
    maps: &P,
    query: DirectionsQuery,
) -> WorkflowResult<UpstreamReply> {
    ensure_configured(maps)?;
    maps.directions(&query).await
}

// =============================================================================
// Tests
// =============================================================================
