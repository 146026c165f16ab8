//! Google Maps Web Services: Places text search, Geocoding and Directions.
//!
//! Replies are returned as-is; the API key travels as the `key` query
//! parameter and is never echoed into logs.

use std::sync::Arc;

use carelink_domain::places::{DirectionsQuery, GeocodeQuery, PlaceCategory, PlaceQuery};
use carelink_workflow::ports::{MapProvider, UpstreamReply, WorkflowResult};
use carelink_workflow::{Service, WorkflowError};

use super::http::read_reply;
use crate::config::MapsConfig;
use crate::errors::InfraError;

const TEXT_SEARCH_PATH: &str = "/maps/api/place/textsearch/json";
const GEOCODE_PATH: &str = "/maps/api/geocode/json";
const DIRECTIONS_PATH: &str = "/maps/api/directions/json";

type QueryParameters = Vec<(&'static str, String)>;

// =============================================================================
// Query Parameters
// =============================================================================

/// Text search parameters, without the key.
///
/// `location` and `radius` are only sent together, when the query is
/// anchored to coordinates.
#[must_use]
pub fn search_parameters(query: &PlaceQuery, category: Option<PlaceCategory>) -> QueryParameters {
    let mut parameters = vec![("query", query.text().to_string())];
    if let Some(category) = category {
        parameters.push(("type", category.as_str().to_string()));
    }
    if let Some(near) = query.near() {
        parameters.push(("location", near.to_string()));
        parameters.push(("radius", query.radius().metres().to_string()));
    }
    parameters
}

#[must_use]
pub fn geocode_parameters(query: &GeocodeQuery) -> QueryParameters {
    vec![("address", query.address().to_string())]
}

#[must_use]
pub fn directions_parameters(query: &DirectionsQuery) -> QueryParameters {
    vec![
        ("origin", query.origin().to_string()),
        ("destination", query.destination().to_string()),
        ("mode", query.mode().as_str().to_string()),
    ]
}

// =============================================================================
// GoogleMapsProvider
// =============================================================================

#[derive(Debug, Clone)]
pub struct GoogleMapsProvider {
    client: reqwest::Client,
    api_key: Option<Arc<str>>,
    base_url: Arc<str>,
}

impl GoogleMapsProvider {
    #[must_use]
    pub fn new(client: reqwest::Client, config: &MapsConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.as_deref().map(Arc::from),
            base_url: Arc::from(config.base_url.as_str()),
        }
    }

    async fn call(
        &self,
        operation: &'static str,
        path: &str,
        mut parameters: QueryParameters,
    ) -> WorkflowResult<UpstreamReply> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| WorkflowError::not_configured(Service::Maps, "GOOGLE_MAPS_API_KEY"))?;
        parameters.push(("key", api_key.to_string()));

        tracing::debug!(operation, path, "Calling maps service");

        self.fetch(path, &parameters)
            .await
            .map_err(|error| error.into_workflow(Service::Maps, operation))
    }

    async fn fetch(
        &self,
        path: &str,
        parameters: &QueryParameters,
    ) -> Result<UpstreamReply, InfraError> {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .query(parameters)
            .send()
            .await?;
        read_reply(response).await
    }
}

impl MapProvider for GoogleMapsProvider {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn search_places(
        &self,
        query: &PlaceQuery,
        category: Option<PlaceCategory>,
    ) -> WorkflowResult<UpstreamReply> {
        self.call("search", TEXT_SEARCH_PATH, search_parameters(query, category))
            .await
    }

    async fn geocode(&self, query: &GeocodeQuery) -> WorkflowResult<UpstreamReply> {
        self.call("geocode", GEOCODE_PATH, geocode_parameters(query))
            .await
    }

    async fn directions(&self, query: &DirectionsQuery) -> WorkflowResult<UpstreamReply> {
        self.call("directions", DIRECTIONS_PATH, directions_parameters(query))
            .await
    }
}

// =============================================================================
// Tests
// =============================================================================
