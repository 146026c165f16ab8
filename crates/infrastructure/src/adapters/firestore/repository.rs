use std::sync::Arc;

use carelink_domain::profile::{ProfilePatch, UserId, UserProfile};
use carelink_workflow::ports::{ProfileRepository, WorkflowResult};
use carelink_workflow::{Service, WorkflowError};
use chrono::{DateTime, Utc};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::Value as JsonValue;

use super::document::{
    COLLECTION, first_match, patch_document, profile_from_document, username_query,
};
use super::token::AccessTokenSource;
use crate::adapters::http::ensure_success;
use crate::config::FirebaseConfig;
use crate::errors::InfraError;

const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

// =============================================================================
// FirestoreProfileRepository
// =============================================================================

/// Profiles stored as `users/{uid}` documents through the Firestore REST API.
#[derive(Debug, Clone)]
pub struct FirestoreProfileRepository {
    client: reqwest::Client,
    /// `None` when no project is configured.
    documents_url: Option<Arc<str>>,
    tokens: AccessTokenSource,
}

impl FirestoreProfileRepository {
    /// Targets the emulator when `FIRESTORE_EMULATOR_HOST` is set.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &FirebaseConfig) -> Self {
        let base_url = config
            .firestore_emulator_host
            .as_ref()
            .map_or_else(|| FIRESTORE_BASE_URL.to_string(), |host| format!("http://{host}/v1"));
        let tokens = AccessTokenSource::from_config(client.clone(), config);
        Self::with_base_url(client, &base_url, config.project_id.as_deref(), tokens)
    }

    #[must_use]
    pub fn with_base_url(
        client: reqwest::Client,
        base_url: &str,
        project_id: Option<&str>,
        tokens: AccessTokenSource,
    ) -> Self {
        let documents_url = project_id.map(|project| {
            Arc::from(format!(
                "{}/projects/{project}/databases/(default)/documents",
                base_url.trim_end_matches('/')
            ))
        });
        Self {
            client,
            documents_url,
            tokens,
        }
    }

    fn documents_url(&self) -> WorkflowResult<&str> {
        self.documents_url
            .as_deref()
            .ok_or_else(|| WorkflowError::not_configured(Service::Profiles, "FIREBASE_PROJECT_ID"))
    }

    async fn request(&self, method: Method, url: String) -> Result<RequestBuilder, InfraError> {
        let builder = self.client.request(method, url);
        Ok(match self.tokens.bearer().await? {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn get_document(&self, root: &str, user_id: &UserId) -> Result<Option<JsonValue>, InfraError> {
        let url = format!("{root}/{COLLECTION}/{user_id}");
        let response = self.request(Method::GET, url).await?.send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(ensure_success(response).await?.json().await?))
    }

    async fn run_username_query(&self, root: &str, canonical: &str) -> Result<JsonValue, InfraError> {
        let response = self
            .request(Method::POST, format!("{root}:runQuery"))
            .await?
            .json(&username_query(canonical))
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    async fn patch_document(
        &self,
        root: &str,
        user_id: &UserId,
        patch: &ProfilePatch,
        updated_at: DateTime<Utc>,
    ) -> Result<JsonValue, InfraError> {
        let mask: Vec<(&str, &str)> = patch
            .field_paths()
            .into_iter()
            .map(|path| ("updateMask.fieldPaths", path))
            .collect();

        let response = self
            .request(Method::PATCH, format!("{root}/{COLLECTION}/{user_id}"))
            .await?
            .query(&mask)
            .json(&patch_document(patch, updated_at))
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }
}

impl ProfileRepository for FirestoreProfileRepository {
    fn is_configured(&self) -> bool {
        self.documents_url.is_some()
    }

    async fn find(&self, user_id: &UserId) -> WorkflowResult<Option<UserProfile>> {
        let root = self.documents_url()?;
        let document = self
            .get_document(root, user_id)
            .await
            .map_err(|error| error.into_workflow(Service::Profiles, "find"))?;
        Ok(document.map(|document| profile_from_document(user_id.clone(), &document)))
    }

    async fn find_owner_of_username(&self, canonical: &str) -> WorkflowResult<Option<UserId>> {
        let root = self.documents_url()?;
        let reply = self
            .run_username_query(root, canonical)
            .await
            .map_err(|error| error.into_workflow(Service::Profiles, "query"))?;
        Ok(first_match(&reply))
    }

    async fn save(
        &self,
        user_id: &UserId,
        patch: &ProfilePatch,
        updated_at: DateTime<Utc>,
    ) -> WorkflowResult<UserProfile> {
        let root = self.documents_url()?;
        let document = self
            .patch_document(root, user_id, patch, updated_at)
            .await
            .map_err(|error| error.into_workflow(Service::Profiles, "save"))?;
        Ok(profile_from_document(user_id.clone(), &document))
    }
}

// =============================================================================
// Tests
// =============================================================================
