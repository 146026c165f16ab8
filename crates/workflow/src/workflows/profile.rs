use carelink_domain::profile::{
    ProfilePatch, ProfileValidationError, UserId, UserProfile, Username,
};

use crate::errors::{Service, WorkflowError};
use crate::ports::{Clock, IdentityVerifier, ProfileRepository, WorkflowResult};

// =============================================================================
// Commands
// =============================================================================

/// Raw profile update request. `None` fields were not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProfileCommand {
    pub bearer_token: Option<String>,
    pub username: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub age: Option<String>,
    pub interest: Option<String>,
}

/// Raw username availability request. The token is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckUsernameCommand {
    pub bearer_token: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameAvailability {
    pub username: Username,
    pub available: bool,
}

// =============================================================================
// Shared Steps
// =============================================================================

fn ensure_configured<R: ProfileRepository>(repository: &R) -> WorkflowResult<()> {
    if repository.is_configured() {
        Ok(())
    } else {
        Err(WorkflowError::not_configured(
            Service::Profiles,
            "FIREBASE_PROJECT_ID",
        ))
    }
}

fn bearer(token: Option<&str>) -> Option<&str> {
    token.map(str::trim).filter(|token| !token.is_empty())
}

async fn authenticate<V: IdentityVerifier>(
    verifier: &V,
    token: Option<&str>,
) -> WorkflowResult<UserId> {
    let token = bearer(token).ok_or(WorkflowError::Unauthenticated)?;
    verifier.verify(token).await
}

// =============================================================================
// UpdateProfile Workflow
// =============================================================================

/// Authenticates the caller and merges the requested fields into their
/// profile, creating it on first use.
///
/// A new username must not be held by another user, compared
/// case-insensitively.
///
/// # Errors
///
/// `NotConfigured`, `Unauthenticated`, `Domain` (including a taken
/// username) or `Upstream`.
pub async fn update_profile<R, V, C>(
    repository: &R,
    verifier: &V,
    clock: &C,
    command: UpdateProfileCommand,
) -> WorkflowResult<UserProfile>
where
    R: ProfileRepository,
    V: IdentityVerifier,
    C: Clock,
{
    ensure_configured(repository)?;
    let user_id = authenticate(verifier, command.bearer_token.as_deref()).await?;

    let patch = ProfilePatch::from_fields(
        command.username.as_deref(),
        command.country.as_deref(),
        command.city.as_deref(),
        command.age.as_deref(),
        command.interest.as_deref(),
    )?;

    if let Some(username) = patch.username.as_set() {
        let owner = repository
            .find_owner_of_username(&username.canonical())
            .await?;
        if owner.is_some_and(|owner| owner != user_id) {
            return Err(ProfileValidationError::UsernameTaken.into());
        }
    }

    let profile = repository.save(&user_id, &patch, clock.now()).await?;

    tracing::info!(
        user_id = %user_id,
        fields = ?patch.field_paths(),
        "Profile updated"
    );

    Ok(profile)
}

// =============================================================================
// GetProfile Workflow
// =============================================================================

/// Returns the caller's profile, or an empty one if it was never saved.
///
/// # Errors
///
/// `NotConfigured`, `Unauthenticated` or `Upstream`.
pub async fn get_profile<R, V>(
    repository: &R,
    verifier: &V,
    bearer_token: Option<&str>,
) -> WorkflowResult<UserProfile>
where
    R: ProfileRepository,
    V: IdentityVerifier,
{
    ensure_configured(repository)?;
    let user_id = authenticate(verifier, bearer_token).await?;

    Ok(repository
        .find(&user_id)
        .await?
        .unwrap_or_else(|| UserProfile::empty(user_id)))
}

// =============================================================================
// CheckUsername Workflow
// =============================================================================

/// Reports whether a username is free.
///
/// A username held by the authenticated caller counts as available, so a
/// profile form can re-submit its current name. A token that is sent but
/// rejected fails the request rather than being ignored.
///
/// # Errors
///
/// `NotConfigured`, `Domain`, `Unauthenticated` or `Upstream`.
pub async fn check_username<R, V>(
    repository: &R,
    verifier: &V,
    command: CheckUsernameCommand,
) -> WorkflowResult<UsernameAvailability>
where
    R: ProfileRepository,
    V: IdentityVerifier,
{
    ensure_configured(repository)?;

    let raw = command
        .username
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .ok_or(ProfileValidationError::MissingUsername)?;
    let username = Username::new(raw)?;

    let caller = match bearer(command.bearer_token.as_deref()) {
        Some(token) => Some(verifier.verify(token).await?),
        None => None,
    };

    let owner = repository
        .find_owner_of_username(&username.canonical())
        .await?;
    let available = owner.is_none_or(|owner| caller.as_ref() == Some(&owner));

    Ok(UsernameAvailability {
        username,
        available,
    })
}

// =============================================================================
// Tests
// =============================================================================
