use std::sync::Arc;

use carelink_workflow::ports::{Clock, IdentityVerifier, MailSender, MapProvider, ProfileRepository};

// =============================================================================
// AppState
// =============================================================================

/// Shared handler state: one adapter per port, all read-only.
#[derive(Clone)]
pub struct AppState<Mail, Maps, Profiles, Identity, Time>
where
    Mail: MailSender,
    Maps: MapProvider,
    Profiles: ProfileRepository,
    Identity: IdentityVerifier,
    Time: Clock,
{
    pub mailer: Arc<Mail>,

    pub maps: Arc<Maps>,

    pub profiles: Arc<Profiles>,

    pub identity: Arc<Identity>,

    pub clock: Arc<Time>,
}

impl<Mail, Maps, Profiles, Identity, Time> AppState<Mail, Maps, Profiles, Identity, Time>
where
    Mail: MailSender,
    Maps: MapProvider,
    Profiles: ProfileRepository,
    Identity: IdentityVerifier,
    Time: Clock,
{
    #[must_use]
    pub fn new(mailer: Mail, maps: Maps, profiles: Profiles, identity: Identity, clock: Time) -> Self {
        Self {
            mailer: Arc::new(mailer),
            maps: Arc::new(maps),
            profiles: Arc::new(profiles),
            identity: Arc::new(identity),
            clock: Arc::new(clock),
        }
    }
}
