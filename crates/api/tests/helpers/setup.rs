#![allow(dead_code)]

use carelink_api::routes::create_router;
use carelink_api::state::AppState;

use super::{
    FixedClock, MockIdentityVerifier, MockMailSender, MockMapProvider, MockProfileRepository,
    TestClient,
};

pub const ALICE_TOKEN: &str = "token-alice";
pub const ALICE: &str = "uid-alice";
pub const BOB_TOKEN: &str = "token-bob";
pub const BOB: &str = "uid-bob";

// =============================================================================
// TestContext
// =============================================================================

/// A router over mock ports, with handles to inspect what they saw.
pub struct TestContext {
    pub client: TestClient,

    pub mailer: MockMailSender,

    pub maps: MockMapProvider,

    pub profiles: MockProfileRepository,
}

impl TestContext {
    /// Every service configured; Alice and Bob have valid tokens.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> TestContextBuilder {
        TestContextBuilder {
            mailer: MockMailSender::configured(),
            maps: MockMapProvider::with_replies(Vec::new()),
            profiles: MockProfileRepository::new(),
            identity: MockIdentityVerifier::new(&[(ALICE_TOKEN, ALICE), (BOB_TOKEN, BOB)]),
        }
    }
}

pub struct TestContextBuilder {
    mailer: MockMailSender,
    maps: MockMapProvider,
    profiles: MockProfileRepository,
    identity: MockIdentityVerifier,
}

impl TestContextBuilder {
    #[must_use]
    pub fn mailer(self, mailer: MockMailSender) -> Self {
        Self { mailer, ..self }
    }

    #[must_use]
    pub fn maps(self, maps: MockMapProvider) -> Self {
        Self { maps, ..self }
    }

    #[must_use]
    pub fn profiles(self, profiles: MockProfileRepository) -> Self {
        Self { profiles, ..self }
    }

    #[must_use]
    pub fn identity(self, identity: MockIdentityVerifier) -> Self {
        Self { identity, ..self }
    }

    #[must_use]
    pub fn build(self) -> TestContext {
        // Mocks share their recorders through Arc, so the clones kept
        // here observe every call the router makes.
        let state = AppState::new(
            self.mailer.clone(),
            self.maps.clone(),
            self.profiles.clone(),
            self.identity,
            FixedClock::default(),
        );

        TestContext {
            client: TestClient::new(create_router(state)),
            mailer: self.mailer,
            maps: self.maps,
            profiles: self.profiles,
        }
    }
}

#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
