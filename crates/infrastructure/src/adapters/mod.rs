pub mod clock;
pub mod firestore;
pub mod google_maps;
pub mod http;
pub mod identity;
pub mod sendgrid;

#[cfg(test)]
pub(crate) mod stub;

pub use clock::SystemClock;
pub use firestore::{AccessTokenSource, FirestoreProfileRepository};
pub use google_maps::GoogleMapsProvider;
pub use identity::FirebaseIdentityVerifier;
pub use sendgrid::SendGridMailSender;
