use carelink_api::routes::create_router;
use carelink_api::server::{Server, ServerConfig};
use carelink_api::state::AppState;
use carelink_infrastructure::adapters::http::build_client;
use carelink_infrastructure::adapters::{
    FirebaseIdentityVerifier, FirestoreProfileRepository, GoogleMapsProvider, SendGridMailSender,
    SystemClock,
};
use carelink_infrastructure::config::AppConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is normal outside local development.
    dotenvy::dotenv().ok();

    init_tracing();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Carelink - Starting Server");

    let config = AppConfig::from_env()?;
    let server_config = ServerConfig::from_lookup(|key| std::env::var(key).ok())?;

    let client = build_client(config.upstream_timeout)?;

    let mailer = SendGridMailSender::new(client.clone(), &config.mail);
    let maps = GoogleMapsProvider::new(client.clone(), &config.maps);
    let profiles = FirestoreProfileRepository::new(client.clone(), &config.firebase);
    let identity = FirebaseIdentityVerifier::new(client, &config.firebase);

    log_configuration(&config);

    let state = AppState::new(mailer, maps, profiles, identity, SystemClock);

    let router = create_router(state);

    let server = Server::new(server_config);
    server.run(router).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("carelink_api=debug,carelink_infrastructure=debug,tower_http=debug,info")
    });

    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .init();
    }
}

/// Services stay mounted when unconfigured; their endpoints answer 500.
fn log_configuration(config: &AppConfig) {
    if config.mail.api_key.is_none() || config.mail.sender.is_none() {
        tracing::warn!("SENDGRID_API_KEY or MAIL_SENDER not set, /sendMail is disabled");
    }
    if config.maps.api_key.is_none() {
        tracing::warn!("GOOGLE_MAPS_API_KEY not set, /places is disabled");
    }
    if config.firebase.project_id.is_none() {
        tracing::warn!("FIREBASE_PROJECT_ID not set, /profile and /checkUsername are disabled");
    }
    if config.firebase.web_api_key.is_none() && config.firebase.auth_emulator_host.is_none() {
        tracing::warn!("FIREBASE_WEB_API_KEY not set, bearer tokens cannot be verified");
    }
    tracing::info!(
        timeout_secs = config.upstream_timeout.as_secs(),
        firestore_emulator = config.firebase.firestore_emulator_host.as_deref().unwrap_or("-"),
        auth_emulator = config.firebase.auth_emulator_host.as_deref().unwrap_or("-"),
        "Upstream configuration loaded"
    );
}
