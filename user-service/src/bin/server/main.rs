use std::sync::Arc;

use auth::Authenticator;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use user_service::config::Config;
use user_service::domain::user::service::UserService;
use user_service::inbound::http::router::create_router;
use user_service::outbound::repositories::InMemoryUserRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "user-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // A short signing key is fatal at startup.
    let signing_config = config.jwt.signing_config().map_err(|e| {
        tracing::error!(error = %e, "Invalid signing configuration");
        e
    })?;

    tracing::info!(
        http_port = config.server.http_port,
        issuer = %signing_config.issuer,
        audience = %signing_config.audience,
        token_lifetime_minutes = config.jwt.token_lifetime_minutes,
        refresh_identity = config.jwt.refresh_identity,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(Arc::new(signing_config)));
    let user_repository = Arc::new(InMemoryUserRepository::new());

    let user_service = Arc::new(UserService::new(
        user_repository,
        authenticator,
        config.jwt.refresh_identity,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
