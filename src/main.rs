use passrule_core::application::{
    ports::{i18n::Translator, policy::PolicyOverrideProvider},
    services::ApplicationServices,
};
use passrule_core::config::AppConfig;
use passrule_core::infrastructure::{i18n::LanguageCatalog, params::JsonParamsStore};
use passrule_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let params = match config.params_path() {
        Some(path) => JsonParamsStore::from_file(path)?,
        None => {
            tracing::info!("no PASSWORD_PARAMS_PATH set; using field-level policy only");
            JsonParamsStore::empty()
        }
    };
    let overrides: Arc<dyn PolicyOverrideProvider> = Arc::new(params);

    let mut catalog = LanguageCatalog::en_gb();
    if let Some(path) = config.language_overrides_path() {
        catalog = catalog.with_overrides_file(path)?;
    }
    let translator: Arc<dyn Translator> = Arc::new(catalog);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&overrides),
        Arc::clone(&translator),
        config.password_component(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, &config.router_options());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        component = config.password_component(),
        rate_limit = config.rate_limit_enabled(),
        "listening on {address}"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
