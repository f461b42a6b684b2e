//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use account::domain::repository::AccountStore;
use account::{AccountAppState, AccountConfig, MemoryAccountRepository, PgAccountRepository};
use anyhow::Context;
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use hackathon::domain::repository::HackathonStore;
use hackathon::{MemorySubmissionRepository, PgSubmissionRepository};
use kernel::clock::{Clock, SystemClock};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,account=info,hackathon=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let account_config = load_account_config()?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let cors = cors_layer(&env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| {
        "http://localhost:40922,http://127.0.0.1:40922".to_string()
    }));

    let app = match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await
                .context("failed to connect to DATABASE_URL")?;

            tracing::info!("Connected to database");

            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            build_router(
                PgAccountRepository::new(pool.clone()),
                PgSubmissionRepository::new(pool),
                account_config,
                clock,
            )
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, using in-memory stores (data is lost on exit)");

            build_router(
                MemoryAccountRepository::new(),
                MemorySubmissionRepository::new(),
                account_config,
                clock,
            )
        }
    };

    let app = app.layer(TraceLayer::new_for_http()).layer(cors);

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .context("BIND_ADDR must be host:port")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Mount the account and hackathon routers on one store pair
fn build_router<A, S>(
    account_repo: A,
    submission_repo: S,
    config: AccountConfig,
    clock: Arc<dyn Clock>,
) -> Router
where
    A: AccountStore,
    S: HackathonStore,
{
    let account_state = AccountAppState::new(account_repo, config, clock);

    Router::new()
        .nest(
            "/api/hackathon",
            hackathon::hackathon_router_generic(account_state.clone(), submission_repo),
        )
        .nest(
            "/api/account",
            account::account_router_generic(account_state),
        )
}

/// Session configuration from the environment
fn load_account_config() -> anyhow::Result<AccountConfig> {
    account_config_from(env::var("SESSION_SECRET").ok(), env::var("LOGIN_URL").ok())
}

/// Release builds require a session secret; debug builds fall back to a
/// random one, which invalidates sessions on restart.
///
/// `login_url` points the session gate at a frontend login page instead of
/// the API's own login entry point.
fn account_config_from(
    session_secret: Option<String>,
    login_url: Option<String>,
) -> anyhow::Result<AccountConfig> {
    let config = match session_secret {
        Some(secret_b64) => AccountConfig {
            session_secret: decode_session_secret(&secret_b64)?,
            cookie_secure: !cfg!(debug_assertions),
            ..AccountConfig::default()
        },
        None if cfg!(debug_assertions) => {
            tracing::warn!("SESSION_SECRET not set, using a random development secret");
            AccountConfig::development()
        }
        None => anyhow::bail!("SESSION_SECRET must be set in production"),
    };

    Ok(match login_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => AccountConfig {
            login_path: url.to_string(),
            ..config
        },
        _ => config,
    })
}

/// Decode a base64 (standard alphabet) 32-byte secret
fn decode_session_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("SESSION_SECRET must be base64")?;

    bytes.try_into().map_err(|bytes: Vec<u8>| {
        anyhow::anyhow!("SESSION_SECRET must be 32 bytes, got {}", bytes.len())
    })
}

fn cors_layer(frontend_origins: &str) -> CorsLayer {
    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    fn memory_app() -> Router {
        build_router(
            MemoryAccountRepository::new(),
            MemorySubmissionRepository::new(),
            AccountConfig::development(),
            Arc::new(SystemClock),
        )
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_gate_redirects_to_a_served_login_page() {
        let app = memory_app();

        for uri in ["/api/hackathon", "/api/account/home"] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");

            let location = response.headers()[header::LOCATION].to_str().unwrap();
            let followed = app.clone().oneshot(get(location)).await.unwrap();
            assert_eq!(followed.status(), StatusCode::OK, "{uri} -> {location}");
        }
    }

    #[test]
    fn test_login_url_overrides_login_path() {
        let secret = Some(general_purpose::STANDARD.encode([5u8; 32]));

        let config =
            account_config_from(secret.clone(), Some("https://portal.example/login".into()))
                .unwrap();
        assert_eq!(config.login_path, "https://portal.example/login");
        assert_eq!(config.session_secret, [5u8; 32]);

        let config = account_config_from(secret.clone(), None).unwrap();
        assert_eq!(config.login_path, "/api/account/login");

        let config = account_config_from(secret, Some("  ".into())).unwrap();
        assert_eq!(config.login_path, "/api/account/login");
    }

    #[test]
    fn test_decode_session_secret() {
        let encoded = general_purpose::STANDARD.encode([5u8; 32]);
        assert_eq!(decode_session_secret(&encoded).unwrap(), [5u8; 32]);
    }

    #[test]
    fn test_decode_session_secret_rejects_wrong_length() {
        let encoded = general_purpose::STANDARD.encode([5u8; 16]);
        assert!(decode_session_secret(&encoded).is_err());
        assert!(decode_session_secret("not base64!").is_err());
    }
}
