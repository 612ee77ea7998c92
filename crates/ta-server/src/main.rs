//! TrustAuth static host
//!
//! Serves the built web bundle. Unknown paths fall back to `index.html` so the
//! client-side router can resolve them.

use anyhow::{bail, Context, Result};
use axum::{routing::get, Json, Router};
use clap::Parser;
use serde::Serialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ta-server")]
#[command(about = "Serve the TrustAuth web front-end")]
#[command(version)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "TRUSTAUTH_ADDR", default_value = "0.0.0.0:8080")]
    addr: SocketAddr,

    /// Directory produced by `trunk build`
    #[arg(long, env = "TRUSTAUTH_DIST", default_value = "dist")]
    dist: PathBuf,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn app(dist: &Path) -> Router {
    let spa = ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(spa)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "ta_server=info,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    if !args.dist.join("index.html").is_file() {
        bail!(
            "{} has no index.html; build the web crate first",
            args.dist.display()
        );
    }

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("Failed to bind {}", args.addr))?;
    info!("Serving {} on http://{}", args.dist.display(), args.addr);

    axum::serve(listener, app(&args.dist)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn dist() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>app</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();
        dir
    }

    async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let dir = dist();
        let (status, body) = get_body(app(dir.path()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"status\":\"ok\""));
    }

    #[tokio::test]
    async fn test_serves_assets() {
        let dir = dist();
        let (status, body) = get_body(app(dir.path()), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1)");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dir = dist();
        for path in ["/dashboard", "/upload", "/how-it-works"] {
            let (status, body) = get_body(app(dir.path()), path).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, "<html>app</html>");
        }
    }
}
