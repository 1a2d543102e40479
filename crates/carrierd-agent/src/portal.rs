//! HTTP status portal — a tiny read-only surface for checking on the daemon.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use carrierd_common::models::CarrierStatus;

use crate::scheduler::RefreshScheduler;
use crate::service::CarrierStatusService;

pub struct PortalState {
    pub service: Arc<CarrierStatusService>,
    pub scheduler: Arc<RefreshScheduler>,
    pub simulate: bool,
    pub started_at: Instant,
}

#[derive(Serialize)]
struct StatusResponse {
    carrier: Option<CarrierStatus>,
    scheduled: bool,
    simulate: bool,
    uptime_s: u64,
    version: &'static str,
}

pub fn router(state: Arc<PortalState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/status", get(status))
        .layer(tower_http::cors::CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(state: Arc<PortalState>, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(state);
    tracing::info!("status portal on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html><head><title>carrierd</title></head>
<body>
<h1>carrierd</h1>
<p>Carrier status daemon. <a href="/api/status">View status JSON</a></p>
</body></html>"#,
    )
}

async fn status(State(state): State<Arc<PortalState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        carrier: state.service.snapshot(),
        scheduled: state.scheduler.is_scheduled().await,
        simulate: state.simulate,
        uptime_s: state.started_at.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use carrierd_common::config::ServiceConfig;
    use carrierd_common::strings::Strings;
    use crate::notify::testing::MemorySink;
    use crate::service::StatusReporter;
    use crate::telephony::SimulatedTelephony;

    fn portal_state() -> Arc<PortalState> {
        let service = Arc::new(CarrierStatusService::new(
            ServiceConfig::default(),
            Strings::en(),
            Arc::new(SimulatedTelephony::new().with_carrier("KDDI")),
            Arc::new(MemorySink::new()),
        ));
        service.refresh();

        Arc::new(PortalState {
            service,
            scheduler: Arc::new(RefreshScheduler::new(Duration::from_millis(5000))),
            simulate: true,
            started_at: Instant::now(),
        })
    }

    #[tokio::test]
    async fn status_endpoint_reports_the_snapshot() {
        let app = router(portal_state());

        let response = app
            .oneshot(Request::get("/api/status").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let v: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(v["carrier"]["carrier"], "KDDI");
        assert_eq!(v["carrier"]["icon"], "carrier_k");
        assert_eq!(v["carrier"]["source"], "subscription");
        assert_eq!(v["scheduled"], false);
        assert_eq!(v["simulate"], true);
    }

    #[tokio::test]
    async fn index_serves_html() {
        let app = router(portal_state());

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(std::str::from_utf8(&body).unwrap().contains("carrierd"));
    }
}
