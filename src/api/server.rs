use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use super::health;
use super::metrics;
use super::state::AgentState;

pub fn router(state: AgentState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/ready", get(health::ready))
        .route("/metrics", get(metrics::metrics))
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AgentState) -> std::io::Result<()> {
    let app = router(state);
    axum::serve(listener, app).await
}
