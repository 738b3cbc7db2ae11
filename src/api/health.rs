use axum::extract::State;
use axum::http::StatusCode;

use super::state::AgentState;

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Ready once the first poll cycle has completed successfully.
pub async fn ready(State(state): State<AgentState>) -> StatusCode {
    if state.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
