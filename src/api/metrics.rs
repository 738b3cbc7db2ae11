use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use super::state::AgentState;

pub async fn metrics(State(state): State<AgentState>) -> impl IntoResponse {
    let body = format!(
        "# HELP esb_agent_cycles_completed_total Poll cycles finished successfully\n\
         # TYPE esb_agent_cycles_completed_total counter\n\
         esb_agent_cycles_completed_total {}\n\
         # HELP esb_agent_cycles_failed_total Poll cycles aborted by a snapshot failure\n\
         # TYPE esb_agent_cycles_failed_total counter\n\
         esb_agent_cycles_failed_total {}\n\
         # HELP esb_agent_metrics_emitted_total Rate metrics emitted across all cycles\n\
         # TYPE esb_agent_metrics_emitted_total counter\n\
         esb_agent_metrics_emitted_total {}\n\
         # HELP esb_agent_last_poll_epoch Unix timestamp of the last successful cycle\n\
         # TYPE esb_agent_last_poll_epoch gauge\n\
         esb_agent_last_poll_epoch {}\n",
        state.cycles_completed(),
        state.cycles_failed(),
        state.metrics_emitted(),
        state.last_poll_epoch(),
    );

    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
}
