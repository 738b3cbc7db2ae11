use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use crate::api::{self, AgentState};
use crate::config::AgentConfig;
use crate::exporter::{HttpExporter, MetricSample};
use crate::health::HttpSnapshotSource;
use crate::poll::PollCycle;
use crate::scheduler::PollTask;

pub async fn run(config: AgentConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        agent = %config.name,
        esb_host = %config.esb.host,
        esb_port = config.esb.port,
        instance = %config.esb.instance,
        interval_s = config.poll.interval_seconds,
        "agent configured"
    );

    let state = AgentState::new();
    let (samples_tx, samples_rx) = mpsc::channel(64);

    spawn_poller(&config, samples_tx, state.clone());
    spawn_exporter(&config, samples_rx);
    spawn_api(config.api_port, state).await;

    tracing::info!("agent running");
    crate::shutdown::wait_for_shutdown().await;

    tracing::info!("shutting down");
    Ok(())
}

fn spawn_poller(config: &AgentConfig, tx: mpsc::Sender<Vec<MetricSample>>, state: AgentState) {
    let source = HttpSnapshotSource::new(
        &config.esb.host,
        config.esb.port,
        &config.esb.instance,
    );
    tracing::debug!(url = source.url(), "health endpoint resolved");

    let _handle = PollTask {
        interval: Duration::from_secs(config.poll.interval_seconds),
        jitter_fraction: config.poll.jitter_fraction,
        source,
    }
    .spawn(PollCycle::new(), tx, state);
}

fn spawn_exporter(config: &AgentConfig, mut rx: mpsc::Receiver<Vec<MetricSample>>) {
    let exporter = HttpExporter::new(&config.collector.url, config.name.clone());
    tokio::spawn(async move {
        while let Some(samples) = rx.recv().await {
            match exporter.push(&samples).await {
                Ok(()) => tracing::debug!(count = samples.len(), "metrics exported"),
                Err(e) => tracing::warn!(error = %e, count = samples.len(), "export failed, dropping cycle"),
            }
        }
    });
}

async fn spawn_api(port: u16, state: AgentState) {
    let addr = format!("0.0.0.0:{port}");
    tokio::spawn(async move {
        match TcpListener::bind(&addr).await {
            Ok(listener) => {
                tracing::info!(addr = %addr, "HTTP API listening");
                if let Err(e) = api::serve(listener, state).await {
                    tracing::error!(error = %e, "HTTP API error");
                }
            }
            Err(e) => tracing::error!(error = %e, addr = %addr, "failed to bind HTTP API"),
        }
    });
}
