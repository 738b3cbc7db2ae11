use tracing_subscriber::EnvFilter;

use neuron_esb_agent::{cli, config, run};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .init();

    let args = cli::parse();

    let config = match config::load_from_file(&args.config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, path = %args.config_path.display(), "invalid configuration");
            std::process::exit(1);
        }
    };

    if args.check_only {
        tracing::info!(path = %args.config_path.display(), "configuration OK");
        return;
    }

    if let Err(e) = run::run(config).await {
        tracing::error!(error = %e, "agent exited with error");
        std::process::exit(1);
    }
}
