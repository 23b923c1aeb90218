use anyhow::Result;
use tracing::{error, info};

use cyberguardian::config::{Command, Config};
use cyberguardian::health::ProbeServer;
use cyberguardian::{build_info, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_args();

    // Handle version subcommand
    if let Some(Command::Version) = &config.command {
        println!(
            "cyberguardian {}, commit: {}, build_date: {}",
            build_info::VERSION,
            build_info::GIT_SHA,
            build_info::BUILD_DATE,
        );
        return Ok(());
    }

    // Initialize logging
    logging::init(&config.log_format, &config.log_level);

    info!(
        version = build_info::VERSION,
        commit = build_info::GIT_SHA,
        build_date = build_info::BUILD_DATE,
        port = config.port,
        bind_address = %config.bind_address,
        "cyberguardian starting"
    );

    // Validate configuration
    if let Err(e) = config.validate() {
        error!(error = %e, "Configuration validation failed");
        std::process::exit(1);
    }

    // Start probe server
    let probes = ProbeServer::new();
    if config.probes_enabled() {
        let health_port = config.health_port;
        let probes_clone = probes.clone();

        let (bound_tx, bound_rx) = tokio::sync::oneshot::channel();
        tokio::spawn(async move {
            if let Err(e) = probes_clone.serve(health_port, bound_tx).await {
                error!(error = %e, "Probe server failed");
            }
        });

        // Wait for probe server to be bound
        if bound_rx.await.is_ok() {
            info!(port = health_port, "Probe server started");
        }
    } else {
        info!("Probe server disabled");
    }

    // Create shutdown channel
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received shutdown signal");
                let _ = shutdown_tx.send(true);
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        }
    });

    if let Err(e) = web::run(config, probes, shutdown_rx).await {
        error!(error = %e, "Application error");
        std::process::exit(1);
    }

    info!("Shutdown complete");
    Ok(())
}
