use anyhow::{Context, Result};

use campwatch::config::Config;
use campwatch::server::SlotServer;

/// Start the HTTP server
pub async fn serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let server = SlotServer::new(&config).context("Failed to create server")?;

    println!("{}", server.info().display());
    println!();
    println!("Endpoints:");
    println!("  GET  /                      - Slot checker form");
    println!("  GET  /status                - Liveness check");
    println!("  GET  /check?url=&weekdays=  - Check a campground page");
    println!("  GET  /tools                 - Tool descriptors");
    println!("  POST /tools/check_camp_slot - Tool-style slot check");
    println!();
    println!("Press Ctrl+C to stop.\n");

    server
        .start_with_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("Shutdown signal received");
                }
                Err(e) => {
                    tracing::error!("Failed to wait for Ctrl+C: {}", e);
                }
            }
        })
        .await
        .context("Server error")?;

    println!("Server stopped.");
    Ok(())
}
