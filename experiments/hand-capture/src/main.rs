use {
    base::{init_stdout_logger, init_tee_logger, log_info, log_warn},
    hand_capture::{CaptureConfig, DEFAULT_ADDR, LOG_DIR, SystemBackend, WebServer},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(error) = init_tee_logger(LOG_DIR) {
        init_stdout_logger();
        log_warn!("Logging to stdout only, cannot write to {}: {}", LOG_DIR, error);
    }

    let config = CaptureConfig::default();
    let server = WebServer::bind(DEFAULT_ADDR, SystemBackend, config.clone()).await?;

    log_info!("Hand Capture");
    log_info!("Listening on http://{}", server.local_addr());
    log_info!("Captures are saved to {}", config.output_path().display());
    log_info!("Controls: Ctrl-C to stop the server, ESC in the camera window to capture");

    tokio::signal::ctrl_c().await?;
    log_info!("Exiting...");
    Ok(())
}
