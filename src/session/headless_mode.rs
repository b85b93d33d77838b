//! Headless mode execution

use super::{
    SessionOptions,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
    setup_session,
};
use crate::print_cmd_info;
use crate::view::ConsoleSink;
use std::error::Error;
use std::sync::Arc;

/// Runs the application in headless mode
///
/// Dashboard changes and activity events are printed to the console until
/// Ctrl+C, then the poller is stopped.
pub async fn run_headless_mode(options: SessionOptions) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &options.environment);
    let session = setup_session(&options, Arc::new(ConsoleSink::new()));
    print_cmd_info!(
        "Live updates",
        "Refreshing every {} ms. Press Ctrl+C to stop.",
        session.poller.interval().as_millis()
    );

    tokio::signal::ctrl_c().await?;

    print_session_shutdown();
    session.shutdown().await;
    print_session_exit_success();

    Ok(())
}
