//! TUI mode execution

use super::{
    SessionOptions,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
    setup_session,
};
use crate::consts::cli_consts::UPDATE_QUEUE_SIZE;
use crate::ui::{self, UIConfig};
use crate::view::ChannelSink;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use std::{error::Error, io};
use tokio::sync::mpsc;

/// Runs the application in TUI mode
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. Wiring the workers to the UI through a channel sink
/// 3. Stopping the poller on exit
///
/// # Returns
/// * `Ok(())` - TUI mode completed successfully
/// * `Err` - TUI mode failed
pub async fn run_tui_mode(options: SessionOptions) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", &options.environment);

    let (update_sender, update_receiver) = mpsc::channel(UPDATE_QUEUE_SIZE);
    let session = setup_session(&options, Arc::new(ChannelSink::new(update_sender)));

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let ui_config = UIConfig::new(options.with_background_color, session.poller.interval());
    let app = ui::App::new(
        session.environment.clone(),
        update_receiver,
        session.workers.submitter.clone(),
        session.workers.refresher.clone(),
        ui_config,
    );

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    print_session_shutdown();
    session.shutdown().await;

    // Handle the result
    result?;
    print_session_exit_success();

    Ok(())
}
