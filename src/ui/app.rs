//! Main application state and UI loop
//!
//! Contains the App struct, key handling and the main UI loop

use crate::consts::cli_consts::display::SPLASH_DURATION_MS;
use crate::environment::Environment;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::view::ViewUpdate;
use crate::workers::refresher::Refresher;
use crate::workers::submitter::Submitter;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub poll_interval: Duration,
}

impl UIConfig {
    pub fn new(with_background_color: bool, poll_interval: Duration) -> Self {
        Self {
            with_background_color,
            poll_interval,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The live dashboard.
    Dashboard,
}

/// What the loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    Submit(String),
    Refresh,
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state. Updates are applied even while the splash is up so
    /// the first refresh is not lost.
    dashboard: DashboardState,

    /// Receives view updates from the workers.
    update_receiver: mpsc::Receiver<ViewUpdate>,

    submitter: Arc<Submitter>,
    refresher: Arc<Refresher>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        update_receiver: mpsc::Receiver<ViewUpdate>,
        submitter: Arc<Submitter>,
        refresher: Arc<Refresher>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            dashboard: DashboardState::new(environment, Instant::now(), &ui_config),
            update_receiver,
            submitter,
            refresher,
        }
    }

    pub fn screen(&self) -> Screen {
        self.current_screen
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    /// Moves every update waiting on the channel into the dashboard.
    pub fn drain_updates(&mut self) {
        while let Ok(update) = self.update_receiver.try_recv() {
            self.dashboard.add_update(update);
        }
        self.dashboard.update();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        // Skip events that are not KeyEventKind::Press
        if key.kind == KeyEventKind::Release {
            return KeyAction::None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if self.current_screen == Screen::Splash {
            if key.code == KeyCode::Esc {
                return KeyAction::Quit;
            }
            // Any other key skips the splash screen
            self.current_screen = Screen::Dashboard;
            return KeyAction::None;
        }

        let state = &mut self.dashboard;
        // A notice blocks everything until dismissed
        if state.view.notice.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                state.view.dismiss_notice();
            }
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Enter if state.view.is_submitting() => KeyAction::None,
            KeyCode::Enter => KeyAction::Submit(state.input.clone()),
            KeyCode::F(5) => KeyAction::Refresh,
            KeyCode::Backspace => {
                state.input.pop();
                KeyAction::None
            }
            KeyCode::Char(c) if !ctrl => {
                state.input.push(c);
                KeyAction::None
            }
            _ => KeyAction::None,
        }
    }

    fn dispatch(&self, action: KeyAction) {
        match action {
            KeyAction::Submit(text) => {
                let submitter = self.submitter.clone();
                tokio::spawn(async move {
                    // Outcome is rendered through the sink
                    let _ = submitter.submit_text(&text).await;
                });
            }
            KeyAction::Refresh => {
                let refresher = self.refresher.clone();
                tokio::spawn(async move {
                    refresher.refresh().await;
                });
            }
            KeyAction::None | KeyAction::Quit => {}
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    loop {
        app.drain_updates();
        terminal.draw(|f| render(f, &app))?;

        // Handle splash-to-dashboard transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match app.handle_key(key) {
                    KeyAction::Quit => return Ok(()),
                    action => app.dispatch(action),
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, &app.dashboard),
    }
}
