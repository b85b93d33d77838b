//! Dashboard state management
//!
//! Contains the main dashboard state struct

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::app::UIConfig;
use crate::view::{DashboardView, ViewUpdate};

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Terminal dashboard state: the shared view plus what only the TUI tracks.
#[derive(Debug)]
pub struct DashboardState {
    /// The service the dashboard is connected to.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Stats, trends, feed, result and notice as last rendered.
    pub view: DashboardView,
    /// Text typed into the analyze box.
    pub input: String,
    /// Queue of updates waiting to be processed
    pub pending_updates: VecDeque<ViewUpdate>,
    /// Activity logs for display (last 100 events)
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Interval between scheduled refreshes.
    pub poll_interval: Duration,
    /// Animation tick counter
    pub tick: usize,

    /// When the last refresh cycle finished.
    last_refresh: Option<Instant>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: &UIConfig) -> Self {
        Self {
            environment,
            start_time,
            view: DashboardView::default(),
            input: String::new(),
            pending_updates: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            poll_interval: ui_config.poll_interval,
            tick: 0,
            last_refresh: None,
        }
    }

    pub fn last_refresh(&self) -> Option<Instant> {
        self.last_refresh
    }

    pub fn set_last_refresh(&mut self, at: Instant) {
        self.last_refresh = Some(at);
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an update to the processing queue
    pub fn add_update(&mut self, update: ViewUpdate) {
        self.pending_updates.push_back(update);
    }
}
