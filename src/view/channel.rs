use super::{RenderSink, ViewUpdate};
use tokio::sync::mpsc;

/// Forwards updates to the TUI over a bounded channel.
#[derive(Clone)]
pub struct ChannelSink {
    sender: mpsc::Sender<ViewUpdate>,
}

impl ChannelSink {
    pub fn new(sender: mpsc::Sender<ViewUpdate>) -> Self {
        Self { sender }
    }
}

#[async_trait::async_trait]
impl RenderSink for ChannelSink {
    async fn render(&self, update: ViewUpdate) {
        // The UI may already be gone during shutdown.
        let _ = self.sender.send(update).await;
    }
}
