use serde::Serialize;
use tokio::sync::broadcast;

/// How many unread events a slow subscriber may fall behind before older
/// ones are dropped.
const EVENT_BUFFER: usize = 16;

/// Change notification published after a successful mutation.
///
/// Delivery is best effort at most. With no live subscriber the event is
/// dropped, a lagging subscriber skips ahead, and writes from another
/// process arrive with no event at all. Treat these as a refresh hint,
/// never as the source of truth; [`list`](super::Favorites::list) is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FavoritesEvent {
    Added { id: String },
    Removed { id: String },
    Cleared,
}

#[derive(Debug, Clone)]
pub(crate) struct FavoritesNotifier {
    sender: broadcast::Sender<FavoritesEvent>,
}

impl Default for FavoritesNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoritesNotifier {
    pub(crate) fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_BUFFER);
        Self { sender }
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<FavoritesEvent> {
        self.sender.subscribe()
    }

    /// Send errors only mean nobody is listening right now.
    pub(crate) fn emit(&self, event: FavoritesEvent) {
        let _ = self.sender.send(event);
    }
}
