use serde::Serialize;
use tokio::sync::broadcast;

pub const EVENT_USER_CHANGED: &str = "user-changed";
pub const EVENT_MEETINGS_CHANGED: &str = "meetings-changed";
pub const EVENT_MEETING_DRAFT_CHANGED: &str = "meeting-draft-changed";
pub const EVENT_THEME_CHANGED: &str = "theme-changed";

const EVENT_CAPACITY: usize = 64;

/// Change notifications views subscribe to in order to re-render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StoreEvent {
    UserChanged { logged_in: bool },
    MeetingsChanged { count: usize, loading: bool },
    MeetingDraftChanged { has_draft: bool },
    ThemeChanged { dark: bool },
}

impl StoreEvent {
    pub fn name(&self) -> &'static str {
        match self {
            StoreEvent::UserChanged { .. } => EVENT_USER_CHANGED,
            StoreEvent::MeetingsChanged { .. } => EVENT_MEETINGS_CHANGED,
            StoreEvent::MeetingDraftChanged { .. } => EVENT_MEETING_DRAFT_CHANGED,
            StoreEvent::ThemeChanged { .. } => EVENT_THEME_CHANGED,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    pub fn emit(&self, event: StoreEvent) {
        let name = event.name();
        // no subscribers is fine: nothing is on screen
        if self.tx.send(event).is_err() {
            tracing::trace!(event = name, "No subscribers for event");
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
