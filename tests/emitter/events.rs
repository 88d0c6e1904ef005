use emitter_rust::Event;

/// Application events shared by the emitter tests.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Welcome { name: String },
    Ready,
    Tick(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppEventKind {
    Welcome,
    Ready,
    Tick,
}

impl Event for AppEvent {
    type Kind = AppEventKind;

    fn kind(&self) -> AppEventKind {
        match self {
            AppEvent::Welcome { .. } => AppEventKind::Welcome,
            AppEvent::Ready => AppEventKind::Ready,
            AppEvent::Tick(_) => AppEventKind::Tick,
        }
    }
}
