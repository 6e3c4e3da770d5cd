//! App State
//!
//! Notices stack in the bottom corner until they expire or are dismissed.
//! The request counter drives the busy indicator in the nav bar.

use std::future::Future;

use gloo_timers::callback::Timeout;
use leptos::*;

/// Notices shown at once; older ones are dropped first
const MAX_NOTICES: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// Milliseconds before the notice expires
    fn lifetime_ms(self) -> u32 {
        match self {
            NoticeKind::Success => 3000,
            NoticeKind::Error => 5000,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

fn push_notice(list: &mut Vec<Notice>, notice: Notice) {
    list.push(notice);
    if list.len() > MAX_NOTICES {
        let overflow = list.len() - MAX_NOTICES;
        list.drain(..overflow);
    }
}

/// State shared by every page
#[derive(Clone, Copy)]
pub struct AppState {
    notices: RwSignal<Vec<Notice>>,
    next_notice: StoredValue<u64>,
    in_flight: RwSignal<u32>,
}

/// Provide the app state to the component tree
pub fn provide_app_state() {
    provide_context(AppState {
        notices: create_rw_signal(Vec::new()),
        next_notice: store_value(0),
        in_flight: create_rw_signal(0),
    });
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState not found")
}

impl AppState {
    pub fn notices(&self) -> ReadSignal<Vec<Notice>> {
        self.notices.read_only()
    }

    pub fn notify(&self, kind: NoticeKind, text: impl Into<String>) {
        let id = self.next_notice.get_value();
        self.next_notice.set_value(id + 1);

        let notice = Notice {
            id,
            kind,
            text: text.into(),
        };
        self.notices.update(|list| push_notice(list, notice));

        let state = *self;
        Timeout::new(kind.lifetime_ms(), move || state.dismiss(id)).forget();
    }

    pub fn success(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Error, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }

    /// Whether any tracked request is still running
    pub fn is_busy(&self) -> bool {
        self.in_flight.with(|n| *n > 0)
    }

    /// Await a request, counting it as in flight meanwhile
    pub async fn track<F: Future>(&self, request: F) -> F::Output {
        self.in_flight.update(|n| *n += 1);
        let output = request.await;
        self.in_flight.update(|n| *n = n.saturating_sub(1));
        output
    }
}
