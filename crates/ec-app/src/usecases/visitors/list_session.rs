//! Stateful owner of a visitor list screen: the fetched partition, the
//! committed search, the status pill and the current page.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use anyhow::Result;
use ec_core::ports::NotificationPort;
use ec_core::settings::VisitorListSettings;
use ec_core::visitor::{count_matching, project};
use ec_core::{ListFilter, Pagination, StatusFilter, Visitor, VisitorPage};
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{debug, error, info_span, Instrument};

use super::debounce::Debouncer;
use super::list_visitors::ListVisitors;

const EVENT_CAPACITY: usize = 64;

pub const LOAD_FAILED_MESSAGE: &str = "Erro ao carregar visitantes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub items_per_page: usize,
    pub search_debounce: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            items_per_page: ListFilter::DEFAULT_ITEMS_PER_PAGE,
            search_debounce: Duration::from_millis(250),
        }
    }
}

impl From<&VisitorListSettings> for SessionOptions {
    fn from(settings: &VisitorListSettings) -> Self {
        Self {
            items_per_page: settings.items_per_page,
            search_debounce: Duration::from_millis(settings.search_debounce_ms),
        }
    }
}

/// Broadcast to subscribers whenever the visible list may have changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionEvent {
    Reloaded { total: usize, show_archived: bool },
    SearchCommitted { query: String },
    PageChanged { page: usize },
    StatusFilterChanged { filter: StatusFilter },
    ArchivedToggled { show_archived: bool },
}

#[derive(Debug, Default)]
struct SessionState {
    visitors: Vec<Visitor>,
    show_archived: bool,
    committed_search: String,
    status_filter: StatusFilter,
    current_page: usize,
}

impl SessionState {
    fn pagination(&self, items_per_page: usize) -> Pagination {
        let total = count_matching(&self.visitors, &self.committed_search, self.status_filter);
        Pagination::new(total, items_per_page, self.current_page)
    }
}

pub struct VisitorListSession {
    list_visitors: ListVisitors,
    notifier: Arc<dyn NotificationPort>,
    items_per_page: usize,
    state: Arc<Mutex<SessionState>>,
    debouncer: Debouncer,
    events: broadcast::Sender<SessionEvent>,
}

impl VisitorListSession {
    /// Starts on the active partition, page 1, no search, no status filter.
    /// Nothing is fetched until [`reload`](Self::reload).
    pub fn new(
        list_visitors: ListVisitors,
        notifier: Arc<dyn NotificationPort>,
        options: SessionOptions,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            list_visitors,
            notifier,
            items_per_page: options.items_per_page.max(1),
            state: Arc::new(Mutex::new(SessionState {
                current_page: 1,
                ..SessionState::default()
            })),
            debouncer: Debouncer::new(options.search_debounce),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Re-fetches the current partition and resets to page 1.
    ///
    /// On failure the previous snapshot is kept and the user is notified.
    pub async fn reload(&self) -> Result<()> {
        let show_archived = self.lock().show_archived;
        let span = info_span!("session.visitor_list.reload", show_archived);

        async {
            match self.list_visitors.execute(show_archived).await {
                Ok(visitors) => {
                    let total = visitors.len();
                    {
                        let mut state = self.lock();
                        if state.show_archived != show_archived {
                            debug!("Partition changed while fetching, dropping stale result");
                            return Ok(());
                        }
                        state.visitors = visitors;
                        state.current_page = 1;
                    }
                    debug!(total, "Visitor snapshot replaced");
                    self.emit(SessionEvent::Reloaded {
                        total,
                        show_archived,
                    });
                    Ok(())
                }
                Err(e) => {
                    error!(error = %e, "Failed to load visitors");
                    self.notifier.error(LOAD_FAILED_MESSAGE);
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Records a keystroke. The search is committed once the debounce window
    /// passes without another call; earlier pending values are discarded.
    pub fn apply_search(&self, raw: impl Into<String>) {
        let raw = raw.into();
        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        self.debouncer.schedule(async move {
            commit_search(&state, &events, raw);
        });
    }

    /// Commits `raw` immediately, dropping any pending debounced value.
    pub fn commit_search_now(&self, raw: impl Into<String>) {
        self.debouncer.cancel();
        commit_search(&self.state, &self.events, raw.into());
    }

    /// Returns `true` if the page moved.
    pub fn next_page(&self) -> bool {
        self.step_page(|p| p.has_next().then(|| p.next_page()))
    }

    /// Returns `true` if the page moved.
    pub fn prev_page(&self) -> bool {
        self.step_page(|p| p.has_prev().then(|| p.prev_page()))
    }

    /// Jumps to `page`, clamped into range. Returns the page actually held.
    pub fn set_page(&self, page: usize) -> usize {
        let (held, moved) = {
            let mut state = self.lock();
            let pagination = Pagination::new(
                count_matching(&state.visitors, &state.committed_search, state.status_filter),
                self.items_per_page,
                page,
            );
            let moved = state.current_page != pagination.current_page;
            state.current_page = pagination.current_page;
            (pagination.current_page, moved)
        };
        if moved {
            self.emit(SessionEvent::PageChanged { page: held });
        }
        held
    }

    pub fn set_status_filter(&self, filter: StatusFilter) {
        {
            let mut state = self.lock();
            state.status_filter = filter;
            state.current_page = 1;
        }
        debug!(%filter, "Status filter changed");
        self.emit(SessionEvent::StatusFilterChanged { filter });
    }

    /// Switches between active and archived visitors. Page and status filter
    /// are reset, then the new partition is fetched.
    pub async fn toggle_archived(&self) -> Result<()> {
        let show_archived = {
            let mut state = self.lock();
            state.show_archived = !state.show_archived;
            state.current_page = 1;
            state.status_filter = StatusFilter::All;
            state.show_archived
        };
        self.emit(SessionEvent::ArchivedToggled { show_archived });
        self.reload().await
    }

    /// Projects the current snapshot. A held page beyond the last page is
    /// clamped and written back.
    pub fn view(&self) -> VisitorPage {
        let mut state = self.lock();
        let filter = ListFilter::new(self.items_per_page)
            .with_search(state.committed_search.clone())
            .with_status(state.status_filter)
            .with_page(state.current_page);
        let page = project(&state.visitors, &filter);
        state.current_page = page.pagination.current_page;
        page
    }

    pub fn pagination(&self) -> Pagination {
        self.lock().pagination(self.items_per_page)
    }

    pub fn committed_search(&self) -> String {
        self.lock().committed_search.clone()
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.lock().status_filter
    }

    pub fn current_page(&self) -> usize {
        self.lock().current_page
    }

    pub fn show_archived(&self) -> bool {
        self.lock().show_archived
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    fn step_page(&self, step: impl FnOnce(&Pagination) -> Option<usize>) -> bool {
        let moved_to = {
            let mut state = self.lock();
            let pagination = state.pagination(self.items_per_page);
            match step(&pagination) {
                Some(page) => {
                    state.current_page = page;
                    Some(page)
                }
                None => {
                    state.current_page = pagination.current_page;
                    None
                }
            }
        };
        match moved_to {
            Some(page) => {
                self.emit(SessionEvent::PageChanged { page });
                true
            }
            None => false,
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: SessionEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}

fn commit_search(
    state: &Mutex<SessionState>,
    events: &broadcast::Sender<SessionEvent>,
    query: String,
) {
    let (changed, page_moved) = {
        let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
        let page_moved = state.current_page != 1;
        state.current_page = 1;
        if state.committed_search == query {
            (false, page_moved)
        } else {
            state.committed_search = query.clone();
            (true, page_moved)
        }
    };
    if changed {
        debug!(query = %query, "Search committed");
        let _ = events.send(SessionEvent::SearchCommitted { query });
    } else if page_moved {
        let _ = events.send(SessionEvent::PageChanged { page: 1 });
    }
}
