//! Generic fetch/search/paginate/delete controller for one resource
//! collection.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::controllers::{NOTIFICATION_TTL, Notification, NotificationKind};
use crate::domain::ListRecord;
use crate::gateway::CollectionGateway;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};

struct CollectionState<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    search_query: String,
    current_page: usize,
    notification: Option<Notification>,
    notification_seq: u64,
}

impl<T> CollectionState<T> {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            search_query: String::new(),
            current_page: 1,
            notification: None,
            notification_seq: 0,
        }
    }
}

/// Owns the in-memory copy of a collection and every mutation entry point
/// the corresponding view needs.
///
/// All state sits behind one mutex; gateway calls are awaited outside of
/// it, so lock sections stay short and never block the event loop. The
/// page view is recomputed on every [`view`](Self::view) call rather than
/// cached.
pub struct ResourceListController<T: ListRecord, G: ?Sized> {
    gateway: Arc<G>,
    label: &'static str,
    state: Arc<Mutex<CollectionState<T>>>,
}

impl<T, G> ResourceListController<T, G>
where
    T: ListRecord,
    G: CollectionGateway<T> + ?Sized,
{
    /// Creates a controller in its initial loading state.
    ///
    /// `label` is the lowercase singular resource noun used in user-facing
    /// messages ("admin", "customer", "restaurant").
    pub fn new(gateway: Arc<G>, label: &'static str) -> Self {
        Self {
            gateway,
            label,
            state: Arc::new(Mutex::new(CollectionState::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CollectionState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Requests the full collection from the gateway.
    ///
    /// On failure the previously loaded items are kept and only the error
    /// slot changes. There is no automatic retry; concurrent loads resolve
    /// last-write-wins.
    pub async fn load(&self) {
        let result = self.gateway.list().await;

        let mut state = self.lock();
        match result {
            Ok(items) => {
                state.items = dedup_by_id(items);
                state.loading = false;
                state.error = None;
            }
            Err(err) => {
                log::error!("Error fetching {}s: {err}", self.label);
                state.error = Some(format!("Error fetching {}s", self.label));
                state.loading = false;
            }
        }
    }

    /// Deletes one record, confirm-then-apply.
    ///
    /// The record leaves `items` only after the gateway reports success; a
    /// failure sets the error slot and touches nothing else. Success raises
    /// a notification that clears itself after [`NOTIFICATION_TTL`] unless
    /// a newer one has replaced it.
    pub async fn delete_by_id(&self, id: T::Id) {
        if let Err(err) = self.gateway.delete(id).await {
            log::error!("There was an error deleting the {}: {err}", self.label);
            let mut state = self.lock();
            state.error = Some(format!("Error deleting {}", self.label));
            return;
        }

        let generation = {
            let mut state = self.lock();
            state.items.retain(|record| record.id() != id);
            state.notification_seq += 1;
            let generation = state.notification_seq;
            state.notification = Some(Notification {
                message: format!("{} deleted successfully.", capitalize(self.label)),
                kind: NotificationKind::Success,
                generation,
            });
            generation
        };

        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            tokio::time::sleep(NOTIFICATION_TTL).await;
            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            let still_current = state
                .notification
                .as_ref()
                .is_some_and(|notification| notification.generation == generation);
            if still_current {
                state.notification = None;
            }
        });
    }

    /// Updates the search query. The current page is deliberately left
    /// alone, matching the shipped console.
    pub fn set_search_query(&self, query: impl Into<String>) {
        self.lock().search_query = query.into();
    }

    /// Jumps to the given page without bounds-checking; an out-of-range
    /// page simply renders empty.
    pub fn set_page(&self, page: usize) {
        self.lock().current_page = page;
    }

    /// Derives the filtered, paginated view of the collection.
    pub fn view(&self) -> Paginated<T> {
        let state = self.lock();

        let filtered: Vec<T> = state
            .items
            .iter()
            .filter(|record| record.matches(&state.search_query))
            .cloned()
            .collect();

        let total_pages = filtered.len().div_ceil(DEFAULT_ITEMS_PER_PAGE);
        // Saturate so that any page number stays a valid (empty) window.
        let start = state
            .current_page
            .saturating_sub(1)
            .saturating_mul(DEFAULT_ITEMS_PER_PAGE);
        let items = filtered
            .into_iter()
            .skip(start)
            .take(DEFAULT_ITEMS_PER_PAGE)
            .collect();

        Paginated::new(items, state.current_page, total_pages)
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    pub fn notification(&self) -> Option<Notification> {
        self.lock().notification.clone()
    }

    pub fn search_query(&self) -> String {
        self.lock().search_query.clone()
    }
}

/// Keeps the first occurrence of every id, preserving server order.
fn dedup_by_id<T: ListRecord>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|record| seen.insert(record.id()))
        .collect()
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
