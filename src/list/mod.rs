//! List state: accumulated contacts, selection, and fetch status.
//!
//! [`ListController`] is a plain state machine. It never calls the
//! renderer; the UI reads it through [`view::ListView`] and feeds user
//! input back through its methods.
pub mod selection;
pub mod view;

use std::cmp::Reverse;

use tracing::{debug, warn};

use crate::contact::{Contact, ContactPage};
use crate::error::FetchError;
use crate::source::ContactSource;

pub use selection::Selection;
pub use view::ListView;

#[derive(Clone, Debug, Default)]
pub struct ListController {
    contacts: Vec<Contact>,
    total: usize,
    selection: Selection,
    loading: bool,
    error: Option<String>,
    scroll_restore: Option<usize>,
    initial_fetch_done: bool,
}

impl ListController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin the first fetch of the session. Returns `true` only on the first call.
    pub fn start_initial_fetch(&mut self) -> bool {
        if self.initial_fetch_done {
            return false;
        }
        self.initial_fetch_done = true;
        self.begin_fetch()
    }

    /// Mark a fetch as in flight. Returns `false` if one already is.
    pub fn begin_fetch(&mut self) -> bool {
        if self.loading {
            debug!("fetch already in flight, ignoring request");
            return false;
        }
        self.loading = true;
        self.error = None;
        debug!(loaded = self.contacts.len(), total = self.total, "fetch started");
        true
    }

    /// Apply the outcome of the fetch started by [`Self::begin_fetch`].
    pub fn complete_fetch(&mut self, result: Result<ContactPage, FetchError>) {
        if !self.loading {
            warn!("fetch result arrived with no fetch in flight, discarding");
            return;
        }
        match result {
            Ok(page) => {
                let received = page.contacts.len();
                self.contacts.extend(page.contacts);
                self.total = page.total;
                if self.contacts.len() > self.total {
                    warn!(
                        loaded = self.contacts.len(),
                        reported = page.total,
                        "source reported a total below the loaded count"
                    );
                    self.total = self.contacts.len();
                }
                debug!(received, loaded = self.contacts.len(), total = self.total, "fetch finished");
            }
            Err(err) => {
                warn!(error = %err, "fetch failed");
                self.error = Some(err.message().to_string());
            }
        }
        self.loading = false;
    }

    /// Fetch the next page synchronously from `source`. Returns `false`
    /// without calling the source if a fetch is already in flight.
    pub fn load_next_page<S: ContactSource + ?Sized>(&mut self, source: &mut S) -> bool {
        if !self.begin_fetch() {
            return false;
        }
        let result = source.fetch_next_page();
        self.complete_fetch(result);
        true
    }

    /// Retrying is another fetch of the next page.
    pub fn retry<S: ContactSource + ?Sized>(&mut self, source: &mut S) -> bool {
        self.load_next_page(source)
    }

    /// Toggle selection of `id`, remembering `viewport_offset` so the view
    /// can be put back where it was after the re-sort. Unknown ids are ignored.
    pub fn toggle_selection(&mut self, id: &str, viewport_offset: usize) -> bool {
        if !self.contacts.iter().any(|c| c.id == id) {
            debug!(id, "toggle for unknown contact ignored");
            return false;
        }
        self.scroll_restore = Some(viewport_offset);
        let now_selected = self.selection.toggle(id);
        debug!(id, now_selected, count = self.selection.len(), "selection toggled");
        true
    }

    /// Offset recorded by the last toggle; yields it once.
    pub fn take_scroll_restore(&mut self) -> Option<usize> {
        self.scroll_restore.take()
    }

    /// Display order: selected contacts first, newest selection first,
    /// then the rest in fetch order.
    pub fn derived_order(&self) -> Vec<&Contact> {
        let mut ordered: Vec<&Contact> = self.contacts.iter().collect();
        ordered.sort_by_key(|c| match self.selection.sequence(&c.id) {
            Some(seq) => (0u8, Reverse(seq)),
            None => (1u8, Reverse(0)),
        });
        ordered
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// More pages exist: something has loaded and it is short of the total.
    pub fn has_more(&self) -> bool {
        !self.contacts.is_empty() && self.contacts.len() < self.total
    }

    pub fn can_load_more(&self) -> bool {
        self.has_more() && !self.loading && self.error.is_none()
    }
}
