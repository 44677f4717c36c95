//! Plain-data view of the list, handed to the renderer.
//!
//! Every element the UI draws has a stable hook name in [`test_id`]; tests
//! query [`ListView::hooks`] instead of scraping the terminal buffer.
use crate::contact::Contact;
use crate::list::ListController;

/// Stable hook names for the rendered elements.
pub mod test_id {
    pub const LIST_ROOT: &str = "contact-list";
    pub const CONTACT_ITEM: &str = "contact-item";
    pub const LOADING_STATE: &str = "loading-state";
    pub const ERROR_STATE: &str = "error-state";
    pub const RETRY_BUTTON: &str = "retry-button";
    pub const LOAD_MORE_BUTTON: &str = "load-more-button";
    pub const SELECTED_COUNTER: &str = "selected-contacts-counter";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactRow<'a> {
    pub contact: &'a Contact,
    pub selected: bool,
}

impl ContactRow<'_> {
    pub fn label(&self) -> String {
        format!("Select {}", self.contact.name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadMoreButton {
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListView<'a> {
    pub rows: Vec<ContactRow<'a>>,
    pub loading: bool,
    pub error: Option<&'a str>,
    /// `None` when there is nothing more to load.
    pub load_more: Option<LoadMoreButton>,
    pub selected_count: usize,
}

impl<'a> ListView<'a> {
    pub fn from_controller(list: &'a ListController) -> Self {
        let rows = list
            .derived_order()
            .into_iter()
            .map(|contact| ContactRow {
                contact,
                selected: list.is_selected(&contact.id),
            })
            .collect();
        Self {
            rows,
            loading: list.is_loading(),
            error: list.error(),
            load_more: list.has_more().then(|| LoadMoreButton {
                enabled: list.can_load_more(),
            }),
            selected_count: list.selected_count(),
        }
    }

    pub fn selection_counter_text(&self) -> String {
        self.selected_count.to_string()
    }

    pub fn row_index_of(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.contact.id == id)
    }

    /// Hooks of the elements present, in draw order.
    pub fn hooks(&self) -> Vec<&'static str> {
        let mut hooks = vec![test_id::LIST_ROOT];
        if self.error.is_some() {
            hooks.push(test_id::ERROR_STATE);
            hooks.push(test_id::RETRY_BUTTON);
        }
        if self.loading {
            hooks.push(test_id::LOADING_STATE);
        }
        hooks.push(test_id::SELECTED_COUNTER);
        hooks.extend(std::iter::repeat_n(test_id::CONTACT_ITEM, self.rows.len()));
        if self.load_more.is_some() {
            hooks.push(test_id::LOAD_MORE_BUTTON);
        }
        hooks
    }

    pub fn count(&self, hook: &str) -> usize {
        self.hooks().into_iter().filter(|h| *h == hook).count()
    }
}
