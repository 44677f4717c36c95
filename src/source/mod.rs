//! Data sources for the contact list.
//!
//! A source exposes one operation, [`ContactSource::fetch_next_page`]. The
//! controller never passes an offset: every source tracks its own cursor
//! and returns the page after the last one it handed out.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::contact::{Contact, ContactPage};
use crate::error::FetchError;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

pub trait ContactSource: Send {
    /// Return the next batch of contacts and the running total.
    fn fetch_next_page(&mut self) -> Result<ContactPage, FetchError>;
}

impl<F> ContactSource for F
where
    F: FnMut() -> Result<ContactPage, FetchError> + Send,
{
    fn fetch_next_page(&mut self) -> Result<ContactPage, FetchError> {
        self()
    }
}

const FIRST_NAMES: [&str; 12] = [
    "Ada", "Grace", "Linus", "Margaret", "Ken", "Barbara", "Dennis", "Frances", "Alan", "Radia",
    "Edsger", "Hedy",
];

const LAST_NAMES: [&str; 10] = [
    "Lovelace", "Hopper", "Torvalds", "Hamilton", "Thompson", "Liskov", "Ritchie", "Allen",
    "Turing", "Perlman",
];

const JOB_TITLES: [&str; 7] = [
    "Software Engineer",
    "Product Manager",
    "Designer",
    "Data Scientist",
    "Engineering Manager",
    "Technical Writer",
    "Site Reliability Engineer",
];

/// Synthetic contacts, served `page_size` at a time up to `total`.
#[derive(Clone, Debug)]
pub struct GeneratedSource {
    page_size: usize,
    total: usize,
    cursor: usize,
    calls: usize,
    fail_every: Option<usize>,
}

impl GeneratedSource {
    pub fn new(page_size: usize, total: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            total,
            cursor: 0,
            calls: 0,
            fail_every: None,
        }
    }

    /// Fail every `n`th call (1-based). The cursor does not advance on a failed call.
    pub fn with_fail_every(mut self, n: usize) -> Self {
        self.fail_every = (n > 0).then_some(n);
        self
    }

    pub fn contact_at(index: usize) -> Contact {
        let first = FIRST_NAMES[index % FIRST_NAMES.len()];
        let last = LAST_NAMES[(index / FIRST_NAMES.len()) % LAST_NAMES.len()];
        let job = JOB_TITLES[index % JOB_TITLES.len()];
        Contact::new(
            index.to_string(),
            format!("{first} {last}"),
            format!(
                "{}.{}{}@example.com",
                first.to_ascii_lowercase(),
                last.to_ascii_lowercase(),
                index
            ),
            job,
        )
    }
}

impl Default for GeneratedSource {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, 100)
    }
}

impl ContactSource for GeneratedSource {
    fn fetch_next_page(&mut self) -> Result<ContactPage, FetchError> {
        self.calls += 1;
        if let Some(n) = self.fail_every {
            if self.calls % n == 0 {
                warn!(call = self.calls, "generated source: injected failure");
                return Err(FetchError::new("Something went wrong"));
            }
        }
        let end = (self.cursor + self.page_size).min(self.total);
        let contacts = (self.cursor..end).map(Self::contact_at).collect();
        debug!(from = self.cursor, to = end, total = self.total, "generated source: page");
        self.cursor = end;
        Ok(ContactPage {
            contacts,
            total: self.total,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ContactFile {
    List(Vec<Contact>),
    Page {
        contacts: Vec<Contact>,
        total: Option<usize>,
    },
}

/// Contacts read from a JSON file: either an array of contacts or an
/// object with a `contacts` array and an optional `total`. A declared total
/// is reported as-is unless the file holds more contacts than it claims.
/// The file is read on the first fetch; a failed read is retried on the
/// next fetch.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    path: PathBuf,
    page_size: usize,
    cursor: usize,
    loaded: Option<Vec<Contact>>,
    declared_total: Option<usize>,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>, page_size: usize) -> Self {
        Self {
            path: path.into(),
            page_size: page_size.max(1),
            cursor: 0,
            loaded: None,
            declared_total: None,
        }
    }

    fn load(&self) -> Result<(Vec<Contact>, Option<usize>), FetchError> {
        let shown = self.path.display().to_string();
        let raw = std::fs::read_to_string(&self.path).map_err(|e| FetchError::io(&shown, &e))?;
        let parsed: ContactFile =
            serde_json::from_str(&raw).map_err(|e| FetchError::decode(&shown, &e))?;
        let (contacts, total) = match parsed {
            ContactFile::List(contacts) => (contacts, None),
            ContactFile::Page { contacts, total } => (contacts, total),
        };
        debug!(path = %shown, count = contacts.len(), declared = ?total, "json source: loaded");
        Ok((contacts, total))
    }
}

impl ContactSource for JsonFileSource {
    fn fetch_next_page(&mut self) -> Result<ContactPage, FetchError> {
        if self.loaded.is_none() {
            let (contacts, declared) = self.load()?;
            self.loaded = Some(contacts);
            self.declared_total = declared;
        }
        let all = self.loaded.as_deref().unwrap_or_default();
        let end = (self.cursor + self.page_size).min(all.len());
        let contacts = all[self.cursor..end].to_vec();
        let total = self.declared_total.map_or(all.len(), |t| t.max(all.len()));
        self.cursor = end;
        Ok(ContactPage { contacts, total })
    }
}
