//! Command-line options.
use std::path::PathBuf;

use clap::Parser;

use crate::error::{Result, simple_error};
use crate::source::{ContactSource, DEFAULT_PAGE_SIZE, GeneratedSource, JsonFileSource};

#[derive(Debug, Parser)]
#[command(name = "contact-directory", version, about = "Browse a contact directory and pick contacts")]
pub struct Cli {
    /// JSON file with contacts; synthetic contacts are used when omitted.
    #[arg(long, env = "CONTACTS_SOURCE")]
    pub source: Option<PathBuf>,

    /// Contacts fetched per page.
    #[arg(long, env = "CONTACTS_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Number of synthetic contacts.
    #[arg(long, env = "CONTACTS_TOTAL", default_value_t = 100)]
    pub total: usize,

    /// Make every Nth synthetic fetch fail, to exercise the error state.
    #[arg(long, env = "CONTACTS_FAIL_EVERY")]
    pub fail_every: Option<usize>,

    #[arg(long, env = "CONTACTS_THEME", default_value = "theme.conf")]
    pub theme: String,

    #[arg(long, env = "CONTACTS_KEYBINDS", default_value = "keybinds.conf")]
    pub keybinds: String,

    /// Write logs here; filtered by RUST_LOG (default `info`).
    #[arg(long, env = "CONTACTS_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(simple_error("--page-size must be at least 1"));
        }
        if self.fail_every == Some(0) {
            return Err(simple_error("--fail-every must be at least 1"));
        }
        Ok(())
    }

    pub fn build_source(&self) -> Box<dyn ContactSource> {
        match &self.source {
            Some(path) => Box::new(JsonFileSource::new(path.clone(), self.page_size)),
            None => {
                let mut source = GeneratedSource::new(self.page_size, self.total);
                if let Some(n) = self.fail_every {
                    source = source.with_fail_every(n);
                }
                Box::new(source)
            }
        }
    }
}
