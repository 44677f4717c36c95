//! Library crate for contact-directory.
//!
//! This crate exposes the building blocks of the TUI:
//! - Contact records (`contact`) and the sources that page them in (`source`)
//! - List state: accumulated contacts, selection, fetch status (`list`)
//! - Application state, key bindings and the event loop (`app`)
//! - Command-line options (`cli`)
//! - Error and result types (`error`)
//! - UI rendering and widgets (`ui`)
//!
//! It is used by the `contact-directory` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod app;
pub mod cli;
pub mod contact;
pub mod error;
pub mod list;
pub mod source;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{DynError, FetchError, Result};
pub use contact::{Contact, ContactPage};
pub use list::ListController;
