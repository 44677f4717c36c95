//! Background fetch worker.
//!
//! The data source runs on its own thread so the loading indicator can be
//! drawn while a page is in flight. Requests and results travel over
//! channels; the event loop drains results once per tick.
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tracing::{debug, warn};

use crate::contact::ContactPage;
use crate::error::{Context, FetchError, Result};
use crate::source::ContactSource;

pub type FetchResult = std::result::Result<ContactPage, FetchError>;

/// Dropping the worker closes the request channel, which ends the thread
/// once any fetch in flight returns; that result is discarded.
pub struct FetchWorker {
    requests: Sender<()>,
    results: Receiver<FetchResult>,
}

impl FetchWorker {
    pub fn spawn(mut source: Box<dyn ContactSource>) -> Result<Self> {
        let (req_tx, req_rx) = mpsc::channel::<()>();
        let (res_tx, res_rx) = mpsc::channel::<FetchResult>();
        std::thread::Builder::new()
            .name("contact-fetch".to_string())
            .spawn(move || {
                while req_rx.recv().is_ok() {
                    let result = source.fetch_next_page();
                    if res_tx.send(result).is_err() {
                        break;
                    }
                }
                debug!("fetch worker exiting");
            })
            .with_ctx(|| "spawn fetch worker".to_string())?;
        Ok(Self {
            requests: req_tx,
            results: res_rx,
        })
    }

    /// Ask the worker for the next page. Fails if the worker has stopped.
    pub fn request(&self) -> std::result::Result<(), FetchError> {
        self.requests
            .send(())
            .map_err(|_| FetchError::new("fetch worker stopped"))
    }

    /// A finished fetch, if one is waiting.
    pub fn try_result(&self) -> Option<FetchResult> {
        match self.results.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                warn!("fetch worker disconnected");
                Some(Err(FetchError::new("fetch worker stopped")))
            }
        }
    }
}
