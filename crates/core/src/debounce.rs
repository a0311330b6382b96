//! Write coalescing
//!
//! Rapid successive calls collapse so only the last job runs, once a quiet
//! window has elapsed. This trades immediacy for fewer storage writes; the
//! store is correct without it, so it stays a standalone policy utility
//! rather than being wired into every mutation.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Default quiet window before a coalesced job runs
pub const DEFAULT_QUIET_WINDOW: Duration = Duration::from_millis(250);

/// Coalesces rapid successive jobs, running only the most recent one
pub struct Debouncer {
    quiet: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Schedule `job` to run after the quiet window, replacing any job
    /// scheduled earlier that has not started yet
    pub fn call<F>(&mut self, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let quiet = self.quiet;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            job.await;
        }));
    }

    /// Wait for the scheduled job, if any, to finish
    pub async fn flush(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
    }

    /// Drop the scheduled job without running it
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_WINDOW)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
